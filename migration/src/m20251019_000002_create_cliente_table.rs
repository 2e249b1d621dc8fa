use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cliente::Table)
                    .if_not_exists()
                    .col(string(Cliente::Id).primary_key())
                    .col(string(Cliente::Nombre))
                    .col(string(Cliente::Email))
                    .col(string(Cliente::Telefono))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cliente::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cliente {
    Table,
    Id,
    Nombre,
    Email,
    Telefono,
}

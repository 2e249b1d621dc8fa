use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuario::Table)
                    .if_not_exists()
                    .col(string(Usuario::Id).primary_key())
                    .col(string(Usuario::Nombre))
                    .col(string(Usuario::Email))
                    .col(string(Usuario::Password))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Usuario::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Usuario {
    Table,
    Id,
    Nombre,
    Email,
    Password,
}

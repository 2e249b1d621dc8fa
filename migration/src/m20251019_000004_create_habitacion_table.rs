use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Habitacion::Table)
                    .if_not_exists()
                    .col(string(Habitacion::Id).primary_key())
                    .col(integer(Habitacion::Numero))
                    .col(string(Habitacion::Tipo))
                    .col(double(Habitacion::Precio))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Habitacion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Habitacion {
    Table,
    Id,
    Numero,
    Tipo,
    Precio,
}

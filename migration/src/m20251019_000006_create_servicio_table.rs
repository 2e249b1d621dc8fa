use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Servicio::Table)
                    .if_not_exists()
                    .col(string(Servicio::Id).primary_key())
                    .col(string(Servicio::NombreS))
                    .col(integer(Servicio::Habitacion))
                    .col(double(Servicio::Costo))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Servicio::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Servicio {
    Table,
    Id,
    NombreS,
    Habitacion,
    Costo,
}

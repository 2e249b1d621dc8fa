use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reserva::Table)
                    .if_not_exists()
                    .col(string(Reserva::Id).primary_key())
                    .col(string(Reserva::Cliente))
                    .col(string(Reserva::Habitacion))
                    .col(date(Reserva::FechaEntrada))
                    .col(date(Reserva::FechaSalida))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reserva::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reserva {
    Table,
    Id,
    Cliente,
    Habitacion,
    FechaEntrada,
    FechaSalida,
}

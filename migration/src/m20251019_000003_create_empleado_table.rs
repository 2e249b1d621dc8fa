use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Empleado::Table)
                    .if_not_exists()
                    .col(string(Empleado::Id).primary_key())
                    .col(string(Empleado::Nombre))
                    .col(string(Empleado::Puesto))
                    .col(string(Empleado::Telefono))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Empleado::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Empleado {
    Table,
    Id,
    Nombre,
    Puesto,
    Telefono,
}

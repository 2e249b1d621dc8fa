pub use sea_orm_migration::prelude::*;

mod m20251019_000001_create_usuario_table;
mod m20251019_000002_create_cliente_table;
mod m20251019_000003_create_empleado_table;
mod m20251019_000004_create_habitacion_table;
mod m20251019_000005_create_reserva_table;
mod m20251019_000006_create_servicio_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251019_000001_create_usuario_table::Migration),
            Box::new(m20251019_000002_create_cliente_table::Migration),
            Box::new(m20251019_000003_create_empleado_table::Migration),
            Box::new(m20251019_000004_create_habitacion_table::Migration),
            Box::new(m20251019_000005_create_reserva_table::Migration),
            Box::new(m20251019_000006_create_servicio_table::Migration),
        ]
    }
}

//! Empleado factory for creating hotel employees.

use crate::factory::helpers::{next_id, next_record_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test employees with customizable fields.
pub struct EmpleadoFactory<'a> {
    db: &'a DatabaseConnection,
    nombre: String,
    puesto: String,
    telefono: String,
}

impl<'a> EmpleadoFactory<'a> {
    /// Creates a new EmpleadoFactory with default values.
    ///
    /// Defaults:
    /// - nombre: `"Empleado {id}"`
    /// - puesto: `"Recepción"`
    /// - telefono: `"555-0100"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            nombre: format!("Empleado {}", id),
            puesto: "Recepción".to_string(),
            telefono: "555-0100".to_string(),
        }
    }

    pub fn nombre(mut self, nombre: impl Into<String>) -> Self {
        self.nombre = nombre.into();
        self
    }

    pub fn puesto(mut self, puesto: impl Into<String>) -> Self {
        self.puesto = puesto.into();
        self
    }

    pub fn telefono(mut self, telefono: impl Into<String>) -> Self {
        self.telefono = telefono.into();
        self
    }

    /// Builds and inserts the employee entity into the database.
    pub async fn build(self) -> Result<entity::empleado::Model, DbErr> {
        entity::empleado::ActiveModel {
            id: ActiveValue::Set(next_record_id()),
            nombre: ActiveValue::Set(self.nombre),
            puesto: ActiveValue::Set(self.puesto),
            telefono: ActiveValue::Set(self.telefono),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an employee with default values.
pub async fn create_empleado(db: &DatabaseConnection) -> Result<entity::empleado::Model, DbErr> {
    EmpleadoFactory::new(db).build().await
}

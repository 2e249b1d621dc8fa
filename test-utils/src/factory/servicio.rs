//! Servicio factory for creating room services.

use crate::factory::helpers::{next_id, next_record_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test services with customizable fields.
pub struct ServicioFactory<'a> {
    db: &'a DatabaseConnection,
    nombre_s: String,
    habitacion: i32,
    costo: f64,
}

impl<'a> ServicioFactory<'a> {
    /// Creates a new ServicioFactory with default values.
    ///
    /// Defaults:
    /// - nombre_s: `"Servicio {id}"`
    /// - habitacion: `101`
    /// - costo: `25.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            nombre_s: format!("Servicio {}", next_id()),
            habitacion: 101,
            costo: 25.0,
        }
    }

    pub fn nombre_s(mut self, nombre_s: impl Into<String>) -> Self {
        self.nombre_s = nombre_s.into();
        self
    }

    pub fn habitacion(mut self, habitacion: i32) -> Self {
        self.habitacion = habitacion;
        self
    }

    pub fn costo(mut self, costo: f64) -> Self {
        self.costo = costo;
        self
    }

    /// Builds and inserts the service entity into the database.
    pub async fn build(self) -> Result<entity::servicio::Model, DbErr> {
        entity::servicio::ActiveModel {
            id: ActiveValue::Set(next_record_id()),
            nombre_s: ActiveValue::Set(self.nombre_s),
            habitacion: ActiveValue::Set(self.habitacion),
            costo: ActiveValue::Set(self.costo),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a service with default values.
pub async fn create_servicio(db: &DatabaseConnection) -> Result<entity::servicio::Model, DbErr> {
    ServicioFactory::new(db).build().await
}

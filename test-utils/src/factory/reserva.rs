//! Reserva factory for creating room reservations.

use crate::factory::helpers::next_record_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// Reservations are not linked to client or room rows, so no dependencies are created.
pub struct ReservaFactory<'a> {
    db: &'a DatabaseConnection,
    cliente: String,
    habitacion: String,
    fecha_entrada: NaiveDate,
    fecha_salida: NaiveDate,
}

impl<'a> ReservaFactory<'a> {
    /// Creates a new ReservaFactory with default values.
    ///
    /// Defaults:
    /// - cliente: `"Ana"`
    /// - habitacion: `"101"`
    /// - fecha_entrada: 2025-01-10
    /// - fecha_salida: 2025-01-12
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            cliente: "Ana".to_string(),
            habitacion: "101".to_string(),
            fecha_entrada: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap_or_default(),
            fecha_salida: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap_or_default(),
        }
    }

    pub fn cliente(mut self, cliente: impl Into<String>) -> Self {
        self.cliente = cliente.into();
        self
    }

    pub fn habitacion(mut self, habitacion: impl Into<String>) -> Self {
        self.habitacion = habitacion.into();
        self
    }

    pub fn fechas(mut self, entrada: NaiveDate, salida: NaiveDate) -> Self {
        self.fecha_entrada = entrada;
        self.fecha_salida = salida;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    pub async fn build(self) -> Result<entity::reserva::Model, DbErr> {
        entity::reserva::ActiveModel {
            id: ActiveValue::Set(next_record_id()),
            cliente: ActiveValue::Set(self.cliente),
            habitacion: ActiveValue::Set(self.habitacion),
            fecha_entrada: ActiveValue::Set(self.fecha_entrada),
            fecha_salida: ActiveValue::Set(self.fecha_salida),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation with default values.
pub async fn create_reserva(db: &DatabaseConnection) -> Result<entity::reserva::Model, DbErr> {
    ReservaFactory::new(db).build().await
}

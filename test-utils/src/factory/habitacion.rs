//! Habitacion factory for creating hotel rooms.

use crate::factory::helpers::{next_id, next_record_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let habitacion = HabitacionFactory::new(&db)
///     .numero(101)
///     .tipo("suite")
///     .precio(150.0)
///     .build()
///     .await?;
/// ```
pub struct HabitacionFactory<'a> {
    db: &'a DatabaseConnection,
    numero: i32,
    tipo: String,
    precio: f64,
}

impl<'a> HabitacionFactory<'a> {
    /// Creates a new HabitacionFactory with default values.
    ///
    /// Defaults:
    /// - numero: auto-incremented counter
    /// - tipo: `"doble"`
    /// - precio: `80.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            numero: next_id() as i32,
            tipo: "doble".to_string(),
            precio: 80.0,
        }
    }

    pub fn numero(mut self, numero: i32) -> Self {
        self.numero = numero;
        self
    }

    pub fn tipo(mut self, tipo: impl Into<String>) -> Self {
        self.tipo = tipo.into();
        self
    }

    pub fn precio(mut self, precio: f64) -> Self {
        self.precio = precio;
        self
    }

    /// Builds and inserts the room entity into the database.
    pub async fn build(self) -> Result<entity::habitacion::Model, DbErr> {
        entity::habitacion::ActiveModel {
            id: ActiveValue::Set(next_record_id()),
            numero: ActiveValue::Set(self.numero),
            tipo: ActiveValue::Set(self.tipo),
            precio: ActiveValue::Set(self.precio),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values.
pub async fn create_habitacion(
    db: &DatabaseConnection,
) -> Result<entity::habitacion::Model, DbErr> {
    HabitacionFactory::new(db).build().await
}

//! Cliente factory for creating hotel clients.

use crate::factory::helpers::{next_id, next_record_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clients with customizable fields.
pub struct ClienteFactory<'a> {
    db: &'a DatabaseConnection,
    nombre: String,
    email: String,
    telefono: String,
}

impl<'a> ClienteFactory<'a> {
    /// Creates a new ClienteFactory with default values.
    ///
    /// Defaults:
    /// - nombre: `"Cliente {id}"`
    /// - email: `"cliente{id}@hotel.test"`
    /// - telefono: `"555-0000"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            nombre: format!("Cliente {}", id),
            email: format!("cliente{}@hotel.test", id),
            telefono: "555-0000".to_string(),
        }
    }

    pub fn nombre(mut self, nombre: impl Into<String>) -> Self {
        self.nombre = nombre.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn telefono(mut self, telefono: impl Into<String>) -> Self {
        self.telefono = telefono.into();
        self
    }

    /// Builds and inserts the client entity into the database.
    pub async fn build(self) -> Result<entity::cliente::Model, DbErr> {
        entity::cliente::ActiveModel {
            id: ActiveValue::Set(next_record_id()),
            nombre: ActiveValue::Set(self.nombre),
            email: ActiveValue::Set(self.email),
            telefono: ActiveValue::Set(self.telefono),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a client with default values.
pub async fn create_cliente(db: &DatabaseConnection) -> Result<entity::cliente::Model, DbErr> {
    ClienteFactory::new(db).build().await
}

//! Usuario factory for creating registered users.

use crate::factory::helpers::{next_id, next_record_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Password used by factory users unless overridden.
pub const DEFAULT_PASSWORD: &str = "password";

/// Factory for creating test users with customizable fields.
///
/// The password is hashed with bcrypt at the minimum cost so tests stay fast while
/// still exercising real hash verification.
///
/// # Example
///
/// ```rust,ignore
/// let usuario = UsuarioFactory::new(&db)
///     .nombre("Ana")
///     .email("a@x.com")
///     .password("secret")
///     .build()
///     .await?;
/// ```
pub struct UsuarioFactory<'a> {
    db: &'a DatabaseConnection,
    nombre: String,
    email: String,
    password: String,
}

impl<'a> UsuarioFactory<'a> {
    /// Creates a new UsuarioFactory with default values.
    ///
    /// Defaults:
    /// - nombre: `"Usuario {id}"`
    /// - email: `"usuario{id}@hotel.test"`
    /// - password: [`DEFAULT_PASSWORD`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            nombre: format!("Usuario {}", id),
            email: format!("usuario{}@hotel.test", id),
            password: DEFAULT_PASSWORD.to_string(),
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

    /// Sets the plaintext password; it is hashed when the user is built.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Hashes the password and inserts the user.
    ///
    /// # Returns
    /// - `Ok(entity::usuario::Model)` - Created user entity
    /// - `Err(DbErr)` - Hashing failed or database error during insert
    pub async fn build(self) -> Result<entity::usuario::Model, DbErr> {
        let hash = bcrypt::hash(&self.password, 4).map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::usuario::ActiveModel {
            id: ActiveValue::Set(next_record_id()),
            nombre: ActiveValue::Set(self.nombre),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(hash),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_usuario(db: &DatabaseConnection) -> Result<entity::usuario::Model, DbErr> {
    UsuarioFactory::new(db).build().await
}

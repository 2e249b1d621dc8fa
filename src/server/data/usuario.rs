//! User data repository backing the credential flow.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::{
    model::usuario::{CreateUsuarioParams, Usuario},
    util::id::new_record_id,
};

/// Repository providing database operations for registered users.
pub struct UsuarioRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UsuarioRepository<'a> {
    /// Creates a new UsuarioRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with a freshly assigned identifier.
    ///
    /// Emails are not unique; registering the same email twice creates two users.
    ///
    /// # Returns
    /// - `Ok(Usuario)` - The created user
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateUsuarioParams) -> Result<Usuario, DbErr> {
        let entity = entity::usuario::ActiveModel {
            id: ActiveValue::Set(new_record_id()),
            nombre: ActiveValue::Set(params.nombre),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password_hash),
        }
        .insert(self.db)
        .await?;

        Ok(Usuario::from_entity(entity))
    }

    /// Finds the first user whose email matches exactly.
    ///
    /// When several users share the email, the store's default order decides which
    /// one is returned.
    ///
    /// # Returns
    /// - `Ok(Some(Usuario))` - A user with that email exists
    /// - `Ok(None)` - No user has that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Usuario>, DbErr> {
        let entity = entity::prelude::Usuario::find()
            .filter(entity::usuario::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Usuario::from_entity))
    }
}

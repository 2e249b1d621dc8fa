//! Registration and login.
//!
//! Passwords are hashed with bcrypt at a fixed cost and only the hash is stored. Login
//! is stateless: a successful check returns the user and nothing else is issued, so
//! every later request is anonymous.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::usuario::UsuarioRepository,
    error::{auth::AuthError, AppError},
    model::{
        auth::{LoginParams, RegisterParams},
        usuario::{CreateUsuarioParams, Usuario},
    },
};

/// bcrypt work factor for stored password hashes.
pub const BCRYPT_COST: u32 = 10;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Hashes the password and stores a new user.
    ///
    /// Hashing runs on the blocking pool. No duplicate-email check is made.
    ///
    /// # Returns
    /// - `Ok(Usuario)` - The stored user
    /// - `Err(AppError::BcryptErr)` - Hashing failed
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn register(&self, params: RegisterParams) -> Result<Usuario, AppError> {
        let RegisterParams {
            nombre,
            email,
            password,
        } = params;

        let password_hash =
            tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST)).await??;

        let usuario = UsuarioRepository::new(self.db)
            .create(CreateUsuarioParams {
                nombre,
                email,
                password_hash,
            })
            .await?;

        tracing::info!("Registered user {}", usuario.id);

        Ok(usuario)
    }

    /// Checks an email and password against the stored users.
    ///
    /// Looks up the first user with the exact email, then verifies the password
    /// against its hash. A stored hash bcrypt cannot parse counts as a mismatch.
    ///
    /// # Returns
    /// - `Ok(Usuario)` - Credentials are valid
    /// - `Err(AuthError::UserNotFound)` - No user has that email
    /// - `Err(AuthError::InvalidPassword)` - Password does not match
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, params: LoginParams) -> Result<Usuario, AppError> {
        let LoginParams { email, password } = params;

        let usuario = UsuarioRepository::new(self.db)
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let hash = usuario.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await?
            .unwrap_or(false);

        if !valid {
            tracing::debug!("Password mismatch for user {}", usuario.id);
            return Err(AuthError::InvalidPassword.into());
        }

        Ok(usuario)
    }
}

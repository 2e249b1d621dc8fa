//! Registered user domain model.

/// Registered user with the stored bcrypt hash.
///
/// The hash never leaves the server; controllers only read `nombre`.
#[derive(Debug, Clone, PartialEq)]
pub struct Usuario {
    pub id: String,
    pub nombre: String,
    pub email: String,
    pub password_hash: String,
}

impl Usuario {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::usuario::Model) -> Self {
        Self {
            id: entity.id,
            nombre: entity.nombre,
            email: entity.email,
            password_hash: entity.password,
        }
    }
}

/// Parameters for persisting a new user. Holds the hash, not the plaintext.
#[derive(Debug, Clone)]
pub struct CreateUsuarioParams {
    pub nombre: String,
    pub email: String,
    pub password_hash: String,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registration body for `POST /registro`.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct RegisterDto {
    pub nombre: String,
    pub email: String,
    pub password: String,
}

/// Credentials body for `POST /login`.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

//! Credential flow parameters.
//!
//! These carry plaintext passwords and deliberately do not implement `Debug`.

use crate::model::auth::{LoginDto, RegisterDto};

/// Parameters for registering a new user.
pub struct RegisterParams {
    pub nombre: String,
    pub email: String,
    pub password: String,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            nombre: dto.nombre,
            email: dto.email,
            password: dto.password,
        }
    }
}

/// Parameters for checking a user's credentials.
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AuthError {
    /// No registered user has the given email.
    #[error("Usuario no encontrado")]
    UserNotFound,

    /// A user with the email exists but the password does not match its hash.
    #[error("Contraseña incorrecta")]
    InvalidPassword,
}

/// Converts login failures into 401 responses.
///
/// Both variants answer 401 Unauthorized with the error message as a plain-text body,
/// so a client can tell an unknown email apart from a wrong password.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
    }
}

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, RegisterDto},
    },
    server::{
        error::AppError,
        model::auth::{LoginParams, RegisterParams},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new user.
///
/// Hashes the password and stores the user. Emails are not checked for duplicates.
///
/// # Returns
/// - `201 Created` - Plain-text confirmation
/// - `500 Internal Server Error` - Hashing or database error
#[utoipa::path(
    post,
    path = "/registro",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User registered", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(state.db()?);

    service.register(RegisterParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, "Usuario registrado"))
}

/// Check a user's credentials.
///
/// No session or token is issued; the response is only a greeting.
///
/// # Returns
/// - `200 OK` - Greeting containing the user's name
/// - `401 Unauthorized` - Unknown email or wrong password, as plain text
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials valid", body = String, content_type = "text/plain"),
        (status = 401, description = "Unknown email or wrong password", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(state.db()?);

    let usuario = service.login(LoginParams::from_dto(payload)).await?;

    Ok((StatusCode::OK, format!("Bienvenido {}", usuario.nombre)))
}

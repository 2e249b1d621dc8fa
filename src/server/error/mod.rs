//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type. It wraps domain-specific errors and
//! implements `IntoResponse` so handlers can return it directly.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Every failure a handler or startup step can produce.
///
/// Only login failures reach the client with their own message. The rest are logged
/// and answered with a generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Login failure.
    ///
    /// Delegates to `AuthError::into_response()` (401 with a plain-text message).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// A query, insert or delete failed, or migrations could not run at startup.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Password hashing failed.
    #[error(transparent)]
    BcryptErr(#[from] bcrypt::BcryptError),

    /// A blocking hashing task panicked or was cancelled.
    #[error(transparent)]
    JoinErr(#[from] tokio::task::JoinError),

    /// Listener bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// The database could not be reached at startup, so no connection exists.
    #[error("Database connection is not available")]
    StoreUnavailable,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs the wrapped error and answers 500 with `{"error":"Internal server error"}`.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

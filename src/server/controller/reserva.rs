use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        reserva::{CreateReservaDto, ReservaDto},
    },
    server::{
        error::AppError,
        model::reserva::CreateReservaParams,
        service::reserva::ReservaService,
        state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVA_TAG: &str = "reserva";

/// List every reservation.
///
/// # Returns
/// - `200 OK` - Array of reservations, empty when there are none
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reservas",
    tag = RESERVA_TAG,
    responses(
        (status = 200, description = "Successfully retrieved reservations", body = Vec<ReservaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservas(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReservaService::new(state.db()?);

    let records = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(records.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a reservation.
///
/// The client and room are stored as given. Overlapping reservations for the same
/// room are accepted.
///
/// # Returns
/// - `201 Created` - Plain-text confirmation
/// - `4xx` - Body is not valid JSON or has missing or unknown fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reservas",
    tag = RESERVA_TAG,
    request_body = CreateReservaDto,
    responses(
        (status = 201, description = "Successfully created reservation", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reserva(
    State(state): State<AppState>,
    Json(payload): Json<CreateReservaDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReservaService::new(state.db()?);

    service.create(CreateReservaParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, "Reserva creada"))
}

/// Delete a reservation.
///
/// Answers with the same confirmation whether or not the identifier existed.
///
/// # Returns
/// - `200 OK` - Plain-text confirmation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/reservas/{id}",
    tag = RESERVA_TAG,
    params(
        ("id" = String, Path, description = "Record identifier")
    ),
    responses(
        (status = 200, description = "Deleted, or nothing to delete", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reserva(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReservaService::new(state.db()?);

    if !service.delete(&id).await? {
        tracing::debug!("No reservation with id {} to delete", id);
    }

    Ok((StatusCode::OK, "Reserva eliminada"))
}

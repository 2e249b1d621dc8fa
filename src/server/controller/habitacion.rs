use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        habitacion::{CreateHabitacionDto, HabitacionDto},
    },
    server::{
        error::AppError,
        model::habitacion::CreateHabitacionParams,
        service::habitacion::HabitacionService,
        state::AppState,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static HABITACION_TAG: &str = "habitacion";

/// List every room.
///
/// # Returns
/// - `200 OK` - Array of rooms, empty when there are none
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/habitaciones",
    tag = HABITACION_TAG,
    responses(
        (status = 200, description = "Successfully retrieved rooms", body = Vec<HabitacionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_habitaciones(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = HabitacionService::new(state.db()?);

    let records = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(records.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a room.
///
/// # Returns
/// - `201 Created` - Plain-text confirmation
/// - `4xx` - Body is not valid JSON or has missing or unknown fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/habitaciones",
    tag = HABITACION_TAG,
    request_body = CreateHabitacionDto,
    responses(
        (status = 201, description = "Successfully created room", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_habitacion(
    State(state): State<AppState>,
    Json(payload): Json<CreateHabitacionDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = HabitacionService::new(state.db()?);

    service.create(CreateHabitacionParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, "Habitación creada"))
}

/// Delete a room.
///
/// Answers with the same confirmation whether or not the identifier existed.
///
/// # Returns
/// - `200 OK` - Plain-text confirmation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/habitaciones/{id}",
    tag = HABITACION_TAG,
    params(
        ("id" = String, Path, description = "Record identifier")
    ),
    responses(
        (status = 200, description = "Deleted, or nothing to delete", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_habitacion(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = HabitacionService::new(state.db()?);

    if !service.delete(&id).await? {
        tracing::debug!("No room with id {} to delete", id);
    }

    Ok((StatusCode::OK, "Habitación eliminada"))
}

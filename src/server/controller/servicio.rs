use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        servicio::{CreateServicioDto, ServicioDto},
    },
    server::{
        error::AppError,
        model::servicio::CreateServicioParams,
        service::servicio::ServicioService,
        state::AppState,
    },
};

/// Tag for grouping service endpoints in OpenAPI documentation
pub static SERVICIO_TAG: &str = "servicio";

/// List every service.
///
/// # Returns
/// - `200 OK` - Array of services, empty when there are none
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/servicios",
    tag = SERVICIO_TAG,
    responses(
        (status = 200, description = "Successfully retrieved services", body = Vec<ServicioDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_servicios(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = ServicioService::new(state.db()?);

    let records = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(records.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a service charged to a room number.
///
/// The room number is not checked against the room collection.
///
/// # Returns
/// - `201 Created` - Plain-text confirmation
/// - `4xx` - Body is not valid JSON or has missing or unknown fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/servicios",
    tag = SERVICIO_TAG,
    request_body = CreateServicioDto,
    responses(
        (status = 201, description = "Successfully created service", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_servicio(
    State(state): State<AppState>,
    Json(payload): Json<CreateServicioDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ServicioService::new(state.db()?);

    service.create(CreateServicioParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, "Servicio creado"))
}

/// Delete a service.
///
/// Answers with the same confirmation whether or not the identifier existed.
///
/// # Returns
/// - `200 OK` - Plain-text confirmation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/servicios/{id}",
    tag = SERVICIO_TAG,
    params(
        ("id" = String, Path, description = "Record identifier")
    ),
    responses(
        (status = 200, description = "Deleted, or nothing to delete", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_servicio(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ServicioService::new(state.db()?);

    if !service.delete(&id).await? {
        tracing::debug!("No service with id {} to delete", id);
    }

    Ok((StatusCode::OK, "Servicio eliminado"))
}

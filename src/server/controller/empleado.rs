use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        empleado::{CreateEmpleadoDto, EmpleadoDto},
    },
    server::{
        error::AppError,
        model::empleado::CreateEmpleadoParams,
        service::empleado::EmpleadoService,
        state::AppState,
    },
};

/// Tag for grouping employee endpoints in OpenAPI documentation
pub static EMPLEADO_TAG: &str = "empleado";

/// List every employee.
///
/// # Returns
/// - `200 OK` - Array of employees, empty when there are none
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/empleados",
    tag = EMPLEADO_TAG,
    responses(
        (status = 200, description = "Successfully retrieved employees", body = Vec<EmpleadoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_empleados(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = EmpleadoService::new(state.db()?);

    let records = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(records.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a employee.
///
/// # Returns
/// - `201 Created` - Plain-text confirmation
/// - `4xx` - Body is not valid JSON or has missing or unknown fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/empleados",
    tag = EMPLEADO_TAG,
    request_body = CreateEmpleadoDto,
    responses(
        (status = 201, description = "Successfully created employee", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_empleado(
    State(state): State<AppState>,
    Json(payload): Json<CreateEmpleadoDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = EmpleadoService::new(state.db()?);

    service.create(CreateEmpleadoParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, "Empleado creado"))
}

/// Delete a employee.
///
/// Answers with the same confirmation whether or not the identifier existed.
///
/// # Returns
/// - `200 OK` - Plain-text confirmation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/empleados/{id}",
    tag = EMPLEADO_TAG,
    params(
        ("id" = String, Path, description = "Record identifier")
    ),
    responses(
        (status = 200, description = "Deleted, or nothing to delete", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_empleado(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = EmpleadoService::new(state.db()?);

    if !service.delete(&id).await? {
        tracing::debug!("No employee with id {} to delete", id);
    }

    Ok((StatusCode::OK, "Empleado eliminado"))
}

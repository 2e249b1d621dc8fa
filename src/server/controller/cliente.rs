use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        cliente::{CreateClienteDto, ClienteDto},
    },
    server::{
        error::AppError,
        model::cliente::CreateClienteParams,
        service::cliente::ClienteService,
        state::AppState,
    },
};

/// Tag for grouping client endpoints in OpenAPI documentation
pub static CLIENTE_TAG: &str = "cliente";

/// List every client.
///
/// # Returns
/// - `200 OK` - Array of clients, empty when there are none
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clientes",
    tag = CLIENTE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved clients", body = Vec<ClienteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clientes(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClienteService::new(state.db()?);

    let records = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(records.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a client.
///
/// # Returns
/// - `201 Created` - Plain-text confirmation
/// - `4xx` - Body is not valid JSON or has missing or unknown fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/clientes",
    tag = CLIENTE_TAG,
    request_body = CreateClienteDto,
    responses(
        (status = 201, description = "Successfully created client", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_cliente(
    State(state): State<AppState>,
    Json(payload): Json<CreateClienteDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClienteService::new(state.db()?);

    service.create(CreateClienteParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, "Cliente creado"))
}

/// Delete a client.
///
/// Answers with the same confirmation whether or not the identifier existed.
///
/// # Returns
/// - `200 OK` - Plain-text confirmation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/clientes/{id}",
    tag = CLIENTE_TAG,
    params(
        ("id" = String, Path, description = "Record identifier")
    ),
    responses(
        (status = 200, description = "Deleted, or nothing to delete", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_cliente(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClienteService::new(state.db()?);

    if !service.delete(&id).await? {
        tracing::debug!("No client with id {} to delete", id);
    }

    Ok((StatusCode::OK, "Cliente eliminado"))
}

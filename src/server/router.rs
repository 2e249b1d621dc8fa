use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, cliente, empleado, habitacion, reserva, servicio},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Hotel API"),
    paths(
        auth::register,
        auth::login,
        cliente::get_clientes,
        cliente::create_cliente,
        cliente::delete_cliente,
        empleado::get_empleados,
        empleado::create_empleado,
        empleado::delete_empleado,
        habitacion::get_habitaciones,
        habitacion::create_habitacion,
        habitacion::delete_habitacion,
        reserva::get_reservas,
        reserva::create_reserva,
        reserva::delete_reserva,
        servicio::get_servicios,
        servicio::create_servicio,
        servicio::delete_servicio,
    ),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "cliente", description = "Hotel clients"),
        (name = "empleado", description = "Hotel employees"),
        (name = "habitacion", description = "Rooms"),
        (name = "reserva", description = "Room reservations"),
        (name = "servicio", description = "Services charged to rooms"),
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Auth and collection routes, the OpenAPI document with Swagger UI, and the static
/// directory as fallback for everything else.
pub fn router(static_dir: &str) -> Router<AppState> {
    Router::new()
        .route("/registro", post(auth::register))
        .route("/login", post(auth::login))
        .route(
            "/api/clientes",
            get(cliente::get_clientes).post(cliente::create_cliente),
        )
        .route("/api/clientes/{id}", delete(cliente::delete_cliente))
        .route(
            "/api/empleados",
            get(empleado::get_empleados).post(empleado::create_empleado),
        )
        .route("/api/empleados/{id}", delete(empleado::delete_empleado))
        .route(
            "/api/habitaciones",
            get(habitacion::get_habitaciones).post(habitacion::create_habitacion),
        )
        .route(
            "/api/habitaciones/{id}",
            delete(habitacion::delete_habitacion),
        )
        .route(
            "/api/reservas",
            get(reserva::get_reservas).post(reserva::create_reserva),
        )
        .route("/api/reservas/{id}", delete(reserva::delete_reserva))
        .route(
            "/api/servicios",
            get(servicio::get_servicios).post(servicio::create_servicio),
        )
        .route("/api/servicios/{id}", delete(servicio::delete_servicio))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
}

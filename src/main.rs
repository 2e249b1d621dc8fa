mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    // The listener starts even when the database is unreachable.
    let db = match startup::connect_to_database(&config).await {
        Ok(db) => {
            tracing::info!("Connected to database");
            Some(db)
        }
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            None
        }
    };

    let app = router::router(&config.static_dir).with_state(AppState::new(db));

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

use dotenvy::dotenv;
use tracing::info;

use rollcall::config::AppConfig;
use rollcall::logging::init_tracing;
use rollcall::metrics::init_metrics;
use rollcall::router::init_router;
use rollcall::state::init_app_state;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();
    init_tracing()?;

    let config = AppConfig::from_env()?;

    let metrics = if config.server.metrics_enabled {
        Some(init_metrics()?)
    } else {
        None
    };

    let state = init_app_state(&config, metrics)?;
    let app = init_router(state);

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!("Server running on http://{}", address);
    info!("Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app).await?;
    Ok(())
}

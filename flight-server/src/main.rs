use tracing::info;
use tracing_subscriber::EnvFilter;

use flight_server::config::ServerConfig;
use flight_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.bind_addr;
    info!(
        %addr,
        snapshot_ttl_secs = config.snapshot_ttl_secs,
        max_snapshots = config.max_snapshots,
        "starting flight results server"
    );

    let state = AppState::new(config);
    let app = create_router(state);

    info!("API Endpoints:");
    info!("  GET  /health                  - Health check");
    info!("  POST /searches                - Register a search payload");
    info!("  GET  /searches/:id/facets     - Facets of a search");
    info!("  POST /searches/:id/results    - Filtered and ranked results");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}

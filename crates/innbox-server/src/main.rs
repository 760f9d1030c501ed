//! Innbox — review-notification email extraction server.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod pipeline;
mod routes;
mod state;

use state::AppState;

fn resolve_data_dir() -> PathBuf {
    std::env::var("INNBOX_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_dir = resolve_data_dir();
    info!("Data directory: {}", data_dir.display());

    // Initialize configuration
    let config = innbox_core::InnboxConfig::from_env(&data_dir)?;
    let port = config.port;

    // Build application state with the bundled keyword ranker
    let ranker = Arc::new(innbox_keywords::StatisticalRanker::new());
    let state = Arc::new(AppState::new(config, ranker));

    // Build router
    let app = routes::build_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Innbox server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

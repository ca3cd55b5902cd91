use moodlens_api::api::{create_router, AppState};
use moodlens_api::config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    // Initialize application state and attempt the first dataset load; a
    // missing dataset is not fatal to serving, requests just come back empty
    // until a reload succeeds.
    let state = AppState::new(config.dataset_path.clone());
    match state.reload().await {
        Ok(rows) => tracing::info!(rows, "Dataset loaded at startup"),
        Err(e) => tracing::warn!(error = %e, "Serving without a dataset snapshot"),
    }

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}

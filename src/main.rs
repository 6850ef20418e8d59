//! noesis-api server entry point.
//!
//! Loads configuration, opens the database (applying migrations) and
//! starts the Axum HTTP server.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use noesis_api::api;
use noesis_api::app_state::AppState;
use noesis_api::config::ApiConfig;
use noesis_api::persistence::sqlite::SqliteStore;
use noesis_api::service::AccountService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ApiConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!(addr = %config.listen_addr, database = %config.database_url, "starting noesis-api");

    // Build persistence and service layers
    let store = SqliteStore::connect(&config)
        .await
        .with_context(|| format!("opening database {}", config.database_url))?;
    let app_state = AppState::new(AccountService::new(store));

    // Build router
    let app = api::build_app(app_state, config.request_timeout());

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

//! HTTP server for the shift ledger.
//!
//! Environment:
//! - `SHIFT_LEDGER_CONFIG`: policy directory (default `./config/default`)
//! - `SHIFT_LEDGER_ADDR`: bind address (default `0.0.0.0:3000`)
//! - `SHIFT_LEDGER_DATA`: optional JSON snapshot seeding the timesheet store
//! - `RUST_LOG`: log filter (default `info`)

use std::sync::Arc;

use shift_ledger::api::{AppState, create_router};
use shift_ledger::config::ConfigLoader;
use shift_ledger::source::InMemoryTimesheet;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir =
        std::env::var("SHIFT_LEDGER_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = std::env::var("SHIFT_LEDGER_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        policy = %config.metadata().name,
        policy_version = %config.metadata().version,
        working_day_policy = %config.working_day_policy(),
        "Loaded configuration"
    );

    let source: InMemoryTimesheet = match std::env::var("SHIFT_LEDGER_DATA") {
        Ok(path) => {
            let source = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
            info!(path = %path, "Seeded timesheet store");
            source
        }
        Err(_) => InMemoryTimesheet::new(),
    };

    let app = create_router(AppState::new(config, Arc::new(source)));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Shift ledger listening");
    axum::serve(listener, app).await?;

    Ok(())
}

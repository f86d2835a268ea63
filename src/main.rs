//! Payroll engine HTTP server.
//!
//! Reads settings from `$PAYROLL_CONFIG_DIR/payroll.yaml` (default `./config`)
//! and, when `PAYROLL_SEED_FILE` is set, seeds the in-memory store from that
//! YAML file. Log verbosity follows `RUST_LOG`.

use std::env;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;
use payroll_engine::payroll::PayrollRunner;
use payroll_engine::store::InMemoryStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_dir = env::var("PAYROLL_CONFIG_DIR").unwrap_or_else(|_| "./config".to_string());
    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        policy = ?config.engine().missing_attendance_policy,
        max_concurrent_fetches = config.engine().max_concurrent_fetches,
        "Configuration loaded"
    );

    let store = match env::var("PAYROLL_SEED_FILE") {
        Ok(path) => {
            info!(seed_file = %path, "Seeding in-memory store");
            InMemoryStore::load_seed(path)?
        }
        Err(_) => InMemoryStore::new(),
    };

    let runner = PayrollRunner::from_store(store, config.engine().clone());
    let router = create_router(AppState::new(runner));

    let listener = tokio::net::TcpListener::bind(&config.server().bind_address).await?;
    info!(address = %config.server().bind_address, "Payroll engine listening");
    axum::serve(listener, router).await?;

    Ok(())
}

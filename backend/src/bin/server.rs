//! Audiencia HTTP Server Binary
//!
//! This is the main entry point for the hearing back-office REST API.
//! It initializes the repository, compiles the initial schedule, sets up
//! the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with local (in-memory) repository (default)
//! cargo run --bin audiencia-server --features "local-repo,http-server"
//!
//! # Run against the remote spreadsheet-backed store
//! SHEET_URL=https://script.example.com/macros/s/DEPLOYMENT/exec \
//!   cargo run --bin audiencia-server --features "sheet-repo,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `SHEET_URL`: Remote store URL (required for sheet-repo feature)
//! - `SCHEDULE_CONFIG`: Path to a TOML slot-grid/holiday file (optional)
//! - `ADMIN_USERNAME` / `ADMIN_PASSWORD`: Credential gate
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use chrono::Local;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use audiencia_rust::config::ScheduleConfig;
use audiencia_rust::db;
use audiencia_rust::http::auth::AdminCredentials;
use audiencia_rust::http::{create_router, AppState};
use audiencia_rust::services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Audiencia HTTP Server");

    // Slot grid and holiday calendar
    let config = ScheduleConfig::from_env().map_err(anyhow::Error::msg)?;
    info!(
        time_slots = config.time_slots.len(),
        capacity = config.capacity_per_slot,
        holidays = config.holidays.len(),
        "Schedule configuration loaded"
    );

    // Credential gate
    let credentials = AdminCredentials::from_env();
    if !credentials.is_configured() {
        warn!("ADMIN_PASSWORD is not set; the admin gate will reject every login");
    }

    // Initialize global repository once and reuse it across the app
    db::init_repository()?;
    let repository = std::sync::Arc::clone(db::get_repository()?);
    info!("Repository initialized successfully");

    // Create application state and compile the initial schedule
    let state = AppState::new(repository, config, credentials);
    let map = services::refresh_schedule(
        state.repository.as_ref(),
        &state.cache,
        &state.policy,
        &state.config,
        Local::now().date_naive(),
    )
    .await;
    info!(
        scheduled_days = map.len(),
        scheduled_hearings = map.values().map(Vec::len).sum::<usize>(),
        "Initial schedule compiled"
    );

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

mod config;
mod directory;
mod errors;
mod models;
mod render;
mod routes;
mod state;
mod vip;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::directory::EmployeeDirectory;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Staff Portal v{}", env!("CARGO_PKG_VERSION"));

    // Load the employee directory
    let directory = match &config.employee_directory_path {
        Some(path) => EmployeeDirectory::load(path)?,
        None => {
            warn!("EMPLOYEE_DIRECTORY_PATH not set, using the bundled seed directory");
            EmployeeDirectory::seed()?
        }
    };
    if directory.is_empty() {
        warn!("Employee directory is empty; every page route will return 404");
    }
    info!("Employee directory ready ({} entries)", directory.len());

    // VIP CRM data is mock-generated until a real backend exists
    match config.vip_mock_seed {
        Some(seed) => info!("VIP mock repository seeded with {seed}"),
        None => info!("VIP mock repository using entropy"),
    }

    let state = AppState::with_mock_vip(directory, config.site(), config.vip_mock_seed);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the portal has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

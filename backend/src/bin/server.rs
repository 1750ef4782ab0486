//! Patch window HTTP server binary.
//!
//! Loads configuration, builds the repository, sets up the HTTP router and
//! starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # In-memory repository seeded with the demo catalog (default)
//! cargo run --bin patch-window-server
//!
//! # Explicit configuration file
//! PATCH_WINDOW_CONFIG=./patch-window.toml cargo run --bin patch-window-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `PATCH_WINDOW_CONFIG`: Path to the TOML configuration file
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use patch_window::config::AppConfig;
use patch_window::db::{FullRepository, RepositoryFactory};
use patch_window::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `init` also routes `log` records from the library into this subscriber.
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting patch window server");

    let config = AppConfig::load().map_err(|e| anyhow::anyhow!(e))?;
    let repository = RepositoryFactory::from_settings(&config.repository)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    info!(
        backend = repository.backend_name(),
        seeded = config.repository.seed_sample_data,
        "Repository initialized"
    );

    let state = AppState::with_config(repository, config);
    let app = create_router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Try: curl http://{}/v1/optimal-schedule/sample", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

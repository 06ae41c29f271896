//! Dashboard HTTP Server Binary
//!
//! Loads the CSV export, sets up the HTTP router, and starts serving the
//! dashboard.
//!
//! # Usage
//!
//! ```bash
//! DATASET_PATH=wechat.csv cargo run --bin wechat-dashboard
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 127.0.0.1)
//! - `PORT`: Server port (default: 8050)
//! - `DATASET_PATH`: CSV export to load (default: wechat.csv)
//! - `DASHBOARD_TITLE`: Page heading
//! - `RUST_LOG`: Log filter, e.g. `wechat_dashboard=debug` (default: info)
//!
//! Values may also come from a `dashboard.toml` file; environment variables
//! take precedence.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wechat_dashboard::config::DashboardConfig;
use wechat_dashboard::dataset::Dataset;
use wechat_dashboard::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting WeChat dashboard server");

    let config = DashboardConfig::load().context("Failed to load configuration")?;

    // The dataset is loaded once; a bad file aborts startup.
    let dataset = Dataset::load(&config.dataset.path).with_context(|| {
        format!(
            "Failed to load dataset from {}",
            config.dataset.path.display()
        )
    })?;
    info!(
        records = dataset.len(),
        years = ?dataset.years(),
        "Dataset loaded"
    );

    let state = AppState::new(Arc::new(dataset), config.dashboard.title.as_str());
    let app = create_router(state);

    let addr = config.socket_addr()?;
    info!("Dashboard listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

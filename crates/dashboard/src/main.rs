// File: crates/dashboard/src/main.rs
// Summary: Loads the launch table, then serves the dashboard on 127.0.0.1:1234.

mod config;
mod page;
mod server;

use anyhow::{Context, Result};
use launch_core::DataSet;
use tokio::net::TcpListener;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::DashConfig;
use crate::server::{create_router, AppState};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(LevelFilter::INFO)
        .init();

    let config = DashConfig::default();

    // A bad table is fatal: never start serving without data.
    let dataset = DataSet::load(&config.data_path)
        .with_context(|| format!("failed to load launch data from '{}'", config.data_path.display()))?;
    tracing::info!(
        min_payload = dataset.min_payload(),
        max_payload = dataset.max_payload(),
        sites = ?dataset.sites(),
        "dataset ready"
    );

    let app = create_router(AppState::new(dataset, config.render));
    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    println!("Dashboard listening on http://{}", config.addr);
    tracing::info!("server started on {}", config.addr);
    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}

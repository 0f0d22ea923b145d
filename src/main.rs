//! Song Catalog - an HTTP catalog service for songs.
//!
//! Clients submit a song identity (group + title); the service enriches
//! it with metadata from an external service, persists the enriched
//! record, and exposes read/update/delete plus listing over the catalog.

pub mod api;
pub mod catalog;
pub mod config;
pub mod db;
pub mod enrichment;
pub mod error;
pub mod model;
#[cfg(test)]
pub mod test_utils;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::Env;
use crate::enrichment::{EnrichmentApi, EnrichmentClient};

/// Song Catalog service
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, env = "CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Override the listen address from the config
    #[arg(long)]
    address: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let cfg = config::load(args.config.as_deref())?;

    init_tracing(cfg.env);
    info!(env = ?cfg.env, "starting song catalog service");

    let pool = db::init_db(&db::db_url(cfg.database.path.as_deref())).await?;
    info!("db connection successful");

    // Operator-provided schema/seed bootstrap, as in the original deployment.
    if let Ok(init_path) = std::env::var("INIT_SQL_PATH") {
        db::run_init_script(&pool, Path::new(&init_path)).await?;
    }

    let enrichment: Arc<dyn EnrichmentApi> = Arc::new(EnrichmentClient::new(
        cfg.enrichment.base_url.clone(),
        Duration::from_secs(cfg.enrichment.timeout_secs),
    ));

    let app = api::router(api::AppState { pool, enrichment });

    let address = args.address.unwrap_or(cfg.server.address);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(%address, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Initialize logging once at startup; the environment picks format and
/// default verbosity (RUST_LOG still overrides the filter).
fn init_tracing(env: Env) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match env {
            Env::Prod => "info",
            Env::Local | Env::Dev => "debug",
        })
    });

    match env {
        Env::Dev => {
            tracing_subscriber::registry()
                .with(fmt::layer().json())
                .with(filter)
                .init();
        }
        Env::Local | Env::Prod => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true))
                .with(filter)
                .init();
        }
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}

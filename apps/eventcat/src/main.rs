use std::error::Error;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

mod cli;
mod data_dir;
mod dsn;

use eventcat_api::router;
use eventcat_storage::{EventStore, JsonStore, SqlStore};

use crate::cli::Cli;
use crate::data_dir::resolve_data_dir;
use crate::dsn::ensure_sqlite_dsn;

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("eventcat failed: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    let store: Arc<dyn EventStore> = if cli.dsn.trim().is_empty() {
        let data_dir = resolve_data_dir(&cli.data_dir);
        let store = JsonStore::open(&data_dir)?;
        info!(data_dir = %data_dir, "flat-file store opened");
        Arc::new(store)
    } else {
        ensure_sqlite_dsn(&cli.dsn)?;
        let store = SqlStore::connect(&cli.dsn).await?;
        info!(dsn = %cli.dsn, "db connected");
        Arc::new(store)
    };
    store.sync().await?;
    info!("store ready");

    let app = router(store);
    let bind = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!(addr = %bind, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("eventcat=info,sqlx=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

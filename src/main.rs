//! School activities API server.
//!
//! Startup order: parse args, load config, init tracing, seed the registry,
//! optionally start the metrics exporter, bind the listener, serve until a
//! shutdown signal drains the server.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use activities_api::config::{loader, AppConfig};
use activities_api::http::HttpServer;
use activities_api::lifecycle::{signals, Shutdown};
use activities_api::observability::metrics;
use activities_api::registry::{seed, ActivityRegistry};

#[derive(Parser)]
#[command(name = "activities-api")]
#[command(about = "School extracurricular activities API", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => loader::load_config(path)?,
        None => AppConfig::default(),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "activities_api={0},tower_http={0}",
                    config.observability.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("activities-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        static_dir = %config.static_assets.dir,
        "Configuration loaded"
    );

    // Seed the registry exactly once; it lives for the process duration.
    let activities = match &config.seed.path {
        Some(path) => seed::load_seed_file(Path::new(path))?,
        None => seed::default_activities(),
    };
    let registry = Arc::new(ActivityRegistry::from_seed(activities)?);
    tracing::info!(activities = registry.len(), "Registry seeded");

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    signals::install(shutdown.clone());

    let server = HttpServer::new(&config, registry);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

//! Clima Server
//!
//! REST API server for the temperature dashboard.

use clap::Parser;
use clima_server::config::{build_config, CliArgs as ConfigCliArgs};
use clima_server::server::Server;
use clima_store::memory::MemoryStore;
use clima_store::postgres::PgTemperatureStore;
use clima_store::TemperatureStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Clima Server - REST API for city temperature series
#[derive(Parser, Debug)]
#[command(name = "clima_server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long, env = "CLIMA_SERVER_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "CLIMA_SERVER_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CLIMA_LOG_LEVEL")]
    log_level: Option<String>,

    /// PostgreSQL connection URL; omit to serve the bundled sample data
    #[arg(long, env = "CLIMA_DATABASE_URL")]
    database_url: Option<String>,
}

impl From<Args> for ConfigCliArgs {
    fn from(args: Args) -> Self {
        ConfigCliArgs {
            config_file: args.config,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
            database_url: args.database_url,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cli_args: ConfigCliArgs = args.into();
    let config = build_config(&cli_args)?;

    // Initialize tracing
    init_tracing(config.log_level.as_filter_str());

    tracing::info!("Clima Server v{}", clima_server::VERSION);
    tracing::info!(
        host = %config.host,
        port = %config.port,
        log_level = %config.log_level,
        default_city = %config.default_city,
        default_kind = %config.default_kind,
        "Server configuration loaded"
    );

    // Pick the store backend
    let store: Arc<dyn TemperatureStore> = match &config.database_url {
        Some(url) => {
            let store = PgTemperatureStore::connect(url).await?;
            tracing::info!("Using PostgreSQL store");
            Arc::new(store)
        }
        None => {
            tracing::info!("No database configured, serving bundled sample data");
            Arc::new(MemoryStore::with_sample_data())
        }
    };

    // Create and start the server
    let server = Server::new(config, store);
    tracing::info!(address = %server.socket_addr(), "Starting server");

    server.run().await?;

    Ok(())
}

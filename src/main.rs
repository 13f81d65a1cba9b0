//! probekit: liveness and readiness probe server.
//!
//! Parses CLI arguments, loads TOML configuration, initializes tracing, builds
//! the Axum router and serves it until SIGTERM/SIGINT.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use probekit::config::{resolve_log_filter, AppConfig, LogFormat, DEFAULT_CONFIG_PATH};
use probekit::create_router;
use probekit::http::start_server;

/// probekit: liveness and readiness endpoints for orchestrators
#[derive(Parser, Debug)]
#[command(name = "probekit", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "probekit=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Listen port, overrides http.port
    #[arg(short, long)]
    port: Option<u16>,
}

fn init_tracing(filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Config is read first: it decides the log format
    let config = AppConfig::load_or_default(&args.config)?.with_port_override(args.port);

    let log_filter = resolve_log_filter(args.log_level, std::env::var("RUST_LOG").ok());
    init_tracing(&log_filter, config.logging.format);

    tracing::info!(
        config = %args.config,
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    let app = create_router();
    start_server(app, &config).await?;

    Ok(())
}

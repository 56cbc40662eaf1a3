use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use adifbridge::{
    config::BridgeConfig,
    runtime::{bridge::spawn_bridge, sink::TcpDirectSink},
};

/// Forward WSJT-X ADIF log datagrams to an N3FJP logging server.
#[derive(Debug, Parser)]
#[command(name = "adifbridge", version, about)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "adifbridge.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match BridgeConfig::load(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            error!(path = %cli.config.display(), error = ?err, "failed to load configuration");
            return ExitCode::from(1);
        }
    };

    let sink = TcpDirectSink::from_config(&config);
    let handle = match spawn_bridge(config, sink).await {
        Ok(handle) => handle,
        Err(err) => {
            error!(
                error = ?err,
                "failed to bind inbound socket (is another copy of adifbridge running?)"
            );
            return ExitCode::from(2);
        }
    };

    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("interrupt received, shutting down"),
        Err(err) => error!(error = %err, "interrupt handler failed, shutting down"),
    }

    if handle.shutdown().await.is_err() {
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

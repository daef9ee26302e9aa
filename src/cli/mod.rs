//! CLI module for Pro Key Checker
//!
//! Provides subcommands for running the checker in different modes:
//! - `serve`: API + browser UI combined (default)
//! - `api`: API server only

pub mod api;
pub mod serve;

use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};
use tokio::signal;
use tracing::{error, info};

use crate::config::AppConfig;

/// Pro Key Checker - concurrent validation of Gemini API keys
#[derive(Parser)]
#[command(name = "pro-key-checker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run API + UI server combined (default mode)
    Serve(ServerArgs),

    /// Run API server only
    Api(ServerArgs),
}

/// Arguments shared by the server commands
#[derive(Args, Clone, Debug, Default)]
pub struct ServerArgs {
    /// Port to listen on (overrides config)
    #[arg(long)]
    pub port: Option<u16>,
}

pub(crate) fn build_socket_addr(
    config: &AppConfig,
    port_override: Option<u16>,
) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        port_override.unwrap_or(config.server.port),
    )))
}

pub(crate) async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::parse_from(["pro-key-checker"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_api_with_port() {
        let cli = Cli::parse_from(["pro-key-checker", "api", "--port", "9000"]);

        match cli.command {
            Some(Command::Api(args)) => assert_eq!(args.port, Some(9000)),
            _ => panic!("expected api command"),
        }
    }

    #[test]
    fn test_build_socket_addr_override() {
        let config = AppConfig::default();

        assert_eq!(build_socket_addr(&config, None).unwrap().port(), 3000);
        assert_eq!(build_socket_addr(&config, Some(8081)).unwrap().port(), 8081);
    }

    #[test]
    fn test_build_socket_addr_invalid_host() {
        let mut config = AppConfig::default();
        config.server.host = "not-an-ip".to_string();

        assert!(build_socket_addr(&config, None).is_err());
    }
}

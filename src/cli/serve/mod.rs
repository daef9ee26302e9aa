//! Serve command - runs API + UI combined on the same port

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use super::{build_socket_addr, shutdown_signal, ServerArgs};
use crate::api::create_app_router;
use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::observability::init_metrics;

/// Run the combined API + UI server
pub async fn run(args: ServerArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    logging::init_logging(&config.logging);

    let state = crate::create_app_state_with_config(&config)?;
    let metrics = init_metrics(&config.metrics);
    let app = create_app_router(state, metrics, Some(&config.ui.static_dir));

    let addr = build_socket_addr(&config, args.port)?;
    info!("Starting server (API + UI) on {}", addr);
    info!(
        "Serving UI from '{}', open http://localhost:{} in a browser",
        config.ui.static_dir,
        addr.port()
    );

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

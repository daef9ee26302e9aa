//! Pro Key Checker
//!
//! Validates batches of Gemini API keys over HTTP:
//! - One concurrent probe per submitted key
//! - Per-key classification: Pro, rejected, or unreachable
//! - Results returned in submission order

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::probe::{GeminiKeyProber, HttpClient};
use infrastructure::services::KeyCheckService;
use tracing::info;

/// Create the application state with default configuration
pub fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default())
}

/// Create the application state with custom configuration
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let client = HttpClient::from_timeout(config.checker.timeout())?;
    let prober = GeminiKeyProber::with_base_url(
        client,
        config.checker.probe_settings(),
        &config.checker.base_url,
    )?;

    info!(
        model = %prober.settings().model,
        base_url = %config.checker.base_url,
        timeout_secs = ?config.checker.timeout_secs,
        "Key prober configured"
    );

    Ok(AppState::new(KeyCheckService::new(Arc::new(prober))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_app_state_with_defaults() {
        assert!(create_app_state().is_ok());
    }

    #[test]
    fn test_create_app_state_rejects_invalid_base_url() {
        let mut config = AppConfig::default();
        config.checker.base_url = "::not a url::".to_string();

        assert!(create_app_state_with_config(&config).is_err());
    }
}

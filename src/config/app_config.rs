use std::time::Duration;

use serde::Deserialize;

use crate::domain::key_check::ProbeSettings;
use crate::infrastructure::observability::MetricsConfig;
use crate::infrastructure::probe::DEFAULT_GEMINI_BASE_URL;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub checker: CheckerConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Remote probe settings
#[derive(Debug, Clone, Deserialize)]
pub struct CheckerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_probe_text")]
    pub probe_text: String,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    /// Per-probe timeout; unset keeps the HTTP client defaults
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Static UI settings (serve mode only)
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_base_url() -> String {
    DEFAULT_GEMINI_BASE_URL.to_string()
}

fn default_model() -> String {
    ProbeSettings::default().model
}

fn default_probe_text() -> String {
    ProbeSettings::default().probe_text
}

fn default_max_output_tokens() -> u32 {
    ProbeSettings::default().max_output_tokens
}

fn default_static_dir() -> String {
    "public".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            probe_text: default_probe_text(),
            max_output_tokens: default_max_output_tokens(),
            timeout_secs: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            static_dir: default_static_dir(),
        }
    }
}

impl CheckerConfig {
    pub fn probe_settings(&self) -> ProbeSettings {
        ProbeSettings::new(self.model.clone())
            .with_probe_text(self.probe_text.clone())
            .with_max_output_tokens(self.max_output_tokens)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

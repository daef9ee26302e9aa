use async_trait::async_trait;
use reqwest::Url;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::http_client::{HttpClientTrait, HttpResponse};
use crate::domain::key_check::{mask_key, UNKNOWN_ERROR_MESSAGE};
use crate::domain::{DomainError, KeyProber, ProbeResult, ProbeSettings};
use crate::infrastructure::observability::record_probe_duration;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Probes keys with a capped `generateContent` call against the Gemini API
#[derive(Debug)]
pub struct GeminiKeyProber<C: HttpClientTrait> {
    client: C,
    settings: ProbeSettings,
    base_url: Url,
    body: serde_json::Value,
}

impl<C: HttpClientTrait> GeminiKeyProber<C> {
    pub fn new(client: C, settings: ProbeSettings) -> Result<Self, DomainError> {
        Self::with_base_url(client, settings, DEFAULT_GEMINI_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        settings: ProbeSettings,
        base_url: impl AsRef<str>,
    ) -> Result<Self, DomainError> {
        let base_url = Url::parse(base_url.as_ref().trim_end_matches('/')).map_err(|e| {
            DomainError::configuration(format!(
                "Invalid Gemini base URL '{}': {}",
                base_url.as_ref(),
                e
            ))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(DomainError::configuration(format!(
                "Gemini base URL '{}' cannot carry a path",
                base_url
            )));
        }

        let body = settings.request_body();

        Ok(Self {
            client,
            settings,
            base_url,
            body,
        })
    }

    pub fn settings(&self) -> &ProbeSettings {
        &self.settings
    }

    /// `{base}/v1beta/models/{model}:generateContent?key={key}`
    fn generate_content_url(&self, key: &str) -> Result<String, DomainError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| DomainError::internal("Gemini base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(["v1beta", "models"])
            .push(&format!("{}:generateContent", self.settings.model));

        url.query_pairs_mut().append_pair("key", key);

        Ok(url.into())
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![("Content-Type", "application/json")]
    }

    fn classify_rejection(&self, key: &str, response: &HttpResponse) -> ProbeResult {
        match response.json() {
            Ok(body) => {
                let message = rejection_message(&body);

                info!(
                    key = %mask_key(key),
                    status = response.status,
                    error = %message,
                    "Key rejected"
                );

                ProbeResult::rejected(key, message, response.status)
            }
            Err(e) => {
                warn!(
                    key = %mask_key(key),
                    status = response.status,
                    error = %e,
                    "Key rejected with unreadable body"
                );

                ProbeResult::transport_failure(key)
            }
        }
    }
}

#[async_trait]
impl<C: HttpClientTrait> KeyProber for GeminiKeyProber<C> {
    async fn probe(&self, key: &str) -> Result<ProbeResult, DomainError> {
        let url = self.generate_content_url(key)?;
        debug!(key = %mask_key(key), model = %self.settings.model, "Probing key");

        let start = Instant::now();
        let response = self.client.post_json(&url, self.headers(), &self.body).await;
        record_probe_duration(self.provider_name(), start.elapsed());

        match response {
            Ok(response) if response.is_success() => {
                info!(key = %mask_key(key), "Key is a Pro key");
                Ok(ProbeResult::pro(key))
            }
            Ok(response) => Ok(self.classify_rejection(key, &response)),
            Err(e) if e.is_transport() => {
                warn!(key = %mask_key(key), error = %e, "Network error while probing key");
                Ok(ProbeResult::transport_failure(key))
            }
            Err(e) => Err(e),
        }
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

/// `error.message` of a Gemini error body, or the generic fallback
fn rejection_message(body: &serde_json::Value) -> String {
    body.get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
        .filter(|message| !message.is_empty())
        .unwrap_or(UNKNOWN_ERROR_MESSAGE)
        .to_string()
}

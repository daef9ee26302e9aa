//! Probe result entity returned for every candidate key

use serde::{Serialize, Serializer};

/// Fallback message when a rejection body carries no `error.message`
pub const UNKNOWN_ERROR_MESSAGE: &str = "未知错误";

/// Message reported when no HTTP response could be obtained
pub const TRANSPORT_ERROR_MESSAGE: &str = "Network error or unable to reach Google API.";

/// Message reported when a probe failed for reasons unrelated to the remote API
pub const INTERNAL_FAULT_MESSAGE: &str = "An unexpected error occurred during check.";

/// Placeholder key echoed for internal faults
pub const INTERNAL_FAULT_KEY: &str = "Unknown Key";

const INTERNAL_FAULT_STATUS: u16 = 500;
const MASKED_PREFIX_LEN: usize = 8;

/// Status reported alongside a failed probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatusCode {
    /// HTTP status returned by the remote API
    Http(u16),
    /// No HTTP response was obtained; serialized as `"N/A"`
    NotApplicable,
}

impl Serialize for ProbeStatusCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Http(code) => serializer.serialize_u16(*code),
            Self::NotApplicable => serializer.serialize_str("N/A"),
        }
    }
}

/// Classification of a probe, used for logging and metrics labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Pro,
    Rejected,
    TransportFailure,
    InternalFault,
}

impl ProbeOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pro => "pro",
            Self::Rejected => "rejected",
            Self::TransportFailure => "transport_failure",
            Self::InternalFault => "internal_fault",
        }
    }
}

impl std::fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating one candidate key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeResult {
    key: String,
    is_pro: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_code: Option<ProbeStatusCode>,
    #[serde(skip)]
    outcome: ProbeOutcome,
}

impl ProbeResult {
    /// The remote API accepted the probe
    pub fn pro(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            is_pro: true,
            error: None,
            status_code: None,
            outcome: ProbeOutcome::Pro,
        }
    }

    /// The remote API answered with a non-success status
    pub fn rejected(key: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
        Self {
            key: key.into(),
            is_pro: false,
            error: Some(message.into()),
            status_code: Some(ProbeStatusCode::Http(status)),
            outcome: ProbeOutcome::Rejected,
        }
    }

    /// No usable HTTP response was obtained
    pub fn transport_failure(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            is_pro: false,
            error: Some(TRANSPORT_ERROR_MESSAGE.to_string()),
            status_code: Some(ProbeStatusCode::NotApplicable),
            outcome: ProbeOutcome::TransportFailure,
        }
    }

    /// Synthetic result substituted when the probe itself faulted.
    /// The original key is not echoed.
    pub fn internal_fault() -> Self {
        Self {
            key: INTERNAL_FAULT_KEY.to_string(),
            is_pro: false,
            error: Some(INTERNAL_FAULT_MESSAGE.to_string()),
            status_code: Some(ProbeStatusCode::Http(INTERNAL_FAULT_STATUS)),
            outcome: ProbeOutcome::InternalFault,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_pro(&self) -> bool {
        self.is_pro
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status_code(&self) -> Option<ProbeStatusCode> {
        self.status_code
    }

    pub fn outcome(&self) -> ProbeOutcome {
        self.outcome
    }
}

/// Shorten a key for log output: the first eight characters followed by `...`
pub fn mask_key(key: &str) -> String {
    let prefix: String = key.chars().take(MASKED_PREFIX_LEN).collect();
    format!("{}...", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pro_result_serialization_omits_error_fields() {
        let value = serde_json::to_value(ProbeResult::pro("AIzaKey1")).unwrap();

        assert_eq!(value, json!({ "key": "AIzaKey1", "isPro": true }));
    }

    #[test]
    fn test_rejected_result_serialization() {
        let result = ProbeResult::rejected("AIzaKey2", "permission denied", 403);
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(
            value,
            json!({
                "key": "AIzaKey2",
                "isPro": false,
                "error": "permission denied",
                "statusCode": 403
            })
        );
        assert_eq!(result.outcome(), ProbeOutcome::Rejected);
    }

    #[test]
    fn test_transport_failure_uses_sentinel_status() {
        let result = ProbeResult::transport_failure("AIzaKey3");
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["statusCode"], json!("N/A"));
        assert_eq!(value["error"], json!(TRANSPORT_ERROR_MESSAGE));
        assert_eq!(result.status_code(), Some(ProbeStatusCode::NotApplicable));
    }

    #[test]
    fn test_internal_fault_uses_placeholder_key() {
        let value = serde_json::to_value(ProbeResult::internal_fault()).unwrap();

        assert_eq!(
            value,
            json!({
                "key": "Unknown Key",
                "isPro": false,
                "error": "An unexpected error occurred during check.",
                "statusCode": 500
            })
        );
    }

    #[test]
    fn test_outcome_is_not_serialized() {
        let json = serde_json::to_string(&ProbeResult::pro("k")).unwrap();
        assert!(!json.contains("outcome"));
    }

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("AIzaSyD-1234567890"), "AIzaSyD-...");
        assert_eq!(mask_key("short"), "short...");
        assert_eq!(mask_key(""), "...");
    }

    #[test]
    fn test_mask_key_respects_char_boundaries() {
        assert_eq!(mask_key("密钥密钥密钥密钥密钥"), "密钥密钥密钥密钥...");
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(ProbeOutcome::Pro.as_str(), "pro");
        assert_eq!(ProbeOutcome::TransportFailure.to_string(), "transport_failure");
        assert_eq!(ProbeOutcome::InternalFault.as_str(), "internal_fault");
    }
}

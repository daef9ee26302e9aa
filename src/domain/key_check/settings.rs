use serde_json::{json, Value};

pub const DEFAULT_PROBE_MODEL: &str = "gemini-2.5-pro-preview-05-06";
pub const DEFAULT_PROBE_TEXT: &str = "Check Pro status";
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2;

/// Parameters of the minimal generation request sent for every key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSettings {
    pub model: String,
    pub probe_text: String,
    pub max_output_tokens: u32,
}

impl ProbeSettings {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }

    pub fn with_probe_text(mut self, text: impl Into<String>) -> Self {
        self.probe_text = text.into();
        self
    }

    pub fn with_max_output_tokens(mut self, tokens: u32) -> Self {
        self.max_output_tokens = tokens;
        self
    }

    /// `generateContent` payload with output capped to `max_output_tokens`
    pub fn request_body(&self) -> Value {
        json!({
            "contents": [{ "parts": [{ "text": self.probe_text }] }],
            "generationConfig": { "maxOutputTokens": self.max_output_tokens },
        })
    }
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_PROBE_MODEL.to_string(),
            probe_text: DEFAULT_PROBE_TEXT.to_string(),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

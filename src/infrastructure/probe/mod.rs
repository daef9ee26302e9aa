//! Remote key probe implementations

mod gemini;
mod http_client;

pub use gemini::{GeminiKeyProber, DEFAULT_GEMINI_BASE_URL};
pub use http_client::{HttpClient, HttpClientTrait, HttpResponse};

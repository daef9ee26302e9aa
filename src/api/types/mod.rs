//! API request, response and error types

pub mod error;
pub mod json;
pub mod key_check;

pub use error::{ApiError, ApiErrorResponse};
pub use json::{Json, JsonRejection};
pub use key_check::CheckKeysRequest;

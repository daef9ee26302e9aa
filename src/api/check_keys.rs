//! Key check endpoint handler

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, CheckKeysRequest, Json, JsonRejection};
use crate::domain::{KeyBatch, ProbeResult};

/// POST /check-keys
///
/// An unreadable body is treated like a body without `keys`.
pub async fn check_keys(
    State(state): State<AppState>,
    payload: Result<Json<CheckKeysRequest>, JsonRejection>,
) -> Result<Json<Vec<ProbeResult>>, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!(error = %rejection.message(), "Unreadable key check body");
            CheckKeysRequest::default()
        }
    };

    let batch = KeyBatch::from_json(request.keys.as_ref()).map_err(ApiError::from)?;
    let results = state.key_check_service.validate_keys(batch).await;

    Ok(Json(results))
}

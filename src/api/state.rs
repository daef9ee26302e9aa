//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::KeyCheckService;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub key_check_service: Arc<KeyCheckService>,
}

impl AppState {
    pub fn new(key_check_service: KeyCheckService) -> Self {
        Self {
            key_check_service: Arc::new(key_check_service),
        }
    }
}

//! Infrastructure services

mod key_check_service;

pub use key_check_service::KeyCheckService;

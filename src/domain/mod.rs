//! Domain layer - Core business logic and entities

pub mod error;
pub mod key_check;

pub use error::DomainError;
pub use key_check::{
    KeyBatch, KeyProber, ProbeOutcome, ProbeResult, ProbeSettings, ProbeStatusCode,
};

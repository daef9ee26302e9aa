//! Key check domain models and traits

mod batch;
mod prober;
mod result;
mod settings;

pub use batch::{KeyBatch, KEYS_REQUIRED_MESSAGE};
pub use prober::KeyProber;
pub use result::{
    mask_key, ProbeOutcome, ProbeResult, ProbeStatusCode, INTERNAL_FAULT_KEY,
    INTERNAL_FAULT_MESSAGE, TRANSPORT_ERROR_MESSAGE, UNKNOWN_ERROR_MESSAGE,
};
pub use settings::ProbeSettings;

#[cfg(test)]
pub use prober::mock::MockKeyProber;

//! Observability infrastructure - Metrics

mod config;
mod metrics;

pub use config::MetricsConfig;
pub use metrics::{
    create_metrics_router, init_metrics, record_http_request, record_key_batch,
    record_probe_duration, record_probe_outcome, PrometheusMetrics,
};

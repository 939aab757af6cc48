//! Error types for vt-metrics.

use thiserror::Error;
use vt_core::CoreError;

use crate::Metric;

/// Errors from configuration, ingestion, and accumulator access.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// A metric name outside the eight known names.  Configuration-time fatal.
    #[error("unknown metric name {0:?}")]
    UnknownMetric(String),

    /// A mode token outside `{all, none, real, rand}`.  Configuration-time fatal.
    #[error("unknown collection mode {0:?}")]
    UnknownMode(String),

    /// A sample referenced an id outside the entity universe.  This is an
    /// upstream universe/sample mismatch, never silently dropped.
    #[error("{kind} id {id} outside the entity universe (size {universe})")]
    UnknownEntity {
        kind:     &'static str,
        id:       u32,
        universe: usize,
    },

    /// Accumulator access for a metric whose mode is `none` — a caller
    /// contract violation: exporters must only be asked for active metrics.
    #[error("metric {0} is not being collected (mode is none)")]
    MetricInactive(Metric),

    /// The emissions accessor was asked for a non-emission metric.
    #[error("metric {0} is not an emission metric")]
    NotAnEmission(Metric),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Shorthand result type for `vt-metrics`.
pub type MetricsResult<T> = Result<T, MetricsError>;

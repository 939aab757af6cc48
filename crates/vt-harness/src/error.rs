//! Error types for vt-harness.

use thiserror::Error;
use vt_core::CoreError;
use vt_metrics::MetricsError;

/// Errors from the run loop or the simulator client.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The simulator client failed (connection loss, protocol error, …).
    /// Never retried; the run aborts.
    #[error("simulator client error: {0}")]
    Client(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Metrics(#[from] MetricsError),
}

/// Shorthand result type for `vt-harness`.
pub type HarnessResult<T> = Result<T, HarnessError>;

//! Error types for vt-output.

use thiserror::Error;
use vt_metrics::{Level, Metric, MetricsError};

/// Errors that can occur when building or writing output tables.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// The metric has no scalar column at the requested table level.
    #[error("metric {metric} has no {level}-level column")]
    ColumnUnsupported { metric: Metric, level: Level },

    #[error(transparent)]
    Metrics(#[from] MetricsError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;

//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `vt-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An edge name that is not part of the edge universe.
    #[error("edge {0:?} not in the edge universe")]
    UnknownEdge(String),

    /// A vehicle name that is not part of the vehicle universe.
    #[error("vehicle {0:?} not in the vehicle universe")]
    UnknownVehicle(String),

    /// The same name was supplied twice when building the universe.
    #[error("duplicate entity name {0:?} in universe")]
    DuplicateEntity(String),
}

/// Shorthand result type for `vt-core`.
pub type CoreResult<T> = Result<T, CoreError>;

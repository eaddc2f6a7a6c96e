//! # Error Types — Core Primitive Failures
//!
//! Errors raised while constructing the foundational primitives. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Structural checklist errors and submission-time errors live in their own
//! crates (`paraph-checklist`, `paraph-submit`); this enum covers only what
//! can go wrong at the primitive layer.

use thiserror::Error;

/// Errors from parsing or constructing core primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A field name failed validation.
    #[error("invalid field name: {0}")]
    InvalidFieldName(String),

    /// A token string was not a valid UUID.
    #[error("invalid token {value:?}: {reason}")]
    InvalidToken {
        /// The offending input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A timestamp string was rejected.
    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp {
        /// The offending input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

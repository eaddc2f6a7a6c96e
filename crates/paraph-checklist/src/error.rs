//! # Error Types — Structural Schema Errors
//!
//! Errors raised while validating a checklist definition at authoring time.
//! These are always surfaced to the author immediately and never silently
//! repaired; an inconsistent schema must not reach persistence.
//!
//! Non-blocking findings (an unresolved visibility reference, a condition
//! referencing its own field) are *warnings*, not errors — see
//! [`crate::lint`].

use thiserror::Error;

/// A malformed checklist definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A checklist must carry at least one item.
    #[error("checklist must contain at least one item")]
    EmptyChecklist,

    /// A non-group field has no response name.
    #[error("field {text:?} is missing a response name")]
    MissingFieldName {
        /// The prompt of the offending field.
        text: String,
    },

    /// A choice field (radio, select, checkbox, multi-select) needs at
    /// least two options.
    #[error("choice field {name:?} needs at least 2 options, got {count}")]
    InsufficientOptions {
        /// Response name of the offending field.
        name: String,
        /// How many options it actually carries.
        count: usize,
    },

    /// An option is missing its label or its value.
    #[error("option {position} of field {name:?} has an empty label or value")]
    IncompleteOption {
        /// Response name of the offending field.
        name: String,
        /// Zero-based position of the offending option.
        position: usize,
    },

    /// A group must contain at least one child item.
    #[error("group {text:?} must contain at least one item")]
    EmptyGroup {
        /// The prompt of the offending group.
        text: String,
    },

    /// Two fields in the same sibling-or-ancestor scope share a name.
    #[error("field name {name:?} is already used within this scope")]
    DuplicateName {
        /// The colliding response name.
        name: String,
    },
}

//! # Domain Identity Newtypes
//!
//! Newtype wrappers for all identifiers in the Paraph engine. These prevent
//! accidental identifier confusion: you cannot pass a `TemplateToken` where
//! a `ChecklistToken` is expected, and a raw string can never stand in for
//! a validated `FieldName`.
//!
//! ## Invariant
//!
//! Tokens are the only handles external services use to address a checklist
//! or template; node `ItemId`s are internal and may be regenerated on copy.
//! Field names are the contract collaborators key responses by, so they are
//! validated at construction and preserved verbatim by every operation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// Maximum accepted length for a field name, in bytes.
pub const FIELD_NAME_MAX_LEN: usize = 128;

/// Opaque addressing token for a persisted checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChecklistToken(pub Uuid);

/// Opaque addressing token for a document template wrapping a checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateToken(pub Uuid);

/// Unique identifier of a single checklist item node.
///
/// Unique within one schema instance. Regenerated when a checklist is
/// duplicated; never used by collaborators to key responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ChecklistToken {
    /// Mint a new random checklist token.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a token from its string form.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let uuid = Uuid::parse_str(s).map_err(|e| CoreError::InvalidToken {
            value: s.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self(uuid))
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl TemplateToken {
    /// Mint a new random template token.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a token from its string form.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let uuid = Uuid::parse_str(s).map_err(|e| CoreError::InvalidToken {
            value: s.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self(uuid))
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl ItemId {
    /// Generate a new random item identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ChecklistToken {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for TemplateToken {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ChecklistToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "checklist:{}", self.0)
    }
}

impl std::fmt::Display for TemplateToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "template:{}", self.0)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item:{}", self.0)
    }
}

// ─── Field Names ─────────────────────────────────────────────────────

/// The response key of a leaf field.
///
/// Responses, visibility conditions, and the validator all address fields
/// by name. Names must be non-empty, free of surrounding whitespace, and
/// at most [`FIELD_NAME_MAX_LEN`] bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldName(String);

impl FieldName {
    /// Validate and wrap a raw field name.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        if input.is_empty() {
            return Err(CoreError::InvalidFieldName(
                "field name must not be empty".to_string(),
            ));
        }
        if input.trim() != input {
            return Err(CoreError::InvalidFieldName(format!(
                "field name {input:?} must not contain leading/trailing whitespace"
            )));
        }
        if input.len() > FIELD_NAME_MAX_LEN {
            return Err(CoreError::InvalidFieldName(format!(
                "field name exceeds max length {FIELD_NAME_MAX_LEN}"
            )));
        }
        Ok(Self(input.to_string()))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FieldName {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FieldName> for String {
    fn from(name: FieldName) -> Self {
        name.0
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

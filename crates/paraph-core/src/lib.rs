//! # paraph-core — Foundational Types for the Paraph Engine
//!
//! This crate is the bedrock of the Paraph checklist engine. It defines the
//! addressing and identity primitives shared by every other crate in the
//! workspace; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `ChecklistToken`,
//!    `TemplateToken`, `ItemId`, `FieldName` — all newtypes. No bare strings
//!    or bare UUIDs for identifiers, so a template token can never be passed
//!    where a checklist token is expected.
//!
//! 2. **`FieldName` is parse-validated.** The response map, the visibility
//!    conditions, and the validator all key on field names; a blank or
//!    padded name would silently orphan responses. Construction rejects
//!    those inputs instead.
//!
//! 3. **UTC-only timestamps.** `Timestamp` enforces UTC with Z suffix at
//!    seconds precision, so audit records serialize identically regardless
//!    of the host's timezone.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `paraph-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::CoreError;
pub use identity::{ChecklistToken, FieldName, ItemId, TemplateToken, FIELD_NAME_MAX_LEN};
pub use temporal::Timestamp;

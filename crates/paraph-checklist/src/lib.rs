//! # paraph-checklist — Dynamic Checklist Engine
//!
//! The core of the Paraph stack: a schema for structured, conditionally
//! visible form fields (possibly nested in groups), plus the runtime logic
//! that decides which fields are currently visible, validates that every
//! required-and-visible field is answered, and supports the structural
//! operations the authoring and signing surfaces need (stable ordering,
//! recursive leaf counting, deep duplication).
//!
//! ## Key Design Principles
//!
//! 1. **Closed variant set for field behavior.** [`FieldControl`] is an enum
//!    over the nine field types; only choice variants carry options, only
//!    `Group` carries children. Exhaustive `match` everywhere, so adding a
//!    field type forces every consumer (evaluator, validator, assembler) to
//!    handle it.
//!
//! 2. **Flat arena for traversal.** A loaded checklist is indexed into a
//!    [`ChecklistArena`]: nodes in a flat `Vec`, parent-to-children as index
//!    lists pre-sorted by the ascending-`order` stable rule, plus a
//!    name-resolution map. Conditions reference fields by *name*, across
//!    branches, so traversal works over indices rather than owning pointers.
//!
//! 3. **Pure, full re-evaluation.** [`visible_fields`] and [`find_missing`]
//!    are pure functions over `(schema, responses)` with no hidden state.
//!    The host re-runs them in full after every response mutation; each
//!    pass is linear in tree size, and there is nothing to go stale.
//!
//! 4. **Fail closed, never loop.** A condition referencing a name that does
//!    not resolve anywhere in the schema keeps its field invisible. Mutual
//!    or self-referencing conditions cannot cause non-termination because
//!    each field is evaluated independently against the current response
//!    snapshot; the authoring [`lint`] flags the degenerate cases.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No I/O: schemas and responses arrive as plain data, results leave as
//!   plain data. Loading and submission transport belong to the host.

pub mod arena;
pub mod error;
pub mod item;
pub mod lint;
pub mod response;
pub mod validate;
pub mod visibility;

// Re-export primary types for ergonomic imports.
pub use arena::ChecklistArena;
pub use error::SchemaError;
pub use item::{sorted_children, Checklist, ChecklistItem, ChoiceOption, FieldControl};
pub use lint::{lint, SchemaWarning};
pub use response::{ResponseValue, Responses};
pub use validate::{find_missing, MissingField};
pub use visibility::{visible_fields, ConditionOperator, VisibilityCondition};

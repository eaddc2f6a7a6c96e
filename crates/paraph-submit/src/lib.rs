//! # paraph-submit — Submission Boundary
//!
//! The outward-facing layer of the Paraph stack. It wraps checklists in
//! document templates, carries the signer's device/browser audit metadata,
//! and assembles the final signed-document payload the external document
//! service consumes.
//!
//! The assembler is the last gate before the boundary: a submission is
//! refused while any required-and-visible field is unanswered, or while the
//! attestation signature is blank. Nothing partial ever crosses; the
//! payload itself is opaque to the engine once assembled.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No network transport: the host delivers the payload and interprets
//!   the endpoint's [`SubmissionOutcome`].

pub mod device;
pub mod document;
pub mod error;
pub mod submission;

mod serde_helpers;

// Re-export primary types for ergonomic imports.
pub use device::DeviceInfo;
pub use document::{AttachmentRef, DocumentType, Template};
pub use error::SubmitError;
pub use submission::{assemble, SubmissionOutcome, SubmissionPayload};

//! # Error Types — Submission-Time Failures
//!
//! Errors raised while assembling a submission or interpreting a document
//! template. Validation and signature failures carry everything the host
//! needs to render human-readable messages; the attempt is aborted and
//! nothing partial is sent to the external service. Nothing here is
//! retried automatically.

use thiserror::Error;

use paraph_checklist::MissingField;

/// A submission attempt that must not cross the boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Required-and-visible fields are unanswered. Carries the ordered
    /// unmet-field list for user-facing messages.
    #[error("submission blocked: {} required field(s) unanswered", .0.len())]
    IncompleteResponses(Vec<MissingField>),

    /// The attestation signature is blank.
    #[error("submission requires a signature")]
    MissingSignature,

    /// A `document_type` discriminator outside the known 1..=3 range.
    #[error("unknown document_type discriminator: {0}")]
    UnknownDocumentType(u8),

    /// A template's discriminator disagrees with the parts it carries.
    #[error("template is marked {document_type} but {reason}")]
    TemplateMismatch {
        /// The declared discriminator.
        document_type: String,
        /// What is actually missing or extraneous.
        reason: String,
    },
}

impl SubmitError {
    /// Human-readable messages for display, one per unmet field when the
    /// error is [`SubmitError::IncompleteResponses`].
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::IncompleteResponses(missing) => {
                missing.iter().map(MissingField::message).collect()
            }
            other => vec![other.to_string()],
        }
    }
}

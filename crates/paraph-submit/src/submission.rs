//! # Submission Assembler
//!
//! Combines a signing session's validated responses with the attestation
//! signature and device audit metadata into the payload the external
//! document-signing endpoint consumes.
//!
//! Assembly is the submission gate: it re-runs the visibility evaluator
//! and the required-field validator against the final response snapshot,
//! refuses while anything is unmet, refuses a blank signature, and only
//! then produces the payload. No partial submission ever leaves the
//! engine.

use serde::{Deserialize, Serialize};

use paraph_checklist::{find_missing, visible_fields, Checklist, ChecklistArena, Responses};
use paraph_core::{ChecklistToken, Timestamp};

use crate::device::DeviceInfo;
use crate::error::SubmitError;
use crate::serde_helpers;

/// The signed-document payload sent to the external signing endpoint.
///
/// Opaque to the engine once assembled; field names follow the endpoint's
/// wire contract. The signature is a free-text name treated as a legal
/// attestation token, not a handwriting capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    /// Token of the checklist being signed.
    pub token: ChecklistToken,
    /// The full response map of the session.
    pub responses: Responses,
    /// The attestation value the signer typed.
    pub signature_data: String,
    /// Audit: signer IP address.
    pub ip_address: String,
    /// Audit: raw user-agent string.
    pub browser_signature: String,
    /// Audit: parsed browser name.
    pub browser_name: String,
    /// Audit: mobile flag, `0|1` on the wire.
    #[serde(with = "serde_helpers::bool_as_int")]
    pub is_mobile: bool,
    /// Audit: device form factor.
    pub device_type: String,
    /// Audit: operating system name.
    pub device_os: String,
    /// Audit: when the submission was assembled (UTC).
    pub signed_at: Timestamp,
}

/// The signing endpoint's response, consumed opaquely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    /// Whether the endpoint accepted the submission.
    pub success: bool,
    /// Reference to a downloadable artifact, when the endpoint produced
    /// one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact: Option<String>,
}

/// Assemble the final submission for a signing session.
///
/// Runs the full visibility/validation pass over the response snapshot
/// before anything else; the ordered unmet-field list rides inside the
/// error so the host can show one message per field.
///
/// # Errors
///
/// - [`SubmitError::IncompleteResponses`] while any required-and-visible
///   field is unanswered.
/// - [`SubmitError::MissingSignature`] when `signature` is blank.
pub fn assemble(
    token: ChecklistToken,
    checklist: &Checklist,
    responses: &Responses,
    signature: &str,
    device: &DeviceInfo,
) -> Result<SubmissionPayload, SubmitError> {
    let arena = ChecklistArena::build(checklist);
    let visible = visible_fields(&arena, responses);
    let missing = find_missing(&arena, &visible, responses);
    if !missing.is_empty() {
        return Err(SubmitError::IncompleteResponses(missing));
    }
    if signature.trim().is_empty() {
        return Err(SubmitError::MissingSignature);
    }

    tracing::debug!(
        %token,
        answered = responses.len(),
        visible = visible.len(),
        "assembling submission payload"
    );

    Ok(SubmissionPayload {
        token,
        responses: responses.clone(),
        signature_data: signature.to_string(),
        ip_address: device.ip_address.clone(),
        browser_signature: device.browser_signature.clone(),
        browser_name: device.browser_name.clone(),
        is_mobile: device.is_mobile,
        device_type: device.device_type.clone(),
        device_os: device.device_os.clone(),
        signed_at: Timestamp::now(),
    })
}

// ─── Tests ───────────────────────────────────────────────────────────

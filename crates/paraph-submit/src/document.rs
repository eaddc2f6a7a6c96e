//! # Document Templates
//!
//! A template is the document-level wrapper the external service stores: it
//! may bundle a checklist, a binary attachment, or both, discriminated by
//! `document_type` (`1` = document only, `2` = checklist only, `3` = both).
//! The engine only ever consumes the checklist portion; attachments pass
//! through as opaque references.

use serde::{Deserialize, Serialize};

use paraph_checklist::Checklist;
use paraph_core::TemplateToken;

use crate::error::SubmitError;

/// Which parts a template bundles. Crosses the wire as `1|2|3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DocumentType {
    /// A binary document with no checklist.
    DocumentOnly,
    /// A checklist with no attachment.
    ChecklistOnly,
    /// Both a binary document and a checklist.
    Both,
}

impl DocumentType {
    /// The wire discriminator.
    pub fn discriminator(&self) -> u8 {
        match self {
            Self::DocumentOnly => 1,
            Self::ChecklistOnly => 2,
            Self::Both => 3,
        }
    }

    /// Whether templates of this type must carry a checklist.
    pub fn expects_checklist(&self) -> bool {
        matches!(self, Self::ChecklistOnly | Self::Both)
    }

    /// Whether templates of this type must carry an attachment.
    pub fn expects_attachment(&self) -> bool {
        matches!(self, Self::DocumentOnly | Self::Both)
    }
}

impl From<DocumentType> for u8 {
    fn from(value: DocumentType) -> Self {
        value.discriminator()
    }
}

impl TryFrom<u8> for DocumentType {
    type Error = SubmitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::DocumentOnly),
            2 => Ok(Self::ChecklistOnly),
            3 => Ok(Self::Both),
            other => Err(SubmitError::UnknownDocumentType(other)),
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::DocumentOnly => "DOCUMENT_ONLY",
            Self::ChecklistOnly => "CHECKLIST_ONLY",
            Self::Both => "DOCUMENT_AND_CHECKLIST",
        };
        f.write_str(s)
    }
}

/// Opaque reference to a template's binary attachment.
///
/// The bytes themselves never pass through the engine; rendering and
/// storage belong to the external service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRef {
    /// Original file name, for display.
    pub file_name: String,
    /// MIME type reported at upload.
    pub content_type: String,
}

/// A document template wrapping zero-or-one checklist and zero-or-one
/// attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Addressing token the external service keys this template by.
    pub token: TemplateToken,
    /// Template title.
    pub title: String,
    /// Which parts this template bundles.
    pub document_type: DocumentType,
    /// The checklist portion, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checklist: Option<Checklist>,
    /// The attachment portion, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<AttachmentRef>,
}

impl Template {
    /// Assemble a template, deriving the discriminator from the parts.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::TemplateMismatch`] if neither part is
    /// present.
    pub fn new(
        title: impl Into<String>,
        checklist: Option<Checklist>,
        attachment: Option<AttachmentRef>,
    ) -> Result<Self, SubmitError> {
        let document_type = match (&attachment, &checklist) {
            (Some(_), None) => DocumentType::DocumentOnly,
            (None, Some(_)) => DocumentType::ChecklistOnly,
            (Some(_), Some(_)) => DocumentType::Both,
            (None, None) => {
                return Err(SubmitError::TemplateMismatch {
                    document_type: "empty".to_string(),
                    reason: "carries neither a checklist nor an attachment".to_string(),
                });
            }
        };
        Ok(Self {
            token: TemplateToken::new(),
            title: title.into(),
            document_type,
            checklist,
            attachment,
        })
    }

    /// Check that the declared discriminator matches the parts carried.
    ///
    /// Deserialized templates may disagree; the engine refuses to interpret
    /// them rather than guessing which side is authoritative.
    pub fn validate(&self) -> Result<(), SubmitError> {
        if self.document_type.expects_checklist() && self.checklist.is_none() {
            return Err(SubmitError::TemplateMismatch {
                document_type: self.document_type.to_string(),
                reason: "the checklist portion is missing".to_string(),
            });
        }
        if self.document_type.expects_attachment() && self.attachment.is_none() {
            return Err(SubmitError::TemplateMismatch {
                document_type: self.document_type.to_string(),
                reason: "the attachment portion is missing".to_string(),
            });
        }
        Ok(())
    }

    /// The checklist portion, if this template has one.
    pub fn checklist(&self) -> Option<&Checklist> {
        self.checklist.as_ref()
    }

    /// Duplicate this template as an independent new one.
    ///
    /// The copy receives a fresh token and a deep-cloned checklist with
    /// regenerated item ids; field names and orders are preserved verbatim
    /// so existing response contracts keep working against the copy.
    pub fn duplicate(&self) -> Self {
        Self {
            token: TemplateToken::new(),
            title: self.title.clone(),
            document_type: self.document_type,
            checklist: self.checklist.as_ref().map(Checklist::duplicate),
            attachment: self.attachment.clone(),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use paraph_checklist::{ChecklistItem, FieldControl};
    use paraph_core::FieldName;

    fn sample_checklist() -> Checklist {
        Checklist::new(
            "Intake",
            "",
            vec![ChecklistItem::field(
                FieldName::parse("who").unwrap(),
                "Your name",
                FieldControl::Text,
            )],
        )
        .unwrap()
    }

    #[test]
    fn test_discriminator_wire_values() {
        assert_eq!(u8::from(DocumentType::DocumentOnly), 1);
        assert_eq!(u8::from(DocumentType::ChecklistOnly), 2);
        assert_eq!(u8::from(DocumentType::Both), 3);
        assert_eq!(DocumentType::try_from(2).unwrap(), DocumentType::ChecklistOnly);
        assert!(matches!(
            DocumentType::try_from(9),
            Err(SubmitError::UnknownDocumentType(9))
        ));
    }

    #[test]
    fn test_document_type_serializes_as_integer() {
        let json = serde_json::to_value(DocumentType::Both).unwrap();
        assert_eq!(json, serde_json::json!(3));
        let back: DocumentType = serde_json::from_value(serde_json::json!(1)).unwrap();
        assert_eq!(back, DocumentType::DocumentOnly);
    }

    #[test]
    fn test_new_derives_discriminator_from_parts() {
        let tpl = Template::new("Checklist only", Some(sample_checklist()), None).unwrap();
        assert_eq!(tpl.document_type, DocumentType::ChecklistOnly);
        tpl.validate().unwrap();

        let attachment = AttachmentRef {
            file_name: "lease.pdf".to_string(),
            content_type: "application/pdf".to_string(),
        };
        let tpl = Template::new("Both", Some(sample_checklist()), Some(attachment)).unwrap();
        assert_eq!(tpl.document_type, DocumentType::Both);
        tpl.validate().unwrap();
    }

    #[test]
    fn test_empty_template_rejected() {
        assert!(matches!(
            Template::new("Nothing", None, None),
            Err(SubmitError::TemplateMismatch { .. })
        ));
    }

    #[test]
    fn test_validate_catches_deserialized_mismatch() {
        let mut tpl = Template::new("Ok", Some(sample_checklist()), None).unwrap();
        tpl.checklist = None;
        assert!(matches!(
            tpl.validate(),
            Err(SubmitError::TemplateMismatch { .. })
        ));
    }

    #[test]
    fn test_duplicate_gets_fresh_token_and_independent_checklist() {
        let original = Template::new("Tpl", Some(sample_checklist()), None).unwrap();
        let copy = original.duplicate();
        assert_ne!(original.token, copy.token);

        let orig_item = &original.checklist().unwrap().items[0];
        let copy_item = &copy.checklist().unwrap().items[0];
        assert_ne!(orig_item.id, copy_item.id);
        assert_eq!(orig_item.name, copy_item.name);
    }
}

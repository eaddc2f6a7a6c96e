//! # Authoring-Time Lint
//!
//! Non-blocking findings surfaced while a checklist is being authored.
//! Unlike [`crate::SchemaError`], a warning never prevents the schema from
//! being persisted: a dangling visibility reference simply leaves its field
//! chronically invisible at signing time (fail closed), which the author
//! probably wants to know about now rather than discover in production.

use paraph_core::FieldName;

use crate::arena::ChecklistArena;
use crate::item::Checklist;

/// A non-blocking authoring finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaWarning {
    /// A visibility condition references a name that resolves to no field
    /// in the schema. The conditioned field will never become visible.
    UnresolvedConditionReference {
        /// Display handle of the conditioned field (name, or prompt if
        /// the field is unnamed).
        field: String,
        /// The dangling reference.
        references: FieldName,
    },
    /// A field's condition references its own name. The field can only
    /// become visible through a stale answer recorded under its own key.
    SelfReference {
        /// The field's response name.
        field: FieldName,
    },
}

impl std::fmt::Display for SchemaWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnresolvedConditionReference { field, references } => write!(
                f,
                "field {field:?}: visibility condition references unknown field {references:?}; \
                 the field will never be visible",
            ),
            Self::SelfReference { field } => {
                write!(f, "field {field:?}: visibility condition references itself")
            }
        }
    }
}

/// Lint a checklist for non-blocking condition problems.
///
/// Emits each finding through `tracing::warn!` and returns the full list
/// for the authoring surface to display inline. Always returns; linting
/// never fails.
pub fn lint(checklist: &Checklist) -> Vec<SchemaWarning> {
    let arena = ChecklistArena::build(checklist);
    let mut warnings = Vec::new();

    for index in arena.leaves_in_render_order() {
        let item = arena.item(index);
        let Some(condition) = &item.visibility_condition else {
            continue;
        };
        if !arena.resolves(&condition.field_name) {
            let field = item
                .name
                .as_ref()
                .map(|n| n.as_str().to_string())
                .unwrap_or_else(|| item.text.clone());
            tracing::warn!(
                field = %field,
                references = %condition.field_name,
                "visibility condition references unknown field"
            );
            warnings.push(SchemaWarning::UnresolvedConditionReference {
                field,
                references: condition.field_name.clone(),
            });
        } else if item.name.as_ref() == Some(&condition.field_name) {
            tracing::warn!(
                field = %condition.field_name,
                "visibility condition references its own field"
            );
            warnings.push(SchemaWarning::SelfReference {
                field: condition.field_name.clone(),
            });
        }
    }
    warnings
}

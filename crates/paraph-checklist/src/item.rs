//! # Checklist Schema Model
//!
//! The typed tree representation of a checklist: items, options, and groups,
//! together with structural validation, the stable sibling-ordering rule,
//! recursive leaf counting, and deep duplication.
//!
//! ## Wire Shape
//!
//! The model round-trips through the JSON shape external collaborators use:
//! a `type` discriminator (`text`, `email`, `textarea`, `date_time`,
//! `radio`, `select`, `checkbox`, `multi-select`, `group`) flattened into
//! the item object, `options` only on choice types, `items` only on groups.
//! The closed [`FieldControl`] enum makes "options forbidden on non-choice
//! types" a structural fact rather than a runtime check.
//!
//! ## Lifecycle
//!
//! A schema is authored field-by-field, persisted externally as an opaque
//! unit addressed by a token, retrieved in full for preview and signing,
//! and treated as read-only for the duration of a signing session.

use serde::{Deserialize, Serialize};

use paraph_core::{FieldName, ItemId};

use crate::error::SchemaError;
use crate::visibility::VisibilityCondition;

// ─── Options ─────────────────────────────────────────────────────────

/// One selectable entry of a choice field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Human-readable label shown to the signer.
    pub label: String,
    /// Machine value stored in the response map when selected.
    pub value: String,
}

impl ChoiceOption {
    /// Construct an option from a label/value pair.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Whether both label and value are populated.
    pub fn is_complete(&self) -> bool {
        !self.label.is_empty() && !self.value.is_empty()
    }
}

// ─── Field Controls ──────────────────────────────────────────────────

/// The closed set of field behaviors.
///
/// Only choice variants carry `options`; only `Group` carries child
/// `items`. Every consumer resolves behavior through exhaustive `match`,
/// so the compiler enforces that a new variant is handled everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldControl {
    /// Single-line free text.
    Text,
    /// Single-line text expected to be an email address.
    Email,
    /// Multi-line free text.
    Textarea,
    /// Date/time picker; the response is the picked value's string form.
    DateTime,
    /// Exactly-one choice rendered as radio buttons.
    Radio {
        /// The selectable entries, in declaration order.
        options: Vec<ChoiceOption>,
    },
    /// Exactly-one choice rendered as a dropdown.
    Select {
        /// The selectable entries, in declaration order.
        options: Vec<ChoiceOption>,
    },
    /// Zero-or-more choice rendered as checkboxes.
    Checkbox {
        /// The selectable entries, in declaration order.
        options: Vec<ChoiceOption>,
    },
    /// Zero-or-more choice rendered as a multi-select list.
    #[serde(rename = "multi-select")]
    MultiSelect {
        /// The selectable entries, in declaration order.
        options: Vec<ChoiceOption>,
    },
    /// A container of nested items; collects no response of its own.
    Group {
        /// Child items, arbitrary nesting depth.
        items: Vec<ChecklistItem>,
    },
}

impl FieldControl {
    /// Whether this control is a group container.
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    /// The options of a choice control, if any.
    pub fn options(&self) -> Option<&[ChoiceOption]> {
        match self {
            Self::Radio { options }
            | Self::Select { options }
            | Self::Checkbox { options }
            | Self::MultiSelect { options } => Some(options),
            Self::Text | Self::Email | Self::Textarea | Self::DateTime | Self::Group { .. } => {
                None
            }
        }
    }

    /// Child items of a group control, if any.
    pub fn items(&self) -> Option<&[ChecklistItem]> {
        match self {
            Self::Group { items } => Some(items),
            _ => None,
        }
    }

    /// Whether responses to this control are lists rather than scalars.
    pub fn collects_many(&self) -> bool {
        matches!(self, Self::Checkbox { .. } | Self::MultiSelect { .. })
    }

    /// The wire name of this control's `type` discriminator.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Textarea => "textarea",
            Self::DateTime => "date_time",
            Self::Radio { .. } => "radio",
            Self::Select { .. } => "select",
            Self::Checkbox { .. } => "checkbox",
            Self::MultiSelect { .. } => "multi-select",
            Self::Group { .. } => "group",
        }
    }
}

// ─── Items ───────────────────────────────────────────────────────────

/// One node of a checklist tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Stable identifier, unique within a schema instance. Regenerated on
    /// duplication; never used to key responses.
    #[serde(default)]
    pub id: ItemId,
    /// Response key. Required for non-group items; groups may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<FieldName>,
    /// Human-readable prompt.
    pub text: String,
    /// Whether an answer is mandatory. Enforced only while the field is
    /// visible.
    #[serde(default)]
    pub required: bool,
    /// Sibling sort key; ascending, ties broken by declaration order.
    #[serde(default)]
    pub order: i64,
    /// Rule making this field's relevance depend on another field's value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility_condition: Option<VisibilityCondition>,
    /// The field behavior, flattened into the item on the wire.
    #[serde(flatten)]
    pub control: FieldControl,
}

impl ChecklistItem {
    /// Construct a leaf field.
    pub fn field(name: FieldName, text: impl Into<String>, control: FieldControl) -> Self {
        Self {
            id: ItemId::new(),
            name: Some(name),
            text: text.into(),
            required: false,
            order: 0,
            visibility_condition: None,
            control,
        }
    }

    /// Construct a group containing the given items.
    pub fn group(text: impl Into<String>, items: Vec<ChecklistItem>) -> Self {
        Self {
            id: ItemId::new(),
            name: None,
            text: text.into(),
            required: false,
            order: 0,
            visibility_condition: None,
            control: FieldControl::Group { items },
        }
    }

    /// Mark the field as required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the sibling sort key.
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    /// Attach a visibility condition.
    pub fn with_condition(mut self, condition: VisibilityCondition) -> Self {
        self.visibility_condition = Some(condition);
        self
    }

    /// Whether this item is a group container.
    pub fn is_group(&self) -> bool {
        self.control.is_group()
    }

    /// Recursively count the leaf fields of this subtree.
    ///
    /// Groups never count themselves; only their leaf descendants do.
    pub fn leaf_count(&self) -> usize {
        match &self.control {
            FieldControl::Group { items } => items.iter().map(ChecklistItem::leaf_count).sum(),
            _ => 1,
        }
    }

    /// Deep-clone this subtree with every `ItemId` regenerated.
    ///
    /// Names, prompts, orders, options, and conditions are preserved
    /// verbatim: names are the contract collaborators key responses by.
    pub fn duplicate(&self) -> Self {
        let control = match &self.control {
            FieldControl::Group { items } => FieldControl::Group {
                items: items.iter().map(ChecklistItem::duplicate).collect(),
            },
            other => other.clone(),
        };
        Self {
            id: ItemId::new(),
            name: self.name.clone(),
            text: self.text.clone(),
            required: self.required,
            order: self.order,
            visibility_condition: self.visibility_condition.clone(),
            control,
        }
    }

    /// Validate a leaf field: name presence, scope uniqueness, option rules.
    fn validate_leaf(&self, scope: &mut Vec<FieldName>) -> Result<(), SchemaError> {
        let name = self
            .name
            .as_ref()
            .ok_or_else(|| SchemaError::MissingFieldName {
                text: self.text.clone(),
            })?;
        if scope.contains(name) {
            return Err(SchemaError::DuplicateName {
                name: name.as_str().to_string(),
            });
        }
        scope.push(name.clone());
        if let Some(options) = self.control.options() {
            if options.len() < 2 {
                return Err(SchemaError::InsufficientOptions {
                    name: name.as_str().to_string(),
                    count: options.len(),
                });
            }
            for (position, option) in options.iter().enumerate() {
                if !option.is_complete() {
                    return Err(SchemaError::IncompleteOption {
                        name: name.as_str().to_string(),
                        position,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Validate one sibling level against the inherited name scope.
///
/// Leaf names of the whole level are collected before any group is
/// descended into, so the sibling+ancestor uniqueness rule does not depend
/// on declaration order. The scope is rewound afterwards; unrelated
/// branches may reuse a name.
fn validate_level(items: &[ChecklistItem], scope: &mut Vec<FieldName>) -> Result<(), SchemaError> {
    let depth = scope.len();
    for item in items {
        if !item.is_group() {
            item.validate_leaf(scope)?;
        }
    }
    for item in items {
        if let FieldControl::Group { items: children } = &item.control {
            if children.is_empty() {
                return Err(SchemaError::EmptyGroup {
                    text: item.text.clone(),
                });
            }
            validate_level(children, scope)?;
        }
    }
    scope.truncate(depth);
    Ok(())
}

/// Siblings in render order: ascending `order`, ties kept in declaration
/// order (stable sort). Callers must never assume input order.
pub fn sorted_children(items: &[ChecklistItem]) -> Vec<&ChecklistItem> {
    let mut sorted: Vec<&ChecklistItem> = items.iter().collect();
    sorted.sort_by_key(|item| item.order);
    sorted
}

// ─── Checklist ───────────────────────────────────────────────────────

/// A persisted, reusable schema of form fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    /// Checklist title shown on the authoring and signing surfaces.
    pub title: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Top-level items, arbitrary nesting via groups.
    pub items: Vec<ChecklistItem>,
}

impl Checklist {
    /// Construct and structurally validate a checklist.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        items: Vec<ChecklistItem>,
    ) -> Result<Self, SchemaError> {
        let checklist = Self {
            title: title.into(),
            description: description.into(),
            items,
        };
        checklist.validate()?;
        Ok(checklist)
    }

    /// Structural validation of the full tree.
    ///
    /// Rejects: a checklist with zero items, a non-group field without a
    /// name, a choice field with fewer than two options or any incomplete
    /// option, a group without items, and a name collision within a
    /// sibling+ancestor scope. Never silently repairs.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.items.is_empty() {
            return Err(SchemaError::EmptyChecklist);
        }
        let mut scope = Vec::new();
        validate_level(&self.items, &mut scope)
    }

    /// Recursively count the leaf fields in the whole schema.
    pub fn leaf_count(&self) -> usize {
        self.items.iter().map(ChecklistItem::leaf_count).sum()
    }

    /// Deep-clone the schema as an independent new template.
    ///
    /// The copy shares no mutable state with the original; every nested
    /// `ItemId` is regenerated while names and orders are preserved
    /// verbatim. The caller registers the copy under a fresh token.
    pub fn duplicate(&self) -> Self {
        Self {
            title: self.title.clone(),
            description: self.description.clone(),
            items: self.items.iter().map(ChecklistItem::duplicate).collect(),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

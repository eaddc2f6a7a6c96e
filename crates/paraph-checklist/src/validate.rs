//! # Required-Field Validator
//!
//! Gates submission: a response set is submittable iff no currently
//! visible, required leaf field is unanswered. Invisible fields are never
//! validated, however `required` they are; group nodes are never themselves
//! validated, only descended into.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use paraph_core::FieldName;

use crate::arena::ChecklistArena;
use crate::response::Responses;

/// One unmet required field, in render order.
///
/// Carries the prompt alongside the name so callers can build user-facing
/// messages without another schema lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingField {
    /// Response name of the unmet field.
    pub name: FieldName,
    /// Human-readable prompt of the unmet field.
    pub text: String,
}

impl MissingField {
    /// A user-facing message for this unmet field.
    pub fn message(&self) -> String {
        format!("{:?} is required", self.text)
    }
}

impl std::fmt::Display for MissingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

/// The unmet required fields, in render order.
///
/// A leaf is unmet iff it is `required`, its name is in `visible`, and its
/// answer is absent, an empty string, or an empty list. An empty result
/// means the response set is submittable.
pub fn find_missing(
    arena: &ChecklistArena<'_>,
    visible: &BTreeSet<FieldName>,
    responses: &Responses,
) -> Vec<MissingField> {
    let mut missing = Vec::new();
    for index in arena.leaves_in_render_order() {
        let item = arena.item(index);
        let Some(name) = &item.name else {
            continue;
        };
        if item.required && visible.contains(name) && !responses.is_answered(name) {
            missing.push(MissingField {
                name: name.clone(),
                text: item.text.clone(),
            });
        }
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Checklist, ChecklistItem, FieldControl};
    use crate::visibility::{visible_fields, VisibilityCondition};

    fn name(s: &str) -> FieldName {
        FieldName::parse(s).unwrap()
    }

    fn required(n: &str, prompt: &str) -> ChecklistItem {
        ChecklistItem::field(name(n), prompt, FieldControl::Text).with_required(true)
    }

    fn check(checklist: &Checklist, responses: &Responses) -> Vec<MissingField> {
        let arena = ChecklistArena::build(checklist);
        let visible = visible_fields(&arena, responses);
        find_missing(&arena, &visible, responses)
    }

    #[test]
    fn test_unanswered_required_field_is_reported() {
        let checklist =
            Checklist::new("V", "", vec![required("who", "Your name")]).unwrap();
        let missing = check(&checklist, &Responses::new());
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].name, name("who"));
        assert_eq!(missing[0].text, "Your name");
    }

    #[test]
    fn test_blank_answer_counts_as_unanswered() {
        let checklist =
            Checklist::new("V", "", vec![required("who", "Your name")]).unwrap();
        let mut responses = Responses::new();
        responses.set(name("who"), "");
        assert_eq!(check(&checklist, &responses).len(), 1);

        responses.set(name("who"), "Ada");
        assert!(check(&checklist, &responses).is_empty());
    }

    #[test]
    fn test_invisible_required_field_is_exempt() {
        let checklist = Checklist::new(
            "V",
            "",
            vec![
                ChecklistItem::field(name("toggle"), "Toggle", FieldControl::Text),
                required("hidden", "Hidden detail")
                    .with_condition(VisibilityCondition::equals(name("toggle"), "show")),
            ],
        )
        .unwrap();
        // Invisible and empty: exempt.
        assert!(check(&checklist, &Responses::new()).is_empty());

        // Made visible and still empty: reported.
        let mut responses = Responses::new();
        responses.set(name("toggle"), "show");
        let missing = check(&checklist, &responses);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].name, name("hidden"));
    }

    #[test]
    fn test_optional_fields_never_reported() {
        let optional = ChecklistItem::field(name("note"), "Note", FieldControl::Text);
        let checklist = Checklist::new("V", "", vec![optional]).unwrap();
        assert!(check(&checklist, &Responses::new()).is_empty());
    }

    #[test]
    fn test_missing_fields_come_out_in_render_order() {
        let group = ChecklistItem::group(
            "Grp",
            vec![required("second", "Second").with_order(2), required("first", "First").with_order(1)],
        )
        .with_order(1);
        let checklist = Checklist::new(
            "V",
            "",
            vec![required("last", "Last").with_order(2), group],
        )
        .unwrap();
        let names: Vec<String> = check(&checklist, &Responses::new())
            .into_iter()
            .map(|m| m.name.as_str().to_string())
            .collect();
        assert_eq!(names, vec!["first", "second", "last"]);
    }

    #[test]
    fn test_empty_list_answer_counts_as_unanswered() {
        let boxes = ChecklistItem::field(
            name("boxes"),
            "Pick some",
            FieldControl::Checkbox {
                options: vec![
                    crate::item::ChoiceOption::new("A", "a"),
                    crate::item::ChoiceOption::new("B", "b"),
                ],
            },
        )
        .with_required(true);
        let checklist = Checklist::new("V", "", vec![boxes]).unwrap();

        let mut responses = Responses::new();
        responses.set(name("boxes"), Vec::<String>::new());
        assert_eq!(check(&checklist, &responses).len(), 1);

        responses.set(name("boxes"), vec!["a".to_string()]);
        assert!(check(&checklist, &responses).is_empty());
    }
}

//! # Visibility Evaluator
//!
//! Computes the set of currently-visible field names from a schema and a
//! response snapshot. Re-run in full after every response mutation: a
//! condition may reference any field in the schema, including ones declared
//! later or inside unrelated groups, so incremental diffing would invite
//! stale-visibility bugs for no meaningful saving on trees this size.
//!
//! ## Evaluation Contract
//!
//! - A field with no condition is always visible.
//! - `equals`: visible iff the referenced answer's string form equals the
//!   condition value exactly (case-sensitive).
//! - `contains`: visible iff the referenced answer is present and its
//!   string form contains the condition value as a substring.
//! - A reference that resolves to no field in the schema fails closed:
//!   the conditioned field stays invisible, never an error.
//! - Groups are always themselves visible; a group's condition never gates
//!   its children. Only a leaf's own condition gates that leaf.
//!
//! Cycles of mutual dependency cannot loop: each field is evaluated
//! independently against the current snapshot. A cycle's only possible
//! effect is a field that stays chronically invisible; the authoring lint
//! flags the degenerate self-reference case.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use paraph_core::FieldName;

use crate::arena::ChecklistArena;
use crate::response::Responses;

/// Comparison operator of a visibility condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionOperator {
    /// Exact, case-sensitive string equality.
    Equals,
    /// Substring containment over the answer's string form.
    Contains,
}

/// A rule making a field's relevance depend on another field's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityCondition {
    /// The referenced field's response name; may point anywhere in the
    /// schema, not necessarily a sibling.
    pub field_name: FieldName,
    /// How the referenced answer is compared.
    pub operator: ConditionOperator,
    /// The value compared against.
    pub value: String,
}

impl VisibilityCondition {
    /// Construct an `equals` condition.
    pub fn equals(field_name: FieldName, value: impl Into<String>) -> Self {
        Self {
            field_name,
            operator: ConditionOperator::Equals,
            value: value.into(),
        }
    }

    /// Construct a `contains` condition.
    pub fn contains(field_name: FieldName, value: impl Into<String>) -> Self {
        Self {
            field_name,
            operator: ConditionOperator::Contains,
            value: value.into(),
        }
    }

    /// Evaluate this condition against a response snapshot.
    ///
    /// An absent answer satisfies neither operator.
    pub fn is_satisfied(&self, responses: &Responses) -> bool {
        let Some(answer) = responses.get(&self.field_name) else {
            return false;
        };
        let form = answer.string_form();
        match self.operator {
            ConditionOperator::Equals => form == self.value,
            ConditionOperator::Contains => form.contains(&self.value),
        }
    }
}

/// The set of field names currently visible given a response snapshot.
///
/// Pure function of `(schema, responses)`: depth-first traversal in render
/// order, groups descended into unconditionally, each leaf admitted iff its
/// own condition is absent or satisfied. A condition whose reference does
/// not resolve in the schema keeps its field out of the set regardless of
/// what the response map happens to contain under that key.
pub fn visible_fields(arena: &ChecklistArena<'_>, responses: &Responses) -> BTreeSet<FieldName> {
    let mut visible = BTreeSet::new();
    for index in arena.leaves_in_render_order() {
        let item = arena.item(index);
        let Some(name) = &item.name else {
            // A leaf without a name cannot collect a response; structural
            // validation rejects it at authoring time.
            continue;
        };
        let shown = match &item.visibility_condition {
            None => true,
            Some(condition) => {
                arena.resolves(&condition.field_name) && condition.is_satisfied(responses)
            }
        };
        if shown {
            visible.insert(name.clone());
        }
    }
    visible
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Checklist, ChecklistItem, FieldControl};

    fn name(s: &str) -> FieldName {
        FieldName::parse(s).unwrap()
    }

    fn text_field(n: &str) -> ChecklistItem {
        ChecklistItem::field(name(n), format!("Prompt {n}"), FieldControl::Text)
    }

    /// `trigger` unconditional; `dependent` visible iff trigger == "show";
    /// `fuzzy` visible iff trigger contains "ye"; `orphan` references a
    /// name that resolves nowhere.
    fn sample() -> Checklist {
        Checklist::new(
            "Visibility",
            "",
            vec![
                text_field("trigger"),
                text_field("dependent")
                    .with_condition(VisibilityCondition::equals(name("trigger"), "show")),
                text_field("fuzzy")
                    .with_condition(VisibilityCondition::contains(name("trigger"), "ye")),
                text_field("orphan")
                    .with_condition(VisibilityCondition::equals(name("missing"), "x")),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_initial_state_shows_only_unconditional_fields() {
        let checklist = sample();
        let arena = ChecklistArena::build(&checklist);
        let visible = visible_fields(&arena, &Responses::new());
        assert!(visible.contains(&name("trigger")));
        assert!(!visible.contains(&name("dependent")));
        assert!(!visible.contains(&name("fuzzy")));
        assert!(!visible.contains(&name("orphan")));
    }

    #[test]
    fn test_equals_is_exact_and_case_sensitive() {
        let checklist = sample();
        let arena = ChecklistArena::build(&checklist);

        let mut responses = Responses::new();
        responses.set(name("trigger"), "Show");
        assert!(!visible_fields(&arena, &responses).contains(&name("dependent")));

        responses.set(name("trigger"), "show");
        assert!(visible_fields(&arena, &responses).contains(&name("dependent")));
    }

    #[test]
    fn test_contains_matches_substring() {
        let checklist = sample();
        let arena = ChecklistArena::build(&checklist);

        let mut responses = Responses::new();
        responses.set(name("trigger"), "yes please");
        assert!(visible_fields(&arena, &responses).contains(&name("fuzzy")));

        responses.set(name("trigger"), "no");
        assert!(!visible_fields(&arena, &responses).contains(&name("fuzzy")));
    }

    #[test]
    fn test_contains_never_satisfied_by_absent_answer() {
        let checklist = sample();
        let arena = ChecklistArena::build(&checklist);
        assert!(!visible_fields(&arena, &Responses::new()).contains(&name("fuzzy")));
    }

    #[test]
    fn test_unresolved_reference_fails_closed_even_with_stray_response() {
        let checklist = sample();
        let arena = ChecklistArena::build(&checklist);
        // A stale response under the dangling key must not resurrect the field.
        let mut responses = Responses::new();
        responses.set(name("missing"), "x");
        assert!(!visible_fields(&arena, &responses).contains(&name("orphan")));
    }

    #[test]
    fn test_condition_reaches_across_groups() {
        let deep = ChecklistItem::group(
            "Inner",
            vec![text_field("buried")
                .with_condition(VisibilityCondition::equals(name("far"), "on"))],
        );
        let left = ChecklistItem::group("Left", vec![deep]);
        let right = ChecklistItem::group("Right", vec![text_field("far")]);
        let checklist = Checklist::new("Cross", "", vec![left, right]).unwrap();
        let arena = ChecklistArena::build(&checklist);

        let mut responses = Responses::new();
        responses.set(name("far"), "on");
        assert!(visible_fields(&arena, &responses).contains(&name("buried")));
    }

    #[test]
    fn test_group_condition_does_not_gate_children() {
        // The group carries a never-true condition; its child has none.
        let group = ChecklistItem::group("Gated", vec![text_field("child")])
            .with_condition(VisibilityCondition::equals(name("child"), "never"));
        let checklist = Checklist::new("Groups", "", vec![group]).unwrap();
        let arena = ChecklistArena::build(&checklist);
        assert!(visible_fields(&arena, &Responses::new()).contains(&name("child")));
    }

    #[test]
    fn test_mutual_cycle_terminates_and_fails_closed() {
        let checklist = Checklist::new(
            "Cycle",
            "",
            vec![
                text_field("a").with_condition(VisibilityCondition::equals(name("b"), "x")),
                text_field("b").with_condition(VisibilityCondition::equals(name("a"), "y")),
            ],
        )
        .unwrap();
        let arena = ChecklistArena::build(&checklist);
        let visible = visible_fields(&arena, &Responses::new());
        assert!(visible.is_empty());

        // Answering one side still evaluates purely from the snapshot.
        let mut responses = Responses::new();
        responses.set(name("b"), "x");
        let visible = visible_fields(&arena, &responses);
        assert!(visible.contains(&name("a")));
        assert!(!visible.contains(&name("b")));
    }

    #[test]
    fn test_list_answer_compares_through_comma_join() {
        let checklist = Checklist::new(
            "Lists",
            "",
            vec![
                text_field("tags"),
                text_field("extra")
                    .with_condition(VisibilityCondition::contains(name("tags"), "legal")),
            ],
        )
        .unwrap();
        let arena = ChecklistArena::build(&checklist);

        let mut responses = Responses::new();
        responses.set(
            name("tags"),
            vec!["finance".to_string(), "legal".to_string()],
        );
        assert!(visible_fields(&arena, &responses).contains(&name("extra")));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::item::{Checklist, ChecklistItem, FieldControl};
    use proptest::prelude::*;

    fn name(s: &str) -> FieldName {
        FieldName::parse(s).unwrap()
    }

    fn fixture() -> Checklist {
        Checklist::new(
            "Prop",
            "",
            vec![
                ChecklistItem::field(name("free"), "Free", FieldControl::Text),
                ChecklistItem::field(name("gated"), "Gated", FieldControl::Text)
                    .with_condition(VisibilityCondition::equals(name("free"), "go")),
                ChecklistItem::group(
                    "Grp",
                    vec![ChecklistItem::field(name("inner"), "Inner", FieldControl::Text)],
                ),
            ],
        )
        .expect("fixture schema is valid")
    }

    /// Strategy for arbitrary response maps over short lowercase keys.
    fn arb_responses() -> impl Strategy<Value = Responses> {
        prop::collection::btree_map("[a-z]{1,6}", "[a-z ]{0,8}", 0..8).prop_map(|m| {
            m.into_iter()
                .map(|(k, v)| (FieldName::parse(&k).expect("valid key"), v.into()))
                .collect()
        })
    }

    proptest! {
        /// Evaluation is a pure function: same inputs, same set, no hidden
        /// state between calls.
        #[test]
        fn visible_fields_is_deterministic(responses in arb_responses()) {
            let checklist = fixture();
            let arena = ChecklistArena::build(&checklist);
            let first = visible_fields(&arena, &responses);
            let second = visible_fields(&arena, &responses);
            prop_assert_eq!(first, second);
        }

        /// Unconditional fields are visible under every response map.
        #[test]
        fn unconditional_fields_always_visible(responses in arb_responses()) {
            let checklist = fixture();
            let arena = ChecklistArena::build(&checklist);
            let visible = visible_fields(&arena, &responses);
            prop_assert!(visible.contains(&name("free")));
            prop_assert!(visible.contains(&name("inner")));
        }

        /// The gated field is visible exactly when its trigger answer is
        /// the exact condition value.
        #[test]
        fn gated_field_tracks_trigger(responses in arb_responses()) {
            let checklist = fixture();
            let arena = ChecklistArena::build(&checklist);
            let visible = visible_fields(&arena, &responses);
            let triggered = responses
                .get(&name("free"))
                .is_some_and(|v| v.string_form() == "go");
            prop_assert_eq!(visible.contains(&name("gated")), triggered);
        }
    }
}

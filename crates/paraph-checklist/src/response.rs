//! # Response Map
//!
//! The transient answers of one signing session, keyed by field name.
//! Scalar fields (text, email, textarea, date_time, radio, select) store a
//! single string; checkbox and multi-select fields store a list of the
//! selected option values.
//!
//! Responses live only for the duration of a signing session; once the
//! assembled submission crosses the boundary, they are discarded.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use paraph_core::FieldName;

/// One answer: a scalar string or a list of selected option values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    /// Single-valued answer.
    Scalar(String),
    /// Multi-valued answer (checkbox, multi-select).
    Many(Vec<String>),
}

impl ResponseValue {
    /// Whether the answer counts as empty: blank string or empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Scalar(s) => s.is_empty(),
            Self::Many(values) => values.is_empty(),
        }
    }

    /// The answer's string form, as condition evaluation sees it.
    ///
    /// Lists join their values with a comma and no spaces, matching the
    /// implicit stringification the original host environment applied when
    /// comparing a list response against a condition value.
    pub fn string_form(&self) -> Cow<'_, str> {
        match self {
            Self::Scalar(s) => Cow::Borrowed(s),
            Self::Many(values) => Cow::Owned(values.join(",")),
        }
    }
}

impl From<String> for ResponseValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for ResponseValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<Vec<String>> for ResponseValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

/// The response map of one signing session.
///
/// Owned exclusively by that session; the engine never mutates it behind
/// the host's back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Responses(BTreeMap<FieldName, ResponseValue>);

impl Responses {
    /// An empty response map (the initial state of a session).
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or replace an answer.
    pub fn set(&mut self, name: FieldName, value: impl Into<ResponseValue>) {
        self.0.insert(name, value.into());
    }

    /// Remove an answer entirely.
    pub fn unset(&mut self, name: &FieldName) {
        self.0.remove(name);
    }

    /// Look up the answer for a field, if any.
    pub fn get(&self, name: &FieldName) -> Option<&ResponseValue> {
        self.0.get(name)
    }

    /// Whether a field has a non-empty answer.
    ///
    /// Absent, empty-string, and empty-list answers all count as
    /// unanswered; this is the emptiness rule the validator applies.
    pub fn is_answered(&self, name: &FieldName) -> bool {
        self.0.get(name).is_some_and(|value| !value.is_empty())
    }

    /// Number of recorded answers (including empty ones).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no answers have been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the recorded answers in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &ResponseValue)> {
        self.0.iter()
    }
}

impl FromIterator<(FieldName, ResponseValue)> for Responses {
    fn from_iter<T: IntoIterator<Item = (FieldName, ResponseValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

//! Form state module
//!
//! Controlled field state for the sign-in and profile-creation screens.
//! Each screen owns one container; every displayed value is read back from
//! it and every edit goes through it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub mod intent;
pub mod profile;
pub mod sign_in;

pub use intent::{Intents, NavigateHandler, Screen, SubmitHandler};
pub use profile::{ProfileField, ProfileFlag, ProfileForm, ProfileTextField};
pub use sign_in::{SignInField, SignInForm};

/// Current value of a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Free-form text
    Text(String),
    /// Checkbox state
    Flag(bool),
}

impl FieldValue {
    /// Text content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Flag(_) => None,
        }
    }

    /// Checked state, if this is a boolean value
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(checked) => Some(*checked),
            FieldValue::Text(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(checked: bool) -> Self {
        FieldValue::Flag(checked)
    }
}

/// Keyboard hint for text entry. Advisory only; nothing is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputHint {
    #[default]
    Default,
    PhonePad,
}

/// How a field is presented and edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Text input; `masked` hides the characters on display only
    Text { masked: bool, hint: InputHint },
    /// Boolean toggle
    Checkbox,
}

impl FieldKind {
    /// Plain unmasked text input
    pub const fn text() -> Self {
        FieldKind::Text {
            masked: false,
            hint: InputHint::Default,
        }
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self, FieldKind::Checkbox)
    }
}

/// A single change requested by a bound control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Replace the stored text with exactly this value
    Replace(String),
    /// Negate the stored boolean
    Toggle,
}

/// Full set of field values at a point in time, keyed by field name
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSnapshot(BTreeMap<String, FieldValue>);

impl FormSnapshot {
    /// Value recorded for a field name
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Number of fields captured
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Render as pretty JSON
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<K, V> FromIterator<(K, V)> for FormSnapshot
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// Binding contract between a screen and its field container.
///
/// The field set is closed: `Field` is an enum and `fields()` lists every
/// variant in display order. All operations are total.
pub trait FormState: Default {
    type Field: Copy + Eq + fmt::Debug + 'static;

    /// Every field, in display order
    fn fields() -> &'static [Self::Field];

    /// Stable camelCase name used in snapshots
    fn name(field: Self::Field) -> &'static str;

    fn kind(field: Self::Field) -> FieldKind;

    /// Current stored value
    fn value(&self, field: Self::Field) -> FieldValue;

    /// Apply an edit. An edit that does not match the field's kind leaves
    /// the form untouched.
    fn apply(&mut self, field: Self::Field, edit: Edit);

    fn snapshot(&self) -> FormSnapshot {
        Self::fields()
            .iter()
            .map(|&field| (Self::name(field), self.value(field)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_json_is_untagged() {
        assert_eq!(serde_json::to_string(&FieldValue::from("abc")).unwrap(), "\"abc\"");
        assert_eq!(serde_json::to_string(&FieldValue::Flag(true)).unwrap(), "true");

        let value: FieldValue = serde_json::from_str("false").unwrap();
        assert_eq!(value, FieldValue::Flag(false));
    }

    #[test]
    fn test_field_value_accessors() {
        let text = FieldValue::from("x");
        assert_eq!(text.as_text(), Some("x"));
        assert_eq!(text.as_flag(), None);

        let flag = FieldValue::from(true);
        assert_eq!(flag.as_flag(), Some(true));
        assert_eq!(flag.as_text(), None);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot: FormSnapshot = [
            ("username", FieldValue::from("a")),
            ("termsAccepted", FieldValue::from(false)),
        ]
        .into_iter()
        .collect();

        let json: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(json["username"], "a");
        assert_eq!(json["termsAccepted"], false);
        assert_eq!(snapshot.len(), 2);
    }
}

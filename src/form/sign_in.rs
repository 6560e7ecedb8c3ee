//! Sign-in form state

use super::{Edit, FieldKind, FieldValue, FormState, InputHint};

/// Placeholder shown in the username field on mount
pub const DEFAULT_USERNAME: &str = "محمد إسلام 06";

/// Fields of the sign-in screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignInField {
    Username,
    Password,
}

impl SignInField {
    pub const ALL: [SignInField; 2] = [SignInField::Username, SignInField::Password];
}

/// Sign-in screen state: username and password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInForm {
    username: String,
    password: String,
}

impl SignInForm {
    /// Create a form holding the initial values
    pub fn new() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            password: String::new(),
        }
    }

    /// Current stored value of a field
    pub fn get(&self, field: SignInField) -> &str {
        match field {
            SignInField::Username => &self.username,
            SignInField::Password => &self.password,
        }
    }

    /// Replace the stored value unconditionally
    pub fn set(&mut self, field: SignInField, value: impl Into<String>) {
        let value = value.into();
        match field {
            SignInField::Username => self.username = value,
            SignInField::Password => self.password = value,
        }
    }
}

impl Default for SignInForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState for SignInForm {
    type Field = SignInField;

    fn fields() -> &'static [SignInField] {
        &SignInField::ALL
    }

    fn name(field: SignInField) -> &'static str {
        match field {
            SignInField::Username => "username",
            SignInField::Password => "password",
        }
    }

    fn kind(field: SignInField) -> FieldKind {
        match field {
            SignInField::Username => FieldKind::text(),
            SignInField::Password => FieldKind::Text {
                masked: true,
                hint: InputHint::Default,
            },
        }
    }

    fn value(&self, field: SignInField) -> FieldValue {
        FieldValue::Text(self.get(field).to_string())
    }

    fn apply(&mut self, field: SignInField, edit: Edit) {
        if let Edit::Replace(value) = edit {
            self.set(field, value);
        }
    }
}

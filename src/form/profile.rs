//! Profile-creation form state
//!
//! Five free-form text fields and two independent acknowledgements.
//! `birthDate` is opaque text in `YYYY/MM/DD` shape and is never parsed.

use super::{Edit, FieldKind, FieldValue, FormState, InputHint};

pub const DEFAULT_LAST_NAME: &str = "أولاً دائرة، عرض نسخة...";
pub const DEFAULT_FIRST_NAME: &str = "محمد عبد الله...";
pub const DEFAULT_BIRTH_DATE: &str = "1995/05/13";
pub const DEFAULT_PHONE_NUMBER: &str = "0 111 222 333";
pub const DEFAULT_SECONDARY_CODE: &str = "++++++++++";

/// Text fields of the profile screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileTextField {
    LastName,
    FirstName,
    BirthDate,
    PhoneNumber,
    SecondaryCode,
}

/// Boolean fields of the profile screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileFlag {
    TermsAccepted,
    /// Checkbox state only; no account is created
    AccountCreated,
}

/// Any profile field, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Text(ProfileTextField),
    Flag(ProfileFlag),
}

impl ProfileField {
    pub const ALL: [ProfileField; 7] = [
        ProfileField::Text(ProfileTextField::LastName),
        ProfileField::Text(ProfileTextField::FirstName),
        ProfileField::Text(ProfileTextField::BirthDate),
        ProfileField::Text(ProfileTextField::PhoneNumber),
        ProfileField::Text(ProfileTextField::SecondaryCode),
        ProfileField::Flag(ProfileFlag::TermsAccepted),
        ProfileField::Flag(ProfileFlag::AccountCreated),
    ];
}

impl From<ProfileTextField> for ProfileField {
    fn from(field: ProfileTextField) -> Self {
        ProfileField::Text(field)
    }
}

impl From<ProfileFlag> for ProfileField {
    fn from(flag: ProfileFlag) -> Self {
        ProfileField::Flag(flag)
    }
}

/// Profile-creation screen state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    last_name: String,
    first_name: String,
    birth_date: String,
    phone_number: String,
    secondary_code: String,
    terms_accepted: bool,
    account_created: bool,
}

impl ProfileForm {
    /// Create a form holding the initial values
    pub fn new() -> Self {
        Self {
            last_name: DEFAULT_LAST_NAME.to_string(),
            first_name: DEFAULT_FIRST_NAME.to_string(),
            birth_date: DEFAULT_BIRTH_DATE.to_string(),
            phone_number: DEFAULT_PHONE_NUMBER.to_string(),
            secondary_code: DEFAULT_SECONDARY_CODE.to_string(),
            terms_accepted: false,
            account_created: false,
        }
    }

    pub fn get(&self, field: ProfileTextField) -> &str {
        match field {
            ProfileTextField::LastName => &self.last_name,
            ProfileTextField::FirstName => &self.first_name,
            ProfileTextField::BirthDate => &self.birth_date,
            ProfileTextField::PhoneNumber => &self.phone_number,
            ProfileTextField::SecondaryCode => &self.secondary_code,
        }
    }

    pub fn set(&mut self, field: ProfileTextField, value: impl Into<String>) {
        *self.text_slot(field) = value.into();
    }

    pub fn is_checked(&self, flag: ProfileFlag) -> bool {
        match flag {
            ProfileFlag::TermsAccepted => self.terms_accepted,
            ProfileFlag::AccountCreated => self.account_created,
        }
    }

    pub fn set_checked(&mut self, flag: ProfileFlag, checked: bool) {
        *self.flag_slot(flag) = checked;
    }

    /// Negate the stored boolean
    pub fn toggle(&mut self, flag: ProfileFlag) {
        let slot = self.flag_slot(flag);
        *slot = !*slot;
    }

    fn text_slot(&mut self, field: ProfileTextField) -> &mut String {
        match field {
            ProfileTextField::LastName => &mut self.last_name,
            ProfileTextField::FirstName => &mut self.first_name,
            ProfileTextField::BirthDate => &mut self.birth_date,
            ProfileTextField::PhoneNumber => &mut self.phone_number,
            ProfileTextField::SecondaryCode => &mut self.secondary_code,
        }
    }

    fn flag_slot(&mut self, flag: ProfileFlag) -> &mut bool {
        match flag {
            ProfileFlag::TermsAccepted => &mut self.terms_accepted,
            ProfileFlag::AccountCreated => &mut self.account_created,
        }
    }
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState for ProfileForm {
    type Field = ProfileField;

    fn fields() -> &'static [ProfileField] {
        &ProfileField::ALL
    }

    fn name(field: ProfileField) -> &'static str {
        match field {
            ProfileField::Text(ProfileTextField::LastName) => "lastName",
            ProfileField::Text(ProfileTextField::FirstName) => "firstName",
            ProfileField::Text(ProfileTextField::BirthDate) => "birthDate",
            ProfileField::Text(ProfileTextField::PhoneNumber) => "phoneNumber",
            ProfileField::Text(ProfileTextField::SecondaryCode) => "secondaryCode",
            ProfileField::Flag(ProfileFlag::TermsAccepted) => "termsAccepted",
            ProfileField::Flag(ProfileFlag::AccountCreated) => "accountCreated",
        }
    }

    fn kind(field: ProfileField) -> FieldKind {
        match field {
            ProfileField::Text(ProfileTextField::PhoneNumber) => FieldKind::Text {
                masked: false,
                hint: InputHint::PhonePad,
            },
            ProfileField::Text(_) => FieldKind::text(),
            ProfileField::Flag(_) => FieldKind::Checkbox,
        }
    }

    fn value(&self, field: ProfileField) -> FieldValue {
        match field {
            ProfileField::Text(text) => FieldValue::Text(self.get(text).to_string()),
            ProfileField::Flag(flag) => FieldValue::Flag(self.is_checked(flag)),
        }
    }

    fn apply(&mut self, field: ProfileField, edit: Edit) {
        match (field, edit) {
            (ProfileField::Text(text), Edit::Replace(value)) => self.set(text, value),
            (ProfileField::Flag(flag), Edit::Toggle) => self.toggle(flag),
            _ => {}
        }
    }
}

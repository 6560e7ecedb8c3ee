//! Profile-creation screen

use super::form::{FormScreen, ScreenCopy};
use crate::form::{Intents, ProfileField, ProfileFlag, ProfileForm, ProfileTextField, Screen};

pub type ProfileScreen = FormScreen<ProfileForm>;

fn label(field: ProfileField) -> &'static str {
    match field {
        ProfileField::Text(ProfileTextField::LastName) => "اللقب",
        ProfileField::Text(ProfileTextField::FirstName) => "الإسم",
        ProfileField::Text(ProfileTextField::BirthDate) => "تاريخ الميلاد",
        ProfileField::Text(ProfileTextField::PhoneNumber) => "رقم الهاتف",
        ProfileField::Text(ProfileTextField::SecondaryCode) => "كلية المرور",
        ProfileField::Flag(ProfileFlag::TermsAccepted) => "أوافق على الشروط و الأحكام.",
        ProfileField::Flag(ProfileFlag::AccountCreated) => "إنشاء حساب",
    }
}

pub const COPY: ScreenCopy<ProfileField> = ScreenCopy {
    title: "أنشئ ملفك الشخصي",
    label,
    submit: "تسجيل",
    link: "لدي حساب بالفعل تسجيل الدخول",
    link_target: Screen::SignIn,
    shows_logo: false,
};

impl FormScreen<ProfileForm> {
    /// Mount the profile-creation screen with fresh state
    pub fn profile(intents: Intents) -> Self {
        Self::new(COPY, intents)
    }
}

//! Field state properties for both screens

use tasjil::form::{
    Edit, FieldValue, FormSnapshot, FormState, ProfileField, ProfileFlag, ProfileForm,
    ProfileTextField, SignInField, SignInForm,
};

const SAMPLES: [&str; 6] = ["", " ", "abc123", "  trailing  ", "محمد", "line\nbreak"];

#[test]
fn test_sign_in_initial_snapshot() {
    let expected: FormSnapshot = [("username", "محمد إسلام 06"), ("password", "")]
        .into_iter()
        .collect();
    assert_eq!(SignInForm::default().snapshot(), expected);
}

#[test]
fn test_profile_initial_snapshot() {
    let expected: FormSnapshot = [
        ("lastName", FieldValue::from("أولاً دائرة، عرض نسخة...")),
        ("firstName", FieldValue::from("محمد عبد الله...")),
        ("birthDate", FieldValue::from("1995/05/13")),
        ("phoneNumber", FieldValue::from("0 111 222 333")),
        ("secondaryCode", FieldValue::from("++++++++++")),
        ("termsAccepted", FieldValue::from(false)),
        ("accountCreated", FieldValue::from(false)),
    ]
    .into_iter()
    .collect();
    assert_eq!(ProfileForm::default().snapshot(), expected);
}

#[test]
fn test_sign_in_read_your_write() {
    for &field in SignInForm::fields() {
        for sample in SAMPLES {
            let mut form = SignInForm::new();
            form.set(field, sample);
            assert_eq!(form.get(field), sample);
            assert_eq!(form.value(field), FieldValue::from(sample));
        }
    }
}

#[test]
fn test_profile_text_read_your_write() {
    for &field in ProfileForm::fields() {
        let ProfileField::Text(text) = field else {
            continue;
        };
        for sample in SAMPLES {
            let mut form = ProfileForm::new();
            form.apply(field, Edit::Replace(sample.to_string()));
            assert_eq!(form.get(text), sample);
        }
    }
}

#[test]
fn test_profile_toggle_negates_and_double_toggle_restores() {
    for flag in [ProfileFlag::TermsAccepted, ProfileFlag::AccountCreated] {
        for start in [false, true] {
            let mut form = ProfileForm::new();
            form.set_checked(flag, start);

            form.toggle(flag);
            assert_eq!(form.is_checked(flag), !start);

            form.apply(flag.into(), Edit::Toggle);
            assert_eq!(form.is_checked(flag), start);
        }
    }
}

#[test]
fn test_edits_touch_only_their_field() {
    let mut form = ProfileForm::new();
    form.set(ProfileTextField::FirstName, "x");
    let snapshot = form.snapshot();
    let baseline = ProfileForm::new().snapshot();

    for (name, value) in snapshot.iter() {
        if name == "firstName" {
            assert_eq!(value, &FieldValue::from("x"));
        } else {
            assert_eq!(Some(value), baseline.get(name));
        }
    }
}

#[test]
fn test_password_read_back_is_unmasked() {
    let mut form = SignInForm::new();
    form.set(SignInField::Password, "abc123");
    assert_eq!(form.get(SignInField::Password), "abc123");
    assert_eq!(
        form.snapshot().get("password"),
        Some(&FieldValue::from("abc123"))
    );
}

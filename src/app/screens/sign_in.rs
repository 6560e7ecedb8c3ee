//! Sign-in screen
//!
//! Logo, username, masked password, submit button and a footer link to
//! profile creation.

use super::form::{FormScreen, ScreenCopy};
use crate::form::{Intents, Screen, SignInField, SignInForm};

pub type SignInScreen = FormScreen<SignInForm>;

fn label(field: SignInField) -> &'static str {
    match field {
        SignInField::Username => "إسم المستخدم",
        SignInField::Password => "كلمة المرور",
    }
}

/// Static text of the sign-in screen
pub const COPY: ScreenCopy<SignInField> = ScreenCopy {
    title: "مرحبا بك من جديد تسجيل الدخول",
    label,
    submit: "تسجيل الدخول",
    link: "ليس لدى حساب إنشاء حساب",
    link_target: Screen::ProfileCreation,
    shows_logo: true,
};

impl FormScreen<SignInForm> {
    /// Mount the sign-in screen with fresh state
    pub fn sign_in(intents: Intents) -> Self {
        Self::new(COPY, intents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::Row;
    use crate::app::state::NavigationAction;
    use crate::form::FormState;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn type_text(screen: &mut SignInScreen, text: &str) {
        for c in text.chars() {
            screen.handle_action(NavigationAction::Input(c));
        }
    }

    #[test]
    fn test_rows_follow_fields() {
        let screen = SignInScreen::sign_in(Intents::new());
        assert_eq!(
            screen.rows(),
            &[
                Row::Field(SignInField::Username),
                Row::Field(SignInField::Password),
                Row::Submit,
                Row::Link,
            ]
        );
        assert_eq!(screen.focused_row(), Row::Field(SignInField::Username));
    }

    #[test]
    fn test_typing_appends_to_focused_field() {
        let mut screen = SignInScreen::sign_in(Intents::new());
        screen.handle_action(NavigationAction::Clear);
        type_text(&mut screen, "user 1");
        assert_eq!(screen.form().get(SignInField::Username), "user 1");

        screen.handle_action(NavigationAction::Erase);
        assert_eq!(screen.form().get(SignInField::Username), "user ");
    }

    #[test]
    fn test_erase_on_empty_field_is_noop() {
        let mut screen = SignInScreen::sign_in(Intents::new());
        screen.focus(Row::Field(SignInField::Password));
        screen.handle_action(NavigationAction::Erase);
        assert_eq!(screen.form().get(SignInField::Password), "");
    }

    #[test]
    fn test_enter_on_text_field_moves_focus() {
        let mut screen = SignInScreen::sign_in(Intents::new());
        screen.handle_action(NavigationAction::Activate);
        assert_eq!(screen.focused_row(), Row::Field(SignInField::Password));
        assert_eq!(screen.snapshot(), SignInForm::new().snapshot());
    }

    #[test]
    fn test_focus_wraps() {
        let mut screen = SignInScreen::sign_in(Intents::new());
        screen.focus_previous();
        assert_eq!(screen.focused_row(), Row::Link);
        screen.focus_next();
        assert_eq!(screen.focused_row(), Row::Field(SignInField::Username));
    }

    #[test]
    fn test_unattached_submit_is_inert() {
        let mut screen = SignInScreen::sign_in(Intents::new());
        let before = screen.snapshot();
        screen.focus(Row::Submit);
        screen.handle_action(NavigationAction::Activate);
        screen.handle_action(NavigationAction::Input(' '));
        assert_eq!(screen.snapshot(), before);
        assert_eq!(screen.focused_row(), Row::Submit);
    }

    #[test]
    fn test_submit_carries_press_time_snapshot() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut screen = SignInScreen::sign_in(
            Intents::new().with_submit(move |snapshot| sink.borrow_mut().push(snapshot.clone())),
        );

        screen.focus(Row::Field(SignInField::Password));
        type_text(&mut screen, "abc123");
        screen.focus(Row::Submit);
        screen.press();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0].get("password").and_then(|v| v.as_text()),
            Some("abc123")
        );
    }

    #[test]
    fn test_link_targets_profile_creation() {
        let targets = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&targets);
        let mut screen = SignInScreen::sign_in(
            Intents::new().with_navigate(move |target| sink.borrow_mut().push(target)),
        );
        screen.focus(Row::Link);
        screen.handle_action(NavigationAction::Activate);
        assert_eq!(*targets.borrow(), vec![Screen::ProfileCreation]);
    }

    #[test]
    fn test_password_is_masked_on_display_only() {
        let mut screen = SignInScreen::sign_in(Intents::new());
        screen.focus(Row::Field(SignInField::Password));
        type_text(&mut screen, "abc123");

        assert_eq!(screen.form().get(SignInField::Password), "abc123");
        assert_eq!(screen.display_text(SignInField::Password), "••••••");

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| screen.render(f)).unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("••••••"));
        assert!(!text.contains("abc123"));
    }

    #[test]
    fn test_custom_mask_char() {
        let mut screen = SignInScreen::sign_in(Intents::new()).with_mask_char('*');
        screen.focus(Row::Field(SignInField::Password));
        type_text(&mut screen, "pw");
        assert_eq!(screen.display_text(SignInField::Password), "**");
    }

    #[test]
    fn test_logo_slot_shows_asset_reference() {
        let mut screen = SignInScreen::sign_in(Intents::new())
            .with_logo(Some("assets/logo.png".into()));
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| screen.render(f)).unwrap();
        assert!(buffer_text(terminal.backend().buffer()).contains("assets/logo.png"));
    }

    #[test]
    fn test_every_label_is_drawn() {
        let mut screen = SignInScreen::sign_in(Intents::new());
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| screen.render(f)).unwrap();
        let text = buffer_text(terminal.backend().buffer());
        for field in SignInField::ALL {
            assert!(text.contains((COPY.label)(field)));
        }
        assert!(text.contains(COPY.submit));
        assert!(text.contains(COPY.link));
    }
}

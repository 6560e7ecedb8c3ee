//! Application state management
//!
//! Tracks which screen is mounted and translates keyboard events into
//! navigation actions for the form screens.

use crate::form::Screen;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Focus the next row (Tab, arrow down)
    Next,
    /// Focus the previous row (Shift+Tab, arrow up)
    Previous,
    /// Press the focused control (Enter)
    Activate,
    /// Type a character; space also presses checkboxes and buttons
    Input(char),
    /// Delete the last character (Backspace)
    Erase,
    /// Clear the focused text field (Ctrl+U)
    Clear,
    /// Quit application (Esc, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Application state manager
#[derive(Debug)]
pub struct StateManager {
    current_screen: Screen,
    mounts: usize,
    should_quit: bool,
}

impl StateManager {
    /// Create a state manager with `initial` mounted
    pub fn new(initial: Screen) -> Self {
        Self {
            current_screen: initial,
            mounts: 1,
            should_quit: false,
        }
    }

    /// Get the mounted screen
    pub fn current_screen(&self) -> Screen {
        self.current_screen
    }

    /// Number of mounts so far, including the initial one
    pub fn mounts(&self) -> usize {
        self.mounts
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Record that `screen` has been mounted. Remounting the same screen
    /// still counts, since it starts from fresh state.
    pub fn mount(&mut self, screen: Screen) {
        self.current_screen = screen;
        self.mounts += 1;
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        if key.kind == KeyEventKind::Release {
            return NavigationAction::None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            // Quit keys
            KeyCode::Esc => NavigationAction::Quit,
            KeyCode::Char('c') if ctrl => NavigationAction::Quit,

            KeyCode::Char('u') if ctrl => NavigationAction::Clear,
            KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => {
                NavigationAction::None
            }
            KeyCode::Char(c) => NavigationAction::Input(c),
            KeyCode::Backspace => NavigationAction::Erase,
            KeyCode::Enter => NavigationAction::Activate,

            KeyCode::Down => NavigationAction::Next,
            KeyCode::Up => NavigationAction::Previous,
            KeyCode::BackTab => NavigationAction::Previous,
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    NavigationAction::Previous
                } else {
                    NavigationAction::Next
                }
            }

            _ => NavigationAction::None,
        }
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new(Screen::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_state_manager_creation() {
        let state_manager = StateManager::new(Screen::ProfileCreation);
        assert_eq!(state_manager.current_screen(), Screen::ProfileCreation);
        assert_eq!(state_manager.mounts(), 1);
        assert!(!state_manager.should_quit());
    }

    #[test]
    fn test_mount() {
        let mut state_manager = StateManager::default();
        assert_eq!(state_manager.current_screen(), Screen::SignIn);

        state_manager.mount(Screen::ProfileCreation);
        assert_eq!(state_manager.current_screen(), Screen::ProfileCreation);

        state_manager.mount(Screen::ProfileCreation);
        assert_eq!(state_manager.mounts(), 3);
    }

    #[test]
    fn test_quit_flag() {
        let mut state_manager = StateManager::default();
        state_manager.quit();
        assert!(state_manager.should_quit());
    }

    #[test]
    fn test_key_to_navigation() {
        // Quit keys
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            NavigationAction::Quit
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            NavigationAction::Quit
        );

        // Letters are text, never commands
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            NavigationAction::Input('q')
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('م'), KeyModifiers::NONE)),
            NavigationAction::Input('م')
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            NavigationAction::Input('A')
        );

        // Editing keys
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
            NavigationAction::Erase
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            NavigationAction::Clear
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            NavigationAction::Activate
        );

        // Focus keys
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            NavigationAction::Next
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT)),
            NavigationAction::Previous
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            NavigationAction::Previous
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            NavigationAction::Previous
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(StateManager::key_to_navigation(key), NavigationAction::None);
    }
}

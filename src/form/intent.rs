//! Submit and navigation intents
//!
//! Screens report "submit this snapshot" and "go to the other screen" through
//! optional callbacks. With no callback attached a press does nothing.

use super::FormSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two screens of the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    SignIn,
    ProfileCreation,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::SignIn => "sign_in",
            Screen::ProfileCreation => "profile_creation",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "sign_in" | "signin" => Ok(Screen::SignIn),
            "profile_creation" | "profile" => Ok(Screen::ProfileCreation),
            other => Err(format!(
                "unknown screen '{}' (expected sign_in or profile_creation)",
                other
            )),
        }
    }
}

pub type SubmitHandler = Box<dyn FnMut(&FormSnapshot)>;
pub type NavigateHandler = Box<dyn FnMut(Screen)>;

/// Callbacks external collaborators attach to a screen
#[derive(Default)]
pub struct Intents {
    on_submit: Option<SubmitHandler>,
    on_navigate: Option<NavigateHandler>,
}

impl Intents {
    /// No handlers attached; every press is inert
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_submit(mut self, handler: impl FnMut(&FormSnapshot) + 'static) -> Self {
        self.on_submit = Some(Box::new(handler));
        self
    }

    pub fn with_navigate(mut self, handler: impl FnMut(Screen) + 'static) -> Self {
        self.on_navigate = Some(Box::new(handler));
        self
    }

    pub fn has_submit_handler(&self) -> bool {
        self.on_submit.is_some()
    }

    pub fn has_navigate_handler(&self) -> bool {
        self.on_navigate.is_some()
    }

    /// Fire the submit intent with the snapshot taken at press time
    pub fn submit(&mut self, snapshot: &FormSnapshot) {
        if let Some(handler) = self.on_submit.as_mut() {
            handler(snapshot);
        }
    }

    /// Fire the navigation intent
    pub fn navigate(&mut self, target: Screen) {
        if let Some(handler) = self.on_navigate.as_mut() {
            handler(target);
        }
    }
}

impl fmt::Debug for Intents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intents")
            .field("on_submit", &self.has_submit_handler())
            .field("on_navigate", &self.has_navigate_handler())
            .finish()
    }
}

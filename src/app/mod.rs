//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! and application state handling.

pub mod app;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::{ActiveScreen, App, Session};
pub use screens::{FormScreen, ProfileScreen, Row, SignInScreen};
pub use state::{NavigationAction, StateManager};
pub use tui::Tui;

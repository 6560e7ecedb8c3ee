//! TUI screen components
//!
//! The generic form screen and the two concrete screens built from it.

pub mod form;
pub mod profile;
pub mod sign_in;

pub use form::{FormScreen, Row, ScreenCopy};
pub use profile::ProfileScreen;
pub use sign_in::SignInScreen;

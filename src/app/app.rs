//! Main application controller
//!
//! Manages the TUI, the mounted screen and the rendering loop.

use crate::{
    app::{
        screens::{ProfileScreen, SignInScreen},
        state::{NavigationAction, StateManager},
        tui::Tui,
    },
    config::AppConfig,
    form::{FormSnapshot, Intents, Screen},
    Result, TasjilError,
};
use crossterm::event::KeyEvent;
use tracing::{debug, info};

/// The mounted screen, owning its form state
pub enum ActiveScreen {
    SignIn(SignInScreen),
    Profile(ProfileScreen),
}

impl ActiveScreen {
    /// Create `screen` with fresh form state
    pub fn mount(screen: Screen, config: &AppConfig, intents: Intents) -> Self {
        match screen {
            Screen::SignIn => ActiveScreen::SignIn(
                SignInScreen::sign_in(intents)
                    .with_mask_char(config.mask_char)
                    .with_logo(config.logo_path.clone()),
            ),
            Screen::ProfileCreation => ActiveScreen::Profile(
                ProfileScreen::profile(intents).with_mask_char(config.mask_char),
            ),
        }
    }

    pub fn screen(&self) -> Screen {
        match self {
            ActiveScreen::SignIn(_) => Screen::SignIn,
            ActiveScreen::Profile(_) => Screen::ProfileCreation,
        }
    }

    pub fn handle_action(&mut self, action: NavigationAction) {
        match self {
            ActiveScreen::SignIn(screen) => screen.handle_action(action),
            ActiveScreen::Profile(screen) => screen.handle_action(action),
        }
    }

    pub fn render(&mut self, f: &mut ratatui::Frame) {
        match self {
            ActiveScreen::SignIn(screen) => screen.render(f),
            ActiveScreen::Profile(screen) => screen.render(f),
        }
    }

    pub fn snapshot(&self) -> FormSnapshot {
        match self {
            ActiveScreen::SignIn(screen) => screen.snapshot(),
            ActiveScreen::Profile(screen) => screen.snapshot(),
        }
    }
}

/// Route one key press: quit keys stop the loop, everything else goes to
/// the mounted screen
pub fn dispatch_key(state_manager: &mut StateManager, active: &mut ActiveScreen, key: KeyEvent) {
    match StateManager::key_to_navigation(key) {
        NavigationAction::Quit => state_manager.quit(),
        NavigationAction::None => {}
        action => active.handle_action(action),
    }
}

/// Mounted screen plus the state that outlives it; everything the event
/// loop touches except the terminal
pub struct Session {
    state_manager: StateManager,
    config: AppConfig,
    active: ActiveScreen,
}

impl Session {
    /// Mount the configured initial screen with no handlers attached
    pub fn new(config: AppConfig) -> Self {
        let initial = config.initial_screen;
        info!(screen = %initial, "mounting initial screen");
        Self {
            state_manager: StateManager::new(initial),
            active: ActiveScreen::mount(initial, &config, Intents::new()),
            config,
        }
    }

    /// Replace the mounted screen. The old screen's state is discarded.
    pub fn mount(&mut self, screen: Screen, intents: Intents) {
        info!(from = %self.active.screen(), to = %screen, "remounting");
        self.active = ActiveScreen::mount(screen, &self.config, intents);
        self.state_manager.mount(screen);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        dispatch_key(&mut self.state_manager, &mut self.active, key);
    }

    pub fn active(&self) -> &ActiveScreen {
        &self.active
    }

    pub fn state_manager(&self) -> &StateManager {
        &self.state_manager
    }

    pub fn snapshot(&self) -> FormSnapshot {
        self.active.snapshot()
    }
}

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Mounted screen and navigation state
    session: Session,
}

impl App {
    /// Create a new application with the configured initial screen mounted
    pub fn new(config: AppConfig) -> Result<Self> {
        Self::with_session(Session::new(config))
    }

    /// Drive an already prepared session, e.g. one whose screen was
    /// mounted with handlers attached
    pub fn with_session(session: Session) -> Result<Self> {
        let tui = Tui::new(session.config.tick_rate())
            .map_err(|e| TasjilError::TuiError(format!("Failed to open terminal: {}", e)))?;
        Ok(Self { tui, session })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui
            .init()
            .map_err(|e| TasjilError::TuiError(format!("Failed to initialize terminal: {}", e)))
    }

    /// Run the main application loop until quit; returns the final
    /// snapshot of the mounted screen
    pub fn run(&mut self) -> Result<FormSnapshot> {
        while !self.session.state_manager.should_quit() {
            self.draw()?;
            self.handle_events()?;
        }
        info!(
            screen = %self.session.active.screen(),
            mounts = self.session.state_manager.mounts(),
            "quitting"
        );
        Ok(self.session.snapshot())
    }

    /// Restore the terminal
    pub fn restore(&mut self) -> Result<()> {
        Ok(self.tui.restore()?)
    }

    /// Draw the current screen
    fn draw(&mut self) -> Result<()> {
        let active = &mut self.session.active;
        self.tui
            .draw(|f| active.render(f))
            .map_err(|e| TasjilError::TuiError(format!("Failed to draw: {}", e)))
    }

    /// Handle keyboard events and update state
    fn handle_events(&mut self) -> Result<()> {
        if let Some(key) = self.tui.next_key()? {
            debug!(code = ?key.code, "key");
            self.session.handle_key(key);
        }
        Ok(())
    }
}

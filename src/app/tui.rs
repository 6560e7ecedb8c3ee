//! Terminal management system
//!
//! Handles crossterm backend initialization, screen management,
//! and keyboard event polling for the TUI application.

use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    time::{Duration, Instant},
};

/// Terminal wrapper that manages crossterm backend and screen state
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
    last_tick: Instant,
    tick_rate: Duration,
}

impl Tui {
    /// Create a new TUI instance with crossterm backend
    pub fn new(tick_rate: Duration) -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            active: false,
            last_tick: Instant::now(),
            tick_rate,
        })
    }

    /// Enter raw mode and the alternate screen
    pub fn init(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        self.active = true;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore terminal to original state
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Draw the UI using the provided render function
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Wait up to one tick for a key press
    pub fn next_key(&mut self) -> io::Result<Option<KeyEvent>> {
        let timeout = self
            .tick_rate
            .checked_sub(self.last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                return Ok(Some(key));
            }
        }

        if self.last_tick.elapsed() >= self.tick_rate {
            self.last_tick = Instant::now();
        }

        Ok(None)
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Ensure terminal is restored even if restore() wasn't called
        let _ = self.restore();
    }
}

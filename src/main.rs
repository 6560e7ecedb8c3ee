use clap::Parser;
use std::path::PathBuf;
use tasjil::app::App;
use tasjil::config::AppConfig;
use tasjil::form::Screen;
use tasjil::{error, logger, Result};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "tasjil",
    version,
    about = "Sign-in and profile-creation forms in the terminal"
)]
struct Cli {
    /// Screen to mount at startup (sign_in, profile_creation).
    #[arg(long, value_name = "SCREEN")]
    screen: Option<Screen>,

    /// Read configuration from this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Explicit log level (overrides config and LOG_LEVEL).
    #[arg(long = "log-level", value_name = "LEVEL")]
    log_level: Option<String>,

    /// Print the final field values as JSON on exit.
    #[arg(long = "print-state")]
    print_state: bool,
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("{}", error::user_friendly_message(&e));
        std::process::exit(if error::is_terminal_error(&e) { 2 } else { 1 });
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if let Some(screen) = cli.screen {
        config = config.with_initial_screen(screen);
    }
    let explicit_level = cli.log_level.is_some();
    if let Some(level) = cli.log_level {
        config = config.with_log_level(level);
    }

    let level = logger::resolve_level(&config, explicit_level, logger::parse_log_level)?;
    logger::setup_logger(level, &logger::log_file_path()?)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let mut app = App::new(config)?;
    app.init()?;
    let outcome = app.run();
    app.restore()?;
    let snapshot = outcome?;

    if cli.print_state {
        println!("{}", snapshot.to_json()?);
    }
    Ok(())
}

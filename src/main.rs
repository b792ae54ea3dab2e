// Tinkerbox: a themable terminal playground for small animated demos

mod prefs;
mod sandbox;
mod theme;
mod ui;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use prefs::PrefsStore;
use sandbox::Session;
use theme::ThemeManager;
use ui::App;

const LOG_FILE: &str = "tinkerbox.log";

#[derive(Parser)]
#[command(name = "tinkerbox", about = "A themable terminal playground")]
struct Cli {
    /// Data directory for preferences and logs (default: ~/.tinkerbox,
    /// or TINKERBOX_DIR)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dir = match cli.data_dir {
        Some(dir) => dir,
        None => PrefsStore::default_dir()?,
    };
    let store = PrefsStore::new(dir);

    // Logging goes to a file (use RUST_LOG to control level); a TUI
    // cannot log to stdout without corrupting the screen
    fs::create_dir_all(store.dir())
        .context(format!("Failed to create data directory: {:?}", store.dir()))?;
    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(store.dir().join(LOG_FILE))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    // Applies the stored theme (dark when none) and, if a custom color
    // was persisted, synthesizes one application of the derived palette
    let prefs = store.load()?;
    let theme = ThemeManager::from_prefs(prefs, store);
    let session = Session::new();

    // Set up terminal; mouse capture feeds the follower demo
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(theme, session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

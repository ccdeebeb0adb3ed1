use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four_server::config::AppConfig;
use connect_four_server::game::BoardSize;
use connect_four_server::ui::App;

/// Play Connect Four in the terminal, two players on one keyboard.
#[derive(Parser)]
#[command(name = "play", about = "Hot-seat Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file (only the [game] section is used)
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the starting board size: small, medium or large
    #[arg(long)]
    size: Option<BoardSize>,

    /// Start with inverted gravity
    #[arg(long)]
    inverted: bool,

    /// Override the number of randomly blocked cells
    #[arg(long)]
    blocked: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(size) = cli.size {
        config.game.size = size;
    }
    if cli.inverted {
        config.game.inverted_gravity = true;
    }
    if let Some(blocked) = cli.blocked {
        config.game.random_blocked = blocked;
    }
    config.validate().context("validating configuration")?;

    let mut app = App::new(config.game);
    run(&mut app).context("running terminal UI")
}

fn run(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even when the app loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}

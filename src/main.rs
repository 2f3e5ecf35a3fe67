//! Terminal game portal: a catalog with Snake and Tic-Tac-Toe.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_portal::app::App;
use game_portal::catalog::Route;
use game_portal::core::PortalConfig;
use game_portal::logging::{init_logging, LoggingConfig};

/// Play Snake or Tic-Tac-Toe in the terminal.
#[derive(Parser)]
#[command(name = "game-portal")]
#[command(about = "A small terminal game portal: Snake and Tic-Tac-Toe")]
struct Cli {
    /// JSON configuration file. Missing fields take their defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Session seed for reproducible games (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// View to open first: "/", "/snake" or "/tictac".
    #[arg(short, long, default_value = "/")]
    route: String,

    /// Where log lines go while the terminal is in use.
    #[arg(long, default_value = "game-portal.log")]
    log_file: PathBuf,

    /// Log filter in env_logger syntax (falls back to RUST_LOG, then "info").
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::default().with_file(&cli.log_file);
    if let Some(filter) = &cli.log_filter {
        logging = logging.with_filter(filter);
    }
    init_logging(logging).with_context(|| format!("opening log file {}", cli.log_file.display()))?;

    let mut config = match &cli.config {
        Some(path) => {
            PortalConfig::load(path).with_context(|| format!("loading configuration from {}", path.display()))?
        }
        None => PortalConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;

    let route = Route::from_path(&cli.route)?;

    let mut terminal = ratatui::init();
    let result = App::new(config, route).run(&mut terminal);
    ratatui::restore();
    result
}

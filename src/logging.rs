//! Logger initialization.
//!
//! The library only uses the `log` facade. Binaries call `init_logging`
//! once, early in `main`. The terminal frontend owns the screen, so it
//! normally points the logger at a file.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "game_portal=debug").
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    /// Append log lines to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Fails only if the log file cannot be
/// opened, in which case no logger is installed.
pub fn init_logging(config: LoggingConfig) -> std::io::Result<()> {
    let target = match &config.file {
        Some(path) => Some(File::options().create(true).append(true).open(path)?),
        None => None,
    };

    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = &config.env_filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        if let Some(file) = target {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            builder.write_style(env_logger::WriteStyle::Never);
        }

        // Another logger may already be installed (e.g. by a test harness)
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
    Ok(())
}

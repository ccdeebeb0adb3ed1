use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::{BoardSize, Position, DEFAULT_CONNECT};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub game: GameConfig,
    pub logging: LoggingConfig,
}

/// Where the HTTP server listens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// How every new game on the shared table is set up.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board preset used at startup and by `/api/reset`.
    pub size: BoardSize,
    /// Run length needed to win.
    pub connect: usize,
    /// Start each game with inverted gravity.
    pub inverted_gravity: bool,
    /// Cells blocked at the start of every game (skipped when off-board).
    pub blocked: Vec<Position>,
    /// Additional cells blocked at random at the start of every game.
    pub random_blocked: usize,
    /// Seed for random moves and blocked cells; entropy when unset.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            size: BoardSize::default(),
            connect: DEFAULT_CONNECT,
            inverted_gravity: false,
            blocked: Vec::new(),
            random_blocked: 0,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "info,actix_web=info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist. Runs before logging is set up, so callers report the
    /// fallback themselves.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Validation(
                "server.host must not be empty".into(),
            ));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port must be > 0".into(),
            ));
        }

        if self.game.connect < 2 {
            return Err(ConfigError::Validation(
                "game.connect must be >= 2".into(),
            ));
        }
        // The small preset is the tightest board a game can be switched to.
        let longest_small_side = {
            let (rows, cols) = BoardSize::Small.dimensions();
            rows.max(cols)
        };
        if self.game.connect > longest_small_side {
            return Err(ConfigError::Validation(format!(
                "game.connect must be <= {longest_small_side}"
            )));
        }
        let small_cells = {
            let (rows, cols) = BoardSize::Small.dimensions();
            rows * cols
        };
        if self.game.random_blocked >= small_cells {
            return Err(ConfigError::Validation(format!(
                "game.random_blocked must be < {small_cells}"
            )));
        }

        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.filter must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

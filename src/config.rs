use crate::infrastructure::strategies::StrategyKind;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::info;

pub const CONFIG_PATH: &str = "TicTacToe.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("{var}: unknown strategy {value:?} (expected \"sequential\" or \"random\")")]
    UnknownStrategy { var: String, value: String },
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub seed: Option<u64>,
    pub players: PlayersConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayersConfig {
    pub x: StrategyKind,
    pub o: StrategyKind,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub move_delay_ms: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl AppConfig {
    /// Reads `TicTacToe.toml` from the working directory when present, then
    /// applies `TICTACTOE_*` environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_PATH))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.display().to_string(),
                source,
            })?;
            Self::parse(&contents).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?
        } else {
            Self::default()
        };

        config.merge_env()?;
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Random strategies get distinct seeds so two random players do not
    /// mirror each other.
    pub fn seed_for_x(&self) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(1))
    }

    pub fn seed_for_o(&self) -> Option<u64> {
        self.seed
    }

    pub fn log_summary(&self) {
        info!(
            x = %self.players.x,
            o = %self.players.o,
            seed = ?self.seed,
            move_delay_ms = self.display.move_delay_ms,
            "configuration loaded"
        );
    }

    fn merge_env(&mut self) -> Result<(), ConfigError> {
        if let Some(kind) = strategy_from_env("TICTACTOE_X_STRATEGY")? {
            self.players.x = kind;
        }
        if let Some(kind) = strategy_from_env("TICTACTOE_O_STRATEGY")? {
            self.players.o = kind;
        }
        if let Ok(val) = std::env::var("TICTACTOE_SEED") {
            if let Ok(parsed) = val.parse() {
                self.seed = Some(parsed);
            }
        }
        if let Ok(val) = std::env::var("TICTACTOE_MOVE_DELAY_MS") {
            if let Ok(parsed) = val.parse() {
                self.display.move_delay_ms = parsed;
            }
        }
        if let Ok(val) = std::env::var("TICTACTOE_LOG_LEVEL") {
            if !val.trim().is_empty() {
                self.logging.level = val;
            }
        }
        Ok(())
    }
}

fn strategy_from_env(var: &str) -> Result<Option<StrategyKind>, ConfigError> {
    match std::env::var(var) {
        Ok(val) => val
            .parse()
            .map(Some)
            .map_err(|value| ConfigError::UnknownStrategy {
                var: var.to_string(),
                value,
            }),
        Err(_) => Ok(None),
    }
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            x: StrategyKind::Sequential,
            o: StrategyKind::Random,
        }
    }
}
impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            move_delay_ms: 1000,
        }
    }
}
impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            players: PlayersConfig::default(),
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

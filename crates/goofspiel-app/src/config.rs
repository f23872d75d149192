use goofspiel_bot::BotKind;
use goofspiel_core::game::engine::{DEFAULT_AI_NAME, GameSetup, MAX_NAME_LEN};
use goofspiel_core::model::deck::DeckRange;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

const DEFAULT_LOG_PATH: &str = "goofspiel.jsonl";

/// Root game configuration loaded from YAML. Every section is optional.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    #[serde(default)]
    pub deck: DeckConfig,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default = "default_ai_name")]
    pub ai_name: String,
    #[serde(default)]
    pub ai_kind: Option<String>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            deck: DeckConfig::default(),
            seed: None,
            player_name: None,
            ai_name: default_ai_name(),
            ai_kind: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: GameConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        self.deck.validate()?;
        self.normalize_names()?;
        self.bot_kind()?;
        self.logging.normalize()?;
        Ok(())
    }

    pub fn bot_kind(&self) -> Result<BotKind, ValidationError> {
        match self.ai_kind.as_deref() {
            None => Ok(BotKind::default()),
            Some(raw) => raw.parse().map_err(|err| ValidationError::InvalidField {
                field: "ai_kind".to_string(),
                message: format!("{err}"),
            }),
        }
    }

    pub fn game_setup(&self) -> GameSetup {
        GameSetup {
            deck: self.deck.range(),
            player_name: self.player_name.clone(),
            ai_name: self.ai_name.clone(),
            seed: self.seed,
        }
    }

    fn normalize_names(&mut self) -> Result<(), ValidationError> {
        let trimmed = self.ai_name.trim().to_string();
        self.ai_name = if trimmed.is_empty() {
            default_ai_name()
        } else {
            trimmed
        };
        validate_name("ai_name", &self.ai_name)?;

        if let Some(name) = self.player_name.take() {
            let trimmed = name.trim();
            if !trimmed.is_empty() {
                validate_name("player_name", trimmed)?;
                self.player_name = Some(trimmed.to_string());
            }
        }
        Ok(())
    }
}

fn default_ai_name() -> String {
    DEFAULT_AI_NAME.to_string()
}

fn validate_name(field: &str, name: &str) -> Result<(), ValidationError> {
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::InvalidField {
            field: field.to_string(),
            message: format!("name must be at most {MAX_NAME_LEN} characters"),
        });
    }
    if name.chars().any(char::is_control) {
        return Err(ValidationError::InvalidField {
            field: field.to_string(),
            message: "name must not contain control characters".to_string(),
        });
    }
    Ok(())
}

/// Deck bounds block.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DeckConfig {
    #[serde(default = "default_low")]
    pub low: u8,
    #[serde(default = "default_high")]
    pub high: u8,
}

impl Default for DeckConfig {
    fn default() -> Self {
        let range = DeckRange::default();
        Self {
            low: range.low,
            high: range.high,
        }
    }
}

impl DeckConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        self.range()
            .validate()
            .map_err(|err| ValidationError::InvalidField {
                field: "deck".to_string(),
                message: err.to_string(),
            })
    }

    pub fn range(&self) -> DeckRange {
        DeckRange {
            low: self.low,
            high: self.high,
        }
    }
}

fn default_low() -> u8 {
    DeckRange::default().low
}

fn default_high() -> u8 {
    DeckRange::default().high
}

/// Logging configuration defaults to disabled structured logs.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_structured: bool,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
    #[serde(default = "default_log_path")]
    pub path: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            tracing_level: default_tracing_level(),
            path: default_log_path(),
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) -> Result<(), ValidationError> {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
        if self.level().is_none() {
            return Err(ValidationError::InvalidField {
                field: "logging.tracing_level".to_string(),
                message: format!("unknown level '{}'", self.tracing_level),
            });
        }
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::InvalidField {
                field: "logging.path".to_string(),
                message: "path must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "info".to_string()
}

fn default_log_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_PATH)
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path.as_path(),
        }
    }
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}

//! User configuration.
//!
//! Read from `$XDG_CONFIG_HOME/zcalc/config.toml` unless a path is given.
//!
//! ```toml
//! [display]
//! max_len = 16
//! exp_digits = 8
//!
//! [operators]
//! "x" = "multiply"
//! ":" = "divide"
//!
//! [logging]
//! default = "warn"
//!
//! [logging.modules]
//! zcalc = "debug"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::calculator::{DisplayFormat, Operator, OperatorTable};

/// Largest fractional digit count accepted for exponential display.
const MAX_EXP_DIGITS: usize = 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid display settings: {0}")]
    InvalidDisplay(String),
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayFormat,
    /// Extra operator symbols on top of the built-in ones.
    pub operators: BTreeMap<String, Operator>,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level for everything not listed in `modules`.
    pub default: String,
    /// Per-target level overrides.
    pub modules: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: "warn".to_string(),
            modules: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Default location of the config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and a missing file falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.display.max_len == 0 {
            return Err(ConfigError::InvalidDisplay(
                "max_len must be at least 1".to_string(),
            ));
        }
        if self.display.exp_digits > MAX_EXP_DIGITS {
            return Err(ConfigError::InvalidDisplay(format!(
                "exp_digits must be at most {MAX_EXP_DIGITS}"
            )));
        }
        Ok(())
    }

    /// Built-in operator symbols plus the configured extras.
    pub fn operator_table(&self) -> OperatorTable {
        let mut table = OperatorTable::default();
        for (symbol, op) in &self.operators {
            table.insert(symbol.clone(), *op);
        }
        table
    }

    pub fn display_format(&self) -> DisplayFormat {
        self.display
    }
}

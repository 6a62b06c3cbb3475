//! Configuration module
//!
//! Settings live in a TOML file (`$XDG_CONFIG_HOME/wordpart/config.toml`,
//! falling back to `~/.config/wordpart/config.toml`). Every key is optional.

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::constants::config::{
    CONFIG_DIR, CONFIG_FILE, DEFAULT_TAB_WIDTH, DEFAULT_WORD_SEPARATORS,
};
use crate::constants::errors;
use crate::error::{ErrorType, Result, WordPartError};
use crate::movement::SeparatorSet;

/// Top-level configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct Config {
    /// Editor settings
    #[serde(default)]
    pub editor: EditorConfig,
}

/// Editor-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Characters that always form their own word-parts
    pub word_separators: String,

    /// Tab stop width used when drawing the document
    pub tab_width: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            word_separators: DEFAULT_WORD_SEPARATORS.to_string(),
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl Config {
    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Config = toml::from_str(source)?;
        Ok(config)
    }

    /// Read and parse the file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|err| {
            WordPartError::new(
                ErrorType::Config,
                errors::CONFIG_READ_FAILED,
                format!("cannot read {}: {err}", path.display()),
            )
        })?;
        let config = Self::from_toml_str(&source)?;
        info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, else the default file if it exists, else defaults
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                debug!("no configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Separator set for one command invocation
    pub fn separators(&self) -> SeparatorSet {
        SeparatorSet::new(&self.editor.word_separators)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|err| {
            WordPartError::new(ErrorType::Config, errors::CONFIG_PARSE_FAILED, err.to_string())
        })
    }
}

/// Location of the user's configuration file, if a home can be found
pub fn default_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join(CONFIG_DIR).join(CONFIG_FILE))
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::view::DisplayFields;

/// Lowest selectable expand level.
pub const MIN_EXPAND_LEVEL: u8 = 1;
/// Highest selectable expand level.
pub const MAX_EXPAND_LEVEL: u8 = 9;

/// Most data domains whose target class is remembered.
pub const MAX_CONTEXTS: usize = 32;

/// Target class index remembered for one data domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetContext {
    /// [`Domain::context_key`](crate::model::Domain::context_key) of the domain.
    pub domain: String,
    pub target: usize,
}

/// Remembered target classes, least recently used first.
///
/// Holds at most [`MAX_CONTEXTS`] domains; remembering a new one past the
/// limit forgets the least recently used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetContexts {
    entries: Vec<TargetContext>,
}

impl TargetContexts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remembered target for `domain`.
    pub fn get(&self, domain: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.domain == domain)
            .map(|e| e.target)
    }

    /// Store `target` for `domain` and mark it most recently used.
    pub fn remember(&mut self, domain: &str, target: usize) {
        self.entries.retain(|e| e.domain != domain);
        self.entries.push(TargetContext {
            domain: domain.to_string(),
            target,
        });
        if self.entries.len() > MAX_CONTEXTS {
            let excess = self.entries.len() - MAX_CONTEXTS;
            self.entries.drain(..excess);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TargetContext> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplaySettings,
    #[serde(skip_serializing_if = "TargetContexts::is_empty")]
    pub contexts: TargetContexts,
}

/// Persisted display options of the tree view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Which optional columns are shown
    #[serde(flatten)]
    pub fields: DisplayFields,
    /// Expand/shrink level (1-9)
    pub expand_level: u8,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            fields: DisplayFields::default(),
            expand_level: 5,
        }
    }
}

impl Config {
    /// Default config file location (`<config dir>/class-tree-viewer/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("class-tree-viewer").join("config.toml"))
    }

    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::ReadError { path, source }.into()),
        };

        let config: Config = toml::from_str(&contents)
            .map_err(|source| ConfigError::ParseError {
                path: path.clone(),
                source,
            })?;
        config.validate()?;

        Ok(config)
    }

    /// Write configuration to `path`, or to the default location.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()
                .ok_or_else(|| ConfigError::Invalid("no config directory available".into()))?,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::WriteError {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = toml::to_string_pretty(self).map_err(ConfigError::from)?;
        fs::write(&path, contents).map_err(|source| ConfigError::WriteError {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Check value ranges.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let level = self.display.expand_level;
        if !(MIN_EXPAND_LEVEL..=MAX_EXPAND_LEVEL).contains(&level) {
            return Err(ConfigError::Invalid(format!(
                "expand_level must be {}-{}, got {}",
                MIN_EXPAND_LEVEL, MAX_EXPAND_LEVEL, level
            )));
        }
        Ok(())
    }
}

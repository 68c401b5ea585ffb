//! File-based startup configuration (YAML)

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::category::{CategoryState, LogCategory};

/// Configuration file structure
///
/// ```yaml
/// categories:
///   threads: disabled
///   editor: disabled
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Initial state per category; missing categories start enabled
    #[serde(default)]
    pub categories: BTreeMap<LogCategory, CategoryState>,
}

impl LogConfig {
    /// Create an empty config (every category enabled)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state of one category
    pub fn with_category(mut self, category: LogCategory, state: CategoryState) -> Self {
        self.categories.insert(category, state);
        self
    }

    /// Initial state of a category under this config
    pub fn state(&self, category: LogCategory) -> CategoryState {
        self.categories.get(&category).copied().unwrap_or_default()
    }
}

/// Errors that can occur while reading or writing the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to serialize YAML: {0}")]
    Serialize(#[source] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Config level (user or workspace)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLevel {
    /// User-level config (~/.config/devlog/config.yaml)
    User,
    /// Workspace-level config (.config/devlog/config.yaml in workspace root)
    Workspace,
}

impl ConfigLevel {
    /// Lowercase name of the level
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigLevel::User => "user",
            ConfigLevel::Workspace => "workspace",
        }
    }
}

/// Reads and writes a [`LogConfig`] YAML file
///
/// # Example
///
/// ```no_run
/// use devlog_core::config::FileConfigProvider;
/// use devlog_core::CategoryRegistry;
///
/// let config = FileConfigProvider::user().load().unwrap_or_default();
/// let registry = CategoryRegistry::from_config(&config);
/// ```
pub struct FileConfigProvider {
    path: PathBuf,
    level: ConfigLevel,
}

impl FileConfigProvider {
    /// Create a new file config provider for a specific path
    pub fn new(path: impl Into<PathBuf>, level: ConfigLevel) -> Self {
        Self {
            path: path.into(),
            level,
        }
    }

    /// Create a user-level config provider (~/.config/devlog/config.yaml)
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("devlog").join("config.yaml"), ConfigLevel::User)
    }

    /// Create a workspace-level config provider (.config/devlog/config.yaml)
    pub fn workspace(workspace_root: impl AsRef<Path>) -> Self {
        let path = workspace_root.as_ref().join(".config").join("devlog").join("config.yaml");
        Self::new(path, ConfigLevel::Workspace)
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the config level
    pub fn level(&self) -> ConfigLevel {
        self.level
    }

    /// Check if the config file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the config, or the default one if the file doesn't exist
    pub fn load(&self) -> ConfigResult<LogConfig> {
        if !self.exists() {
            return Ok(LogConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(LogConfig::default());
        }

        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Write the config, creating parent directories as needed
    pub fn save(&self, config: &LogConfig) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(config).map_err(ConfigError::Serialize)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl std::fmt::Debug for FileConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileConfigProvider")
            .field("path", &self.path)
            .field("level", &self.level)
            .field("exists", &self.exists())
            .finish()
    }
}

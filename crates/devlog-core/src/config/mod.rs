//! Startup configuration
//!
//! Category states can be preset from a YAML file before the registry is
//! installed:
//! - `FileConfigProvider::user()`: `<config dir>/devlog/config.yaml`
//! - `FileConfigProvider::workspace(root)`: `<root>/.config/devlog/config.yaml`

mod file;

pub use file::{ConfigError, ConfigLevel, ConfigResult, FileConfigProvider, LogConfig};

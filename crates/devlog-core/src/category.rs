//! Log categories and their on/off state

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Debug categories used to filter log lines
///
/// The set is closed: adding a category means adding a variant here and to
/// [`LogCategory::ALL`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogCategory {
    #[default]
    Default,
    Error,
    Core,
    Editor,
    Component,
    Threads,
}

impl LogCategory {
    /// Number of categories
    pub const COUNT: usize = 6;

    /// Every category, in declaration order
    pub const ALL: [LogCategory; Self::COUNT] = [
        LogCategory::Default,
        LogCategory::Error,
        LogCategory::Core,
        LogCategory::Editor,
        LogCategory::Component,
        LogCategory::Threads,
    ];

    /// Position of this category in [`LogCategory::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as used in config files
    pub fn name(self) -> &'static str {
        match self {
            LogCategory::Default => "default",
            LogCategory::Error => "error",
            LogCategory::Core => "core",
            LogCategory::Editor => "editor",
            LogCategory::Component => "component",
            LogCategory::Threads => "threads",
        }
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for LogCategory {
    type Error = CategoryError;

    fn try_from(value: i32) -> Result<Self, CategoryError> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(CategoryError::UnknownCategory(value))
    }
}

impl FromStr for LogCategory {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CategoryError::UnknownCategoryName(s.to_string()))
    }
}

/// Whether a category currently produces output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryState {
    #[default]
    Enabled,
    Disabled,
}

impl CategoryState {
    /// Check if this is the enabled state
    pub fn is_enabled(self) -> bool {
        self == CategoryState::Enabled
    }
}

impl From<bool> for CategoryState {
    fn from(enabled: bool) -> Self {
        if enabled {
            CategoryState::Enabled
        } else {
            CategoryState::Disabled
        }
    }
}

/// Errors raised when converting untyped input into a category
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Unknown log category index: {0}")]
    UnknownCategory(i32),

    #[error("Unknown log category name: {0}")]
    UnknownCategoryName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_index() {
        for (i, category) in LogCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
        assert_eq!(LogCategory::ALL.len(), LogCategory::COUNT);
    }

    #[test]
    fn test_try_from_index() {
        assert_eq!(LogCategory::try_from(0).unwrap(), LogCategory::Default);
        assert_eq!(LogCategory::try_from(5).unwrap(), LogCategory::Threads);

        // The old sentinel slot and negatives are rejected
        assert_eq!(
            LogCategory::try_from(6),
            Err(CategoryError::UnknownCategory(6))
        );
        assert!(LogCategory::try_from(-1).is_err());
    }

    #[test]
    fn test_parse_name() {
        assert_eq!("core".parse::<LogCategory>().unwrap(), LogCategory::Core);
        assert_eq!(" Threads ".parse::<LogCategory>().unwrap(), LogCategory::Threads);

        let err = "physics".parse::<LogCategory>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown log category name: physics");
    }

    #[test]
    fn test_state_from_bool() {
        assert_eq!(CategoryState::from(true), CategoryState::Enabled);
        assert_eq!(CategoryState::from(false), CategoryState::Disabled);
        assert!(CategoryState::default().is_enabled());
    }
}

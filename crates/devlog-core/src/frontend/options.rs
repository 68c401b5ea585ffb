//! Per-call logging options

use crate::category::LogCategory;
use crate::color::PrintColor;

/// How a single log call is gated and decorated
///
/// Defaults: the `Default` category, no color, no timestamp. Every shape the
/// `debug_log!` macro accepts before its `;` converts into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogOptions {
    /// Category checked against the registry
    pub category: LogCategory,
    /// Color wrapped around the whole message
    pub color: Option<PrintColor>,
    /// Print the wall-clock time on its own line first
    pub show_timestamp: bool,
}

impl LogOptions {
    /// Options for an uncolored `Default` entry without timestamp
    pub fn new() -> Self {
        Self::default()
    }

    /// Gate on a different category
    pub fn category(mut self, category: LogCategory) -> Self {
        self.category = category;
        self
    }

    /// Wrap the message in a color
    pub fn color(mut self, color: PrintColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Print a timestamp line before the entry
    pub fn timestamp(mut self, show: bool) -> Self {
        self.show_timestamp = show;
        self
    }
}

impl From<LogCategory> for LogOptions {
    fn from(category: LogCategory) -> Self {
        Self::new().category(category)
    }
}

impl From<PrintColor> for LogOptions {
    fn from(color: PrintColor) -> Self {
        Self::new().color(color)
    }
}

impl From<(LogCategory, PrintColor)> for LogOptions {
    fn from((category, color): (LogCategory, PrintColor)) -> Self {
        Self::new().category(category).color(color)
    }
}

impl From<(PrintColor, bool)> for LogOptions {
    fn from((color, show_timestamp): (PrintColor, bool)) -> Self {
        Self::new().color(color).timestamp(show_timestamp)
    }
}

impl From<(LogCategory, PrintColor, bool)> for LogOptions {
    fn from((category, color, show_timestamp): (LogCategory, PrintColor, bool)) -> Self {
        Self::new().category(category).color(color).timestamp(show_timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = LogOptions::default();
        assert_eq!(options.category, LogCategory::Default);
        assert_eq!(options.color, None);
        assert!(!options.show_timestamp);
    }

    #[test]
    fn test_call_shapes() {
        assert_eq!(
            LogOptions::from(LogCategory::Core),
            LogOptions { category: LogCategory::Core, color: None, show_timestamp: false }
        );
        assert_eq!(
            LogOptions::from(PrintColor::Cyan),
            LogOptions { category: LogCategory::Default, color: Some(PrintColor::Cyan), show_timestamp: false }
        );
        assert_eq!(
            LogOptions::from((LogCategory::Editor, PrintColor::Green)),
            LogOptions { category: LogCategory::Editor, color: Some(PrintColor::Green), show_timestamp: false }
        );
        assert_eq!(
            LogOptions::from((PrintColor::Red, true)),
            LogOptions { category: LogCategory::Default, color: Some(PrintColor::Red), show_timestamp: true }
        );
        assert_eq!(
            LogOptions::from((LogCategory::Threads, PrintColor::Gray, true)),
            LogOptions { category: LogCategory::Threads, color: Some(PrintColor::Gray), show_timestamp: true }
        );
    }
}

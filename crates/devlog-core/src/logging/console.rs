//! Console logger backed by a category registry

use std::fmt::{self, Display};
use std::io::{self, Write};
use std::sync::Arc;

use super::traits::Logger;
use crate::category::LogCategory;
use crate::color::PrintColor;
use crate::frontend::{write_entry, LogOptions, ENABLED};
use crate::registry::{self, CategoryRegistry};

/// A logger that prints `>>> ` lines to stdout when its category is enabled
///
/// Levels only pick a color; gating is always by the logger's category.
#[derive(Clone)]
pub struct ConsoleLogger {
    registry: Arc<CategoryRegistry>,
    category: LogCategory,
    show_timestamp: bool,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a console logger on the process-wide registry and the `Default` category
    pub fn new() -> Self {
        Self::with_registry(registry::global())
    }

    /// Create a console logger gated by a specific registry
    pub fn with_registry(registry: Arc<CategoryRegistry>) -> Self {
        Self {
            registry,
            category: LogCategory::Default,
            show_timestamp: false,
        }
    }

    /// Log under a different category
    pub fn with_category(mut self, category: LogCategory) -> Self {
        self.category = category;
        self
    }

    /// Prefix every entry with a timestamp line
    pub fn with_timestamps(mut self, show: bool) -> Self {
        self.show_timestamp = show;
        self
    }

    /// Category this logger is gated by
    pub fn category(&self) -> LogCategory {
        self.category
    }

    /// Registry this logger checks before printing
    pub fn registry(&self) -> &Arc<CategoryRegistry> {
        &self.registry
    }

    fn options(&self, color: Option<PrintColor>) -> LogOptions {
        LogOptions {
            category: self.category,
            color,
            show_timestamp: self.show_timestamp,
        }
    }

    fn emit_to<W: Write + ?Sized>(&self, out: &mut W, color: Option<PrintColor>, args: &[&dyn Display]) {
        write_entry(out, &self.registry, &self.options(color), args);
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("category", &self.category)
            .field("show_timestamp", &self.show_timestamp)
            .finish()
    }
}

impl Logger for ConsoleLogger {
    fn entry(&self, color: Option<PrintColor>, args: &[&dyn Display]) {
        if !ENABLED {
            return;
        }
        let stdout = io::stdout();
        self.emit_to(&mut stdout.lock(), color, args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::SharedLogger;

    fn capture(logger: &ConsoleLogger, color: Option<PrintColor>, args: &[&dyn Display]) -> String {
        let mut out = Vec::new();
        logger.emit_to(&mut out, color, args);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_console_logger_creation() {
        let registry = Arc::new(CategoryRegistry::new());
        let logger = ConsoleLogger::with_registry(Arc::clone(&registry));
        assert_eq!(logger.category(), LogCategory::Default);
        assert!(Arc::ptr_eq(logger.registry(), &registry));

        let editor = logger.with_category(LogCategory::Editor).with_timestamps(true);
        assert_eq!(editor.category(), LogCategory::Editor);
        assert!(editor.show_timestamp);
    }

    #[test]
    fn test_console_logger_output() {
        let registry = Arc::new(CategoryRegistry::new());
        let logger = ConsoleLogger::with_registry(registry).with_category(LogCategory::Core);

        let output = capture(&logger, Some(PrintColor::Red), &[&"boom ", &7]);
        if ENABLED {
            assert_eq!(output, ">>> \x1b[1;31mboom 7\x1b[m\n");
        } else {
            assert!(output.is_empty());
        }
    }

    #[test]
    fn test_console_logger_respects_category() {
        let registry = Arc::new(CategoryRegistry::new());
        let logger = ConsoleLogger::with_registry(Arc::clone(&registry))
            .with_category(LogCategory::Threads);

        registry.disable(LogCategory::Threads);
        assert!(capture(&logger, None, &[&"hidden"]).is_empty());

        registry.enable(LogCategory::Threads);
        assert_eq!(capture(&logger, None, &[&"shown"]).is_empty(), !ENABLED);
    }

    #[test]
    fn test_console_logger_logs() {
        // This test just verifies the logger doesn't panic
        let registry = Arc::new(CategoryRegistry::new());
        let logger: SharedLogger = Arc::new(ConsoleLogger::with_registry(registry));
        logger.debug(&[&"debug message"]);
        logger.info(&[&"info message"]);
        logger.warn(&[&"warn message"]);
        logger.error(&[&"error message"]);
        crate::log_info!(logger, "value ", 42);
    }
}

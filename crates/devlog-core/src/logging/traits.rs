//! Logger trait definition

use std::fmt::Display;
use std::sync::Arc;

use crate::color::PrintColor;

/// Sink for leveled entries built from `Display` values
///
/// Only [`Logger::entry`] is required. Levels are colors: debug is plain,
/// info green, warn yellow, error red. Values are rendered back to back,
/// as with `debug_log!`.
pub trait Logger: Send + Sync {
    /// Write one entry, optionally colored
    fn entry(&self, color: Option<PrintColor>, args: &[&dyn Display]);

    /// Uncolored entry
    fn debug(&self, args: &[&dyn Display]) {
        self.entry(None, args);
    }

    /// Green entry
    fn info(&self, args: &[&dyn Display]) {
        self.entry(Some(PrintColor::Green), args);
    }

    /// Yellow entry
    fn warn(&self, args: &[&dyn Display]) {
        self.entry(Some(PrintColor::Yellow), args);
    }

    /// Red entry
    fn error(&self, args: &[&dyn Display]) {
        self.entry(Some(PrintColor::Red), args);
    }
}

/// A logger shared between components
pub type SharedLogger = Arc<dyn Logger>;

/// Leveled logging through any `Logger`, with `debug_log!`-style values
///
/// ```
/// use devlog_core::{log_warn, ConsoleLogger};
///
/// let logger = ConsoleLogger::new();
/// log_warn!(logger, "frame took ", 42, "ms");
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:expr),* $(,)?) => {
        {
            use $crate::logging::Logger as _;
            $logger.debug(&[$(&$arg as &dyn ::std::fmt::Display),*])
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:expr),* $(,)?) => {
        {
            use $crate::logging::Logger as _;
            $logger.info(&[$(&$arg as &dyn ::std::fmt::Display),*])
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:expr),* $(,)?) => {
        {
            use $crate::logging::Logger as _;
            $logger.warn(&[$(&$arg as &dyn ::std::fmt::Display),*])
        }
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:expr),* $(,)?) => {
        {
            use $crate::logging::Logger as _;
            $logger.error(&[$(&$arg as &dyn ::std::fmt::Display),*])
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    // Keeps what it was given instead of printing it
    #[derive(Default)]
    struct RecordingLogger {
        entries: Mutex<Vec<(Option<PrintColor>, String)>>,
    }

    impl Logger for RecordingLogger {
        fn entry(&self, color: Option<PrintColor>, args: &[&dyn Display]) {
            let text: String = args.iter().map(|a| a.to_string()).collect();
            self.entries.lock().push((color, text));
        }
    }

    #[test]
    fn test_levels_pick_colors() {
        let logger = RecordingLogger::default();
        logger.debug(&[&"d"]);
        logger.info(&[&"i"]);
        logger.warn(&[&"w"]);
        logger.error(&[&"e"]);

        let entries = logger.entries.lock();
        assert_eq!(
            *entries,
            vec![
                (None, "d".to_string()),
                (Some(PrintColor::Green), "i".to_string()),
                (Some(PrintColor::Yellow), "w".to_string()),
                (Some(PrintColor::Red), "e".to_string()),
            ]
        );
    }

    #[test]
    fn test_macros_concatenate_values() {
        let recorder = Arc::new(RecordingLogger::default());
        let logger: SharedLogger = recorder.clone();

        crate::log_info!(logger, "loaded ", 3, " levels in ", 1.5, "s");
        crate::log_error!(logger, "missing asset: ", "sky.png",);
        crate::log_debug!(logger,);

        let entries = recorder.entries.lock();
        assert_eq!(entries[0], (Some(PrintColor::Green), "loaded 3 levels in 1.5s".to_string()));
        assert_eq!(entries[1], (Some(PrintColor::Red), "missing asset: sky.png".to_string()));
        assert_eq!(entries[2], (None, String::new()));
    }
}

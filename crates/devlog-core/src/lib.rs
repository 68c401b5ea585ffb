//! Devlog Core
//!
//! Category-gated debug console logging for engine code. Lines look like
//! `>>> message` and can be colored and preceded by a timestamp line. All of
//! it is compiled out of release builds unless the `console_logging` feature
//! is enabled.
//!
//! ```rust
//! use devlog_core::{debug_log, registry, LogCategory, PrintColor};
//!
//! registry::global().enable(LogCategory::Default);
//!
//! debug_log!(LogCategory::Default, PrintColor::Red, true; "Loading next level", 69, 420.69);
//! debug_log!("App closing :)");
//! ```
//!
//! Components that prefer an injected logger can hold a
//! [`SharedLogger`](logging::SharedLogger) built from a [`ConsoleLogger`].

pub mod category;
pub mod color;
pub mod config;
pub mod frontend;
pub mod logging;
pub mod registry;

pub use category::{CategoryError, CategoryState, LogCategory};
pub use color::{color_to_ansi, raw_color_to_ansi, ColorError, PrintColor, ANSI_RESET};
pub use config::{ConfigError, ConfigLevel, FileConfigProvider, LogConfig};
pub use frontend::{log, log_to, log_with, LogOptions, ENABLED};
pub use logging::{ConsoleLogger, Logger, SharedLogger};
pub use registry::CategoryRegistry;

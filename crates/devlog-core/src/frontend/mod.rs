//! Category-gated console output
//!
//! Every entry point checks [`ENABLED`] first. In release builds without the
//! `console_logging` feature it is `false`, the bodies fold away, and call
//! sites still compile unchanged.

mod emit;
mod macros;
mod options;

pub use emit::{format_timestamp, log, log_to, log_with, render_line, write_entry, LINE_PREFIX};
pub use options::LogOptions;

/// Whether console logging is compiled into this build
pub const ENABLED: bool = cfg!(any(debug_assertions, feature = "console_logging"));

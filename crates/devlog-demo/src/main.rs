//! Demo of the debug console logger.
//!
//! Enables the `Default` category, then prints one categorized, colored,
//! timestamped line and one bare line.

use std::process::ExitCode;

use devlog_core::{debug_log, registry, LogCategory, PrintColor};

fn main() -> ExitCode {
    registry::global().enable(LogCategory::Default);

    debug_log!(LogCategory::Default, PrintColor::Red, true; "Loading next level", 69, 420.69);

    debug_log!("App closing :)");

    registry::destroy_global();
    ExitCode::SUCCESS
}

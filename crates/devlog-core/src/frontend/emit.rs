//! Formatting and writing of log lines

use std::fmt::{self, Display, Write as _};
use std::io::{self, Write};

use chrono::{DateTime, Local, TimeZone};

use super::options::LogOptions;
use super::ENABLED;
use crate::color::{color_to_ansi, ANSI_RESET};
use crate::registry::{self, CategoryRegistry};

/// Marker at the start of every log line
pub const LINE_PREFIX: &str = ">>> ";

/// Format a time like C's `ctime`, e.g. `Fri Jan  5 09:03:07 2024`
pub fn format_timestamp<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    time.format("%a %b %e %H:%M:%S %Y").to_string()
}

/// Build the full text of one log entry
///
/// Values are written back to back with no separator. A timestamp, when
/// given, goes on its own line before the entry.
pub fn render_line(options: &LogOptions, timestamp: Option<&str>, args: &[&dyn Display]) -> String {
    let mut line = String::new();

    if let Some(timestamp) = timestamp {
        line.push_str(timestamp);
        line.push('\n');
    }

    line.push_str(LINE_PREFIX);
    if let Some(color) = options.color {
        line.push_str(color_to_ansi(color));
    }

    for arg in args {
        // A failing Display impl leaves a partial line, never an error
        let _ = write!(line, "{}", arg);
    }

    if options.color.is_some() {
        line.push_str(ANSI_RESET);
    }
    line.push('\n');
    line
}

/// Write one entry to `out` unless its category is disabled
///
/// I/O errors are dropped; logging never fails the caller.
pub fn write_entry<W>(out: &mut W, registry: &CategoryRegistry, options: &LogOptions, args: &[&dyn Display])
where
    W: Write + ?Sized,
{
    if !ENABLED || registry.is_disabled(options.category) {
        return;
    }

    let timestamp = options
        .show_timestamp
        .then(|| format_timestamp(&Local::now()));
    let line = render_line(options, timestamp.as_deref(), args);

    let _ = out.write_all(line.as_bytes());
    let _ = out.flush();
}

/// Log to stdout, gated by the given registry
pub fn log_with(registry: &CategoryRegistry, options: &LogOptions, args: &[&dyn Display]) {
    if !ENABLED {
        return;
    }
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_entry(&mut out, registry, options, args);
}

/// Write one entry to `out`, gated by the process-wide registry
pub fn log_to<W>(out: &mut W, options: &LogOptions, args: &[&dyn Display])
where
    W: Write + ?Sized,
{
    if !ENABLED {
        return;
    }
    write_entry(out, &registry::global(), options, args);
}

/// Log to stdout, gated by the process-wide registry
pub fn log(options: &LogOptions, args: &[&dyn Display]) {
    if !ENABLED {
        return;
    }
    let stdout = io::stdout();
    log_to(&mut stdout.lock(), options, args);
}

//! Logger abstraction for host components
//!
//! Components that take a `SharedLogger` get category gating without
//! reaching for the process-wide registry themselves.

mod traits;
mod console;

pub use traits::{Logger, SharedLogger};
pub use console::ConsoleLogger;

//! The `debug_log!` macro

/// Print any number of `Display` values as one console line
///
/// Options go before a `;` and may be a [`LogCategory`](crate::LogCategory),
/// a [`PrintColor`](crate::PrintColor), a `(category, color)`,
/// `(color, show_timestamp)` or `(category, color, show_timestamp)` list, or
/// a full [`LogOptions`](crate::LogOptions). Without options the `Default`
/// category is used, uncolored, with no timestamp.
///
/// Values are not evaluated when logging is compiled out.
///
/// ```
/// use devlog_core::{debug_log, LogCategory, PrintColor};
///
/// debug_log!("This is a debug message with a number: ", 42);
/// // >>> This is a debug message with a number: 42
///
/// debug_log!(LogCategory::Core, PrintColor::Red, true; "Loading next level", 69, 420.69);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($opt:expr ; $($arg:expr),* $(,)?) => {
        if $crate::ENABLED {
            $crate::log(
                &$crate::LogOptions::from($opt),
                &[$(&$arg as &dyn ::std::fmt::Display),*],
            );
        }
    };
    ($($opt:expr),+ ; $($arg:expr),* $(,)?) => {
        if $crate::ENABLED {
            $crate::log(
                &$crate::LogOptions::from(($($opt),+)),
                &[$(&$arg as &dyn ::std::fmt::Display),*],
            );
        }
    };
    ($($arg:expr),* $(,)?) => {
        if $crate::ENABLED {
            $crate::log(
                &$crate::LogOptions::default(),
                &[$(&$arg as &dyn ::std::fmt::Display),*],
            );
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::registry;
    use crate::{LogCategory, LogOptions, PrintColor};

    // Output goes to stdout; these only check that every shape expands and runs
    #[test]
    fn test_macro_shapes() {
        let _guard = registry::global_test_guard();
        let level = 3;
        debug_log!();
        debug_log!("App closing :)");
        debug_log!("level ", level, " loaded in ", 1.5, "s",);
        debug_log!(LogCategory::Core; "core up");
        debug_log!(PrintColor::Cyan; "cyan");
        debug_log!(LogCategory::Editor, PrintColor::Green; "editor");
        debug_log!(PrintColor::Yellow, false; "yellow");
        debug_log!(LogCategory::Default, PrintColor::Red, true; "Loading next level", 69, 420.69);
        debug_log!(LogOptions::new().category(LogCategory::Threads); "worker ", 2);
        debug_log!(LogCategory::Component;);
    }
}

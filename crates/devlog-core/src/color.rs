//! Terminal colors and their ANSI escape sequences

use thiserror::Error;

/// ANSI sequence that resets any active color
pub const ANSI_RESET: &str = "\x1b[m";

/// Supported log colors
///
/// Backed by a `u8`, so at most 256 colors can ever be declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PrintColor {
    Red,
    Green,
    Blue,
    White,
    Black,
    Magenta,
    Cyan,
    Yellow,
    Gray,
    LightRed,
    LightGreen,
    LightBlue,
    LightWhite,
    LightMagenta,
    LightCyan,
    LightYellow,
}

impl PrintColor {
    /// Every color, in discriminant order
    pub const ALL: [PrintColor; 16] = [
        PrintColor::Red,
        PrintColor::Green,
        PrintColor::Blue,
        PrintColor::White,
        PrintColor::Black,
        PrintColor::Magenta,
        PrintColor::Cyan,
        PrintColor::Yellow,
        PrintColor::Gray,
        PrintColor::LightRed,
        PrintColor::LightGreen,
        PrintColor::LightBlue,
        PrintColor::LightWhite,
        PrintColor::LightMagenta,
        PrintColor::LightCyan,
        PrintColor::LightYellow,
    ];

    /// ANSI escape sequence for this color
    pub fn ansi(self) -> &'static str {
        color_to_ansi(self)
    }
}

impl TryFrom<u8> for PrintColor {
    type Error = ColorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(ColorError::UnknownColor(value))
    }
}

/// Error for raw values outside [`PrintColor`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Unknown print color: {0}")]
    UnknownColor(u8),
}

/// Convert a color to its ANSI escape sequence
///
/// `LightYellow` shares its sequence with `LightBlue`; terminals that depend on
/// the existing output see the same bytes they always did.
pub fn color_to_ansi(color: PrintColor) -> &'static str {
    match color {
        PrintColor::Red => "\x1b[1;31m",
        PrintColor::Green => "\x1b[1;32m",
        PrintColor::Blue => "\x1b[1;34m",
        PrintColor::White => "\x1b[1;37m",
        PrintColor::Black => "\x1b[1;30m",
        PrintColor::Magenta => "\x1b[1;35m",
        PrintColor::Cyan => "\x1b[1;36m",
        PrintColor::Yellow => "\x1b[1;33m",
        PrintColor::Gray => "\x1b[1;90m",
        PrintColor::LightRed => "\x1b[1;91m",
        PrintColor::LightGreen => "\x1b[1;92m",
        PrintColor::LightBlue => "\x1b[1;94m",
        PrintColor::LightWhite => "\x1b[1;97m",
        PrintColor::LightMagenta => "\x1b[1;95m",
        PrintColor::LightCyan => "\x1b[1;96m",
        PrintColor::LightYellow => "\x1b[1;94m",
    }
}

/// Convert a raw color value, falling back to white for unknown values
pub fn raw_color_to_ansi(value: u8) -> &'static str {
    PrintColor::try_from(value)
        .map(color_to_ansi)
        .unwrap_or_else(|_| color_to_ansi(PrintColor::White))
}

//! Terminal color names accepted in the display configuration.

use serde::{Deserialize, Serialize};

/// Named terminal foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorName {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// Terminal default foreground.
    Default,
}

impl ColorName {
    /// ANSI SGR escape sequence selecting this color.
    pub fn ansi(self) -> &'static str {
        match self {
            ColorName::Black => "\x1b[30m",
            ColorName::Red => "\x1b[31m",
            ColorName::Green => "\x1b[32m",
            ColorName::Yellow => "\x1b[33m",
            ColorName::Blue => "\x1b[34m",
            ColorName::Magenta => "\x1b[35m",
            ColorName::Cyan => "\x1b[36m",
            ColorName::White => "\x1b[37m",
            ColorName::BrightBlack => "\x1b[90m",
            ColorName::BrightRed => "\x1b[91m",
            ColorName::BrightGreen => "\x1b[92m",
            ColorName::BrightYellow => "\x1b[93m",
            ColorName::BrightBlue => "\x1b[94m",
            ColorName::BrightMagenta => "\x1b[95m",
            ColorName::BrightCyan => "\x1b[96m",
            ColorName::BrightWhite => "\x1b[97m",
            ColorName::Default => "\x1b[39m",
        }
    }
}

/// SGR reset sequence.
pub const ANSI_RESET: &str = "\x1b[0m";

/// SGR bold sequence.
pub const ANSI_BOLD: &str = "\x1b[1m";

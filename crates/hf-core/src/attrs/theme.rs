//! GTK theme: the override variable wins, the settings daemon is the
//! fallback.

use crate::probe::parse::{trim_quoted, ParseError};
use crate::probe::{resolve, ProbeOutcome, Runner, Source};

/// `gsettings get` wraps string values in single quotes.
fn parse_settings_value(raw: &str) -> Result<String, ParseError> {
    trim_quoted(raw.trim())
}

pub fn gtk_theme(runner: &Runner) -> ProbeOutcome {
    let sources = [
        Source::env("GTK_THEME"),
        Source::tool(
            "gsettings",
            &["get", "org.gnome.desktop.interface", "gtk-theme"],
            parse_settings_value,
        ),
    ];
    resolve(&sources, runner)
}

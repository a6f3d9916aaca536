//! Operating system, kernel, uptime, and session attributes.

use crate::platform;
use crate::probe::units::format_uptime;
use crate::probe::{resolve, ProbeOutcome, ResolvedValue, Runner, Source};

#[cfg(target_os = "linux")]
use crate::probe::{parse::value_after_key, parse::ParseError, SourceError};

#[cfg(target_os = "linux")]
fn parse_pretty_name(content: &str) -> Result<String, ParseError> {
    value_after_key(content, "PRETTY_NAME")
}

/// Distribution name plus machine architecture.
///
/// The architecture half always comes from uname; when os-release is absent
/// or mangled it is carried as the partial result so the report still shows
/// something useful.
#[cfg(target_os = "linux")]
pub fn os(runner: &Runner) -> ProbeOutcome {
    let arch = platform::uname_info().map(|info| info.machine);
    let source = Source::file("/etc/os-release", parse_pretty_name);

    match source.attempt(runner) {
        Ok(name) => match arch {
            Some(arch) => ProbeOutcome::resolved(format!("{name} {arch}")),
            None => ProbeOutcome::resolved(name),
        },
        Err(SourceError::Unavailable) => ProbeOutcome::Unsupported { partial: arch },
        Err(SourceError::BadFormat) => ProbeOutcome::BadFormat { partial: arch },
    }
}

#[cfg(target_os = "macos")]
pub fn os(_runner: &Runner) -> ProbeOutcome {
    match platform::uname_info() {
        Some(info) => ProbeOutcome::resolved(format!("macOS {}", info.machine)),
        None => ProbeOutcome::unsupported(),
    }
}

fn kernel_release() -> Option<String> {
    platform::uname_info().map(|info| info.release)
}

pub fn kernel(runner: &Runner) -> ProbeOutcome {
    resolve(&[Source::call(kernel_release)], runner)
}

pub fn uptime() -> ProbeOutcome {
    match platform::uptime_seconds() {
        Some(total) => ProbeOutcome::from(
            ResolvedValue::new(format_uptime(total)).with_detail("total_seconds", total.into()),
        ),
        None => ProbeOutcome::unsupported(),
    }
}

/// "none" for a bare console session, detected via `TERM`.
#[cfg(target_os = "linux")]
fn console_session() -> Option<String> {
    (std::env::var("TERM").ok()? == "linux").then(|| "none".to_string())
}

/// Desktop environment, from the fastest signal down to session markers.
#[cfg(target_os = "linux")]
pub fn desktop(runner: &Runner) -> ProbeOutcome {
    let sources = [
        Source::env("XDG_CURRENT_DESKTOP"),
        Source::env("DESKTOP_SESSION"),
        Source::env_flag("KDE_SESSION_VERSION", "KDE"),
        Source::env_flag("GNOME_DESKTOP_SESSION_ID", "GNOME"),
        Source::env_flag("MATE_DESKTOP_SESSION_ID", "mate"),
        Source::env_flag("TDE_FULL_SESSION", "Trinity"),
        Source::call(console_session),
    ];
    resolve(&sources, runner)
}

#[cfg(target_os = "macos")]
pub fn desktop(_runner: &Runner) -> ProbeOutcome {
    ProbeOutcome::resolved("Aqua")
}

pub fn shell(runner: &Runner) -> ProbeOutcome {
    resolve(&[Source::env("SHELL")], runner)
}

pub fn term(runner: &Runner) -> ProbeOutcome {
    resolve(&[Source::env("TERM")], runner)
}

//! Tiered-probe resolution engine.
//!
//! Every attribute is resolved by walking an ordered list of sources, from
//! the fastest or most authoritative down to the weakest. Each source is a
//! self-contained attempt that either fully parses into a value or reports a
//! typed failure; the first non-empty value wins. A source that is simply
//! unavailable (missing file, unset variable, absent binary) falls through to
//! the next one; a source that exists but responds with content that does not
//! match its expected structure ends the attribute with a bad-format outcome.
//! An exhausted list yields the explicit unsupported outcome — resolution
//! never faults.

pub mod parse;
pub mod runner;
pub mod units;

pub use parse::ParseError;
pub use runner::{Capture, CaptureError, Runner};

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::trace;

/// Parse step applied to a source's raw output.
pub type ParseFn = fn(&str) -> Result<String, ParseError>;

/// A single data-origin strategy for one attribute.
#[derive(Debug, Clone)]
pub enum SourceKind {
    /// Read a pseudo-file or regular file.
    File(PathBuf),

    /// Read an environment variable's value.
    Env(&'static str),

    /// Map the mere presence of an environment variable to a fixed value.
    EnvFlag {
        name: &'static str,
        value: &'static str,
    },

    /// A wrapped system call.
    Call(fn() -> Option<String>),

    /// Capture stdout of an external tool.
    Tool {
        program: &'static str,
        args: &'static [&'static str],
    },
}

/// A source paired with the parse step for its output.
#[derive(Debug, Clone)]
pub struct Source {
    kind: SourceKind,
    parse: ParseFn,
}

/// Why a single source attempt produced no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceError {
    /// The source does not exist here (file, variable, or binary absent,
    /// permission denied, or the expected marker was not found).
    Unavailable,

    /// The source responded, but its content does not match the expected
    /// textual structure.
    BadFormat,
}

impl Source {
    pub fn file(path: impl Into<PathBuf>, parse: ParseFn) -> Self {
        Self {
            kind: SourceKind::File(path.into()),
            parse,
        }
    }

    pub fn env(name: &'static str) -> Self {
        Self {
            kind: SourceKind::Env(name),
            parse: parse::identity,
        }
    }

    pub fn env_flag(name: &'static str, value: &'static str) -> Self {
        Self {
            kind: SourceKind::EnvFlag { name, value },
            parse: parse::identity,
        }
    }

    pub fn call(read: fn() -> Option<String>) -> Self {
        Self {
            kind: SourceKind::Call(read),
            parse: parse::identity,
        }
    }

    pub fn call_with(read: fn() -> Option<String>, parse: ParseFn) -> Self {
        Self {
            kind: SourceKind::Call(read),
            parse,
        }
    }

    pub fn tool(program: &'static str, args: &'static [&'static str], parse: ParseFn) -> Self {
        Self {
            kind: SourceKind::Tool { program, args },
            parse,
        }
    }

    /// Attempt this source once: acquire raw output, parse, reject empties.
    pub fn attempt(&self, runner: &Runner) -> Result<String, SourceError> {
        let raw = self.fetch(runner)?;
        match (self.parse)(&raw) {
            Ok(value) => {
                let value = value.trim();
                if value.is_empty() {
                    Err(SourceError::Unavailable)
                } else {
                    Ok(value.to_string())
                }
            }
            Err(ParseError::Missing) => Err(SourceError::Unavailable),
            Err(ParseError::Structure(reason)) => {
                trace!(source = ?self.kind, reason, "source content malformed");
                Err(SourceError::BadFormat)
            }
        }
    }

    fn fetch(&self, runner: &Runner) -> Result<String, SourceError> {
        match &self.kind {
            SourceKind::File(path) => {
                std::fs::read_to_string(path).map_err(|_| SourceError::Unavailable)
            }
            SourceKind::Env(name) => std::env::var(name).map_err(|_| SourceError::Unavailable),
            SourceKind::EnvFlag { name, value } => {
                if std::env::var_os(name).is_some() {
                    Ok((*value).to_string())
                } else {
                    Err(SourceError::Unavailable)
                }
            }
            SourceKind::Call(read) => read().ok_or(SourceError::Unavailable),
            SourceKind::Tool { program, args } => runner
                .capture(program, *args)
                .map(|capture| capture.text)
                .map_err(|_| SourceError::Unavailable),
        }
    }
}

/// A fully parsed attribute value: the display string plus optional
/// structured detail carried through to machine-readable output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedValue {
    pub text: String,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub detail: BTreeMap<&'static str, serde_json::Value>,
}

impl ResolvedValue {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            detail: BTreeMap::new(),
        }
    }

    pub fn with_detail(mut self, key: &'static str, value: serde_json::Value) -> Self {
        self.detail.insert(key, value);
        self
    }
}

/// The only value crossing the probe/renderer boundary.
///
/// Failure variants may carry a best-effort remnant (e.g. the bare machine
/// architecture when the OS name is unreadable) that the renderer still
/// prints on the main stream while the failure marker goes to the diagnostic
/// stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProbeOutcome {
    Resolved(ResolvedValue),
    Unsupported {
        #[serde(skip_serializing_if = "Option::is_none")]
        partial: Option<String>,
    },
    BadFormat {
        #[serde(skip_serializing_if = "Option::is_none")]
        partial: Option<String>,
    },
}

impl ProbeOutcome {
    pub fn resolved(text: impl Into<String>) -> Self {
        ProbeOutcome::Resolved(ResolvedValue::new(text))
    }

    pub fn unsupported() -> Self {
        ProbeOutcome::Unsupported { partial: None }
    }

    pub fn unsupported_with(partial: impl Into<String>) -> Self {
        ProbeOutcome::Unsupported {
            partial: Some(partial.into()),
        }
    }

    pub fn bad_format() -> Self {
        ProbeOutcome::BadFormat { partial: None }
    }

    pub fn bad_format_with(partial: impl Into<String>) -> Self {
        ProbeOutcome::BadFormat {
            partial: Some(partial.into()),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, ProbeOutcome::Resolved(_))
    }

    /// The display text, if resolution succeeded.
    pub fn text(&self) -> Option<&str> {
        match self {
            ProbeOutcome::Resolved(value) => Some(&value.text),
            _ => None,
        }
    }
}

impl From<ResolvedValue> for ProbeOutcome {
    fn from(value: ResolvedValue) -> Self {
        ProbeOutcome::Resolved(value)
    }
}

/// Walk a source list in priority order and return the first usable value.
///
/// Each source is attempted exactly once. Unavailable sources fall through;
/// a malformed response ends resolution with `BadFormat`; an exhausted (or
/// empty) list yields `Unsupported`.
pub fn resolve(sources: &[Source], runner: &Runner) -> ProbeOutcome {
    for source in sources {
        match source.attempt(runner) {
            Ok(text) => return ProbeOutcome::resolved(text),
            Err(SourceError::Unavailable) => continue,
            Err(SourceError::BadFormat) => return ProbeOutcome::bad_format(),
        }
    }
    ProbeOutcome::unsupported()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static FIRST_CALLS: AtomicUsize = AtomicUsize::new(0);
    static SECOND_CALLS: AtomicUsize = AtomicUsize::new(0);

    fn first_source() -> Option<String> {
        FIRST_CALLS.fetch_add(1, Ordering::SeqCst);
        Some("first".to_string())
    }

    fn second_source() -> Option<String> {
        SECOND_CALLS.fetch_add(1, Ordering::SeqCst);
        Some("second".to_string())
    }

    fn missing_source() -> Option<String> {
        None
    }

    fn garbage_source() -> Option<String> {
        Some("garbage".to_string())
    }

    fn reject_structure(_raw: &str) -> Result<String, ParseError> {
        Err(ParseError::Structure("expected quoted value"))
    }

    #[test]
    fn test_empty_source_list_is_unsupported() {
        let runner = Runner::default();
        assert_eq!(resolve(&[], &runner), ProbeOutcome::unsupported());
    }

    #[test]
    fn test_stops_after_first_success() {
        let runner = Runner::default();
        let sources = [Source::call(first_source), Source::call(second_source)];

        let outcome = resolve(&sources, &runner);

        assert_eq!(outcome, ProbeOutcome::resolved("first"));
        assert_eq!(FIRST_CALLS.load(Ordering::SeqCst), 1);
        assert_eq!(SECOND_CALLS.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_falls_through_unavailable_sources() {
        let runner = Runner::default();
        let sources = [
            Source::call(missing_source),
            Source::env("HF_TEST_UNSET_VARIABLE_XYZ"),
            Source::call(garbage_source),
        ];

        assert_eq!(resolve(&sources, &runner), ProbeOutcome::resolved("garbage"));
    }

    #[test]
    fn test_bad_format_short_circuits() {
        let runner = Runner::default();
        let sources = [
            Source::call_with(garbage_source, reject_structure),
            Source::call(missing_source),
        ];

        assert_eq!(resolve(&sources, &runner), ProbeOutcome::bad_format());
    }

    #[test]
    fn test_empty_parsed_value_is_not_success() {
        std::env::set_var("HF_TEST_EMPTY_VARIABLE", "");
        let runner = Runner::default();
        let sources = [Source::env("HF_TEST_EMPTY_VARIABLE")];

        assert_eq!(resolve(&sources, &runner), ProbeOutcome::unsupported());
    }

    #[test]
    fn test_env_flag_maps_presence_to_fixed_value() {
        std::env::set_var("HF_TEST_FLAG_VARIABLE", "1");
        let runner = Runner::default();
        let sources = [Source::env_flag("HF_TEST_FLAG_VARIABLE", "KDE")];

        assert_eq!(resolve(&sources, &runner), ProbeOutcome::resolved("KDE"));
    }

    #[test]
    fn test_outcome_serializes_with_tag() {
        let outcome = ProbeOutcome::resolved("Ubuntu 24.04 LTS x86_64");
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "resolved");
        assert_eq!(json["text"], "Ubuntu 24.04 LTS x86_64");

        let json = serde_json::to_value(ProbeOutcome::unsupported()).unwrap();
        assert_eq!(json["outcome"], "unsupported");
    }

    #[test]
    fn test_detail_carried_in_resolved_value() {
        let value = ResolvedValue::new("1523 (pacman)").with_detail("pacman", 1523u64.into());
        let json = serde_json::to_value(ProbeOutcome::from(value)).unwrap();
        assert_eq!(json["detail"]["pacman"], 1523);
    }
}

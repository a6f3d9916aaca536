//! Report rendering.
//!
//! Text mode writes one line per attribute: a padded colored label, the
//! configured dash, then the resolved value on stdout. A failed attribute
//! puts its marker on the diagnostic stream at the same report position
//! while any partial text still reaches stdout — partial success is normal,
//! not an error state for the run.

use crate::probe::ProbeOutcome;
use chrono::{DateTime, Utc};
use hf_common::color::{ANSI_BOLD, ANSI_RESET};
use hf_common::AttributeId;
use hf_config::Config;
use serde::Serialize;
use std::io::{self, Write};

/// Marker for an attribute no source could resolve.
pub const UNSUPPORTED_MARKER: &str = "[Unsupported]";

/// Marker for a source that responded with unparseable content.
pub const BAD_FORMAT_MARKER: &str = "[Bad Format]";

const LABEL_WIDTH: usize = 12;

/// Writes the labeled report.
pub struct Renderer<'a> {
    config: &'a Config,
    color: bool,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config, color: bool) -> Self {
        Self { config, color }
    }

    fn paint(&self, code: &'static str) -> &'static str {
        if self.color {
            code
        } else {
            ""
        }
    }

    /// Render the report as labeled text lines.
    pub fn render_text(
        &self,
        report: &[(AttributeId, ProbeOutcome)],
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> io::Result<()> {
        for (id, outcome) in report {
            if *id == AttributeId::Title {
                self.render_title(outcome, out, err)?;
            } else {
                self.render_line(*id, outcome, out, err)?;
            }
        }
        out.flush()
    }

    /// `user@hostname` heading with the separator underneath.
    fn render_title(
        &self,
        outcome: &ProbeOutcome,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> io::Result<()> {
        let primary = self.paint(self.config.colors.primary.ansi());
        let bold = if self.config.colors.bold {
            self.paint(ANSI_BOLD)
        } else {
            ""
        };
        let reset = self.paint(ANSI_RESET);

        write!(out, "{primary}{bold}")?;
        self.write_value(outcome, out, err)?;
        writeln!(out, "{reset}")?;
        writeln!(out, "{}", self.config.report.separator)?;
        Ok(())
    }

    fn render_line(
        &self,
        id: AttributeId,
        outcome: &ProbeOutcome,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> io::Result<()> {
        let primary = self.paint(self.config.colors.primary.ansi());
        let dash_color = self.paint(self.config.colors.dash.ansi());
        let bold = if self.config.colors.bold {
            self.paint(ANSI_BOLD)
        } else {
            ""
        };
        let reset = self.paint(ANSI_RESET);

        write!(
            out,
            "{primary}{bold}{label:<width$}{reset}{dash_color}{dash}{reset}",
            label = self.config.label(id),
            width = LABEL_WIDTH,
            dash = self.config.report.dash,
        )?;
        self.write_value(outcome, out, err)?;
        writeln!(out)?;
        Ok(())
    }

    /// Value part of a line. Failure markers interleave correctly with the
    /// main stream because both sides are flushed around the marker.
    fn write_value(
        &self,
        outcome: &ProbeOutcome,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> io::Result<()> {
        match outcome {
            ProbeOutcome::Resolved(value) => write!(out, "{}", value.text),
            ProbeOutcome::Unsupported { partial } => {
                self.write_marker(UNSUPPORTED_MARKER, partial.as_deref(), out, err)
            }
            ProbeOutcome::BadFormat { partial } => {
                self.write_marker(BAD_FORMAT_MARKER, partial.as_deref(), out, err)
            }
        }
    }

    fn write_marker(
        &self,
        marker: &str,
        partial: Option<&str>,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> io::Result<()> {
        out.flush()?;
        write!(err, "{marker}")?;
        err.flush()?;
        if let Some(partial) = partial {
            write!(out, " {partial}")?;
        }
        Ok(())
    }
}

/// Machine-readable snapshot of a full report.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub collected_at: DateTime<Utc>,
    pub attributes: Vec<AttributeEntry<'a>>,
}

/// One attribute's outcome in the snapshot.
#[derive(Debug, Serialize)]
pub struct AttributeEntry<'a> {
    pub id: AttributeId,
    pub label: &'a str,
    #[serde(flatten)]
    pub outcome: &'a ProbeOutcome,
}

/// Build the JSON snapshot for a resolved report.
pub fn snapshot<'a>(
    config: &'a Config,
    report: &'a [(AttributeId, ProbeOutcome)],
) -> Snapshot<'a> {
    Snapshot {
        collected_at: Utc::now(),
        attributes: report
            .iter()
            .map(|(id, outcome)| AttributeEntry {
                id: *id,
                label: config.label(*id),
                outcome,
            })
            .collect(),
    }
}

//! Typed configuration structs.
//!
//! All tables and fields are optional in the file; anything absent falls back
//! to the built-in defaults below.

use hf_common::{AttributeId, ColorName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete display configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub report: ReportSettings,
    pub colors: ColorSettings,
    pub network: NetworkSettings,

    /// Per-attribute label overrides, keyed by attribute id.
    pub labels: BTreeMap<String, String>,
}

impl Config {
    /// Label for an attribute: configured override or the built-in default.
    pub fn label(&self, id: AttributeId) -> &str {
        self.labels
            .get(id.as_str())
            .map(String::as_str)
            .unwrap_or_else(|| id.default_label())
    }
}

/// Which attributes appear and how the report is framed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Attributes to resolve, in report order.
    pub attributes: Vec<AttributeId>,

    /// Line printed after the title heading.
    pub separator: String,

    /// Text between a label and its value.
    pub dash: String,

    /// Append `@ X.Y GHz` to the CPU model when the frequency is readable.
    pub show_cpu_frequency: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            attributes: AttributeId::ALL.to_vec(),
            separator: "────────────────".to_string(),
            dash: " › ".to_string(),
            show_cpu_frequency: true,
        }
    }
}

/// Label and accent colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    /// Labels and the title line.
    pub primary: ColorName,

    /// The dash between label and value.
    pub dash: ColorName,

    /// Render labels bold.
    pub bold: bool,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            primary: ColorName::Cyan,
            dash: ColorName::White,
            bold: true,
        }
    }
}

/// Network probe settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSettings {
    /// Command whose stdout is reported verbatim as the public address.
    pub public_ip_command: Vec<String>,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            public_ip_command: vec!["curl".into(), "-s".into(), "ident.me".into()],
        }
    }
}

//! Attribute identifiers.
//!
//! Every reportable fact about the host has a stable identifier used in the
//! configuration file (`report.attributes`, `[labels]`), on the command line
//! (`--attrs`), and in JSON output.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One reportable fact about the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeId {
    /// `user@hostname` heading line.
    Title,
    Hostname,
    User,
    Os,
    Kernel,
    Uptime,
    Desktop,
    Shell,
    Term,
    Packages,
    Host,
    Bios,
    Cpu,
    Gpu,
    Memory,
    GtkTheme,
    LocalIp,
    PublicIp,
}

impl AttributeId {
    /// All known attributes in default report order.
    pub const ALL: [AttributeId; 18] = [
        AttributeId::Title,
        AttributeId::Hostname,
        AttributeId::User,
        AttributeId::Os,
        AttributeId::Kernel,
        AttributeId::Uptime,
        AttributeId::Desktop,
        AttributeId::Shell,
        AttributeId::Term,
        AttributeId::Packages,
        AttributeId::Host,
        AttributeId::Bios,
        AttributeId::Cpu,
        AttributeId::Gpu,
        AttributeId::Memory,
        AttributeId::GtkTheme,
        AttributeId::LocalIp,
        AttributeId::PublicIp,
    ];

    /// Stable identifier string, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeId::Title => "title",
            AttributeId::Hostname => "hostname",
            AttributeId::User => "user",
            AttributeId::Os => "os",
            AttributeId::Kernel => "kernel",
            AttributeId::Uptime => "uptime",
            AttributeId::Desktop => "desktop",
            AttributeId::Shell => "shell",
            AttributeId::Term => "term",
            AttributeId::Packages => "packages",
            AttributeId::Host => "host",
            AttributeId::Bios => "bios",
            AttributeId::Cpu => "cpu",
            AttributeId::Gpu => "gpu",
            AttributeId::Memory => "memory",
            AttributeId::GtkTheme => "gtk_theme",
            AttributeId::LocalIp => "local_ip",
            AttributeId::PublicIp => "public_ip",
        }
    }

    /// Label shown next to the value when no override is configured.
    ///
    /// `Title` renders as a bare heading and has no label.
    pub fn default_label(self) -> &'static str {
        match self {
            AttributeId::Title => "",
            AttributeId::Hostname => "Hostname",
            AttributeId::User => "User",
            AttributeId::Os => "OS",
            AttributeId::Kernel => "Kernel",
            AttributeId::Uptime => "Uptime",
            AttributeId::Desktop => "Desktop",
            AttributeId::Shell => "Shell",
            AttributeId::Term => "Terminal",
            AttributeId::Packages => "Packages",
            AttributeId::Host => "Host",
            AttributeId::Bios => "BIOS",
            AttributeId::Cpu => "CPU",
            AttributeId::Gpu => "GPU",
            AttributeId::Memory => "Memory",
            AttributeId::GtkTheme => "GTK Theme",
            AttributeId::LocalIp => "Local IP",
            AttributeId::PublicIp => "Public IP",
        }
    }
}

impl std::fmt::Display for AttributeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeId {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        AttributeId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownAttribute(s.to_string()))
    }
}

/// Error returned when parsing an unrecognized attribute identifier.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown attribute: {0}")]
pub struct UnknownAttribute(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_all_ids() {
        for id in AttributeId::ALL {
            assert_eq!(id.as_str().parse::<AttributeId>().unwrap(), id);
        }
    }

    #[test]
    fn test_unknown_id_rejected() {
        assert!("bogus".parse::<AttributeId>().is_err());
    }

    #[test]
    fn test_serde_matches_as_str() {
        let json = serde_json::to_string(&AttributeId::GtkTheme).unwrap();
        assert_eq!(json, "\"gtk_theme\"");
    }
}

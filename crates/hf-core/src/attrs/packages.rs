//! Installed package counts across every manager present on the machine.
//!
//! Unlike the other attributes this probe does not stop at the first
//! success: a host may carry several package managers at once, so every
//! manager whose marker path exists is counted and the non-zero results are
//! concatenated, each tagged with its manager name. Only when no manager is
//! present at all does the attribute report unsupported.

use crate::probe::parse::count_lines;
use crate::probe::{ProbeOutcome, ResolvedValue, Runner};
use std::path::Path;
use tracing::debug;

/// A package manager probe, gated on a marker path relative to the
/// filesystem root (injectable for tests).
struct Manager {
    name: &'static str,
    marker: &'static str,
    probe: ManagerProbe,
}

enum ManagerProbe {
    /// Count entries of a package database directory, one per package.
    DbDirCount(&'static str),

    /// Count output lines of a listing tool.
    ToolLineCount {
        program: &'static str,
        args: &'static [&'static str],
        /// The listing starts with a header line that is not a package.
        discount_header: bool,
    },
}

const MANAGERS: [Manager; 5] = [
    Manager {
        name: "pacman",
        marker: "var/lib/pacman/local",
        probe: ManagerProbe::DbDirCount("var/lib/pacman/local"),
    },
    Manager {
        name: "dpkg",
        marker: "usr/bin/dpkg-query",
        probe: ManagerProbe::ToolLineCount {
            program: "dpkg-query",
            args: &["-f", ".\n", "-W"],
            discount_header: false,
        },
    },
    Manager {
        name: "rpm",
        marker: "usr/bin/rpm",
        probe: ManagerProbe::ToolLineCount {
            program: "rpm",
            args: &["-qa"],
            discount_header: false,
        },
    },
    Manager {
        name: "flatpak",
        marker: "usr/bin/flatpak",
        probe: ManagerProbe::ToolLineCount {
            program: "flatpak",
            args: &["list"],
            discount_header: false,
        },
    },
    Manager {
        name: "snap",
        marker: "usr/bin/snap",
        probe: ManagerProbe::ToolLineCount {
            program: "snap",
            args: &["list"],
            discount_header: true,
        },
    },
];

/// One manager's package count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerCount {
    pub manager: &'static str,
    pub count: u64,
}

pub fn packages(runner: &Runner) -> ProbeOutcome {
    aggregate(&collect_counts(Path::new("/"), runner))
}

fn collect_counts(root: &Path, runner: &Runner) -> Vec<ManagerCount> {
    let mut counts = Vec::new();
    for manager in &MANAGERS {
        if !root.join(manager.marker).exists() {
            continue;
        }
        let count = match &manager.probe {
            ManagerProbe::DbDirCount(db) => count_db_entries(&root.join(db)),
            ManagerProbe::ToolLineCount {
                program,
                args,
                discount_header,
            } => match runner.capture(program, *args) {
                Ok(capture) => {
                    let lines = count_lines(&capture.text);
                    if *discount_header {
                        lines.saturating_sub(1)
                    } else {
                        lines
                    }
                }
                Err(err) => {
                    debug!(manager = manager.name, error = %err, "package listing failed");
                    continue;
                }
            },
        };
        counts.push(ManagerCount {
            manager: manager.name,
            count,
        });
    }
    counts
}

/// One subdirectory per installed package; top-level version files
/// (ALPM_DB_VERSION) are not packages.
fn count_db_entries(db: &Path) -> u64 {
    match std::fs::read_dir(db) {
        Ok(entries) => entries
            .flatten()
            .filter(|entry| entry.path().is_dir())
            .count() as u64,
        Err(_) => 0,
    }
}

/// Concatenate non-zero counts into one tagged composite value.
fn aggregate(counts: &[ManagerCount]) -> ProbeOutcome {
    let nonzero: Vec<&ManagerCount> = counts.iter().filter(|count| count.count > 0).collect();
    if nonzero.is_empty() {
        return ProbeOutcome::unsupported();
    }

    let text = nonzero
        .iter()
        .map(|count| format!("{} ({})", count.count, count.manager))
        .collect::<Vec<_>>()
        .join(" ");

    let mut value = ResolvedValue::new(text);
    for count in &nonzero {
        value = value.with_detail(count.manager, count.count.into());
    }
    ProbeOutcome::from(value)
}

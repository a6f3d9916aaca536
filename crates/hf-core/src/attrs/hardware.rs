//! Hardware attributes: CPU, GPU, memory, machine model, firmware.

use crate::platform;
use crate::probe::{ProbeOutcome, Runner};

#[cfg(target_os = "linux")]
use crate::probe::parse::{quoted_field_after, value_after_key, ParseError};
#[cfg(target_os = "linux")]
use crate::probe::units::{format_memory, memory_percent, mhz_to_ghz};
#[cfg(target_os = "linux")]
use crate::probe::{resolve, ResolvedValue, Source};
#[cfg(target_os = "linux")]
use std::path::Path;

/// CPU model, optionally suffixed with the live clock in GHz.
#[cfg(target_os = "linux")]
pub fn cpu(config: &hf_config::Config, _runner: &Runner) -> ProbeOutcome {
    let Ok(content) = std::fs::read_to_string("/proc/cpuinfo") else {
        return ProbeOutcome::unsupported();
    };

    let model = match value_after_key(&content, "model name") {
        Ok(model) => model,
        Err(ParseError::Missing) => return ProbeOutcome::unsupported(),
        Err(ParseError::Structure(_)) => return ProbeOutcome::bad_format(),
    };
    // Vendors embed the nominal frequency after an `@`; the live value is
    // reported separately below.
    let model = model.split('@').next().unwrap_or("").trim().to_string();

    if !config.report.show_cpu_frequency {
        return ProbeOutcome::resolved(model);
    }

    match value_after_key(&content, "cpu MHz")
        .ok()
        .and_then(|raw| mhz_to_ghz(&raw))
    {
        Some(ghz) => ProbeOutcome::from(
            ResolvedValue::new(format!("{model} @ {ghz} GHz"))
                .with_detail("model", model.clone().into())
                .with_detail("ghz", ghz.into()),
        ),
        None => ProbeOutcome::unsupported_with(model),
    }
}

#[cfg(target_os = "macos")]
pub fn cpu(_config: &hf_config::Config, _runner: &Runner) -> ProbeOutcome {
    match platform::cpu_brand() {
        Some(brand) => ProbeOutcome::resolved(brand),
        None => ProbeOutcome::unsupported(),
    }
}

/// Display adapter name from the machine-readable PCI listing. Dedicated
/// "3D" controllers win over plain VGA class devices.
#[cfg(target_os = "linux")]
fn parse_gpu_listing(output: &str) -> Result<String, ParseError> {
    for marker in ["3D", "VGA"] {
        if let Some(device) = quoted_field_after(output, marker, 3) {
            return Ok(device);
        }
    }
    Err(ParseError::Missing)
}

#[cfg(target_os = "linux")]
pub fn gpu(runner: &Runner) -> ProbeOutcome {
    resolve(&[Source::tool("lspci", &["-mm"], parse_gpu_listing)], runner)
}

#[cfg(target_os = "macos")]
pub fn gpu(_runner: &Runner) -> ProbeOutcome {
    ProbeOutcome::unsupported()
}

/// Machine product name from the DMI tree.
#[cfg(target_os = "linux")]
pub fn host(runner: &Runner) -> ProbeOutcome {
    resolve(
        &[Source::file(
            "/sys/devices/virtual/dmi/id/product_name",
            crate::probe::parse::identity,
        )],
        runner,
    )
}

#[cfg(target_os = "macos")]
pub fn host(_runner: &Runner) -> ProbeOutcome {
    ProbeOutcome::resolved("Apple")
}

#[cfg(target_os = "linux")]
fn read_dmi(name: &str) -> Option<String> {
    let text = std::fs::read_to_string(Path::new("/sys/devices/virtual/dmi/id").join(name)).ok()?;
    let text = text.trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// Firmware vendor and version; either alone is still worth reporting.
#[cfg(target_os = "linux")]
pub fn bios() -> ProbeOutcome {
    match (read_dmi("bios_vendor"), read_dmi("bios_version")) {
        (Some(vendor), Some(version)) => ProbeOutcome::resolved(format!("{vendor} {version}")),
        (Some(vendor), None) => ProbeOutcome::resolved(vendor),
        (None, Some(version)) => ProbeOutcome::resolved(version),
        (None, None) => ProbeOutcome::unsupported(),
    }
}

#[cfg(target_os = "macos")]
pub fn bios() -> ProbeOutcome {
    ProbeOutcome::unsupported()
}

/// Memory in use versus installed.
///
/// Used is derived as total − free − buffers − cached: the page-cache share
/// comes from `/proc/meminfo`, the rest from `sysinfo(2)`.
#[cfg(target_os = "linux")]
pub fn memory() -> ProbeOutcome {
    let Some(counters) = platform::memory_counters() else {
        return ProbeOutcome::unsupported();
    };
    let Ok(meminfo) = std::fs::read_to_string("/proc/meminfo") else {
        return ProbeOutcome::unsupported();
    };
    let Some(cached_kib) = parse_cached_kib(&meminfo) else {
        return ProbeOutcome::unsupported();
    };

    memory_outcome(
        counters.total_kib,
        counters.free_kib,
        counters.buffers_kib,
        cached_kib,
    )
}

#[cfg(target_os = "macos")]
pub fn memory() -> ProbeOutcome {
    // Total is readable via sysctl, but there is no used-memory counter
    // without the host statistics interface; report the total as a partial.
    match platform::total_memory_bytes() {
        Some(total) => ProbeOutcome::unsupported_with(format!("{} MiB total", total / 1048576)),
        None => ProbeOutcome::unsupported(),
    }
}

#[cfg(target_os = "linux")]
fn parse_cached_kib(meminfo: &str) -> Option<u64> {
    let value = value_after_key(meminfo, "Cached").ok()?;
    let number = value.split_whitespace().next()?;
    number.parse().ok()
}

#[cfg(target_os = "linux")]
fn memory_outcome(total_kib: u64, free_kib: u64, buffers_kib: u64, cached_kib: u64) -> ProbeOutcome {
    if total_kib == 0 {
        return ProbeOutcome::unsupported();
    }
    let used_kib = total_kib
        .saturating_sub(free_kib)
        .saturating_sub(buffers_kib)
        .saturating_sub(cached_kib);
    let Some(percent) = memory_percent(used_kib, total_kib) else {
        return ProbeOutcome::unsupported();
    };

    ProbeOutcome::from(
        ResolvedValue::new(format_memory(used_kib, total_kib, percent))
            .with_detail("used_mib", (used_kib / 1024).into())
            .with_detail("total_mib", (total_kib / 1024).into())
            .with_detail("percent", percent.into()),
    )
}

#[cfg(test)]
#[cfg(target_os = "linux")]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gpu_listing_prefers_3d_controller() {
        let listing = concat!(
            "00:02.0 \"VGA compatible controller\" \"Intel Corporation\" \"UHD Graphics 620\" -r02 \"Lenovo\" \"Device 2279\"\n",
            "01:00.0 \"3D controller\" \"NVIDIA Corporation\" \"GP108M [GeForce MX150]\" -ra1 \"Lenovo\" \"Device 2279\"\n",
        );
        assert_eq!(parse_gpu_listing(listing).unwrap(), "GP108M [GeForce MX150]");
    }

    #[test]
    fn test_parse_gpu_listing_falls_back_to_vga() {
        let listing = "00:02.0 \"VGA compatible controller\" \"Intel Corporation\" \"UHD Graphics 620\" -r02 \"Lenovo\" \"Device 2279\"\n";
        assert_eq!(parse_gpu_listing(listing).unwrap(), "UHD Graphics 620");
    }

    #[test]
    fn test_parse_gpu_listing_no_adapter() {
        let listing = "00:1f.3 \"Audio device\" \"Intel Corporation\" \"Cannon Point-LP High Definition Audio\"\n";
        assert_eq!(parse_gpu_listing(listing), Err(ParseError::Missing));
    }

    #[test]
    fn test_parse_cached_kib() {
        let meminfo = "MemTotal:       16218344 kB\nCached:          5443308 kB\n";
        assert_eq!(parse_cached_kib(meminfo), Some(5443308));
    }

    #[test]
    fn test_memory_outcome_arithmetic() {
        // 16 GiB total, 4 GiB free, 1 GiB buffers, 3 GiB cached → 8 GiB used.
        let gib = 1024 * 1024;
        match memory_outcome(16 * gib, 4 * gib, gib, 3 * gib) {
            ProbeOutcome::Resolved(value) => {
                assert_eq!(value.text, "8192 MiB / 16384 MiB (50%)");
                assert_eq!(value.detail["percent"], 50);
            }
            other => panic!("expected resolved outcome, got {other:?}"),
        }
    }

    #[test]
    fn test_memory_outcome_zero_total_is_unsupported() {
        assert_eq!(memory_outcome(0, 0, 0, 0), ProbeOutcome::unsupported());
    }

    #[test]
    fn test_memory_resolves_on_live_system() {
        assert!(memory().is_resolved());
    }
}

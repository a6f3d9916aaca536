//! Numeric derivations layered on top of parsed text.

/// Uptime split into calendar-style components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UptimeParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

/// Decompose a second count by successive integer division.
///
/// The identity `days*86400 + hours*3600 + minutes*60 + seconds == total`
/// holds for every input.
pub fn decompose_uptime(total_seconds: u64) -> UptimeParts {
    let days = total_seconds / 86400;
    let hours = total_seconds / 3600 - days * 24;
    let minutes = total_seconds / 60 - days * 1440 - hours * 60;
    let seconds = total_seconds - days * 86400 - hours * 3600 - minutes * 60;
    UptimeParts {
        days,
        hours,
        minutes,
        seconds,
    }
}

/// Human form of an uptime: zero components suppressed, seconds shown only
/// while the total is still under a minute.
pub fn format_uptime(total_seconds: u64) -> String {
    let parts = decompose_uptime(total_seconds);
    let mut out = String::new();
    if parts.days > 0 {
        out.push_str(&format!("{}d ", parts.days));
    }
    if parts.hours > 0 {
        out.push_str(&format!("{}h ", parts.hours));
    }
    if parts.minutes > 0 {
        out.push_str(&format!("{}m ", parts.minutes));
    }
    if total_seconds < 60 {
        out.push_str(&format!("{}s", parts.seconds));
    }
    out.trim_end().to_string()
}

/// Scale a `cpu MHz` value string to GHz with one truncated decimal.
///
/// `"2893.098"` becomes `"2.8"`. The fractional MHz part is ignored, as is
/// anything beyond the first decimal of the GHz value.
pub fn mhz_to_ghz(raw: &str) -> Option<String> {
    let mhz: u64 = raw.trim().split('.').next()?.parse().ok()?;
    let tenths = mhz / 100;
    Some(format!("{}.{}", tenths / 10, tenths % 10))
}

/// Integer percentage `used*100/total`, floored. `total == 0` is undefined
/// rather than a division fault.
pub fn memory_percent(used: u64, total: u64) -> Option<u64> {
    if total == 0 {
        return None;
    }
    Some(used.saturating_mul(100) / total)
}

/// `used MiB / total MiB (percent%)` from KiB counters.
pub fn format_memory(used_kib: u64, total_kib: u64, percent: u64) -> String {
    format!(
        "{} MiB / {} MiB ({}%)",
        used_kib / 1024,
        total_kib / 1024,
        percent
    )
}

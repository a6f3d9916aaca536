//! Parsers for the loosely-structured text formats probes encounter.
//!
//! Two recurring shapes:
//! - key:value files (`/etc/os-release`, `/proc/cpuinfo`, `/proc/meminfo`)
//! - space-separated, double-quoted field listings (`lspci -mm`)
//!
//! All functions take content as a plain `&str` so tests can feed captured
//! fixtures instead of the live system.

use thiserror::Error;

/// Typed failure of a parse step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The expected key or marker is not present in the content.
    #[error("expected key or marker not present")]
    Missing,

    /// The key or marker was found but the surrounding structure is broken.
    #[error("malformed content: {0}")]
    Structure(&'static str),
}

/// Pass captured text through unchanged.
pub fn identity(raw: &str) -> Result<String, ParseError> {
    Ok(raw.to_string())
}

/// Find the first line beginning with `key` and return the value after the
/// `:` or `=` separator, unquoted.
///
/// A matching line without a separator, or a value whose opening quote never
/// closes, is a structure error; an absent key is `Missing`.
pub fn value_after_key(content: &str, key: &str) -> Result<String, ParseError> {
    for line in content.lines() {
        let Some(rest) = line.strip_prefix(key) else {
            continue;
        };
        let rest = rest.trim_start();
        let Some(rest) = rest.strip_prefix([':', '=']) else {
            return Err(ParseError::Structure("missing separator after key"));
        };
        return trim_quoted(rest.trim());
    }
    Err(ParseError::Missing)
}

/// Strip one level of surrounding `"` or `'` quotes.
///
/// Unquoted input passes through untouched, which makes the operation
/// idempotent on its own output.
pub fn trim_quoted(value: &str) -> Result<String, ParseError> {
    match value.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            let body = &value[1..];
            match body.find(quote) {
                Some(end) => Ok(body[..end].to_string()),
                None => Err(ParseError::Structure("unterminated quote")),
            }
        }
        _ => Ok(value.to_string()),
    }
}

/// On the first line containing `marker`, skip `skip` quote-delimited spans
/// after the marker and return the span that follows.
///
/// `lspci -mm` lines look like
/// `00:02.0 "VGA compatible controller" "Intel Corporation" "WhiskeyLake-U GT2 [UHD Graphics 620]" …`;
/// with the class string as marker, skipping three spans lands on the device
/// name. Any miss along the way returns `None`.
pub fn quoted_field_after(content: &str, marker: &str, skip: usize) -> Option<String> {
    let line = content.lines().find(|line| line.contains(marker))?;
    let start = line.find(marker)? + marker.len();
    let mut rest = &line[start..];
    for _ in 0..=skip {
        let quote = rest.find('"')?;
        rest = &rest[quote + 1..];
    }
    let end = rest.find('"')?;
    Some(rest[..end].to_string())
}

/// Number of lines in captured tool output, the way `wc -l` would count
/// newline-terminated records.
pub fn count_lines(text: &str) -> u64 {
    text.lines().count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    const OS_RELEASE: &str = r#"NAME="Ubuntu"
VERSION_ID="24.04"
PRETTY_NAME="Ubuntu 24.04.1 LTS"
ID=ubuntu
"#;

    const CPUINFO: &str = "processor\t: 0\nvendor_id\t: GenuineIntel\nmodel name\t: Intel(R) Core(TM) i7-8565U CPU @ 1.80GHz\ncpu MHz\t\t: 1992.002\n";

    #[test]
    fn test_value_after_key_quoted() {
        assert_eq!(
            value_after_key(OS_RELEASE, "PRETTY_NAME").unwrap(),
            "Ubuntu 24.04.1 LTS"
        );
    }

    #[test]
    fn test_value_after_key_unquoted() {
        assert_eq!(value_after_key(OS_RELEASE, "ID").unwrap(), "ubuntu");
    }

    #[test]
    fn test_value_after_key_colon_separator() {
        assert_eq!(
            value_after_key(CPUINFO, "model name").unwrap(),
            "Intel(R) Core(TM) i7-8565U CPU @ 1.80GHz"
        );
        assert_eq!(value_after_key(CPUINFO, "cpu MHz").unwrap(), "1992.002");
    }

    #[test]
    fn test_value_after_key_meminfo_style() {
        let meminfo = "MemTotal:       16218344 kB\nBuffers:          734512 kB\nCached:          5443308 kB\n";
        assert_eq!(value_after_key(meminfo, "Cached").unwrap(), "5443308 kB");
    }

    #[test]
    fn test_value_after_key_missing() {
        assert_eq!(
            value_after_key(OS_RELEASE, "BUILD_ID"),
            Err(ParseError::Missing)
        );
    }

    #[test]
    fn test_value_after_key_missing_separator() {
        assert_eq!(
            value_after_key("PRETTY_NAME broken line\n", "PRETTY_NAME"),
            Err(ParseError::Structure("missing separator after key"))
        );
    }

    #[test]
    fn test_unterminated_quote_is_structure_error() {
        assert_eq!(
            value_after_key("PRETTY_NAME=\"Ubuntu 24.04\n", "PRETTY_NAME"),
            Err(ParseError::Structure("unterminated quote"))
        );
    }

    #[test]
    fn test_trim_quoted_idempotent() {
        let once = trim_quoted("\"Ubuntu 24.04.1 LTS\"").unwrap();
        let twice = trim_quoted(&once).unwrap();
        assert_eq!(once, "Ubuntu 24.04.1 LTS");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_trim_quoted_single_quotes() {
        assert_eq!(trim_quoted("'Adwaita-dark'").unwrap(), "Adwaita-dark");
    }

    #[test]
    fn test_quoted_field_after_skips_three_spans() {
        let line = "foo\" \"Intel Corporation\" \"WhiskeyLake-U GT2 [UHD Graphics 620]\"";
        assert_eq!(
            quoted_field_after(line, "foo", 3).unwrap(),
            "WhiskeyLake-U GT2 [UHD Graphics 620]"
        );
    }

    #[test]
    fn test_quoted_field_after_lspci_line() {
        let listing = "00:00.0 \"Host bridge\" \"Intel Corporation\" \"Coffee Lake HOST\" -r0c \"Lenovo\" \"Device 2279\"\n00:02.0 \"VGA compatible controller\" \"Intel Corporation\" \"WhiskeyLake-U GT2 [UHD Graphics 620]\" -r02 \"Lenovo\" \"Device 2279\"\n";
        assert_eq!(
            quoted_field_after(listing, "VGA", 3).unwrap(),
            "WhiskeyLake-U GT2 [UHD Graphics 620]"
        );
    }

    #[test]
    fn test_quoted_field_after_marker_absent() {
        assert_eq!(quoted_field_after("nothing here", "VGA", 3), None);
    }

    #[test]
    fn test_quoted_field_after_insufficient_fields() {
        assert_eq!(quoted_field_after("VGA \"one\"", "VGA", 3), None);
    }

    #[test]
    fn test_quoted_field_after_unterminated_field() {
        assert_eq!(
            quoted_field_after("VGA\" \"Intel\" \"WhiskeyLake", "VGA", 3),
            None
        );
    }

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines(".\n.\n.\n"), 3);
        assert_eq!(count_lines("no trailing newline"), 1);
    }
}

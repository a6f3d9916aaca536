//! Network attributes: local interface address and external lookup.

use crate::platform;
use crate::probe::{ProbeOutcome, Runner};
use hf_config::Config;
use tracing::debug;

/// First non-loopback IPv4 address in OS-reported interface order.
pub fn local_ip() -> ProbeOutcome {
    match platform::first_external_ipv4() {
        Some(addr) => ProbeOutcome::resolved(addr.to_string()),
        None => ProbeOutcome::unsupported(),
    }
}

/// Externally visible address, as reported by the configured lookup command.
///
/// The trimmed response is reported verbatim — there is no validation that
/// it is a well-formed address, so a lookup service error page would be
/// shown as-is.
pub fn public_ip(config: &Config, runner: &Runner) -> ProbeOutcome {
    let Some((program, args)) = config.network.public_ip_command.split_first() else {
        return ProbeOutcome::unsupported();
    };

    match runner.capture(program, args) {
        Ok(capture) => {
            let text = capture.text.trim();
            if text.is_empty() {
                ProbeOutcome::unsupported()
            } else {
                ProbeOutcome::resolved(text)
            }
        }
        Err(err) => {
            debug!(error = %err, "public address lookup failed");
            ProbeOutcome::unsupported()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_command(command: &[&str]) -> Config {
        let mut config = Config::default();
        config.network.public_ip_command = command.iter().map(|s| s.to_string()).collect();
        config
    }

    #[test]
    fn test_public_ip_reports_response_verbatim() {
        let config = config_with_command(&["echo", "198.51.100.7"]);
        let outcome = public_ip(&config, &Runner::default());
        assert_eq!(outcome, ProbeOutcome::resolved("198.51.100.7"));
    }

    #[test]
    fn test_public_ip_missing_tool_is_unsupported() {
        let config = config_with_command(&["/nonexistent/lookup-client"]);
        let outcome = public_ip(&config, &Runner::default());
        assert_eq!(outcome, ProbeOutcome::unsupported());
    }

    #[test]
    fn test_public_ip_empty_response_is_unsupported() {
        let config = config_with_command(&["true"]);
        let outcome = public_ip(&config, &Runner::default());
        assert_eq!(outcome, ProbeOutcome::unsupported());
    }
}

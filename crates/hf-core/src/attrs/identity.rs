//! Who and where: title heading, hostname, login name.

use crate::platform;
use crate::probe::{resolve, ProbeOutcome, Runner, Source};

pub fn hostname(runner: &Runner) -> ProbeOutcome {
    resolve(&[Source::call(platform::hostname)], runner)
}

/// Login name: passwd database first, `USER` environment variable as the
/// weaker fallback.
pub fn user(runner: &Runner) -> ProbeOutcome {
    resolve(
        &[Source::call(platform::username), Source::env("USER")],
        runner,
    )
}

/// `user@hostname` heading. A missing passwd entry degrades to `@hostname`
/// as partial output, with the failure marker on the diagnostic stream.
pub fn title() -> ProbeOutcome {
    let host = platform::hostname().unwrap_or_default();
    let user = platform::username().or_else(|| {
        std::env::var("USER")
            .ok()
            .filter(|name| !name.trim().is_empty())
    });

    match user {
        Some(user) => ProbeOutcome::resolved(format!("{user}@{host}")),
        None => ProbeOutcome::unsupported_with(format!("@{host}")),
    }
}

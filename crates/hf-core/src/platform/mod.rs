//! Platform capability layer.
//!
//! One implementation module per operating system, selected at build time;
//! portable POSIX wrappers live in `unix`. Attribute resolvers call these
//! functions and never branch on the OS inline.

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::{first_external_ipv4, hostname, uname_info, username, UnameInfo};

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
pub use linux::{memory_counters, uptime_seconds, MemoryCounters};

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
pub use macos::{cpu_brand, total_memory_bytes, uptime_seconds};

//! Configuration path resolution.
//!
//! Resolution order: CLI argument → environment variables → XDG path →
//! system path → built-in defaults.

use std::path::{Path, PathBuf};

/// Where the configuration file was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly provided via CLI argument.
    CliArgument,

    /// Set via environment variable.
    Environment,

    /// Found in the XDG config directory.
    XdgConfig,

    /// Found in /etc/hostfetch/.
    SystemConfig,

    /// Using built-in defaults.
    #[default]
    BuiltinDefault,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::CliArgument => write!(f, "CLI argument"),
            ConfigSource::Environment => write!(f, "environment variable"),
            ConfigSource::XdgConfig => write!(f, "XDG config"),
            ConfigSource::SystemConfig => write!(f, "system config"),
            ConfigSource::BuiltinDefault => write!(f, "builtin default"),
        }
    }
}

/// Environment variable naming a config file directly.
const ENV_CONFIG_PATH: &str = "HOSTFETCH_CONFIG";

/// Environment variable naming a directory containing the config file.
const ENV_CONFIG_DIR: &str = "HOSTFETCH_CONFIG_DIR";

/// Standard config file name.
const CONFIG_FILENAME: &str = "config.toml";

/// Application name for XDG and /etc directories.
const APP_NAME: &str = "hostfetch";

/// Resolve the configuration file path using the standard resolution order.
///
/// 1. Explicit CLI path (if provided)
/// 2. `HOSTFETCH_CONFIG` environment variable
/// 3. `HOSTFETCH_CONFIG_DIR` environment variable + filename
/// 4. XDG config directory (`~/.config/hostfetch/config.toml`)
/// 5. System config (`/etc/hostfetch/config.toml`)
/// 6. Built-in defaults (`None`)
///
/// A CLI path is returned even when the file does not exist, so that a typo
/// surfaces as a read error instead of silently using defaults.
pub fn resolve_config_path(cli_path: Option<&Path>) -> (Option<PathBuf>, ConfigSource) {
    if let Some(path) = cli_path {
        return (Some(path.to_path_buf()), ConfigSource::CliArgument);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_PATH) {
        if !env_path.is_empty() {
            return (Some(PathBuf::from(env_path)), ConfigSource::Environment);
        }
    }

    if let Ok(config_dir) = std::env::var(ENV_CONFIG_DIR) {
        let path = PathBuf::from(config_dir).join(CONFIG_FILENAME);
        if path.exists() {
            return (Some(path), ConfigSource::Environment);
        }
    }

    if let Some(xdg_config) = dirs::config_dir() {
        let path = xdg_config.join(APP_NAME).join(CONFIG_FILENAME);
        if path.exists() {
            return (Some(path), ConfigSource::XdgConfig);
        }
    }

    let system_path = PathBuf::from("/etc").join(APP_NAME).join(CONFIG_FILENAME);
    if system_path.exists() {
        return (Some(system_path), ConfigSource::SystemConfig);
    }

    (None, ConfigSource::BuiltinDefault)
}

/// XDG config directory for hostfetch.
pub fn xdg_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_path_wins() {
        let (path, source) = resolve_config_path(Some(Path::new("/tmp/custom.toml")));
        assert_eq!(path, Some(PathBuf::from("/tmp/custom.toml")));
        assert_eq!(source, ConfigSource::CliArgument);
    }

    #[test]
    fn test_source_display() {
        assert_eq!(ConfigSource::XdgConfig.to_string(), "XDG config");
        assert_eq!(ConfigSource::BuiltinDefault.to_string(), "builtin default");
    }
}

//! hostfetch display configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for the TOML configuration file
//! - Config resolution (CLI → env → XDG → /etc → defaults)
//! - Semantic validation beyond what serde enforces
//!
//! The configuration is loaded once at startup into an immutable [`Config`]
//! value that callers pass by reference; there is no process-wide mutable
//! state.

pub mod resolve;
pub mod settings;
pub mod validate;

pub use resolve::{resolve_config_path, ConfigSource};
pub use settings::{ColorSettings, Config, NetworkSettings, ReportSettings};
pub use validate::validate;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while locating, parsing, or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("unknown label key: {0}")]
    UnknownLabel(String),

    #[error("network.public_ip_command must name a program")]
    EmptyPublicIpCommand,

    #[error("report.attributes must not be empty")]
    NoAttributes,
}

/// A loaded configuration together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: Option<PathBuf>,
    pub source: ConfigSource,
}

/// Resolve, read, parse, and validate the configuration.
///
/// When no file is found at any resolution step the built-in defaults are
/// returned with [`ConfigSource::BuiltinDefault`].
pub fn load_config(cli_path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let (path, source) = resolve_config_path(cli_path);

    let config = match &path {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            toml::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?
        }
        None => Config::default(),
    };

    validate(&config)?;

    Ok(LoadedConfig {
        config,
        path,
        source,
    })
}

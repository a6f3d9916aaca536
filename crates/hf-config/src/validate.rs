//! Semantic validation beyond serde's structural checks.

use crate::{Config, ConfigError};
use hf_common::AttributeId;

/// Validate a parsed configuration.
///
/// serde already rejects unknown attribute ids in `report.attributes` and
/// unknown color names; this covers what the type system cannot express:
/// label keys must name known attributes, the public-ip command must name a
/// program, and the attribute list must not be empty.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    for key in config.labels.keys() {
        if key.parse::<AttributeId>().is_err() {
            return Err(ConfigError::UnknownLabel(key.clone()));
        }
    }

    if config.network.public_ip_command.is_empty() {
        return Err(ConfigError::EmptyPublicIpCommand);
    }

    if config.report.attributes.is_empty() {
        return Err(ConfigError::NoAttributes);
    }

    Ok(())
}

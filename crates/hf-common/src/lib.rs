//! hostfetch common types.
//!
//! This crate provides foundational types shared across hostfetch crates:
//! - Attribute identifiers and their default labels
//! - Terminal color names used by the display configuration
//! - Common error types with stable exit codes
//! - Output format specifications

pub mod attribute;
pub mod color;
pub mod error;
pub mod output;

pub use attribute::AttributeId;
pub use color::ColorName;
pub use error::{Error, Result};
pub use output::OutputFormat;

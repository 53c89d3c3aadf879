//! Configuration loading from files (std only).

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{ConfigError, Result, SchemaError};

use super::RigConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if the file does not exist,
/// [`ConfigError::IoError`] for any other read failure, and the
/// [`parse_config`] errors for bad content.
///
/// # Example
///
/// ```rust,ignore
/// use rig_config::load_config;
///
/// let config = load_config("config/rig.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RigConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            let shown = path.display().to_string();
            let p = heapless::String::try_from(shown.as_str()).unwrap_or_default();
            ConfigError::NotFound(p)
        } else {
            let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
            ConfigError::IoError(msg)
        }
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// Parsing happens in two stages so syntax and schema problems stay
/// distinguishable: the text is first parsed into a generic TOML document,
/// then that document is decoded into [`RigConfig`] and validated.
///
/// # Errors
///
/// Returns [`ConfigError::ParseError`] for malformed TOML and
/// [`ConfigError::SchemaError`] for documents that parse but violate the
/// rig schema. No partial configuration is ever returned.
pub fn parse_config(content: &str) -> Result<RigConfig> {
    let document: toml::Value = content.parse().map_err(|e: toml::de::Error| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        ConfigError::ParseError(msg)
    })?;

    // Syntax is known-good past this point, so a decode failure is a shape
    // problem: missing key, wrong type, or a rejected leaf value.
    let config: RigConfig = document.try_into().map_err(|e: toml::de::Error| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        ConfigError::SchemaError(SchemaError::Shape(msg))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::Config;
use std::path::Path;

/// File name looked up by [`load_config`].
pub const CONFIG_FILE_NAME: &str = "vhdlgen.toml";

/// Loads `<dir>/vhdlgen.toml`, or the defaults if there is no such file.
pub fn load_config(dir: &Path) -> Result<Config, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok(Config::default());
    }
    load_config_file(&path)
}

/// Loads and validates a configuration file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let arch = &config.codegen.architecture;
    if !is_vhdl_identifier(arch) {
        return Err(ConfigError::Invalid {
            key: "codegen.architecture",
            reason: format!("`{arch}` is not a VHDL identifier"),
        });
    }
    if !(1..=8).contains(&config.codegen.indent) {
        return Err(ConfigError::Invalid {
            key: "codegen.indent",
            reason: format!("must be between 1 and 8, got {}", config.codegen.indent),
        });
    }
    if config.output.file.as_deref() == Some("") {
        return Err(ConfigError::Invalid {
            key: "output.file",
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

/// A basic identifier: a letter, then letters, digits and single underscores,
/// not ending in an underscore.
fn is_vhdl_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    !name.ends_with('_')
        && !name.contains("__")
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

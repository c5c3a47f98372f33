//! Parsing and validation of `vhdlgen.toml` configuration files.
//!
//! Every key is optional; a missing file or section yields [`Config::default`].

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_file, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;

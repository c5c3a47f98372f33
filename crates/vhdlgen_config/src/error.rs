//! Configuration errors.

use std::path::PathBuf;

/// Why a `vhdlgen.toml` could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("cannot read `{}`: {source}", path.display())]
    Io {
        /// The configuration file.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid TOML or has unknown keys.
    #[error("malformed configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A key parsed but its value is out of range.
    #[error("invalid `{key}`: {reason}")]
    Invalid {
        /// Dotted key, e.g. `codegen.indent`.
        key: &'static str,
        /// What is wrong with the value.
        reason: String,
    },
}

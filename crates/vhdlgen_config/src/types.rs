//! Configuration types deserialized from `vhdlgen.toml`.

use serde::Deserialize;

/// The whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Code generation settings.
    #[serde(default)]
    pub codegen: CodegenConfig,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Settings that shape the generated VHDL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodegenConfig {
    /// Name given to every generated architecture.
    #[serde(default = "default_architecture")]
    pub architecture: String,
    /// Spaces per indentation level.
    #[serde(default = "default_indent")]
    pub indent: usize,
    /// Whether to emit provenance comments above processes.
    #[serde(default = "default_comments")]
    pub comments: bool,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            architecture: default_architecture(),
            indent: default_indent(),
            comments: default_comments(),
        }
    }
}

fn default_architecture() -> String {
    "Behavioural".to_string()
}

fn default_indent() -> usize {
    2
}

fn default_comments() -> bool {
    true
}

/// Where the generated text goes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output path used when none is given on the command line.
    #[serde(default)]
    pub file: Option<String>,
}

//! vhdlgen: translates an elaborated Verilog design into VHDL.
//!
//! Reads a JSON design file, translates it, and writes the generated VHDL
//! to a file or standard output. Nothing is written unless the whole design
//! translates.

#![warn(missing_docs)]

mod convert;

use std::process;

use clap::Parser;
use log::LevelFilter;

/// Verilog to VHDL translator.
#[derive(Parser, Debug)]
#[command(name = "vhdlgen", version, about = "Verilog to VHDL translator")]
pub struct Cli {
    /// JSON design file to translate.
    pub input: String,

    /// Output path for the generated VHDL (default: `output.file` from the
    /// config, then standard output).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to a custom `vhdlgen.toml` configuration file.
    #[arg(long)]
    pub config: Option<String>,

    /// Suppress all output except errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log level implied by `--quiet` and `--verbose`.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Error
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

fn init_logger(level: LevelFilter) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.log_level());

    match convert::run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

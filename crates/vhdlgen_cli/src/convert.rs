//! The translation pipeline behind the `vhdlgen` command.
//!
//! 1. Load config (`--config`, else `vhdlgen.toml` in the working directory)
//! 2. Read and check the JSON design file
//! 3. Translate every module and process
//! 4. Render into memory, then write the output in one go

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, info};
use vhdlgen_common::Interner;
use vhdlgen_config::Config;
use vhdlgen_ir::DesignFile;
use vhdlgen_vhdl::{emit_design, EmitOptions};

use crate::Cli;

/// Exit code for a design that uses unsupported constructs.
pub const EXIT_UNSUPPORTED: i32 = 1;
/// Exit code for an internal consistency failure.
pub const EXIT_INTERNAL: i32 = 2;

/// Runs the translation described by `cli`.
///
/// Returns the process exit code; I/O and input format failures are
/// returned as errors.
pub fn run(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(cli.config.as_deref())?;

    let text = fs::read_to_string(&cli.input)
        .map_err(|e| format!("cannot read `{}`: {e}", cli.input))?;
    let file: DesignFile = serde_json::from_str(&text)
        .map_err(|e| format!("malformed design file `{}`: {e}", cli.input))?;
    let interner = Interner::new();
    let design = match file.into_design(&interner) {
        Ok(design) => design,
        Err(e) => {
            error!("{e}");
            return Ok(EXIT_INTERNAL);
        }
    };
    debug!(
        "loaded {} scopes and {} processes from `{}`",
        design.scopes.len(),
        design.processes.len(),
        cli.input
    );

    let vhdl = match vhdlgen_translate::translate_design(&design, &interner, &config.codegen) {
        Ok(vhdl) => vhdl,
        Err(e) if e.is_internal() => {
            error!("{e}");
            return Ok(EXIT_INTERNAL);
        }
        Err(e) => {
            error!("{e}");
            return Ok(EXIT_UNSUPPORTED);
        }
    };

    let options = EmitOptions {
        indent: config.codegen.indent,
        comments: config.codegen.comments,
    };
    let mut rendered = Vec::new();
    emit_design(&vhdl, &mut rendered, &options)?;

    match output_path(cli, &config) {
        Some(path) => {
            fs::write(&path, &rendered)
                .map_err(|e| format!("cannot write `{}`: {e}", path.display()))?;
            info!("wrote {} entities to `{}`", vhdl.entities.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&rendered)?;
            stdout.flush()?;
        }
    }
    Ok(0)
}

fn resolve_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => vhdlgen_config::load_config_file(Path::new(path))?,
        None => vhdlgen_config::load_config(&std::env::current_dir()?)?,
    };
    Ok(config)
}

/// `-o` wins over `output.file`; `None` means standard output.
fn output_path(cli: &Cli, config: &Config) -> Option<PathBuf> {
    cli.output
        .as_deref()
        .or(config.output.file.as_deref())
        .map(PathBuf::from)
}

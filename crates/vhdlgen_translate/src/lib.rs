//! Verilog IR to VHDL translation.
//!
//! Translation runs in two phases over one [`EntityRegistry`]:
//!
//! 1. [`elaborate`](elaborate::elaborate) walks the module hierarchy and
//!    creates one entity per module definition, filling the registry.
//! 2. [`translate_process`] turns every source process into a VHDL process,
//!    reading the registry but never changing it.
//!
//! The first error aborts the run; no partial design is returned.

#![warn(missing_docs)]

pub mod elaborate;
pub mod errors;
pub mod expr;
pub mod process;
pub mod registry;
pub mod stmt;

pub use errors::TranslateError;
pub use process::{translate_process, ProcessOutcome};
pub use registry::EntityRegistry;
pub use stmt::{translate_stmt, StmtContext};

use log::info;
use vhdlgen_common::Interner;
use vhdlgen_config::CodegenConfig;
use vhdlgen_ir::Design;
use vhdlgen_vhdl::VhdlDesign;

/// Package every generated unit uses.
pub const IEEE_STD_LOGIC: &str = "ieee.std_logic_1164.all";
/// Package providing `Line`, `write` and `writeline`.
pub const STD_TEXTIO: &str = "std.textio.all";
/// Package providing `write` for `std_logic` values.
pub const IEEE_STD_LOGIC_TEXTIO: &str = "ieee.std_logic_textio.all";

/// Translates a whole design.
pub fn translate_design(
    ir: &Design,
    interner: &Interner,
    config: &CodegenConfig,
) -> Result<VhdlDesign, TranslateError> {
    let mut vhdl = VhdlDesign::new();
    let mut registry = EntityRegistry::new();
    elaborate::elaborate(ir, interner, config, &mut vhdl, &mut registry)?;

    let mut translated = 0;
    for process in ir.processes.values() {
        if translate_process(ir, interner, process, &mut vhdl, &registry)?
            == ProcessOutcome::Translated
        {
            translated += 1;
        }
    }
    info!(
        "translated {translated} of {} processes into {} entities",
        ir.processes.len(),
        vhdl.entities.len()
    );
    Ok(vhdl)
}

//! Process translation driver.
//!
//! A module may be instantiated many times, but its processes are
//! translated once: only for the instance the module's entity was derived
//! from. Other instances are skipped without side effects.

use log::{debug, info};
use vhdlgen_common::{Interner, InternalError};
use vhdlgen_ir::{Design, Process, ProcessKind};
use vhdlgen_vhdl::{ConcStmt, Process as VhdlProcess, SeqStmt, VhdlDesign, WaitKind};

use crate::errors::TranslateError;
use crate::registry::EntityRegistry;
use crate::stmt::{translate_stmt, StmtContext};

/// What happened to one source process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// A VHDL process was added to the entity's architecture.
    Translated,
    /// The process belongs to a non-definitional instance.
    Skipped,
}

/// Translates one source process into the architecture of its module's
/// entity.
///
/// The empty VHDL process is attached before its body is translated. An
/// `initial` process gets a trailing `wait;` so it runs once. On error the
/// partially built process is left in place; the caller discards the whole
/// design.
pub fn translate_process(
    ir: &Design,
    interner: &Interner,
    process: &Process,
    vhdl: &mut VhdlDesign,
    registry: &EntityRegistry,
) -> Result<ProcessOutcome, TranslateError> {
    let scope = ir.scope(process.scope);
    if !scope.is_module() {
        return Err(InternalError::new(format!(
            "process #{} is not directly inside a module scope",
            process.id.as_raw()
        ))
        .into());
    }
    let def_name = interner.resolve(scope.def_name);
    let path = ir.qualified_name(process.scope, interner);
    let entity_id = registry
        .lookup(def_name)
        .ok_or_else(|| InternalError::new(format!("no entity for module `{def_name}`")))?;

    let VhdlDesign {
        types,
        entities,
        archs,
    } = vhdl;
    let entity = &mut entities[entity_id];
    if entity.derived_from() != path {
        debug!(
            "skipping {} process in `{path}`: `{def_name}` derives from `{}`",
            process.kind,
            entity.derived_from()
        );
        return Ok(ProcessOutcome::Skipped);
    }

    let arch = &mut archs[entity.arch()];
    let index = arch.add_stmt(ConcStmt::process(VhdlProcess::new("")))?;
    let target = arch
        .process_mut(index)
        .ok_or_else(|| InternalError::new("attached process is missing"))?;

    let mut ctx = StmtContext {
        ir,
        interner,
        scope: process.scope,
        signal_names: registry.signal_names(entity_id),
        types,
        entity,
        kind: process.kind,
    };
    translate_stmt(&mut ctx, &mut target.block(), &process.body)?;

    if process.kind == ProcessKind::Initial {
        target.add_stmt(SeqStmt::Wait(WaitKind::Indefinite));
    }
    target.set_comment(format!("Generated from {} process in {path}", process.kind));
    info!("translated {} process in `{path}`", process.kind);
    Ok(ProcessOutcome::Translated)
}

//! Statement dispatcher: one source statement into the current VHDL block.
//!
//! The dispatcher only ever appends to the block it is given. Declarations
//! it needs (the `$display` line buffer) go to the enclosing process after a
//! `has_declared_var` check, and packages it needs go to the entity.

use log::trace;
use vhdlgen_common::{Interner, InternalError};
use vhdlgen_ir::{self as ir, Design, Edge, ProcessKind, ScopeId, SignalId, Statement};
use vhdlgen_vhdl::{
    BinaryOp, Decl, Entity, Expr, SeqBlock, SeqStmt, TypeDb, VarRef, VhdlType, WaitKind,
};

use crate::errors::TranslateError;
use crate::expr::translate_expr;
use crate::{IEEE_STD_LOGIC_TEXTIO, STD_TEXTIO};

/// Name of the process variable that buffers `$display` output.
pub const DISPLAY_LINE: &str = "Verilog_Display_Line";

/// Everything statement translation may read or extend besides the block.
pub struct StmtContext<'a> {
    /// The source design.
    pub ir: &'a Design,
    /// Resolves source names.
    pub interner: &'a Interner,
    /// The module scope that owns the process.
    pub scope: ScopeId,
    /// VHDL names of the module's signals, indexed by signal ID.
    pub signal_names: &'a [String],
    /// The design-wide type database.
    pub types: &'a mut TypeDb,
    /// The entity whose architecture holds the process.
    pub entity: &'a mut Entity,
    /// Run-once or triggered.
    pub kind: ProcessKind,
}

impl StmtContext<'_> {
    /// A reference to a signal of the current module.
    pub fn signal_ref(&mut self, id: SignalId) -> Result<VarRef, TranslateError> {
        let signal = self
            .ir
            .signal(self.scope, id)
            .ok_or_else(|| TranslateError::UnknownSignal {
                scope: self.ir.qualified_name(self.scope, self.interner),
                signal: id.as_raw(),
            })?;
        let name = self
            .signal_names
            .get(id.as_raw() as usize)
            .ok_or_else(|| {
                InternalError::new(format!(
                    "signal `{}` was never named",
                    self.interner.resolve(signal.name)
                ))
            })?;
        Ok(VarRef::new(name.as_str(), self.types.bits(signal.width)))
    }
}

/// Translates `stmt` as the root statement of a process body.
///
/// The root is the one place where an event control of an `always` process
/// turns into the process sensitivity list.
pub fn translate_stmt(
    ctx: &mut StmtContext<'_>,
    block: &mut SeqBlock<'_>,
    stmt: &Statement,
) -> Result<(), TranslateError> {
    translate(ctx, block, stmt, true)
}

fn translate(
    ctx: &mut StmtContext<'_>,
    block: &mut SeqBlock<'_>,
    stmt: &Statement,
    at_root: bool,
) -> Result<(), TranslateError> {
    match stmt {
        Statement::Block(stmts) => {
            for s in stmts {
                translate(ctx, block, s, false)?;
            }
            Ok(())
        }
        Statement::Nop => {
            block.add_stmt(SeqStmt::Null);
            Ok(())
        }
        Statement::Assign { target, value, .. } => {
            let target = ctx.signal_ref(*target)?;
            let value = translate_expr(ctx, value)?.cast(target.ty, ctx.types)?;
            trace!("assign `{}`", target.name);
            block.add_stmt(SeqStmt::SignalAssign { target, value });
            Ok(())
        }
        Statement::Delay { ns, body } => {
            forbid_wait_in_sensitive(block, "delay")?;
            let time = Expr::time_ns(*ns, ctx.types);
            block.add_stmt(SeqStmt::Wait(WaitKind::For(time)));
            translate(ctx, block, body, false)
        }
        Statement::Wait { events, body } => {
            if at_root && ctx.kind == ProcessKind::Always && block.is_empty() {
                translate_sensitivity(ctx, block, events, body)
            } else {
                translate_wait(ctx, block, events, body)
            }
        }
        Statement::If {
            condition,
            then_body,
            else_body,
        } => {
            let boolean = ctx.types.boolean();
            let condition = translate_expr(ctx, condition)?.cast(boolean, ctx.types)?;
            let mut then_stmts = Vec::new();
            translate(ctx, &mut block.nested(&mut then_stmts), then_body, false)?;
            let mut else_stmts = Vec::new();
            if let Some(else_body) = else_body {
                translate(ctx, &mut block.nested(&mut else_stmts), else_body, false)?;
            }
            block.add_stmt(SeqStmt::If {
                condition,
                then_stmts,
                else_stmts,
            });
            Ok(())
        }
        Statement::Display { format, args } => translate_display(ctx, block, format, args),
        Statement::Finish => Err(TranslateError::UnsupportedStatement(
            "`$finish` has no VHDL equivalent".to_string(),
        )),
    }
}

/// `always @(events) body` at the top of a process: the events become the
/// sensitivity list and edges become a guarding `if`.
fn translate_sensitivity(
    ctx: &mut StmtContext<'_>,
    block: &mut SeqBlock<'_>,
    events: &[ir::Event],
    body: &Statement,
) -> Result<(), TranslateError> {
    let edge = edge_condition(ctx, events)?;
    for event in events {
        let signal = ctx.signal_ref(event.signal)?;
        block.add_sensitivity(signal.name);
    }
    match edge {
        Some(condition) => {
            let mut then_stmts = Vec::new();
            translate(ctx, &mut block.nested(&mut then_stmts), body, false)?;
            block.add_stmt(SeqStmt::If {
                condition,
                then_stmts,
                else_stmts: Vec::new(),
            });
            Ok(())
        }
        None => translate(ctx, block, body, false),
    }
}

/// An event control anywhere else: an explicit `wait` before the body.
fn translate_wait(
    ctx: &mut StmtContext<'_>,
    block: &mut SeqBlock<'_>,
    events: &[ir::Event],
    body: &Statement,
) -> Result<(), TranslateError> {
    forbid_wait_in_sensitive(block, "event control")?;
    let wait = match edge_condition(ctx, events)? {
        Some(condition) => WaitKind::Until(condition),
        None => {
            let names = events
                .iter()
                .map(|e| ctx.signal_ref(e.signal).map(|r| r.name))
                .collect::<Result<Vec<_>, _>>()?;
            WaitKind::On(names)
        }
    };
    block.add_stmt(SeqStmt::Wait(wait));
    translate(ctx, block, body, false)
}

/// Returns the OR of `rising_edge`/`falling_edge` calls when every event has
/// an edge, `None` when none has, and an error for a mix or an empty list.
fn edge_condition(
    ctx: &mut StmtContext<'_>,
    events: &[ir::Event],
) -> Result<Option<Expr>, TranslateError> {
    if events.is_empty() {
        return Err(TranslateError::UnsupportedStatement(
            "empty event control".to_string(),
        ));
    }
    let edges = events.iter().filter(|e| e.edge.is_some()).count();
    if edges == 0 {
        return Ok(None);
    }
    if edges != events.len() {
        return Err(TranslateError::UnsupportedStatement(
            "event control mixes edge and level events".to_string(),
        ));
    }
    let boolean = ctx.types.boolean();
    let mut condition: Option<Expr> = None;
    for event in events {
        let signal = ctx.signal_ref(event.signal)?;
        if *ctx.types.get(signal.ty) != VhdlType::StdLogic {
            return Err(TranslateError::UnsupportedStatement(format!(
                "edge on multi-bit signal `{}`",
                signal.name
            )));
        }
        let func = match event.edge {
            Some(Edge::Negedge) => "falling_edge",
            _ => "rising_edge",
        };
        let call = Expr::call(func, vec![Expr::VarRef(signal)], boolean);
        condition = Some(match condition {
            Some(prev) => Expr::binary(BinaryOp::Or, prev, call, boolean),
            None => call,
        });
    }
    Ok(condition)
}

fn forbid_wait_in_sensitive(block: &SeqBlock<'_>, what: &str) -> Result<(), TranslateError> {
    if block.is_sensitive() {
        return Err(TranslateError::UnsupportedStatement(format!(
            "{what} inside a process with a sensitivity list"
        )));
    }
    Ok(())
}

fn translate_display(
    ctx: &mut StmtContext<'_>,
    block: &mut SeqBlock<'_>,
    format: &str,
    args: &[ir::Expr],
) -> Result<(), TranslateError> {
    let line_ty = ctx.types.line();
    if !block.has_declared_var(DISPLAY_LINE) {
        block.add_decl(Decl::variable(DISPLAY_LINE, line_ty));
    }
    ctx.entity.requires_package(STD_TEXTIO);

    let line = || Expr::var(DISPLAY_LINE, line_ty);
    if !format.is_empty() {
        let text = Expr::qualified(Expr::string(format, ctx.types), ctx.types);
        block.add_stmt(SeqStmt::ProcedureCall {
            name: "write".to_string(),
            args: vec![line(), text],
        });
    }
    for arg in args {
        let value = translate_expr(ctx, arg)?;
        if ctx.types.get(value.ty()).bit_width().is_some() {
            ctx.entity.requires_package(IEEE_STD_LOGIC_TEXTIO);
        }
        block.add_stmt(SeqStmt::ProcedureCall {
            name: "write".to_string(),
            args: vec![line(), value],
        });
    }
    let output = Expr::var("Output", ctx.types.text());
    block.add_stmt(SeqStmt::ProcedureCall {
        name: "writeline".to_string(),
        args: vec![output, line()],
    });
    Ok(())
}

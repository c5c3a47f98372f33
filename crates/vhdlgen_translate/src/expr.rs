//! Expression translation.

use vhdlgen_ir as ir;
use vhdlgen_vhdl::{BinaryOp, Expr, TypeDb, UnaryOp};

use crate::errors::TranslateError;
use crate::stmt::StmtContext;

/// Translates a source expression in the context of the current process.
pub fn translate_expr(ctx: &mut StmtContext<'_>, expr: &ir::Expr) -> Result<Expr, TranslateError> {
    match expr {
        ir::Expr::Signal(id) => ctx.signal_ref(*id).map(Expr::VarRef),
        ir::Expr::Number(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(bit), None) => Ok(Expr::bit(bit, ctx.types)?),
                _ => Ok(Expr::bits(text, ctx.types)?),
            }
        }
        ir::Expr::Str(text) => Ok(Expr::string(text.as_str(), ctx.types)),
        ir::Expr::Unary { op, operand } => {
            let operand = translate_expr(ctx, operand)?;
            require_bits(&operand, ctx.types, "operand of `not`")?;
            match op {
                ir::UnaryOp::Not => Ok(Expr::unary(UnaryOp::Not, operand)),
            }
        }
        ir::Expr::Binary { op, lhs, rhs } => {
            let lhs = translate_expr(ctx, lhs)?;
            let rhs = translate_expr(ctx, rhs)?;
            let (lhs, rhs) = unify(lhs, rhs, ctx.types)?;
            let op = binary_op(*op);
            if op.is_relational() {
                let ty = ctx.types.boolean();
                Ok(Expr::binary(op, lhs, rhs, ty))
            } else {
                require_bits(&lhs, ctx.types, op.symbol())?;
                let ty = lhs.ty();
                Ok(Expr::binary(op, lhs, rhs, ty))
            }
        }
    }
}

fn binary_op(op: ir::BinaryOp) -> BinaryOp {
    match op {
        ir::BinaryOp::And => BinaryOp::And,
        ir::BinaryOp::Or => BinaryOp::Or,
        ir::BinaryOp::Xor => BinaryOp::Xor,
        ir::BinaryOp::Eq => BinaryOp::Eq,
        ir::BinaryOp::Ne => BinaryOp::Ne,
    }
}

fn is_literal(e: &Expr) -> bool {
    matches!(e, Expr::ConstBit { .. } | Expr::ConstBits { .. })
}

/// Brings both operands to one type, resizing whichever side is a literal.
fn unify(lhs: Expr, rhs: Expr, types: &TypeDb) -> Result<(Expr, Expr), TranslateError> {
    if lhs.ty() == rhs.ty() {
        Ok((lhs, rhs))
    } else if is_literal(&lhs) && !is_literal(&rhs) {
        Ok((lhs.cast(rhs.ty(), types)?, rhs))
    } else {
        let rhs = rhs.cast(lhs.ty(), types)?;
        Ok((lhs, rhs))
    }
}

fn require_bits(e: &Expr, types: &TypeDb, what: &str) -> Result<(), TranslateError> {
    if types.get(e.ty()).bit_width().is_none() {
        return Err(TranslateError::UnsupportedExpression(format!(
            "{what} must be a bit value, got `{}`",
            types.name(e.ty())
        )));
    }
    Ok(())
}

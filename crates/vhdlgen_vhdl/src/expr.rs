//! VHDL expressions.
//!
//! Every expression carries its resolved [`TypeId`]. Conversions between
//! types go through [`Expr::cast`], which either yields an expression of
//! exactly the requested type or fails with [`AstError::UnsupportedCast`].

use crate::error::AstError;
use crate::ids::TypeId;
use crate::types::{TypeDb, VhdlType};
use std::fmt;
use vhdlgen_common::Logic;

/// A reference to a named signal or variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VarRef {
    /// The referenced name.
    pub name: String,
    /// The declared type of the object.
    pub ty: TypeId,
}

impl VarRef {
    /// Creates a reference.
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `not`.
    Not,
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `and`.
    And,
    /// `or`.
    Or,
    /// `xor`.
    Xor,
    /// `=`.
    Eq,
    /// `/=`.
    Ne,
}

impl BinaryOp {
    /// The VHDL spelling of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Xor => "xor",
            BinaryOp::Eq => "=",
            BinaryOp::Ne => "/=",
        }
    }

    /// Returns `true` for operators whose result is `Boolean`.
    pub fn is_relational(self) -> bool {
        matches!(self, BinaryOp::Eq | BinaryOp::Ne)
    }
}

/// A VHDL expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A signal or variable reference.
    VarRef(VarRef),
    /// A string literal, rendered with VHDL quoting.
    ConstString {
        /// The unquoted text.
        value: String,
        /// Always `String`.
        ty: TypeId,
    },
    /// A bit-string literal, MSB first, e.g. `"01XZ"`.
    ConstBits {
        /// The bits, most significant first. Never empty.
        bits: Vec<Logic>,
        /// A vector type of the same width.
        ty: TypeId,
    },
    /// A single-bit literal, e.g. `'1'`.
    ConstBit {
        /// The bit.
        bit: Logic,
        /// Always `std_logic`.
        ty: TypeId,
    },
    /// An integer literal.
    ConstInt {
        /// The value.
        value: i64,
        /// Always `Integer`.
        ty: TypeId,
    },
    /// A physical time literal in nanoseconds, e.g. `10 ns`.
    ConstTime {
        /// The number of nanoseconds.
        ns: u64,
        /// Always `Time`.
        ty: TypeId,
    },
    /// A function call. Arity and argument types are not checked.
    FuncCall {
        /// The function name.
        name: String,
        /// Arguments in order.
        args: Vec<Expr>,
        /// The return type.
        ty: TypeId,
    },
    /// A qualified expression, e.g. `String'("text")`.
    Qualified {
        /// The type mark written before the tick.
        mark: String,
        /// The qualified operand.
        operand: Box<Expr>,
        /// The type named by `mark`.
        ty: TypeId,
    },
    /// A unary operation.
    Unary {
        /// The operator.
        op: UnaryOp,
        /// The operand.
        operand: Box<Expr>,
        /// The result type.
        ty: TypeId,
    },
    /// A binary operation.
    Binary {
        /// The operator.
        op: BinaryOp,
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
        /// The result type.
        ty: TypeId,
    },
}

impl Expr {
    /// A reference to `name` of type `ty`.
    pub fn var(name: impl Into<String>, ty: TypeId) -> Self {
        Expr::VarRef(VarRef::new(name, ty))
    }

    /// A string literal.
    pub fn string(value: impl Into<String>, types: &mut TypeDb) -> Self {
        Expr::ConstString {
            value: value.into(),
            ty: types.string(),
        }
    }

    /// A bit-vector literal parsed from `text`, MSB first.
    ///
    /// The literal's type is a vector as wide as the text.
    pub fn bits(text: &str, types: &mut TypeDb) -> Result<Self, AstError> {
        let bits = Logic::parse_bits(text).map_err(|ch| AstError::MalformedLiteral {
            literal: text.to_string(),
            ch,
        })?;
        if bits.is_empty() {
            return Err(AstError::EmptyLiteral);
        }
        let ty = types.vector(bits.len() as u32);
        Ok(Expr::ConstBits { bits, ty })
    }

    /// A scalar bit literal parsed from a single character.
    pub fn bit(ch: char, types: &mut TypeDb) -> Result<Self, AstError> {
        let bit = Logic::from_char(ch).ok_or_else(|| AstError::MalformedLiteral {
            literal: ch.to_string(),
            ch,
        })?;
        Ok(Expr::ConstBit {
            bit,
            ty: types.std_logic(),
        })
    }

    /// An integer literal.
    pub fn int(value: i64, types: &mut TypeDb) -> Self {
        Expr::ConstInt {
            value,
            ty: types.integer(),
        }
    }

    /// A time literal in nanoseconds.
    pub fn time_ns(ns: u64, types: &mut TypeDb) -> Self {
        Expr::ConstTime {
            ns,
            ty: types.time(),
        }
    }

    /// A function call returning `ty`.
    pub fn call(name: impl Into<String>, args: Vec<Expr>, ty: TypeId) -> Self {
        Expr::FuncCall {
            name: name.into(),
            args,
            ty,
        }
    }

    /// `operand` qualified with the name of its own type, e.g. `String'("…")`.
    pub fn qualified(operand: Expr, types: &TypeDb) -> Self {
        let ty = operand.ty();
        Expr::Qualified {
            mark: types.name(ty),
            operand: Box::new(operand),
            ty,
        }
    }

    /// A unary operation; the result has the operand's type.
    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        let ty = operand.ty();
        Expr::Unary {
            op,
            operand: Box::new(operand),
            ty,
        }
    }

    /// A binary operation producing `ty`.
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr, ty: TypeId) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            ty,
        }
    }

    /// Returns the resolved type.
    pub fn ty(&self) -> TypeId {
        match self {
            Expr::VarRef(v) => v.ty,
            Expr::ConstString { ty, .. }
            | Expr::ConstBits { ty, .. }
            | Expr::ConstBit { ty, .. }
            | Expr::ConstInt { ty, .. }
            | Expr::ConstTime { ty, .. }
            | Expr::FuncCall { ty, .. }
            | Expr::Qualified { ty, .. }
            | Expr::Unary { ty, .. }
            | Expr::Binary { ty, .. } => *ty,
        }
    }

    /// Converts this expression to type `to`.
    ///
    /// Supported conversions:
    /// - any expression to its own type (a copy);
    /// - bit-vector literal to a vector of another width, truncating or
    ///   zero-extending on the most significant side;
    /// - bit-vector literal to `std_logic`, keeping the least significant bit;
    /// - scalar bit literal to a vector, zero-extended;
    /// - any `std_logic` expression to `Boolean`, as `expr = '1'`.
    ///
    /// A zero-width vector is never a valid target.
    pub fn cast(&self, to: TypeId, types: &TypeDb) -> Result<Expr, AstError> {
        if self.ty() == to {
            return Ok(self.clone());
        }
        let from_ty = *types.get(self.ty());
        if types.get(to).bit_width() == Some(0) {
            return Err(AstError::UnsupportedCast {
                from: from_ty.to_string(),
                to: types.name(to),
            });
        }
        match (self, *types.get(to)) {
            (Expr::ConstBits { bits, .. }, VhdlType::StdLogicVector { width }) => {
                Ok(Expr::ConstBits {
                    bits: resize(bits, width as usize),
                    ty: to,
                })
            }
            (Expr::ConstBits { bits, .. }, VhdlType::StdLogic) => Ok(Expr::ConstBit {
                bit: bits.last().copied().unwrap_or(Logic::Zero),
                ty: to,
            }),
            (Expr::ConstBit { bit, .. }, VhdlType::StdLogicVector { width }) => {
                Ok(Expr::ConstBits {
                    bits: resize(&[*bit], width as usize),
                    ty: to,
                })
            }
            (_, VhdlType::Boolean) if from_ty == VhdlType::StdLogic => {
                let one = Expr::ConstBit {
                    bit: Logic::One,
                    ty: self.ty(),
                };
                Ok(Expr::binary(BinaryOp::Eq, self.clone(), one, to))
            }
            _ => Err(AstError::UnsupportedCast {
                from: from_ty.to_string(),
                to: types.name(to),
            }),
        }
    }

    fn is_compound(&self) -> bool {
        match self {
            Expr::Binary { .. } | Expr::Unary { .. } => true,
            Expr::ConstString { value, .. } => value.chars().any(|c| c.is_control()),
            _ => false,
        }
    }
}

fn resize(bits: &[Logic], width: usize) -> Vec<Logic> {
    if bits.len() >= width {
        bits[bits.len() - width..].to_vec()
    } else {
        let mut out = vec![Logic::Zero; width - bits.len()];
        out.extend_from_slice(bits);
        out
    }
}

/// Writes a string literal. Control characters cannot appear inside quotes,
/// so they are concatenated as `character` values: `"done" & LF`.
fn write_string(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    let mut quoted = String::new();
    let mut first = true;
    let mut open = true;
    for c in value.chars() {
        if c.is_control() {
            if open {
                if !first {
                    f.write_str(" & ")?;
                }
                write!(f, "\"{quoted}\"")?;
                quoted.clear();
            }
            write!(f, " & {}", control_name(c))?;
            first = false;
            open = false;
        } else {
            if c == '"' {
                quoted.push('"');
            }
            quoted.push(c);
            open = true;
        }
    }
    if open || first {
        if !first {
            f.write_str(" & ")?;
        }
        write!(f, "\"{quoted}\"")?;
    }
    Ok(())
}

/// The `std.standard` name of a control character.
fn control_name(c: char) -> String {
    match c {
        '\n' => "LF".to_string(),
        '\r' => "CR".to_string(),
        '\t' => "HT".to_string(),
        '\0' => "NUL".to_string(),
        _ => format!("character'val({})", c as u32),
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, e: &Expr) -> fmt::Result {
    if e.is_compound() {
        write!(f, "({e})")
    } else {
        write!(f, "{e}")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::VarRef(v) => f.write_str(&v.name),
            Expr::ConstString { value, .. } => write_string(f, value),
            Expr::ConstBits { bits, .. } => {
                f.write_str("\"")?;
                for bit in bits {
                    write!(f, "{bit}")?;
                }
                f.write_str("\"")
            }
            Expr::ConstBit { bit, .. } => write!(f, "'{bit}'"),
            Expr::ConstInt { value, .. } => write!(f, "{value}"),
            Expr::ConstTime { ns, .. } => write!(f, "{ns} ns"),
            Expr::FuncCall { name, args, .. } => {
                f.write_str(name)?;
                if !args.is_empty() {
                    f.write_str("(")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(")")?;
                }
                Ok(())
            }
            Expr::Qualified { mark, operand, .. } => write!(f, "{mark}'({operand})"),
            Expr::Unary { op, operand, .. } => {
                match op {
                    UnaryOp::Not => f.write_str("not ")?,
                }
                write_operand(f, operand)
            }
            Expr::Binary { op, lhs, rhs, .. } => {
                write_operand(f, lhs)?;
                write!(f, " {} ", op.symbol())?;
                write_operand(f, rhs)
            }
        }
    }
}

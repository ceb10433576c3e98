//! Operators carried by comparison and arithmetic value nodes.

use crate::IrError;

/// Relational operator of a comparison node.
///
/// The set is closed: every rule that matches on it is exhaustive, so
/// adding a variant is a compile error at each rule site until handled.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ComparisonOp {
    Eq = 0,
    Ne = 1,
    Lt = 2,
    Le = 3,
    Gt = 4,
    Ge = 5,
}

impl ComparisonOp {
    /// All operators, in code order.
    pub const ALL: [ComparisonOp; 6] = [
        ComparisonOp::Eq,
        ComparisonOp::Ne,
        ComparisonOp::Lt,
        ComparisonOp::Le,
        ComparisonOp::Gt,
        ComparisonOp::Ge,
    ];

    /// Decode the raw operator code produced by the front end.
    pub const fn from_code(code: u8) -> Result<Self, IrError> {
        match code {
            0 => Ok(ComparisonOp::Eq),
            1 => Ok(ComparisonOp::Ne),
            2 => Ok(ComparisonOp::Lt),
            3 => Ok(ComparisonOp::Le),
            4 => Ok(ComparisonOp::Gt),
            5 => Ok(ComparisonOp::Ge),
            _ => Err(IrError::UnknownComparisonOperator { code }),
        }
    }

    /// Raw operator code.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Logical negation: `!(a op b)` is `a op.inverse() b`.
    pub const fn inverse(self) -> Self {
        match self {
            ComparisonOp::Eq => ComparisonOp::Ne,
            ComparisonOp::Ne => ComparisonOp::Eq,
            ComparisonOp::Lt => ComparisonOp::Ge,
            ComparisonOp::Ge => ComparisonOp::Lt,
            ComparisonOp::Gt => ComparisonOp::Le,
            ComparisonOp::Le => ComparisonOp::Gt,
        }
    }

    /// Operand swap: `a op b` is `b op.mirror() a`.
    pub const fn mirror(self) -> Self {
        match self {
            ComparisonOp::Eq => ComparisonOp::Eq,
            ComparisonOp::Ne => ComparisonOp::Ne,
            ComparisonOp::Ge => ComparisonOp::Le,
            ComparisonOp::Gt => ComparisonOp::Lt,
            ComparisonOp::Le => ComparisonOp::Ge,
            ComparisonOp::Lt => ComparisonOp::Gt,
        }
    }

    /// Returns `true` for `Eq` and `Ne`.
    #[inline]
    pub const fn is_equality(self) -> bool {
        matches!(self, ComparisonOp::Eq | ComparisonOp::Ne)
    }

    /// Apply the operator to two integers.
    pub fn eval(self, left: i64, right: i64) -> bool {
        match self {
            ComparisonOp::Eq => left == right,
            ComparisonOp::Ne => left != right,
            ComparisonOp::Lt => left < right,
            ComparisonOp::Le => left <= right,
            ComparisonOp::Gt => left > right,
            ComparisonOp::Ge => left >= right,
        }
    }

    /// Short lowercase name, as used in the prefix rendering (`eq`, `lt`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            ComparisonOp::Eq => "eq",
            ComparisonOp::Ne => "ne",
            ComparisonOp::Lt => "lt",
            ComparisonOp::Le => "le",
            ComparisonOp::Gt => "gt",
            ComparisonOp::Ge => "ge",
        }
    }
}

/// Operator of an arithmetic value node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum MathOp {
    Add = 0,
    Sub = 1,
    Mul = 2,
    Div = 3,
    Rem = 4,
    BitAnd = 5,
    BitOr = 6,
    BitXor = 7,
    Shl = 8,
    Shr = 9,
    Ushr = 10,
    /// Three-way compare of longs (`lcmp`).
    Cmp = 11,
    /// Three-way compare of floats, NaN yields -1 (`fcmpl`/`dcmpl`).
    Cmpl = 12,
    /// Three-way compare of floats, NaN yields 1 (`fcmpg`/`dcmpg`).
    Cmpg = 13,
}

impl MathOp {
    /// Decode the raw operator code produced by the front end.
    pub const fn from_code(code: u8) -> Result<Self, IrError> {
        Ok(match code {
            0 => MathOp::Add,
            1 => MathOp::Sub,
            2 => MathOp::Mul,
            3 => MathOp::Div,
            4 => MathOp::Rem,
            5 => MathOp::BitAnd,
            6 => MathOp::BitOr,
            7 => MathOp::BitXor,
            8 => MathOp::Shl,
            9 => MathOp::Shr,
            10 => MathOp::Ushr,
            11 => MathOp::Cmp,
            12 => MathOp::Cmpl,
            13 => MathOp::Cmpg,
            _ => return Err(IrError::UnknownMathOperator { code }),
        })
    }

    /// Raw operator code.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns `true` for the three-way compare family, whose result is a
    /// signed integer summarizing the ordering of its operands.
    #[inline]
    pub const fn is_three_way(self) -> bool {
        matches!(self, MathOp::Cmp | MathOp::Cmpl | MathOp::Cmpg)
    }

    /// Short lowercase name, as used in the prefix rendering.
    pub const fn name(self) -> &'static str {
        match self {
            MathOp::Add => "add",
            MathOp::Sub => "sub",
            MathOp::Mul => "mul",
            MathOp::Div => "div",
            MathOp::Rem => "rem",
            MathOp::BitAnd => "and",
            MathOp::BitOr => "or",
            MathOp::BitXor => "xor",
            MathOp::Shl => "shl",
            MathOp::Shr => "shr",
            MathOp::Ushr => "ushr",
            MathOp::Cmp => "cmp",
            MathOp::Cmpl => "cmpl",
            MathOp::Cmpg => "cmpg",
        }
    }
}

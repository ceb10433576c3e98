//! Value node kinds: the closed algebra the rewriter matches on.

use crate::{ComparisonOp, MathOp, MethodSignature, Name, ValueId, ValueRange, ValueType};

/// Kind of a value node.
///
/// Children are referenced by [`ValueId`]; call arguments by [`ValueRange`]
/// into the arena's list storage. `Copy` so handlers can match on a kind
/// while pushing replacement nodes into the same arena.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    /// 32-bit integer literal (also the JVM encoding of booleans).
    Int(i32),
    /// 64-bit integer literal.
    Long(i64),
    /// Double literal, stored as bits for `Eq`/`Hash`.
    Double(u64),
    /// String literal.
    Str(Name),
    /// The null reference.
    Null,
    /// Method argument by position.
    Arg(u16),
    /// The receiver of the analyzed method.
    This,
    /// Relational comparison.
    Comparison {
        op: ComparisonOp,
        left: ValueId,
        right: ValueId,
    },
    /// Arithmetic, including the three-way compare family.
    MathOp {
        op: MathOp,
        left: ValueId,
        right: ValueId,
    },
    /// Logical negation of a boolean value.
    Not(ValueId),
    /// Instance method invocation.
    VirtualCall {
        sig: MethodSignature,
        base: ValueId,
        args: ValueRange,
    },
    /// Static method invocation.
    StaticCall {
        sig: MethodSignature,
        args: ValueRange,
    },
}

/// A value node: its kind plus its static result type.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ValueNode {
    pub kind: ValueKind,
    pub ty: ValueType,
}

impl ValueNode {
    /// Create a new node.
    #[inline]
    pub const fn new(kind: ValueKind, ty: ValueType) -> Self {
        Self { kind, ty }
    }
}

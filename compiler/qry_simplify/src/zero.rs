//! Rewrites for comparisons against the integer literal zero.
//!
//! Bytecode has no boolean type: a boolean result is an `int` that is 0 or
//! 1, and branching on it compiles to a comparison with zero. Likewise,
//! long and floating-point comparisons go through a three-way compare
//! (`lcmp`, `fcmpl`, ...) whose `int` result is then compared with zero.
//! These rules recover the direct comparison.

use qry_ir::{ComparisonOp, ValueArena, ValueId, ValueKind};

use crate::Rewrite;

/// Simplify `other op 0`.
///
/// The caller has already normalized the comparison so that `other` is
/// the non-zero operand on the left. Rules, first match wins:
///
/// 1. `eq`/`ne` against a comparison: the comparison was materialized as
///    0/1. `ne` keeps it, `eq` yields its inverse.
/// 2. `eq`/`ne` against any other boolean-typed value (typically a call):
///    `ne` keeps it, `eq` wraps it in `Not`.
/// 3. Any operator against a three-way compare `cmp(a, b)`: yields
///    `a op b`.
pub fn normalize_zero_comparison(
    arena: &mut ValueArena,
    op: ComparisonOp,
    other: ValueId,
) -> Rewrite {
    if op.is_equality() {
        if matches!(arena.kind(other), ValueKind::Comparison { .. }) {
            return match op {
                ComparisonOp::Ne => Rewrite::Replaced(other),
                _ => arena
                    .inverse_comparison(other)
                    .map_or(Rewrite::Unchanged, Rewrite::Replaced),
            };
        }

        if arena.ty(other).is_boolean() {
            return match op {
                ComparisonOp::Ne => Rewrite::Replaced(other),
                _ => Rewrite::Replaced(arena.not(other)),
            };
        }
    }

    if let ValueKind::MathOp {
        op: math,
        left,
        right,
    } = *arena.kind(other)
    {
        if math.is_three_way() {
            return Rewrite::Replaced(arena.comparison(op, left, right));
        }
    }

    Rewrite::Unchanged
}

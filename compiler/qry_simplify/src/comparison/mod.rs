//! Rules applied to every comparison node.
//!
//! `0 op x` is always rewritten to put the zero on the right, even when no
//! zero-comparison rule applies to `x`: `lt(0, x)` becomes `gt(x, 0)`.
//! Jinq's simplifier left such nodes as they were, so emitters written
//! against its output may see the swapped shape where they expected
//! `0 op x`.

use qry_ir::{ComparisonOp, ValueArena, ValueId};

use crate::zero::normalize_zero_comparison;
use crate::{Rewrite, RuleSet};

/// Canonicalize `left op right`.
///
/// 1. `eq`/`ne` between two integer literals folds to the literal 1 or 0.
///    Ordering operators between literals are left alone.
/// 2. `0 op right` is read as `right op.mirror() 0` and handed to the
///    zero-comparison rules. If none fires, the operands are swapped so the
///    zero ends up on the right.
/// 3. `left op 0` is handed to the zero-comparison rules as is.
pub fn canonicalize_comparison(
    arena: &mut ValueArena,
    rules: RuleSet,
    op: ComparisonOp,
    left: ValueId,
    right: ValueId,
) -> Rewrite {
    if rules.contains(RuleSet::FOLD_CONSTANTS) && op.is_equality() {
        if let (Some(l), Some(r)) = (arena.as_int(left), arena.as_int(right)) {
            let holds = op.eval(i64::from(l), i64::from(r));
            return Rewrite::Replaced(arena.int(i32::from(holds)));
        }
    }

    if !rules.contains(RuleSet::ZERO_COMPARISONS) {
        return Rewrite::Unchanged;
    }

    if arena.is_int_zero(left) {
        let mirrored = op.mirror();
        let rewrite = normalize_zero_comparison(arena, mirrored, right);
        if rewrite.is_replaced() {
            return rewrite;
        }
        // `0 op 0` would swap back and forth forever.
        if !arena.is_int_zero(right) {
            return Rewrite::Replaced(arena.comparison(mirrored, right, left));
        }
    }

    if arena.is_int_zero(right) {
        return normalize_zero_comparison(arena, op, left);
    }

    Rewrite::Unchanged
}

//! Outcome of applying one rule to one node.

use qry_ir::ValueId;

/// Whether a rule fired.
///
/// Rules report "nothing to do" explicitly instead of handing back the
/// node they were given, so callers never compare IDs to find out.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Rewrite {
    /// The rule does not apply; keep the original node.
    Unchanged,
    /// The rule fired; use this node instead.
    Replaced(ValueId),
}

impl Rewrite {
    /// Returns `true` if the rule fired.
    #[inline]
    pub const fn is_replaced(self) -> bool {
        matches!(self, Rewrite::Replaced(_))
    }
}

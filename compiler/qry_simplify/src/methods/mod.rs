//! Recognized library comparison methods.
//!
//! `a.equals(b)`, `a.before(b)` and `a.after(b)` on strings and the date
//! and time classes become `a == b`, `a < b` and `a > b`. This changes
//! semantics slightly: it assumes the method agrees with the natural
//! ordering of its operands and ignores how the call and the relational
//! operator differ on null arguments. The query languages these trees are
//! emitted to compare such values relationally, so the approximation is
//! accepted.

use std::sync::OnceLock;

use qry_ir::{ComparisonOp, MethodSignature, ValueArena, ValueId, ValueRange};
use rustc_hash::FxHashMap;

use crate::Rewrite;

/// Signatures recognized as comparisons, and the operator each becomes.
const COMPARISON_METHOD_ENTRIES: &[(MethodSignature, ComparisonOp)] = &[
    (MethodSignature::STRING_EQUALS, ComparisonOp::Eq),
    (MethodSignature::DATE_EQUALS, ComparisonOp::Eq),
    (MethodSignature::DATE_BEFORE, ComparisonOp::Lt),
    (MethodSignature::DATE_AFTER, ComparisonOp::Gt),
    (MethodSignature::CALENDAR_EQUALS, ComparisonOp::Eq),
    (MethodSignature::CALENDAR_BEFORE, ComparisonOp::Lt),
    (MethodSignature::CALENDAR_AFTER, ComparisonOp::Gt),
    (MethodSignature::SQL_DATE_EQUALS, ComparisonOp::Eq),
    (MethodSignature::SQL_DATE_BEFORE, ComparisonOp::Lt),
    (MethodSignature::SQL_DATE_AFTER, ComparisonOp::Gt),
    (MethodSignature::SQL_TIME_EQUALS, ComparisonOp::Eq),
    (MethodSignature::SQL_TIME_BEFORE, ComparisonOp::Lt),
    (MethodSignature::SQL_TIME_AFTER, ComparisonOp::Gt),
    (MethodSignature::SQL_TIMESTAMP_EQUALS, ComparisonOp::Eq),
    (MethodSignature::SQL_TIMESTAMP_BEFORE, ComparisonOp::Lt),
    (MethodSignature::SQL_TIMESTAMP_AFTER, ComparisonOp::Gt),
];

/// Lookup table from method signature to comparison operator.
///
/// Immutable once built. The process-wide instance from
/// [`comparison_methods`] is shared by every simplification run.
#[derive(Clone, Debug)]
pub struct ComparisonMethods {
    ops: FxHashMap<MethodSignature, ComparisonOp>,
}

impl ComparisonMethods {
    /// Build the table of recognized comparison methods.
    pub fn new() -> Self {
        Self::from_entries(COMPARISON_METHOD_ENTRIES)
    }

    /// Build a table from explicit entries. Later entries win.
    pub fn from_entries(entries: &[(MethodSignature, ComparisonOp)]) -> Self {
        let mut ops = FxHashMap::default();
        ops.reserve(entries.len());
        for &(sig, op) in entries {
            ops.insert(sig, op);
        }
        Self { ops }
    }

    /// The operator a call to `sig` is equivalent to, if recognized.
    #[inline]
    pub fn lookup(&self, sig: &MethodSignature) -> Option<ComparisonOp> {
        self.ops.get(sig).copied()
    }

    /// Number of recognized signatures.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if no signature is recognized.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl Default for ComparisonMethods {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the process-wide comparison method table (built on first use).
pub fn comparison_methods() -> &'static ComparisonMethods {
    static GLOBAL_COMPARISON_METHODS: OnceLock<ComparisonMethods> = OnceLock::new();
    GLOBAL_COMPARISON_METHODS.get_or_init(ComparisonMethods::new)
}

/// Rewrite `base.method(arg)` to `base op arg` when `sig` is recognized.
///
/// Calls without an argument are left alone; well-formed trees never
/// produce them for the recognized signatures.
pub fn canonicalize_method_call(
    arena: &mut ValueArena,
    table: &ComparisonMethods,
    sig: MethodSignature,
    base: ValueId,
    args: ValueRange,
) -> Rewrite {
    let Some(op) = table.lookup(&sig) else {
        return Rewrite::Unchanged;
    };
    let Some(&arg) = arena.args(args).first() else {
        return Rewrite::Unchanged;
    };
    Rewrite::Replaced(arena.comparison(op, base, arg))
}

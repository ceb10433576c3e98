//! Per-node simplification rules, as a [`ValueVisitor`].

use qry_ir::{
    dispatch, ComparisonOp, MethodSignature, ValueArena, ValueId, ValueRange, ValueVisitor,
};

use crate::comparison::canonicalize_comparison;
use crate::methods::{canonicalize_method_call, ComparisonMethods};
use crate::{Rewrite, RuleSet};

/// Applies the simplification rules to one node at a time.
///
/// Comparisons and recognized virtual calls are rewritten; every other
/// kind falls through to [`default_value`](ValueVisitor::default_value),
/// which returns the node unchanged. Replacement nodes are pushed into the
/// arena; no existing node is modified.
pub struct Simplifier<'a> {
    pub(crate) arena: &'a mut ValueArena,
    methods: &'a ComparisonMethods,
    rules: RuleSet,
    rewrites: usize,
}

impl<'a> Simplifier<'a> {
    /// Create a simplifier over `arena`.
    pub fn new(arena: &'a mut ValueArena, methods: &'a ComparisonMethods, rules: RuleSet) -> Self {
        Self {
            arena,
            methods,
            rules,
            rewrites: 0,
        }
    }

    /// Apply the rules to `id` alone.
    ///
    /// Children are not visited, and a replacement is not simplified again.
    pub fn simplify_node(&mut self, id: ValueId) -> ValueId {
        dispatch(self, id, &mut ())
    }

    /// Number of rewrites performed so far.
    pub fn rewrites(&self) -> usize {
        self.rewrites
    }

    fn record(&mut self, rule: &'static str, id: ValueId, rewrite: Rewrite) -> ValueId {
        match rewrite {
            Rewrite::Replaced(new_id) => {
                self.rewrites += 1;
                tracing::trace!(rule, from = id.raw(), to = new_id.raw(), "rewrote value");
                new_id
            }
            Rewrite::Unchanged => id,
        }
    }
}

impl ValueVisitor<()> for Simplifier<'_> {
    type Output = ValueId;

    fn arena(&self) -> &ValueArena {
        self.arena
    }

    fn default_value(&mut self, id: ValueId, _cx: &mut ()) -> ValueId {
        id
    }

    fn comparison_value(
        &mut self,
        id: ValueId,
        op: ComparisonOp,
        left: ValueId,
        right: ValueId,
        _cx: &mut (),
    ) -> ValueId {
        let rewrite = canonicalize_comparison(self.arena, self.rules, op, left, right);
        self.record("comparison", id, rewrite)
    }

    fn virtual_method_call_value(
        &mut self,
        id: ValueId,
        sig: MethodSignature,
        base: ValueId,
        args: ValueRange,
        cx: &mut (),
    ) -> ValueId {
        if self.rules.contains(RuleSet::METHOD_COMPARISONS) {
            let rewrite = canonicalize_method_call(self.arena, self.methods, sig, base, args);
            if rewrite.is_replaced() {
                return self.record("comparison_method", id, rewrite);
            }
        }
        self.method_call_value(id, sig, args, cx)
    }
}

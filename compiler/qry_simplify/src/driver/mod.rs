//! Whole-graph simplification.
//!
//! A pass rebuilds the graph bottom-up from the root: children first, then
//! the node itself with its (possibly replaced) children, then the node's
//! own rules. Each reachable node is processed once per pass, so shared
//! subgraphs stay shared and a pass is linear in the number of reachable
//! nodes. Nothing already in the arena is modified; a node whose children
//! did not change keeps its ID.

use qry_ir::{ValueArena, ValueId, ValueKind, ValueNode, ValueRange};
use rustc_hash::FxHashMap;

use crate::methods::{comparison_methods, ComparisonMethods};
use crate::stack::ensure_sufficient_stack;
use crate::{RuleSet, Simplifier, SimplifyConfig, SimplifyError, SimplifyResult};

/// Simplify the graph rooted at `root` with the process-wide configuration.
///
/// Returns the root of the simplified graph. With the default
/// configuration this is a single pass: every reachable node is rewritten
/// at most once, and rewrites do not cascade into the nodes they produce.
pub fn simplify(arena: &mut ValueArena, root: ValueId) -> SimplifyResult<ValueId> {
    simplify_with(arena, root, SimplifyConfig::global())
}

/// Simplify the graph rooted at `root` with an explicit configuration.
///
/// # Errors
///
/// - [`SimplifyError::InvalidRoot`] if `root` is not a node of `arena`.
/// - [`SimplifyError::NoFixedPoint`] if `config` requires a fixed point
///   and a pass after the last allowed one would still change the graph.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(root = root.raw(), max_passes = config.max_passes)
)]
pub fn simplify_with(
    arena: &mut ValueArena,
    root: ValueId,
    config: &SimplifyConfig,
) -> SimplifyResult<ValueId> {
    if !arena.contains(root) {
        return Err(SimplifyError::InvalidRoot { id: root });
    }

    let methods = comparison_methods();
    let passes = config.max_passes.max(1);
    let mut current = root;

    for pass in 1..=passes {
        let next = run_pass(arena, methods, config.rules, current, pass);
        if next == current {
            return Ok(current);
        }
        current = next;
    }

    if config.require_fixed_point {
        // The last allowed pass may have produced the fixed point; one more
        // pass only confirms it.
        if run_pass(arena, methods, config.rules, current, passes.saturating_add(1)) != current {
            return Err(SimplifyError::NoFixedPoint { passes });
        }
    }
    Ok(current)
}

/// Run one bottom-up pass from `root`, returning the new root.
fn run_pass(
    arena: &mut ValueArena,
    methods: &ComparisonMethods,
    rules: RuleSet,
    root: ValueId,
    pass: u32,
) -> ValueId {
    let before = arena.len();
    let (next, rewrites) = {
        let mut run = Pass::new(arena, methods, rules);
        let next = run.visit(root);
        (next, run.simplifier.rewrites())
    };
    tracing::debug!(
        pass,
        rewrites,
        new_nodes = arena.len() - before,
        "simplification pass finished"
    );
    next
}

/// One bottom-up traversal.
struct Pass<'a> {
    simplifier: Simplifier<'a>,
    /// Original ID to its simplified replacement.
    memo: FxHashMap<ValueId, ValueId>,
}

impl<'a> Pass<'a> {
    fn new(arena: &'a mut ValueArena, methods: &'a ComparisonMethods, rules: RuleSet) -> Self {
        Self {
            simplifier: Simplifier::new(arena, methods, rules),
            memo: FxHashMap::default(),
        }
    }

    fn visit(&mut self, id: ValueId) -> ValueId {
        if let Some(&done) = self.memo.get(&id) {
            return done;
        }
        let result = ensure_sufficient_stack(|| {
            let rebuilt = self.rebuild(id);
            self.simplifier.simplify_node(rebuilt)
        });
        self.memo.insert(id, result);
        result
    }

    /// `id` with its children replaced by their simplified forms.
    fn rebuild(&mut self, id: ValueId) -> ValueId {
        let ValueNode { kind, ty } = self.simplifier.arena.get(id);
        let kind = match kind {
            ValueKind::Int(_)
            | ValueKind::Long(_)
            | ValueKind::Double(_)
            | ValueKind::Str(_)
            | ValueKind::Null
            | ValueKind::Arg(_)
            | ValueKind::This => return id,
            ValueKind::Comparison { op, left, right } => {
                let (new_left, new_right) = (self.visit(left), self.visit(right));
                if new_left == left && new_right == right {
                    return id;
                }
                ValueKind::Comparison {
                    op,
                    left: new_left,
                    right: new_right,
                }
            }
            ValueKind::MathOp { op, left, right } => {
                let (new_left, new_right) = (self.visit(left), self.visit(right));
                if new_left == left && new_right == right {
                    return id;
                }
                ValueKind::MathOp {
                    op,
                    left: new_left,
                    right: new_right,
                }
            }
            ValueKind::Not(operand) => {
                let new_operand = self.visit(operand);
                if new_operand == operand {
                    return id;
                }
                ValueKind::Not(new_operand)
            }
            ValueKind::VirtualCall { sig, base, args } => {
                let new_base = self.visit(base);
                let new_args = self.visit_list(args);
                if new_base == base && new_args.is_none() {
                    return id;
                }
                ValueKind::VirtualCall {
                    sig,
                    base: new_base,
                    args: new_args.unwrap_or(args),
                }
            }
            ValueKind::StaticCall { sig, args } => match self.visit_list(args) {
                Some(new_args) => ValueKind::StaticCall {
                    sig,
                    args: new_args,
                },
                None => return id,
            },
        };
        self.simplifier.arena.push(ValueNode::new(kind, ty))
    }

    /// Simplify every argument in `range`; `None` if none changed.
    fn visit_list(&mut self, range: ValueRange) -> Option<ValueRange> {
        let old = self.simplifier.arena.args(range).to_vec();
        let mut new = Vec::with_capacity(old.len());
        for &arg in &old {
            new.push(self.visit(arg));
        }
        if new == old {
            None
        } else {
            Some(self.simplifier.arena.push_value_list(&new))
        }
    }
}

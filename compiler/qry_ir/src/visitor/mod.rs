//! Value visitor: per-kind dispatch with a default fallback.
//!
//! # Design
//!
//! [`ValueVisitor`] has one handler per node kind. Every handler has a
//! default implementation that falls back to a more general one:
//!
//! ```text
//! int_constant / long_constant / ... ──► constant_value ──► default_value
//! virtual_method_call_value / static_method_call_value ──► method_call_value ──► default_value
//! comparison_value / math_op_value / not_value / arg_value / this_value ──► default_value
//! ```
//!
//! Implementors override only the kinds they care about. [`dispatch`]
//! reads the node kind and calls the matching handler; the match is
//! exhaustive over [`ValueKind`], so a new kind must be routed here before
//! anything compiles.
//!
//! The visitor defines per-node behavior only. Traversal order belongs to
//! the caller; [`for_each_child`] lists a node's direct children for
//! callers that walk the graph themselves.
//!
//! Handlers receive an auxiliary context `C` threaded through the walk.
//! Passes that need no state use `()`.

use crate::{ComparisonOp, MathOp, MethodSignature, Name, ValueArena, ValueId, ValueKind, ValueRange};

/// Per-kind handlers over value nodes.
pub trait ValueVisitor<C> {
    /// Result of visiting one node.
    type Output;

    /// Arena the visited IDs belong to.
    fn arena(&self) -> &ValueArena;

    /// Fallback for every kind without a more specific handler.
    fn default_value(&mut self, id: ValueId, cx: &mut C) -> Self::Output;

    /// Fallback for literal kinds.
    fn constant_value(&mut self, id: ValueId, cx: &mut C) -> Self::Output {
        self.default_value(id, cx)
    }

    fn int_constant(&mut self, id: ValueId, _value: i32, cx: &mut C) -> Self::Output {
        self.constant_value(id, cx)
    }

    fn long_constant(&mut self, id: ValueId, _value: i64, cx: &mut C) -> Self::Output {
        self.constant_value(id, cx)
    }

    fn double_constant(&mut self, id: ValueId, _value: f64, cx: &mut C) -> Self::Output {
        self.constant_value(id, cx)
    }

    fn string_constant(&mut self, id: ValueId, _value: Name, cx: &mut C) -> Self::Output {
        self.constant_value(id, cx)
    }

    fn null_constant(&mut self, id: ValueId, cx: &mut C) -> Self::Output {
        self.constant_value(id, cx)
    }

    fn arg_value(&mut self, id: ValueId, _index: u16, cx: &mut C) -> Self::Output {
        self.default_value(id, cx)
    }

    fn this_value(&mut self, id: ValueId, cx: &mut C) -> Self::Output {
        self.default_value(id, cx)
    }

    fn comparison_value(
        &mut self,
        id: ValueId,
        _op: ComparisonOp,
        _left: ValueId,
        _right: ValueId,
        cx: &mut C,
    ) -> Self::Output {
        self.default_value(id, cx)
    }

    fn math_op_value(
        &mut self,
        id: ValueId,
        _op: MathOp,
        _left: ValueId,
        _right: ValueId,
        cx: &mut C,
    ) -> Self::Output {
        self.default_value(id, cx)
    }

    fn not_value(&mut self, id: ValueId, _operand: ValueId, cx: &mut C) -> Self::Output {
        self.default_value(id, cx)
    }

    /// Fallback for both call kinds.
    fn method_call_value(
        &mut self,
        id: ValueId,
        _sig: MethodSignature,
        _args: ValueRange,
        cx: &mut C,
    ) -> Self::Output {
        self.default_value(id, cx)
    }

    fn virtual_method_call_value(
        &mut self,
        id: ValueId,
        sig: MethodSignature,
        _base: ValueId,
        args: ValueRange,
        cx: &mut C,
    ) -> Self::Output {
        self.method_call_value(id, sig, args, cx)
    }

    fn static_method_call_value(
        &mut self,
        id: ValueId,
        sig: MethodSignature,
        args: ValueRange,
        cx: &mut C,
    ) -> Self::Output {
        self.method_call_value(id, sig, args, cx)
    }
}

/// Call the handler matching the kind of `id`.
pub fn dispatch<C, V>(visitor: &mut V, id: ValueId, cx: &mut C) -> V::Output
where
    V: ValueVisitor<C> + ?Sized,
{
    match *visitor.arena().kind(id) {
        ValueKind::Int(value) => visitor.int_constant(id, value, cx),
        ValueKind::Long(value) => visitor.long_constant(id, value, cx),
        ValueKind::Double(bits) => visitor.double_constant(id, f64::from_bits(bits), cx),
        ValueKind::Str(value) => visitor.string_constant(id, value, cx),
        ValueKind::Null => visitor.null_constant(id, cx),
        ValueKind::Arg(index) => visitor.arg_value(id, index, cx),
        ValueKind::This => visitor.this_value(id, cx),
        ValueKind::Comparison { op, left, right } => {
            visitor.comparison_value(id, op, left, right, cx)
        }
        ValueKind::MathOp { op, left, right } => visitor.math_op_value(id, op, left, right, cx),
        ValueKind::Not(operand) => visitor.not_value(id, operand, cx),
        ValueKind::VirtualCall { sig, base, args } => {
            visitor.virtual_method_call_value(id, sig, base, args, cx)
        }
        ValueKind::StaticCall { sig, args } => visitor.static_method_call_value(id, sig, args, cx),
    }
}

/// Call `f` on each direct child of `id`, left to right.
pub fn for_each_child(arena: &ValueArena, id: ValueId, mut f: impl FnMut(ValueId)) {
    match *arena.kind(id) {
        ValueKind::Int(_)
        | ValueKind::Long(_)
        | ValueKind::Double(_)
        | ValueKind::Str(_)
        | ValueKind::Null
        | ValueKind::Arg(_)
        | ValueKind::This => {}
        ValueKind::Comparison { left, right, .. } | ValueKind::MathOp { left, right, .. } => {
            f(left);
            f(right);
        }
        ValueKind::Not(operand) => f(operand),
        ValueKind::VirtualCall { base, args, .. } => {
            f(base);
            arena.args(args).iter().copied().for_each(f);
        }
        ValueKind::StaticCall { args, .. } => arena.args(args).iter().copied().for_each(f),
    }
}

//! Value arena.
//!
//! [`ValueArena`] uses struct-of-arrays layout (parallel `kinds` and `types`
//! arrays indexed by [`ValueId`]). Nodes are append-only: a rewrite never
//! edits a node, it pushes a replacement and hands back the new ID. Nodes a
//! rewrite no longer references simply stay unreachable.

use crate::{
    ComparisonOp, IrError, MathOp, MethodSignature, Name, ValueId, ValueKind, ValueNode, ValueRange,
    ValueType,
};

/// Convert a length to `u32`, panicking with context on overflow.
fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what}: {len} exceeds u32::MAX"))
}

/// Convert a length to `u16`, panicking with context on overflow.
fn to_u16(len: usize, what: &str) -> u16 {
    u16::try_from(len).unwrap_or_else(|_| panic!("{what} too long: {len} exceeds u16::MAX"))
}

/// Arena for value nodes.
#[derive(Clone, Debug, Default)]
pub struct ValueArena {
    /// Node kinds (parallel with types).
    kinds: Vec<ValueKind>,
    /// Static result types (parallel with kinds).
    types: Vec<ValueType>,
    /// Flattened ID lists for call arguments.
    value_lists: Vec<ValueId>,
}

impl ValueArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node, returning its ID.
    pub fn push(&mut self, node: ValueNode) -> ValueId {
        let id = ValueId::new(to_u32(self.kinds.len(), "value nodes"));
        self.kinds.push(node.kind);
        self.types.push(node.ty);
        id
    }

    /// Get the kind of a node.
    #[inline]
    pub fn kind(&self, id: ValueId) -> &ValueKind {
        &self.kinds[id.index()]
    }

    /// Get the static type of a node.
    #[inline]
    pub fn ty(&self, id: ValueId) -> ValueType {
        self.types[id.index()]
    }

    /// Reconstruct a full `ValueNode` from parallel arrays.
    pub fn get(&self, id: ValueId) -> ValueNode {
        ValueNode::new(self.kinds[id.index()], self.types[id.index()])
    }

    /// Returns `true` if `id` refers to a node in this arena.
    #[inline]
    pub fn contains(&self, id: ValueId) -> bool {
        id.is_valid() && id.index() < self.kinds.len()
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns `true` if no nodes have been allocated.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Allocate a contiguous range of value IDs.
    pub fn push_value_list(&mut self, ids: &[ValueId]) -> ValueRange {
        if ids.is_empty() {
            return ValueRange::EMPTY;
        }
        let start = to_u32(self.value_lists.len(), "value list entries");
        self.value_lists.extend_from_slice(ids);
        ValueRange::new(start, to_u16(ids.len(), "argument list"))
    }

    /// Get value IDs from a range.
    pub fn args(&self, range: ValueRange) -> &[ValueId] {
        if range.is_empty() {
            return &[];
        }
        let start = range.start as usize;
        &self.value_lists[start..start + range.len()]
    }

    // Builders

    /// Integer literal.
    pub fn int(&mut self, value: i32) -> ValueId {
        self.push(ValueNode::new(ValueKind::Int(value), ValueType::Int))
    }

    /// Long literal.
    pub fn long(&mut self, value: i64) -> ValueId {
        self.push(ValueNode::new(ValueKind::Long(value), ValueType::Long))
    }

    /// Double literal.
    pub fn double(&mut self, value: f64) -> ValueId {
        self.push(ValueNode::new(
            ValueKind::Double(value.to_bits()),
            ValueType::Double,
        ))
    }

    /// String literal.
    pub fn string(&mut self, value: Name) -> ValueId {
        self.push(ValueNode::new(ValueKind::Str(value), ValueType::STRING))
    }

    /// Null reference of the given reference type.
    pub fn null(&mut self, ty: ValueType) -> ValueId {
        self.push(ValueNode::new(ValueKind::Null, ty))
    }

    /// Method argument by position.
    pub fn arg(&mut self, index: u16, ty: ValueType) -> ValueId {
        self.push(ValueNode::new(ValueKind::Arg(index), ty))
    }

    /// Receiver of the analyzed method.
    pub fn this(&mut self, ty: ValueType) -> ValueId {
        self.push(ValueNode::new(ValueKind::This, ty))
    }

    /// Relational comparison; always boolean-typed.
    pub fn comparison(&mut self, op: ComparisonOp, left: ValueId, right: ValueId) -> ValueId {
        self.push(ValueNode::new(
            ValueKind::Comparison { op, left, right },
            ValueType::Boolean,
        ))
    }

    /// Relational comparison from a raw operator code, as handed over by the
    /// front end. Codes outside the six relational operators are rejected.
    pub fn comparison_from_code(
        &mut self,
        code: u8,
        left: ValueId,
        right: ValueId,
    ) -> Result<ValueId, IrError> {
        let op = ComparisonOp::from_code(code)?;
        Ok(self.comparison(op, left, right))
    }

    /// Arithmetic node. Three-way compares are `int`-typed; other operators
    /// take the type of their left operand.
    pub fn math_op(&mut self, op: MathOp, left: ValueId, right: ValueId) -> ValueId {
        let ty = if op.is_three_way() {
            ValueType::Int
        } else {
            self.ty(left)
        };
        self.push(ValueNode::new(ValueKind::MathOp { op, left, right }, ty))
    }

    /// Arithmetic node from a raw operator code, as handed over by the
    /// front end. Codes outside the arithmetic operators are rejected.
    pub fn math_op_from_code(
        &mut self,
        code: u8,
        left: ValueId,
        right: ValueId,
    ) -> Result<ValueId, IrError> {
        let op = MathOp::from_code(code)?;
        Ok(self.math_op(op, left, right))
    }

    /// Logical negation; always boolean-typed.
    pub fn not(&mut self, operand: ValueId) -> ValueId {
        self.push(ValueNode::new(ValueKind::Not(operand), ValueType::Boolean))
    }

    /// Instance method call returning `ty`.
    pub fn virtual_call(
        &mut self,
        sig: MethodSignature,
        base: ValueId,
        args: &[ValueId],
        ty: ValueType,
    ) -> ValueId {
        let args = self.push_value_list(args);
        self.push(ValueNode::new(ValueKind::VirtualCall { sig, base, args }, ty))
    }

    /// Static method call returning `ty`.
    pub fn static_call(&mut self, sig: MethodSignature, args: &[ValueId], ty: ValueType) -> ValueId {
        let args = self.push_value_list(args);
        self.push(ValueNode::new(ValueKind::StaticCall { sig, args }, ty))
    }

    // Queries

    /// The integer literal's value, if `id` is an `Int` node.
    #[inline]
    pub fn as_int(&self, id: ValueId) -> Option<i32> {
        match *self.kind(id) {
            ValueKind::Int(value) => Some(value),
            _ => None,
        }
    }

    /// Returns `true` if `id` is the integer literal zero.
    #[inline]
    pub fn is_int_zero(&self, id: ValueId) -> bool {
        self.as_int(id) == Some(0)
    }

    /// Push the logical inverse of a comparison node as a new comparison
    /// (not a `Not` wrapper). Returns `None` if `id` is not a comparison.
    pub fn inverse_comparison(&mut self, id: ValueId) -> Option<ValueId> {
        match *self.kind(id) {
            ValueKind::Comparison { op, left, right } => {
                Some(self.comparison(op.inverse(), left, right))
            }
            _ => None,
        }
    }
}

//! Prefix rendering of value graphs, for tests and trace output.
//!
//! ```text
//! eq(cmp(arg0, arg1), 0)
//! not(arg0.java/lang/String.equals(arg1))
//! ```

use std::fmt;

use crate::{StringInterner, ValueArena, ValueId, ValueKind};

impl ValueArena {
    /// Render `id` and its children (requires interner for names).
    pub fn display<'a>(&'a self, id: ValueId, interner: &'a StringInterner) -> ValueDisplay<'a> {
        ValueDisplay {
            arena: self,
            id,
            interner,
        }
    }
}

/// Helper for displaying a value graph rooted at one node.
pub struct ValueDisplay<'a> {
    arena: &'a ValueArena,
    id: ValueId,
    interner: &'a StringInterner,
}

impl ValueDisplay<'_> {
    fn child(&self, id: ValueId) -> Self {
        ValueDisplay {
            arena: self.arena,
            id,
            interner: self.interner,
        }
    }

    fn write_args(&self, f: &mut fmt::Formatter<'_>, args: &[ValueId]) -> fmt::Result {
        for (i, &arg) in args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", self.child(arg))?;
        }
        Ok(())
    }
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.arena.contains(self.id) {
            return write!(f, "<invalid {:?}>", self.id);
        }
        match *self.arena.kind(self.id) {
            ValueKind::Int(value) => write!(f, "{value}"),
            ValueKind::Long(value) => write!(f, "{value}L"),
            ValueKind::Double(bits) => write!(f, "{:?}", f64::from_bits(bits)),
            ValueKind::Str(name) => write!(f, "{:?}", self.interner.lookup(name)),
            ValueKind::Null => f.write_str("null"),
            ValueKind::Arg(index) => write!(f, "arg{index}"),
            ValueKind::This => f.write_str("this"),
            ValueKind::Comparison { op, left, right } => write!(
                f,
                "{}({}, {})",
                op.name(),
                self.child(left),
                self.child(right)
            ),
            ValueKind::MathOp { op, left, right } => write!(
                f,
                "{}({}, {})",
                op.name(),
                self.child(left),
                self.child(right)
            ),
            ValueKind::Not(operand) => write!(f, "not({})", self.child(operand)),
            ValueKind::VirtualCall { sig, base, args } => {
                write!(
                    f,
                    "{}.{}.{}(",
                    self.child(base),
                    self.interner.lookup(sig.owner),
                    self.interner.lookup(sig.name)
                )?;
                self.write_args(f, self.arena.args(args))?;
                f.write_str(")")
            }
            ValueKind::StaticCall { sig, args } => {
                write!(
                    f,
                    "{}.{}(",
                    self.interner.lookup(sig.owner),
                    self.interner.lookup(sig.name)
                )?;
                self.write_args(f, self.arena.args(args))?;
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{ComparisonOp, MathOp, MethodSignature, StringInterner, ValueArena, ValueType};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_literals() {
        let interner = StringInterner::new();
        let mut arena = ValueArena::new();
        let hello = interner.intern("hello");
        let ids = [
            arena.int(-3),
            arena.long(9),
            arena.double(1.5),
            arena.string(hello),
            arena.null(ValueType::STRING),
            arena.arg(2, ValueType::Int),
            arena.this(ValueType::OBJECT),
        ];
        let rendered: Vec<String> = ids
            .iter()
            .map(|&id| arena.display(id, &interner).to_string())
            .collect();
        assert_eq!(
            rendered,
            vec!["-3", "9L", "1.5", "\"hello\"", "null", "arg2", "this"]
        );
    }

    #[test]
    fn test_render_nested() {
        let interner = StringInterner::new();
        let mut arena = ValueArena::new();
        let a = arena.arg(0, ValueType::Long);
        let b = arena.arg(1, ValueType::Long);
        let cmp = arena.math_op(MathOp::Cmp, a, b);
        let zero = arena.int(0);
        let eq = arena.comparison(ComparisonOp::Eq, cmp, zero);
        let not = arena.not(eq);
        assert_eq!(
            arena.display(not, &interner).to_string(),
            "not(eq(cmp(arg0, arg1), 0))"
        );
    }

    #[test]
    fn test_render_calls() {
        let interner = StringInterner::new();
        let mut arena = ValueArena::new();
        let s1 = arena.arg(0, ValueType::STRING);
        let s2 = arena.arg(1, ValueType::STRING);
        let call = arena.virtual_call(
            MethodSignature::STRING_EQUALS,
            s1,
            &[s2],
            ValueType::Boolean,
        );
        assert_eq!(
            arena.display(call, &interner).to_string(),
            "arg0.java/lang/String.equals(arg1)"
        );

        let like = MethodSignature::intern(
            &interner,
            "org/jinq/orm/stream/JinqStream",
            "like",
            "(Ljava/lang/String;Ljava/lang/String;)Z",
        );
        let call = arena.static_call(like, &[s1, s2], ValueType::Boolean);
        assert_eq!(
            arena.display(call, &interner).to_string(),
            "org/jinq/orm/stream/JinqStream.like(arg0, arg1)"
        );
    }

    #[test]
    fn test_render_invalid() {
        let interner = StringInterner::new();
        let arena = ValueArena::new();
        assert_eq!(
            arena
                .display(crate::ValueId::INVALID, &interner)
                .to_string(),
            "<invalid ValueId::INVALID>"
        );
    }
}

//! Static result types carried by every value node.
//!
//! Mirrors the JVM's type lattice as far as rewrite rules care: the
//! primitive kinds plus reference types identified by their interned
//! internal class name.

use std::fmt;

use crate::{Name, StringInterner};

/// Static type of a value node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueType {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
    /// Reference type, by internal class name (e.g. `java/util/Date`).
    Object(Name),
}

impl ValueType {
    /// `java/lang/Object`.
    pub const OBJECT: ValueType = ValueType::Object(Name::JAVA_LANG_OBJECT);
    /// `java/lang/String`.
    pub const STRING: ValueType = ValueType::Object(Name::JAVA_LANG_STRING);
    /// `java/util/Date`.
    pub const DATE: ValueType = ValueType::Object(Name::JAVA_UTIL_DATE);

    /// Returns `true` for the boolean primitive.
    #[inline]
    pub const fn is_boolean(self) -> bool {
        matches!(self, ValueType::Boolean)
    }

    /// Format the type for display (requires interner for class names).
    pub fn display(self, interner: &StringInterner) -> ValueTypeDisplay<'_> {
        ValueTypeDisplay {
            ty: self,
            interner,
        }
    }
}

/// Helper for displaying a `ValueType` with resolved class names.
pub struct ValueTypeDisplay<'a> {
    ty: ValueType,
    interner: &'a StringInterner,
}

impl fmt::Display for ValueTypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self.ty {
            ValueType::Boolean => "boolean",
            ValueType::Byte => "byte",
            ValueType::Char => "char",
            ValueType::Short => "short",
            ValueType::Int => "int",
            ValueType::Long => "long",
            ValueType::Float => "float",
            ValueType::Double => "double",
            ValueType::Void => "void",
            ValueType::Object(name) => self.interner.lookup(name),
        };
        f.write_str(text)
    }
}

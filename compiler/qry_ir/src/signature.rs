//! Method signatures: identity keys for recognized library calls.

use std::fmt;

use crate::{Name, StringInterner};

/// Identity of a callable member.
///
/// The descriptor is the interned JVM method descriptor, which encodes the
/// parameter-type list (and return type), e.g. `(Ljava/util/Date;)Z`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MethodSignature {
    /// Declaring class, as an internal name (e.g. `java/util/Date`).
    pub owner: Name,
    /// Method name (e.g. `before`).
    pub name: Name,
    /// Method descriptor.
    pub descriptor: Name,
}

impl MethodSignature {
    pub const STRING_EQUALS: Self = Self::new(
        Name::JAVA_LANG_STRING,
        Name::EQUALS,
        Name::DESC_OBJECT_TO_BOOLEAN,
    );

    pub const DATE_EQUALS: Self = Self::new(
        Name::JAVA_UTIL_DATE,
        Name::EQUALS,
        Name::DESC_OBJECT_TO_BOOLEAN,
    );
    pub const DATE_BEFORE: Self =
        Self::new(Name::JAVA_UTIL_DATE, Name::BEFORE, Name::DESC_DATE_TO_BOOLEAN);
    pub const DATE_AFTER: Self =
        Self::new(Name::JAVA_UTIL_DATE, Name::AFTER, Name::DESC_DATE_TO_BOOLEAN);

    // Calendar's before/after take Object, not Calendar.
    pub const CALENDAR_EQUALS: Self = Self::new(
        Name::JAVA_UTIL_CALENDAR,
        Name::EQUALS,
        Name::DESC_OBJECT_TO_BOOLEAN,
    );
    pub const CALENDAR_BEFORE: Self = Self::new(
        Name::JAVA_UTIL_CALENDAR,
        Name::BEFORE,
        Name::DESC_OBJECT_TO_BOOLEAN,
    );
    pub const CALENDAR_AFTER: Self = Self::new(
        Name::JAVA_UTIL_CALENDAR,
        Name::AFTER,
        Name::DESC_OBJECT_TO_BOOLEAN,
    );

    pub const SQL_DATE_EQUALS: Self = Self::new(
        Name::JAVA_SQL_DATE,
        Name::EQUALS,
        Name::DESC_OBJECT_TO_BOOLEAN,
    );
    pub const SQL_DATE_BEFORE: Self =
        Self::new(Name::JAVA_SQL_DATE, Name::BEFORE, Name::DESC_DATE_TO_BOOLEAN);
    pub const SQL_DATE_AFTER: Self =
        Self::new(Name::JAVA_SQL_DATE, Name::AFTER, Name::DESC_DATE_TO_BOOLEAN);

    pub const SQL_TIME_EQUALS: Self = Self::new(
        Name::JAVA_SQL_TIME,
        Name::EQUALS,
        Name::DESC_OBJECT_TO_BOOLEAN,
    );
    pub const SQL_TIME_BEFORE: Self =
        Self::new(Name::JAVA_SQL_TIME, Name::BEFORE, Name::DESC_DATE_TO_BOOLEAN);
    pub const SQL_TIME_AFTER: Self =
        Self::new(Name::JAVA_SQL_TIME, Name::AFTER, Name::DESC_DATE_TO_BOOLEAN);

    // Timestamp overloads equals/before/after on Timestamp itself.
    pub const SQL_TIMESTAMP_EQUALS: Self = Self::new(
        Name::JAVA_SQL_TIMESTAMP,
        Name::EQUALS,
        Name::DESC_TIMESTAMP_TO_BOOLEAN,
    );
    pub const SQL_TIMESTAMP_BEFORE: Self = Self::new(
        Name::JAVA_SQL_TIMESTAMP,
        Name::BEFORE,
        Name::DESC_TIMESTAMP_TO_BOOLEAN,
    );
    pub const SQL_TIMESTAMP_AFTER: Self = Self::new(
        Name::JAVA_SQL_TIMESTAMP,
        Name::AFTER,
        Name::DESC_TIMESTAMP_TO_BOOLEAN,
    );

    /// Create a signature from interned parts.
    #[inline]
    pub const fn new(owner: Name, name: Name, descriptor: Name) -> Self {
        Self {
            owner,
            name,
            descriptor,
        }
    }

    /// Intern the parts and create a signature.
    pub fn intern(interner: &StringInterner, owner: &str, name: &str, descriptor: &str) -> Self {
        Self::new(
            interner.intern(owner),
            interner.intern(name),
            interner.intern(descriptor),
        )
    }

    /// Format the signature for display (requires interner).
    pub fn display<'a>(&self, interner: &'a StringInterner) -> MethodSignatureDisplay<'a> {
        MethodSignatureDisplay {
            owner: interner.lookup(self.owner),
            name: interner.lookup(self.name),
            descriptor: interner.lookup(self.descriptor),
        }
    }
}

/// Helper for displaying a `MethodSignature` with resolved names.
pub struct MethodSignatureDisplay<'a> {
    owner: &'a str,
    name: &'a str,
    descriptor: &'a str,
}

impl fmt::Display for MethodSignatureDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}{}", self.owner, self.name, self.descriptor)
    }
}

//! Interned string identifier.
//!
//! Class names, method names and method descriptors recovered by the front
//! end are all interned. A handful of names that rewrite rules need to
//! recognize are pre-interned at fixed indices in every
//! [`StringInterner`](crate::StringInterner), so tables keyed by them do not
//! depend on a particular interner instance.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Interned string identifier.
///
/// A plain 32-bit index into the interner's string table. Equality and
/// hashing are O(1) integer operations.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Name(u32);

macro_rules! well_known_names {
    ($($konst:ident = $idx:literal => $text:literal,)*) => {
        impl Name {
            $(
                #[doc = concat!("Pre-interned `", $text, "`.")]
                pub const $konst: Name = Name($idx);
            )*
        }

        /// Strings pre-interned by every interner, in index order.
        pub(crate) const PRE_INTERNED: &[&str] = &["", $($text),*];
    };
}

well_known_names! {
    JAVA_LANG_OBJECT = 1 => "java/lang/Object",
    JAVA_LANG_STRING = 2 => "java/lang/String",
    JAVA_UTIL_DATE = 3 => "java/util/Date",
    JAVA_UTIL_CALENDAR = 4 => "java/util/Calendar",
    JAVA_SQL_DATE = 5 => "java/sql/Date",
    JAVA_SQL_TIME = 6 => "java/sql/Time",
    JAVA_SQL_TIMESTAMP = 7 => "java/sql/Timestamp",
    EQUALS = 8 => "equals",
    BEFORE = 9 => "before",
    AFTER = 10 => "after",
    DESC_OBJECT_TO_BOOLEAN = 11 => "(Ljava/lang/Object;)Z",
    DESC_DATE_TO_BOOLEAN = 12 => "(Ljava/util/Date;)Z",
    DESC_TIMESTAMP_TO_BOOLEAN = 13 => "(Ljava/sql/Timestamp;)Z",
}

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    /// Create from a raw table index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the interner's string table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Hash for Name {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}

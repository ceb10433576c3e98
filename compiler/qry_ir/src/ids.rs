//! ID and range newtypes for the value arena.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Index into a [`ValueArena`](crate::ValueArena).
///
/// Two parents holding the same `ValueId` share the child; this is how the
/// value graph expresses intentional sharing without cycles.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
#[repr(transparent)]
pub struct ValueId(u32);

impl ValueId {
    /// Sentinel value indicating "no value".
    pub const INVALID: ValueId = ValueId(u32::MAX);

    /// Create a new `ValueId` from a raw index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw `u32` value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns `true` if this is a valid (non-sentinel) ID.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl Hash for ValueId {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "ValueId({})", self.0)
        } else {
            write!(f, "ValueId::INVALID")
        }
    }
}

impl Default for ValueId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Range of value IDs in the arena's flattened list storage (call arguments).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ValueRange {
    pub start: u32,
    pub len: u16,
}

impl ValueRange {
    /// Empty range.
    pub const EMPTY: ValueRange = ValueRange { start: 0, len: 0 };

    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, len: u16) -> Self {
        Self { start, len }
    }

    /// Returns `true` if the range is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Number of IDs in the range.
    #[inline]
    pub const fn len(self) -> usize {
        self.len as usize
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::EMPTY
    }
}

//! Person handles with generational indices.

use std::fmt;

/// Handle to a person in the family forest arena.
///
/// The generation counter increments when an arena slot is reused after the
/// forest is cleared, so handles kept across a clear are detected as stale.
///
/// # Layout
/// - `index`: 64-bit index into the arena
/// - `generation`: 32-bit generation counter
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct PersonId {
    /// Index into the arena.
    pub index: u64,
    /// Generation counter for stale reference detection.
    pub generation: u32,
}

impl PersonId {
    /// Creates a new person handle with the given index and generation.
    #[must_use]
    pub const fn new(index: u64, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl fmt::Debug for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PersonId({}v{})", self.index, self.generation)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person({})", self.index)
    }
}

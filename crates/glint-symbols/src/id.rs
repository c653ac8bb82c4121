// SPDX-License-Identifier: LGPL-3.0-or-later

/// A unique identifier assigned to every symbol when it is constructed.
///
/// Ids are never reused within a compilation. Built-in ids form one
/// contiguous block starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolUniqueId(u32);

impl SymbolUniqueId {
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SymbolUniqueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues [`SymbolUniqueId`]s and remembers where the built-in ids end.
#[derive(Debug, Default, Clone)]
pub struct UniqueIdAllocator {
    counter: u32,
    // None until built-in initialization finishes, one past the last built-in id afterwards.
    boundary: Option<u32>,
}

impl UniqueIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an allocator that continues right after an already-frozen built-in block.
    pub fn resume_after(boundary: SymbolUniqueId) -> Self {
        Self { counter: boundary.0, boundary: Some(boundary.0) }
    }

    /// Issues the next id.
    pub fn allocate(&mut self) -> SymbolUniqueId {
        let id = SymbolUniqueId(self.counter);
        self.counter = self.counter.checked_add(1).expect("symbol unique ids exhausted");
        id
    }

    /// Returns the id the next call to [`Self::allocate`] will issue.
    pub fn peek(&self) -> SymbolUniqueId {
        SymbolUniqueId(self.counter)
    }

    /// Marks every id issued so far as a built-in id.
    ///
    /// # Panics
    ///
    /// Panics if the boundary has already been frozen.
    pub fn freeze(&mut self) -> SymbolUniqueId {
        assert!(self.boundary.is_none(), "built-in id boundary is already frozen");
        self.boundary = Some(self.counter);
        SymbolUniqueId(self.counter)
    }

    pub fn is_frozen(&self) -> bool {
        self.boundary.is_some()
    }

    pub fn boundary(&self) -> Option<SymbolUniqueId> {
        self.boundary.map(SymbolUniqueId)
    }

    /// Whether the given id belongs to the built-in block.
    ///
    /// Before the boundary is frozen, every id counts as a built-in id.
    pub fn is_built_in(&self, id: SymbolUniqueId) -> bool {
        match self.boundary {
            Some(boundary) => id.0 < boundary,
            None => true,
        }
    }

    /// Rewinds the counter to the built-in boundary, releasing all user ids.
    /// Returns how many ids were released.
    ///
    /// # Panics
    ///
    /// Panics if the boundary has not been frozen yet.
    pub fn reset_user_ids(&mut self) -> u32 {
        let boundary = self.boundary.expect("user ids cannot be reset before the built-in boundary is frozen");
        let released = self.counter - boundary;
        self.counter = boundary;
        released
    }
}

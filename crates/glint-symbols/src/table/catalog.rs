// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::{BuiltInTier, PrecisionLevel, ScopeLevel, SymbolUniqueId};

/// The built-in levels of a symbol table, one per [`BuiltInTier`].
///
/// A catalog is filled in once during initialization. After the built-in id
/// boundary is frozen it is never modified again, and can be shared by any
/// number of tables on the same thread.
#[derive(Debug)]
pub struct BuiltInCatalog {
    levels: [ScopeLevel; BuiltInTier::COUNT],
    precisions: [PrecisionLevel; BuiltInTier::COUNT],
    boundary: Option<SymbolUniqueId>,
}

impl BuiltInCatalog {
    pub fn new() -> Self {
        Self {
            levels: std::array::from_fn(|_| ScopeLevel::new()),
            precisions: std::array::from_fn(|_| PrecisionLevel::new()),
            boundary: None,
        }
    }

    pub fn level(&self, tier: BuiltInTier) -> &ScopeLevel {
        &self.levels[tier.index()]
    }

    pub fn precision(&self, tier: BuiltInTier) -> &PrecisionLevel {
        &self.precisions[tier.index()]
    }

    pub(crate) fn level_mut(&mut self, tier: BuiltInTier) -> &mut ScopeLevel {
        &mut self.levels[tier.index()]
    }

    pub(crate) fn precision_mut(&mut self, tier: BuiltInTier) -> &mut PrecisionLevel {
        &mut self.precisions[tier.index()]
    }

    /// One past the last built-in id, once initialization has finished.
    pub fn boundary(&self) -> Option<SymbolUniqueId> {
        self.boundary
    }

    pub fn is_frozen(&self) -> bool {
        self.boundary.is_some()
    }

    pub(crate) fn freeze(&mut self, boundary: SymbolUniqueId) {
        self.boundary = Some(boundary);
    }

    /// Total number of entries across all tiers.
    pub fn symbol_count(&self) -> usize {
        self.levels.iter().map(ScopeLevel::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(ScopeLevel::is_empty)
    }
}

impl Default for BuiltInCatalog {
    fn default() -> Self {
        Self::new()
    }
}

// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::BuiltInTier;

/// Position of a scope level within the symbol table's stack.
///
/// Built-in tiers sit at the bottom, followed by the global scope of the
/// shader, followed by any nested function or block scopes. The derived
/// ordering matches the stack order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SymbolLevel {
    BuiltIn(BuiltInTier),
    Global,
    /// A scope nested the given number of levels below the global scope (starting at 1).
    Nested(u32),
}

/// The topmost level reserved for built-ins.
pub const LAST_BUILTIN_LEVEL: SymbolLevel = SymbolLevel::BuiltIn(BuiltInTier::Glsl);

/// The level holding the shader's global declarations.
pub const GLOBAL_LEVEL: SymbolLevel = SymbolLevel::Global;

impl SymbolLevel {
    /// Converts a stack position into a level.
    pub fn from_index(index: usize) -> Self {
        match index {
            index if index < BuiltInTier::COUNT => Self::BuiltIn(BuiltInTier::ALL[index]),
            index if index == BuiltInTier::COUNT => Self::Global,
            index => {
                let depth = u32::try_from(index - BuiltInTier::COUNT).expect("scope nesting too deep");
                Self::Nested(depth)
            },
        }
    }

    /// The stack position of this level.
    pub fn index(self) -> usize {
        match self {
            Self::BuiltIn(tier) => tier.index(),
            Self::Global => BuiltInTier::COUNT,
            Self::Nested(depth) => BuiltInTier::COUNT + depth as usize,
        }
    }

    pub fn is_built_in(self) -> bool {
        matches!(self, Self::BuiltIn(_))
    }

    pub fn tier(self) -> Option<BuiltInTier> {
        match self {
            Self::BuiltIn(tier) => Some(tier),
            _ => None,
        }
    }

    /// The level directly below this one, if any.
    pub fn outer(self) -> Option<Self> {
        self.index().checked_sub(1).map(Self::from_index)
    }
}

impl std::fmt::Display for SymbolLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BuiltIn(tier) => write!(f, "built-in ({tier})"),
            Self::Global => f.write_str("global"),
            Self::Nested(depth) => write!(f, "nested ({depth})"),
        }
    }
}

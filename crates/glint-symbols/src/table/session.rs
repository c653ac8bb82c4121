// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::{PrecisionLevel, ScopeLevel, SymbolLevel};

/// The user scopes of one compilation.
///
/// Each entry pairs a scope level with the precision level of the same scope,
/// so that the two are always pushed and popped together.
#[derive(Debug, Default)]
pub struct CompilationSession {
    levels: Vec<(ScopeLevel, PrecisionLevel)>,
}

impl CompilationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self) {
        self.levels.push((ScopeLevel::new(), PrecisionLevel::new()));
    }

    /// Releases the innermost scope. Returns `false` if there was none.
    pub fn pop(&mut self) -> bool {
        self.levels.pop().is_some()
    }

    /// Number of pushed scopes, the global scope included.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Releases every scope at once.
    pub fn clear(&mut self) {
        self.levels.clear();
    }

    /// The level of the innermost scope, if any scope has been pushed.
    pub fn current_level(&self) -> Option<SymbolLevel> {
        match self.levels.len() {
            0 => None,
            1 => Some(SymbolLevel::Global),
            depth => Some(SymbolLevel::Nested(depth as u32 - 1)),
        }
    }

    pub fn scope(&self, level: SymbolLevel) -> Option<&ScopeLevel> {
        self.entry(level).map(|(scope, _)| scope)
    }

    pub fn scope_mut(&mut self, level: SymbolLevel) -> Option<&mut ScopeLevel> {
        let position = Self::position(level)?;
        self.levels.get_mut(position).map(|(scope, _)| scope)
    }

    pub fn precision(&self, level: SymbolLevel) -> Option<&PrecisionLevel> {
        self.entry(level).map(|(_, precision)| precision)
    }

    pub fn current_scope_mut(&mut self) -> Option<&mut ScopeLevel> {
        self.levels.last_mut().map(|(scope, _)| scope)
    }

    pub fn current_precision_mut(&mut self) -> Option<&mut PrecisionLevel> {
        self.levels.last_mut().map(|(_, precision)| precision)
    }

    /// Scopes from the innermost outward, along with their levels.
    pub fn scopes(&self) -> impl Iterator<Item = (SymbolLevel, &ScopeLevel)> {
        self.levels
            .iter()
            .enumerate()
            .rev()
            .map(|(position, (scope, _))| (Self::level_at(position), scope))
    }

    /// Precision levels from the innermost outward.
    pub fn precisions(&self) -> impl Iterator<Item = &PrecisionLevel> {
        self.levels.iter().rev().map(|(_, precision)| precision)
    }

    fn entry(&self, level: SymbolLevel) -> Option<&(ScopeLevel, PrecisionLevel)> {
        self.levels.get(Self::position(level)?)
    }

    fn position(level: SymbolLevel) -> Option<usize> {
        match level {
            SymbolLevel::BuiltIn(_) => None,
            SymbolLevel::Global => Some(0),
            SymbolLevel::Nested(depth) => Some(depth as usize),
        }
    }

    fn level_at(position: usize) -> SymbolLevel {
        match position {
            0 => SymbolLevel::Global,
            depth => SymbolLevel::Nested(depth as u32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasicType, Precision};

    #[test]
    fn levels() {
        let mut session = CompilationSession::new();
        assert_eq!(session.current_level(), None);

        session.push();
        assert_eq!(session.current_level(), Some(SymbolLevel::Global));

        session.push();
        session.push();
        assert_eq!(session.current_level(), Some(SymbolLevel::Nested(2)));
        assert_eq!(session.depth(), 3);

        let levels = session.scopes().map(|(level, _)| level).collect::<Vec<_>>();
        assert_eq!(levels, [SymbolLevel::Nested(2), SymbolLevel::Nested(1), SymbolLevel::Global]);
    }

    #[test]
    fn pop_and_clear() {
        let mut session = CompilationSession::new();
        assert!(!session.pop());

        session.push();
        session.push();
        assert!(session.pop());
        assert_eq!(session.depth(), 1);

        session.clear();
        assert!(session.is_empty());
    }

    #[test]
    fn lockstep_precision() {
        let mut session = CompilationSession::new();
        session.push();
        session.current_precision_mut().unwrap().set(BasicType::Float, Precision::Low);
        session.push();

        assert_eq!(session.precisions().count(), 2);
        assert_eq!(session.precision(SymbolLevel::Global).unwrap().get(BasicType::Float), Some(Precision::Low));
        assert!(session.precision(SymbolLevel::Nested(1)).unwrap().is_empty());

        session.pop();
        assert_eq!(session.precisions().count(), 1);
    }

    #[test]
    fn built_in_levels_are_not_part_of_a_session() {
        let mut session = CompilationSession::new();
        session.push();
        assert!(session.scope(crate::LAST_BUILTIN_LEVEL).is_none());
        assert!(session.scope_mut(SymbolLevel::Nested(1)).is_none());
        assert!(session.scope(SymbolLevel::Global).is_some());
    }
}

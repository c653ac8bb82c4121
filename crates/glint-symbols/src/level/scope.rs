// SPDX-License-Identifier: LGPL-3.0-or-later

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::{DeclarationError, Symbol};

/// One flat namespace within the symbol table's scope stack.
///
/// Symbols are keyed by their storage key (see [`Symbol::storage_key`]).
/// Redeclaration checks only ever look at this level; shadowing an outer
/// declaration is always allowed.
#[derive(Debug, Default)]
pub struct ScopeLevel {
    symbols: HashMap<Rc<str>, Rc<Symbol>>,
    // Plain names of the functions declared here, to keep variables and
    // functions from sharing an identifier within one scope.
    function_names: HashSet<Rc<str>>,

    invariant_varyings: HashSet<String>,
    global_invariant: bool,

    unmangled_built_in_names: HashSet<Rc<str>>,
}

impl ScopeLevel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a symbol under its storage key.
    ///
    /// Returns `false` without modifying the level if the key is already taken,
    /// or if the symbol's name is already used by a different kind of declaration.
    pub fn insert(&mut self, symbol: Rc<Symbol>) -> bool {
        self.try_insert(symbol).is_ok()
    }

    /// Same as [`Self::insert`], but reports why an insertion was rejected.
    pub fn try_insert(&mut self, symbol: Rc<Symbol>) -> Result<(), DeclarationError> {
        self.check_insert(&symbol)?;

        if symbol.is_function() {
            self.function_names.insert(symbol.name().clone());
        }
        self.symbols.insert(symbol.storage_key(), symbol);
        Ok(())
    }

    fn check_insert(&self, symbol: &Symbol) -> Result<(), DeclarationError> {
        let name = symbol.name();
        if self.symbols.contains_key(&symbol.storage_key()) {
            return Err(DeclarationError::Redeclaration { name: name.clone() });
        }

        if symbol.is_function() {
            if self.symbols.get(name).is_some_and(|existing| !existing.is_function()) {
                return Err(DeclarationError::ConflictsWithVariable { name: name.clone() });
            }
        } else if self.function_names.contains(name) {
            return Err(DeclarationError::ConflictsWithFunction { name: name.clone() });
        }

        Ok(())
    }

    /// Inserts a function under its plain name, ignoring its signature.
    ///
    /// # Panics
    ///
    /// Panics if the symbol is not a function.
    pub fn insert_unmangled(&mut self, function: Rc<Symbol>) -> bool {
        assert!(function.is_function(), "only functions can be inserted unmangled");

        let name = function.name().clone();
        if self.symbols.contains_key(&name) {
            return false;
        }

        self.function_names.insert(name.clone());
        self.symbols.insert(name, function);
        true
    }

    /// Looks up a symbol by exact storage key within this level only.
    pub fn find(&self, name: &str) -> Option<&Rc<Symbol>> {
        self.symbols.get(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterates all symbols of this level, sorted by storage key.
    pub fn iter(&self) -> impl Iterator<Item = (&Rc<str>, &Rc<Symbol>)> {
        let mut entries = self.symbols.iter().collect::<Vec<_>>();
        entries.sort_unstable_by(|(left, _), (right, _)| left.cmp(right));
        entries.into_iter()
    }

    /// Records a varying declared invariant through `invariant name;`.
    pub fn add_invariant_varying(&mut self, name: impl Into<String>) {
        self.invariant_varyings.insert(name.into());
    }

    /// Whether the given varying was declared invariant in this scope.
    ///
    /// A `false` result doesn't rule out invariance, since it can also be part
    /// of the varying's own type qualifiers.
    pub fn is_varying_invariant(&self, name: &str) -> bool {
        self.global_invariant || self.invariant_varyings.contains(name)
    }

    /// Marks every varying in this scope as invariant, e.g. through `#pragma STDGL invariant(all)`.
    pub fn set_global_invariant(&mut self, invariant: bool) {
        self.global_invariant = invariant;
    }

    pub fn insert_unmangled_built_in_name(&mut self, name: &str) {
        if !self.unmangled_built_in_names.contains(name) {
            self.unmangled_built_in_names.insert(Rc::from(name));
        }
    }

    pub fn has_unmangled_built_in(&self, name: &str) -> bool {
        self.unmangled_built_in_names.contains(name)
    }
}

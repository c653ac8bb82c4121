// SPDX-License-Identifier: LGPL-3.0-or-later

use std::rc::Rc;

use super::SymbolTable;
use crate::{
    BasicType,
    BuiltInTier,
    ExtensionPolicy,
    Precision,
    ScopeLevel,
    ShaderVersion,
    Symbol,
    SymbolLevel,
    GLOBAL_LEVEL,
};

/// The result of resolving a name through the scope stack.
#[derive(Debug, Clone)]
pub struct SymbolLookup {
    pub symbol: Rc<Symbol>,
    /// The level the symbol was found at.
    pub level: SymbolLevel,
    /// Whether the symbol was found in one of the built-in tiers.
    pub is_built_in: bool,
    /// Whether the symbol was found in the innermost scope, which is where a
    /// new declaration of the same name would conflict with it.
    pub is_same_scope: bool,
}

impl SymbolTable {
    /// The built-in tiers a lookup for the given version searches, from the highest down.
    pub fn searched_tiers(version: ShaderVersion, include_desktop: bool) -> impl Iterator<Item = BuiltInTier> {
        BuiltInTier::descending()
            .filter(move |tier| tier.is_visible_to(version) || (include_desktop && *tier == BuiltInTier::Glsl))
    }

    fn built_in_scopes(&self, version: ShaderVersion) -> impl Iterator<Item = (SymbolLevel, &ScopeLevel)> {
        Self::searched_tiers(version, false).map(move |tier| (SymbolLevel::BuiltIn(tier), self.built_ins.level(tier)))
    }

    /// Resolves a name from the innermost scope outward.
    ///
    /// Function names must be given in mangled form. Built-in tiers the shader
    /// version can't see are skipped, and the desktop tier is never searched.
    pub fn find(&self, name: &str, version: ShaderVersion) -> Option<SymbolLookup> {
        let current = self.current_level();
        self.session
            .scopes()
            .chain(self.built_in_scopes(version))
            .find_map(|(level, scope)| {
                scope.find(name).map(|symbol| SymbolLookup {
                    symbol: symbol.clone(),
                    level,
                    is_built_in: level.is_built_in(),
                    is_same_scope: level == current,
                })
            })
    }

    /// Same as [`Self::find`], but ignores symbols whose extension the policy doesn't permit.
    ///
    /// A hidden symbol doesn't uncover a symbol of the same name further out;
    /// the lookup simply fails.
    pub fn find_visible(
        &self,
        name: &str,
        version: ShaderVersion,
        extensions: &dyn ExtensionPolicy,
    ) -> Option<SymbolLookup> {
        self.find(name, version)
            .filter(|lookup| extensions.permits(lookup.symbol.extension()))
    }

    /// Looks a name up in the global scope only.
    pub fn find_global(&self, name: &str) -> Option<Rc<Symbol>> {
        debug_assert!(!self.at_built_in_level(), "no global scope has been pushed");
        self.session.scope(GLOBAL_LEVEL)?.find(name).cloned()
    }

    /// Looks a name up in the built-in tiers visible to the given version.
    pub fn find_built_in(&self, name: &str, version: ShaderVersion) -> Option<Rc<Symbol>> {
        self.find_built_in_with_desktop(name, version, false)
    }

    /// Same as [`Self::find_built_in`], optionally including the desktop GLSL tier.
    pub fn find_built_in_with_desktop(
        &self,
        name: &str,
        version: ShaderVersion,
        include_desktop: bool,
    ) -> Option<Rc<Symbol>> {
        Self::searched_tiers(version, include_desktop)
            .find_map(|tier| self.built_ins.level(tier).find(name))
            .cloned()
    }

    /// The built-in tier holding this exact symbol.
    ///
    /// Functions inserted unmangled are stored under their plain name rather
    /// than their mangled one, so both keys are tried.
    pub fn built_in_tier(&self, symbol: &Rc<Symbol>) -> Option<BuiltInTier> {
        let key = symbol.storage_key();
        let stored_as = |level: &ScopeLevel, key: &str| {
            level.find(key).is_some_and(|found| Rc::ptr_eq(found, symbol))
        };

        BuiltInTier::descending().find(|tier| {
            let level = self.built_ins.level(*tier);
            stored_as(level, &key) || stored_as(level, symbol.name().as_ref())
        })
    }

    /// Whether a built-in function of this plain name exists for the given version.
    pub fn has_unmangled_built_in_for_shader_version(&self, name: &str, version: ShaderVersion) -> bool {
        Self::searched_tiers(version, false).any(|tier| self.built_ins.level(tier).has_unmangled_built_in(name))
    }

    /// The default precision in effect for a type at the current scope.
    ///
    /// Returns [`Precision::Undefined`] for types that don't take a precision,
    /// or if no default was set anywhere on the stack.
    pub fn get_default_precision(&self, basic: BasicType) -> Precision {
        if !basic.supports_precision() {
            return Precision::Undefined;
        }

        // uint shares its default with int
        let basic = match basic {
            BasicType::UInt => BasicType::Int,
            other => other,
        };

        self.session
            .precisions()
            .chain(BuiltInTier::descending().map(|tier| self.built_ins.precision(tier)))
            .find_map(|level| level.get(basic))
            .unwrap_or(Precision::Undefined)
    }
}

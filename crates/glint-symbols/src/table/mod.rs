// SPDX-License-Identifier: LGPL-3.0-or-later

use std::rc::Rc;

use tracing::trace;

use crate::{
    BasicType,
    DeclarationError,
    Function,
    InterfaceBlock,
    Precision,
    ScopeLevel,
    StructType,
    Symbol,
    SymbolLevel,
    SymbolUniqueId,
    UniqueIdAllocator,
    Variable,
    GLOBAL_LEVEL,
    LAST_BUILTIN_LEVEL,
};

mod builtin;
mod catalog;
mod lookup;
mod session;

pub use builtin::*;
pub use catalog::*;
pub use lookup::*;
pub use session::*;

/// The symbol table: a stack of scope levels searched from the top.
///
/// The bottom of the stack holds the built-in tiers (see [`BuiltInCatalog`]),
/// which are filled in once through the `insert_*` family and then frozen with
/// [`Self::mark_built_in_initialization_finished`]. Everything above them
/// belongs to the current compilation (see [`CompilationSession`]) and is
/// released by [`Self::clear_compilation_results`], so the same table can be
/// reused for many shaders.
///
/// ```rust
/// use glint_symbols::prolog::*;
///
/// let mut table = SymbolTable::new();
/// table.insert_const_int(BuiltInTier::Common, "gl_MaxDrawBuffers", 4, Precision::Medium);
/// table.mark_built_in_initialization_finished();
///
/// table.push();
/// let color = Variable::new(
///     table.next_unique_id(),
///     "color",
///     Type::vector(BasicType::Float, 4),
///     SymbolType::UserDefined,
/// );
/// assert!(table.declare_variable(color));
///
/// let found = table.find("gl_MaxDrawBuffers", ShaderVersion::ESSL3).unwrap();
/// assert!(found.is_built_in);
///
/// table.pop();
/// table.clear_compilation_results();
/// ```
#[derive(Debug)]
pub struct SymbolTable {
    built_ins: Rc<BuiltInCatalog>,
    session: CompilationSession,
    ids: UniqueIdAllocator,
}

impl SymbolTable {
    /// Creates a table with empty built-in levels, ready to be initialized.
    pub fn new() -> Self {
        Self {
            built_ins: Rc::new(BuiltInCatalog::new()),
            session: CompilationSession::new(),
            ids: UniqueIdAllocator::new(),
        }
    }

    /// Creates a table on top of an already-initialized built-in catalog.
    ///
    /// # Panics
    ///
    /// Panics if the catalog's initialization has not finished.
    pub fn with_catalog(catalog: Rc<BuiltInCatalog>) -> Self {
        let boundary = catalog.boundary().expect("a shared built-in catalog must be frozen");
        Self {
            built_ins: catalog,
            session: CompilationSession::new(),
            ids: UniqueIdAllocator::resume_after(boundary),
        }
    }

    /// Creates a new table sharing this table's built-ins, with no user state.
    ///
    /// # Panics
    ///
    /// Panics if built-in initialization has not finished.
    pub fn fork(&self) -> Self {
        Self::with_catalog(self.built_ins.clone())
    }

    pub fn built_ins(&self) -> &Rc<BuiltInCatalog> {
        &self.built_ins
    }

    pub fn session(&self) -> &CompilationSession {
        &self.session
    }

    /// Whether no symbols have been loaded at all, i.e. built-ins were never initialized.
    pub fn is_empty(&self) -> bool {
        self.built_ins.is_empty() && self.session.is_empty()
    }

    pub fn current_level(&self) -> SymbolLevel {
        self.session.current_level().unwrap_or(LAST_BUILTIN_LEVEL)
    }

    pub fn at_built_in_level(&self) -> bool {
        self.current_level().is_built_in()
    }

    pub fn at_global_level(&self) -> bool {
        self.current_level() == GLOBAL_LEVEL
    }

    /// Enters a new scope. The first push after the built-ins creates the global scope.
    pub fn push(&mut self) {
        self.session.push();
    }

    /// Leaves the innermost scope, releasing everything declared in it.
    ///
    /// # Panics
    ///
    /// Panics if there is no user scope left to pop.
    pub fn pop(&mut self) {
        let popped = self.session.pop();
        assert!(popped, "cannot pop below the built-in levels");
    }

    /// The scope level at the given stack position, if it exists.
    pub fn scope(&self, level: SymbolLevel) -> Option<&ScopeLevel> {
        match level.tier() {
            Some(tier) => Some(self.built_ins.level(tier)),
            None => self.session.scope(level),
        }
    }

    /// The scope level directly below the current one.
    pub fn outer_level(&self) -> Option<&ScopeLevel> {
        self.current_level().outer().and_then(|level| self.scope(level))
    }

    /// Issues a new unique id for a symbol about to be constructed.
    pub fn next_unique_id(&mut self) -> SymbolUniqueId {
        self.ids.allocate()
    }

    pub fn is_built_in_initialization_finished(&self) -> bool {
        self.ids.is_frozen()
    }

    fn current_scope_mut(&mut self) -> &mut ScopeLevel {
        self.session.current_scope_mut().expect("no user scope has been pushed")
    }

    fn current_scope(&self) -> &ScopeLevel {
        let (_, scope) = self.session.scopes().next().expect("no user scope has been pushed");
        scope
    }

    fn declare(&mut self, symbol: Symbol) -> Result<Rc<Symbol>, DeclarationError> {
        let symbol = Rc::new(symbol);
        match self.current_scope_mut().try_insert(symbol.clone()) {
            Ok(()) => Ok(symbol),
            Err(error) => {
                trace!(%error, "declaration rejected");
                Err(error)
            },
        }
    }

    /// Declares a variable in the current scope.
    ///
    /// Returns `false` if the name is already declared in the current scope.
    /// Shadowing a declaration from an outer scope is not a failure.
    ///
    /// # Panics
    ///
    /// Panics if no user scope has been pushed.
    pub fn declare_variable(&mut self, variable: Variable) -> bool {
        self.try_declare_variable(variable).is_ok()
    }

    pub fn try_declare_variable(&mut self, variable: Variable) -> Result<Rc<Symbol>, DeclarationError> {
        self.declare(variable.into())
    }

    pub fn declare_struct_type(&mut self, structure: Rc<StructType>) -> bool {
        self.try_declare_struct_type(structure).is_ok()
    }

    pub fn try_declare_struct_type(&mut self, structure: Rc<StructType>) -> Result<Rc<Symbol>, DeclarationError> {
        self.declare(structure.into())
    }

    pub fn declare_interface_block(&mut self, block: Rc<InterfaceBlock>) -> bool {
        self.try_declare_interface_block(block).is_ok()
    }

    pub fn try_declare_interface_block(
        &mut self,
        block: Rc<InterfaceBlock>,
    ) -> Result<Rc<Symbol>, DeclarationError> {
        self.declare(block.into())
    }

    /// Declares a user-defined function in the current scope.
    ///
    /// Fails if the same overload is already declared in this scope,
    /// or if the name is already used by a non-function.
    pub fn declare_function(&mut self, function: Function) -> bool {
        self.try_declare_function(function).is_ok()
    }

    pub fn try_declare_function(&mut self, function: Function) -> Result<Rc<Symbol>, DeclarationError> {
        self.declare(function.into())
    }

    /// Sets the default precision for a type in the current scope.
    ///
    /// # Panics
    ///
    /// Panics if no user scope has been pushed.
    pub fn set_default_precision(&mut self, basic: BasicType, precision: Precision) {
        self.session
            .current_precision_mut()
            .expect("no user scope has been pushed")
            .set(basic, precision);
    }

    /// Records a varying declared invariant through `invariant name;`.
    pub fn add_invariant_varying(&mut self, name: impl Into<String>) {
        assert!(self.at_global_level(), "invariant varyings are declared at global scope");
        self.current_scope_mut().add_invariant_varying(name);
    }

    /// Whether a varying was declared invariant at global scope.
    ///
    /// If this returns `false` the varying could still be invariant through
    /// its own declaration; that is part of the variable's type, not tracked here.
    pub fn is_varying_invariant(&self, name: &str) -> bool {
        assert!(self.at_global_level(), "invariant varyings are queried at global scope");
        self.current_scope().is_varying_invariant(name)
    }

    pub fn set_global_invariant(&mut self, invariant: bool) {
        assert!(self.at_global_level(), "global invariance is set at global scope");
        self.current_scope_mut().set_global_invariant(invariant);
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

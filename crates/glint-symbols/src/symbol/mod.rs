// SPDX-License-Identifier: LGPL-3.0-or-later

use std::rc::Rc;

use crate::{Extension, SymbolUniqueId};

mod function;
mod structure;
mod variable;

pub use function::*;
pub use structure::*;
pub use variable::*;

/// Where a symbol came from, which decides its redeclaration and id numbering policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolType {
    BuiltIn,
    UserDefined,
    /// Anonymous symbols, such as nameless parameters or instance-less blocks.
    Empty,
}

/// Data common to every kind of symbol.
#[derive(Debug, Clone)]
pub struct SymbolInfo {
    name: Rc<str>,
    unique_id: SymbolUniqueId,
    symbol_type: SymbolType,
    extension: Extension,
}

impl SymbolInfo {
    pub fn new(unique_id: SymbolUniqueId, name: impl Into<Rc<str>>, symbol_type: SymbolType) -> Self {
        Self {
            name: name.into(),
            unique_id,
            symbol_type,
            extension: Extension::Undefined,
        }
    }

    pub fn name(&self) -> &Rc<str> {
        &self.name
    }

    pub fn unique_id(&self) -> SymbolUniqueId {
        self.unique_id
    }

    pub fn symbol_type(&self) -> SymbolType {
        self.symbol_type
    }

    pub fn extension(&self) -> Extension {
        self.extension
    }

    pub(crate) fn set_extension(&mut self, extension: Extension) {
        self.extension = extension;
    }
}

/// A declaration the symbol table can resolve a name to.
#[derive(Debug)]
pub enum Symbol {
    Variable(Variable),
    Function(Function),
    Struct(Rc<StructType>),
    InterfaceBlock(Rc<InterfaceBlock>),
}

impl Symbol {
    pub fn info(&self) -> &SymbolInfo {
        match self {
            Self::Variable(variable) => variable.info(),
            Self::Function(function) => function.info(),
            Self::Struct(structure) => structure.info(),
            Self::InterfaceBlock(block) => block.info(),
        }
    }

    pub fn name(&self) -> &Rc<str> {
        self.info().name()
    }

    pub fn unique_id(&self) -> SymbolUniqueId {
        self.info().unique_id()
    }

    pub fn symbol_type(&self) -> SymbolType {
        self.info().symbol_type()
    }

    pub fn extension(&self) -> Extension {
        self.info().extension()
    }

    pub fn is_built_in(&self) -> bool {
        self.symbol_type() == SymbolType::BuiltIn
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Variable(_))
    }

    /// The key this symbol is stored under in a scope level:
    /// the mangled name for functions, the plain name for everything else.
    pub fn storage_key(&self) -> Rc<str> {
        match self {
            Self::Function(function) => function.mangled_name().clone(),
            _ => self.name().clone(),
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Self::Variable(variable) => Some(variable),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&Rc<StructType>> {
        match self {
            Self::Struct(structure) => Some(structure),
            _ => None,
        }
    }

    pub fn as_interface_block(&self) -> Option<&Rc<InterfaceBlock>> {
        match self {
            Self::InterfaceBlock(block) => Some(block),
            _ => None,
        }
    }
}

impl From<Variable> for Symbol {
    fn from(value: Variable) -> Self {
        Self::Variable(value)
    }
}

impl From<Function> for Symbol {
    fn from(value: Function) -> Self {
        Self::Function(value)
    }
}

impl From<Rc<StructType>> for Symbol {
    fn from(value: Rc<StructType>) -> Self {
        Self::Struct(value)
    }
}

impl From<Rc<InterfaceBlock>> for Symbol {
    fn from(value: Rc<InterfaceBlock>) -> Self {
        Self::InterfaceBlock(value)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(variable) => std::fmt::Display::fmt(variable, f),
            Self::Function(function) => std::fmt::Display::fmt(function, f),
            Self::Struct(structure) => std::fmt::Display::fmt(structure, f),
            Self::InterfaceBlock(block) => std::fmt::Display::fmt(block, f),
        }
    }
}

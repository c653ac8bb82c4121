// SPDX-License-Identifier: LGPL-3.0-or-later

//! The built-in symbol catalog of the shading language.
//!
//! Registers the built-in functions, variables, constants and default
//! precisions into a [`SymbolTable`], tiered by the language version that
//! introduced them.

use glint_symbols::SymbolTable;
use tracing::debug;

pub mod functions;
pub mod textures;
pub mod variables;

mod resources;
mod shorthand;

pub use resources::*;

/// Registers every built-in symbol for the given stage into the table.
///
/// The table's built-in initialization must not have finished yet; this
/// leaves it unfinished so that callers can register further symbols.
pub fn initialize_built_ins(table: &mut SymbolTable, stage: ShaderStage, resources: &BuiltInResources) {
    variables::register_default_precisions(table, stage);
    functions::register_funcs(table, stage, resources);
    textures::register_funcs(table, stage, resources);
    variables::register_variables(table, stage, resources);

    debug!(%stage, symbols = table.built_ins().symbol_count(), "built-in symbols registered");
}

/// Creates a table with all built-ins registered and frozen, ready for compiling shaders.
///
/// # Example
///
/// ```rust
/// use glint_builtins::{BuiltInResources, ShaderStage};
/// use glint_symbols::ShaderVersion;
///
/// let table = glint_builtins::new_table(ShaderStage::Fragment, &BuiltInResources::default());
/// assert!(table.find("gl_FragColor", ShaderVersion::ESSL1).is_some());
/// assert!(table.find("gl_FragColor", ShaderVersion::ESSL3).is_some());
/// assert!(table.find("gl_FragDepth", ShaderVersion::ESSL1).is_none());
/// ```
pub fn new_table(stage: ShaderStage, resources: &BuiltInResources) -> SymbolTable {
    let mut table = SymbolTable::new();
    initialize_built_ins(&mut table, stage, resources);
    table.mark_built_in_initialization_finished();
    table
}

pub mod prolog {
    pub use super::resources::{BuiltInResources, ExtensionSupport, ShaderStage};
    pub use super::{initialize_built_ins, new_table};
}

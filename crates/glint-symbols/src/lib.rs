// SPDX-License-Identifier: LGPL-3.0-or-later

//! Symbol table for parsing shading-language programs.
//!
//! - One table can be used to compile many shaders, so the large number of
//!   built-in symbols only has to be created and loaded once.
//! - Functions are stored under a mangled name, so lookups are never
//!   ambiguous between overloads.
//! - Scopes are pushed and popped, making the table a stack of levels that is
//!   searched from the top, with new declarations going into the top.
//! - Compile-time constants keep their values in the table, so the parser can
//!   substitute and fold them at parse time.
//! - Temporaries produced by operations are tracked by the intermediate
//!   representation, not here.

mod error;
mod id;
mod level;
mod mangle;
mod symbol;
mod table;
mod types;

pub use error::*;
pub use id::*;
pub use level::*;
pub use mangle::*;
pub use symbol::*;
pub use table::*;
pub use types::*;

pub mod prolog {
    pub use super::{
        symbol::{Function, InterfaceBlock, Parameter, StructType, Symbol, SymbolType, Variable},
        table::{SymbolLookup, SymbolTable},
        types::{BasicType, BuiltInTier, Extension, Precision, Qualifier, ShaderVersion, Type},
    };
}

// SPDX-License-Identifier: LGPL-3.0-or-later

use std::rc::Rc;

use super::{SymbolInfo, SymbolType};
use crate::{ConstantValue, Extension, SymbolUniqueId, Type};

#[derive(Debug)]
pub struct Variable {
    info: SymbolInfo,
    ty: Type,
    constant: Option<ConstantValue>,
}

impl Variable {
    pub fn new(unique_id: SymbolUniqueId, name: impl Into<Rc<str>>, ty: Type, symbol_type: SymbolType) -> Self {
        Self {
            info: SymbolInfo::new(unique_id, name, symbol_type),
            ty,
            constant: None,
        }
    }

    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.info.set_extension(extension);
        self
    }

    pub fn with_constant_value(mut self, value: ConstantValue) -> Self {
        self.share_constant_value(value);
        self
    }

    pub fn info(&self) -> &SymbolInfo {
        &self.info
    }

    pub fn name(&self) -> &Rc<str> {
        self.info.name()
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// The folded value of this variable, if it is a compile-time constant.
    pub fn constant_value(&self) -> Option<&ConstantValue> {
        self.constant.as_ref()
    }

    pub fn is_constant(&self) -> bool {
        self.constant.is_some()
    }

    /// Attaches a folded constant value to this variable.
    ///
    /// The value can only be assigned once, before the variable is declared;
    /// returns `false` and leaves the existing value in place if one was
    /// already assigned.
    pub fn share_constant_value(&mut self, value: ConstantValue) -> bool {
        debug_assert!(
            value.len() == self.ty.component_count() || self.ty.is_array() || self.ty.layout().is_some(),
            "constant value for '{}' has {} components, expected {}",
            self.name(),
            value.len(),
            self.ty.component_count()
        );
        if self.constant.is_some() {
            return false;
        }
        self.constant = Some(value);
        true
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.ty, self.name())?;

        if let Some(value) = self.constant_value() {
            match &**value {
                [single] => write!(f, " = {single}")?,
                values => {
                    f.write_str(" = (")?;
                    for (i, component) in values.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{component}")?;
                    }
                    f.write_str(")")?;
                },
            }
        }

        Ok(())
    }
}

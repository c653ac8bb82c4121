// SPDX-License-Identifier: LGPL-3.0-or-later

use std::cell::OnceCell;
use std::rc::Rc;

use super::{SymbolInfo, SymbolType};
use crate::{mangled_name, Extension, Operator, SymbolUniqueId, Type};

/// A function parameter. Parameters of prototypes and built-ins may be unnamed.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    name: Option<Rc<str>>,
    ty: Type,
}

impl Parameter {
    pub fn new(name: impl Into<Rc<str>>, ty: Type) -> Self {
        Self { name: Some(name.into()), ty }
    }

    pub fn unnamed(ty: Type) -> Self {
        Self { name: None, ty }
    }

    pub fn name(&self) -> Option<&Rc<str>> {
        self.name.as_ref()
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }
}

#[derive(Debug)]
pub struct Function {
    info: SymbolInfo,
    parameters: Vec<Parameter>,
    return_type: Type,
    op: Operator,
    no_side_effects: bool,
    mangled: OnceCell<Rc<str>>,
}

impl Function {
    pub fn new(unique_id: SymbolUniqueId, name: impl Into<Rc<str>>, return_type: Type, symbol_type: SymbolType) -> Self {
        Self {
            info: SymbolInfo::new(unique_id, name, symbol_type),
            parameters: Vec::new(),
            return_type,
            op: Operator::Null,
            no_side_effects: false,
            mangled: OnceCell::new(),
        }
    }

    pub fn with_op(mut self, op: Operator) -> Self {
        self.op = op;
        self
    }

    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.info.set_extension(extension);
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.add_parameter(parameter);
        self
    }

    pub fn with_parameters(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        for parameter in parameters {
            self.add_parameter(parameter);
        }
        self
    }

    /// Marks the function as known to not have side effects, which allows
    /// calls to it to be pruned or reordered.
    pub fn known_to_not_have_side_effects(mut self, value: bool) -> Self {
        self.no_side_effects = value;
        self
    }

    /// Appends a parameter.
    ///
    /// # Panics
    ///
    /// Panics if the mangled name has already been computed, since it would
    /// no longer match the parameter list.
    pub fn add_parameter(&mut self, parameter: Parameter) {
        assert!(
            self.mangled.get().is_none(),
            "cannot add parameters to '{}' after its mangled name was taken",
            self.info.name()
        );
        self.parameters.push(parameter);
    }

    pub fn info(&self) -> &SymbolInfo {
        &self.info
    }

    pub fn name(&self) -> &Rc<str> {
        self.info.name()
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    pub fn return_type(&self) -> &Type {
        &self.return_type
    }

    pub fn op(&self) -> Operator {
        self.op
    }

    pub fn has_no_side_effects(&self) -> bool {
        self.no_side_effects
    }

    /// The signature-qualified key this function is stored under.
    pub fn mangled_name(&self) -> &Rc<str> {
        self.mangled.get_or_init(|| {
            let mangled = mangled_name(self.info.name(), self.parameters.iter().map(Parameter::ty));
            Rc::from(mangled)
        })
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}(", self.return_type, self.name())?;
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", parameter.ty)?;
            if let Some(name) = &parameter.name {
                write!(f, " {name}")?;
            }
        }
        f.write_str(")")
    }
}

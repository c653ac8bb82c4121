// SPDX-License-Identifier: LGPL-3.0-or-later

use std::rc::Rc;

use super::{SymbolInfo, SymbolType};
use crate::{Extension, SymbolUniqueId, Type};

/// A member of a structure or interface block.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: Rc<str>,
    ty: Type,
}

impl Field {
    pub fn new(name: impl Into<Rc<str>>, ty: Type) -> Self {
        Self { name: name.into(), ty }
    }

    pub fn name(&self) -> &Rc<str> {
        &self.name
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }
}

fn find_field<'a>(fields: &'a [Field], name: &str) -> Option<&'a Field> {
    fields.iter().find(|field| &*field.name == name)
}

#[derive(Debug)]
pub struct StructType {
    info: SymbolInfo,
    fields: Vec<Field>,
}

impl StructType {
    pub fn new(unique_id: SymbolUniqueId, name: impl Into<Rc<str>>, symbol_type: SymbolType) -> Self {
        Self {
            info: SymbolInfo::new(unique_id, name, symbol_type),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.info.set_extension(extension);
        self
    }

    pub fn info(&self) -> &SymbolInfo {
        &self.info
    }

    pub fn name(&self) -> &Rc<str> {
        self.info.name()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        find_field(&self.fields, name)
    }
}

impl std::fmt::Display for StructType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "struct {} {{", self.name())?;
        for field in &self.fields {
            write!(f, " {} {};", field.ty, field.name)?;
        }
        f.write_str(" }")
    }
}

#[derive(Debug)]
pub struct InterfaceBlock {
    info: SymbolInfo,
    fields: Vec<Field>,
    instance_name: Option<Rc<str>>,
}

impl InterfaceBlock {
    pub fn new(unique_id: SymbolUniqueId, name: impl Into<Rc<str>>, symbol_type: SymbolType) -> Self {
        Self {
            info: SymbolInfo::new(unique_id, name, symbol_type),
            fields: Vec::new(),
            instance_name: None,
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn with_instance_name(mut self, name: impl Into<Rc<str>>) -> Self {
        self.instance_name = Some(name.into());
        self
    }

    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.info.set_extension(extension);
        self
    }

    pub fn info(&self) -> &SymbolInfo {
        &self.info
    }

    pub fn name(&self) -> &Rc<str> {
        self.info.name()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        find_field(&self.fields, name)
    }

    pub fn instance_name(&self) -> Option<&Rc<str>> {
        self.instance_name.as_ref()
    }
}

impl std::fmt::Display for InterfaceBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "block {} {{", self.name())?;
        for field in &self.fields {
            write!(f, " {} {};", field.ty, field.name)?;
        }
        f.write_str(" }")?;
        if let Some(instance) = &self.instance_name {
            write!(f, " {instance}")?;
        }
        Ok(())
    }
}

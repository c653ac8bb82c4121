// SPDX-License-Identifier: LGPL-3.0-or-later

use std::fmt::Write;
use std::rc::Rc;

use super::{BasicType, Precision, Qualifier, SamplerKind};
use crate::{InterfaceBlock, StructType};

/// The aggregate layout a [`Type`] refers to, if any.
#[derive(Debug, Clone)]
pub enum TypeLayout {
    Struct(Rc<StructType>),
    InterfaceBlock(Rc<InterfaceBlock>),
}

impl TypeLayout {
    pub fn name(&self) -> &Rc<str> {
        match self {
            Self::Struct(structure) => structure.name(),
            Self::InterfaceBlock(block) => block.name(),
        }
    }
}

// Layouts are compared by identity, since two declarations of a structure
// with the same name and fields are still distinct types.
impl PartialEq for TypeLayout {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Struct(left), Self::Struct(right)) => Rc::ptr_eq(left, right),
            (Self::InterfaceBlock(left), Self::InterfaceBlock(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }
}

/// The shape, basic type and qualifiers of a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Type {
    basic: BasicType,
    precision: Precision,
    qualifier: Qualifier,
    primary_size: u8,
    secondary_size: u8,
    array_sizes: Vec<u32>,
    layout: Option<TypeLayout>,
}

impl Type {
    pub fn new(
        basic: BasicType,
        precision: Precision,
        qualifier: Qualifier,
        primary_size: u8,
        secondary_size: u8,
    ) -> Self {
        debug_assert!((1..=4).contains(&primary_size), "invalid primary size {primary_size}");
        debug_assert!((1..=4).contains(&secondary_size), "invalid secondary size {secondary_size}");

        Self {
            basic,
            precision,
            qualifier,
            primary_size,
            secondary_size,
            array_sizes: Vec::new(),
            layout: None,
        }
    }

    pub fn scalar(basic: BasicType) -> Self {
        Self::new(basic, Precision::Undefined, Qualifier::Global, 1, 1)
    }

    pub fn vector(basic: BasicType, size: u8) -> Self {
        Self::new(basic, Precision::Undefined, Qualifier::Global, size, 1)
    }

    /// A float matrix with the given number of columns and rows.
    pub fn matrix(columns: u8, rows: u8) -> Self {
        debug_assert!(columns > 1 && rows > 1, "matrices need at least two columns and rows");
        Self::new(BasicType::Float, Precision::Undefined, Qualifier::Global, columns, rows)
    }

    pub fn structure(structure: Rc<StructType>) -> Self {
        let mut ty = Self::scalar(BasicType::Struct);
        ty.layout = Some(TypeLayout::Struct(structure));
        ty
    }

    pub fn interface_block(block: Rc<InterfaceBlock>) -> Self {
        let mut ty = Self::scalar(BasicType::InterfaceBlock);
        ty.layout = Some(TypeLayout::InterfaceBlock(block));
        ty
    }

    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_qualifier(mut self, qualifier: Qualifier) -> Self {
        self.qualifier = qualifier;
        self
    }

    /// Wraps the type in one more (outermost) array dimension.
    pub fn with_array_size(mut self, size: u32) -> Self {
        self.array_sizes.push(size);
        self
    }

    pub fn basic(&self) -> BasicType {
        self.basic
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn qualifier(&self) -> Qualifier {
        self.qualifier
    }

    pub fn primary_size(&self) -> u8 {
        self.primary_size
    }

    pub fn secondary_size(&self) -> u8 {
        self.secondary_size
    }

    /// Array dimensions, innermost first.
    pub fn array_sizes(&self) -> &[u32] {
        &self.array_sizes
    }

    pub fn layout(&self) -> Option<&TypeLayout> {
        self.layout.as_ref()
    }

    pub fn is_scalar(&self) -> bool {
        self.primary_size == 1 && self.secondary_size == 1 && !self.is_array()
    }

    pub fn is_vector(&self) -> bool {
        self.primary_size > 1 && self.secondary_size == 1
    }

    pub fn is_matrix(&self) -> bool {
        self.secondary_size > 1
    }

    pub fn is_array(&self) -> bool {
        !self.array_sizes.is_empty()
    }

    pub fn is_generic(&self) -> bool {
        self.basic.is_generic()
    }

    /// Number of scalar components in one (non-array) element.
    pub fn component_count(&self) -> usize {
        self.primary_size as usize * self.secondary_size as usize
    }

    /// Replaces a `genType`/`vec` placeholder with its concrete type of the given size.
    /// Other types are returned unchanged.
    pub fn specialize(&self, size: u8) -> Type {
        match self.basic.generic_component() {
            Some(component) => {
                let mut ty = self.clone();
                ty.basic = component;
                ty.primary_size = size;
                ty
            },
            None => self.clone(),
        }
    }

    /// Replaces a `gsampler`/`gvec4` placeholder with its concrete type for the given kind.
    /// Other types are returned unchanged.
    pub fn specialize_sampler(&self, kind: SamplerKind) -> Type {
        let mut ty = self.clone();
        if self.basic == BasicType::GVec4 {
            ty.primary_size = 4;
        }
        ty.basic = self.basic.specialize_sampler(kind);
        ty
    }

    /// Encodes the shape of this type for use in a mangled function name.
    ///
    /// Precision and qualifiers don't take part, since they don't distinguish overloads.
    pub fn mangled_name(&self) -> String {
        let mut mangled = String::new();
        match &self.layout {
            Some(layout) => {
                let _ = write!(mangled, "{{{}}}", layout.name());
            },
            None => {
                mangled.push_str(self.basic.mangled_code());
                if self.is_matrix() {
                    let _ = write!(mangled, "{}x{}", self.primary_size, self.secondary_size);
                } else if self.is_vector() {
                    let _ = write!(mangled, "{}", self.primary_size);
                }
            },
        }

        for size in &self.array_sizes {
            let _ = write!(mangled, "[{size}]");
        }

        mangled
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.precision != Precision::Undefined {
            write!(f, "{} ", self.precision)?;
        }

        match (&self.layout, self.basic.vector_prefix()) {
            (Some(layout), _) => f.write_str(layout.name())?,
            (None, _) if self.is_matrix() => match self.primary_size == self.secondary_size {
                true => write!(f, "mat{}", self.primary_size)?,
                false => write!(f, "mat{}x{}", self.primary_size, self.secondary_size)?,
            },
            (None, Some(prefix)) if self.is_vector() => write!(f, "{prefix}{}", self.primary_size)?,
            (None, _) => f.write_str(self.basic.name())?,
        }

        for size in self.array_sizes.iter().rev() {
            write!(f, "[{size}]")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Field, SymbolType, UniqueIdAllocator};

    #[test]
    fn shapes() {
        let float = Type::scalar(BasicType::Float);
        assert!(float.is_scalar());
        assert_eq!(float.component_count(), 1);

        let vec3 = Type::vector(BasicType::Float, 3);
        assert!(vec3.is_vector());
        assert!(!vec3.is_matrix());

        let mat2x3 = Type::matrix(2, 3);
        assert!(mat2x3.is_matrix());
        assert_eq!(mat2x3.component_count(), 6);

        let array = Type::scalar(BasicType::Int).with_array_size(4);
        assert!(array.is_array());
        assert!(!array.is_scalar());
    }

    #[test]
    fn mangled_names() {
        assert_eq!(Type::scalar(BasicType::Float).mangled_name(), "f");
        assert_eq!(Type::vector(BasicType::Int, 3).mangled_name(), "i3");
        assert_eq!(Type::matrix(2, 3).mangled_name(), "f2x3");
        assert_eq!(Type::matrix(3, 3).mangled_name(), "f3x3");
        assert_eq!(Type::scalar(BasicType::Sampler2D).mangled_name(), "s2");
        assert_eq!(Type::vector(BasicType::Float, 2).with_array_size(4).mangled_name(), "f2[4]");
    }

    #[test]
    fn mangled_name_ignores_precision_and_qualifier() {
        let plain = Type::vector(BasicType::Float, 4);
        let qualified = plain.clone().with_precision(Precision::High).with_qualifier(Qualifier::In);
        assert_eq!(plain.mangled_name(), qualified.mangled_name());
    }

    #[test]
    fn structure_mangling() {
        let mut ids = UniqueIdAllocator::new();
        let light = StructType::new(ids.allocate(), "Light", SymbolType::UserDefined)
            .with_field(Field::new("color", Type::vector(BasicType::Float, 3)));
        let ty = Type::structure(Rc::new(light));

        assert_eq!(ty.mangled_name(), "{Light}");
        assert_eq!(ty.to_string(), "Light");
    }

    #[test]
    fn structures_compare_by_identity() {
        let mut ids = UniqueIdAllocator::new();
        let first = Rc::new(StructType::new(ids.allocate(), "S", SymbolType::UserDefined));
        let second = Rc::new(StructType::new(ids.allocate(), "S", SymbolType::UserDefined));

        assert_eq!(Type::structure(first.clone()), Type::structure(first.clone()));
        assert_ne!(Type::structure(first), Type::structure(second));
    }

    #[test]
    fn specialization() {
        let gen_type = Type::scalar(BasicType::GenType).with_precision(Precision::High);
        assert_eq!(gen_type.specialize(1), Type::scalar(BasicType::Float).with_precision(Precision::High));
        assert_eq!(gen_type.specialize(3), Type::vector(BasicType::Float, 3).with_precision(Precision::High));

        let bvec = Type::scalar(BasicType::BVec);
        assert_eq!(bvec.specialize(2), Type::vector(BasicType::Bool, 2));

        let int = Type::scalar(BasicType::Int);
        assert_eq!(int.specialize(4), int);

        let gvec4 = Type::scalar(BasicType::GVec4);
        assert_eq!(gvec4.specialize_sampler(SamplerKind::UInt), Type::vector(BasicType::UInt, 4));

        let gsampler = Type::scalar(BasicType::GSampler2DArray);
        assert_eq!(
            gsampler.specialize_sampler(SamplerKind::Int),
            Type::scalar(BasicType::ISampler2DArray)
        );
    }

    #[test]
    fn display() {
        assert_eq!(Type::scalar(BasicType::Float).to_string(), "float");
        assert_eq!(Type::vector(BasicType::Float, 3).with_precision(Precision::High).to_string(), "highp vec3");
        assert_eq!(Type::vector(BasicType::Int, 2).to_string(), "ivec2");
        assert_eq!(Type::vector(BasicType::Bool, 4).to_string(), "bvec4");
        assert_eq!(Type::matrix(4, 4).to_string(), "mat4");
        assert_eq!(Type::matrix(2, 3).to_string(), "mat2x3");
        assert_eq!(Type::scalar(BasicType::Int).with_array_size(4).to_string(), "int[4]");
        assert_eq!(Type::scalar(BasicType::SamplerCube).with_precision(Precision::Low).to_string(), "lowp samplerCube");
    }
}

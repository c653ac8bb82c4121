// SPDX-License-Identifier: LGPL-3.0-or-later

use std::rc::Rc;

use super::BasicType;

/// One scalar component of a compile-time constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstantUnion {
    Float(f32),
    Int(i32),
    UInt(u32),
    Bool(bool),
}

/// The folded value of a compile-time constant, one entry per scalar component.
///
/// Values are immutable once created and shared by reference, so every
/// symbol or expression referring to the same constant sees the same buffer.
pub type ConstantValue = Rc<[ConstantUnion]>;

impl ConstantUnion {
    pub fn basic_type(&self) -> BasicType {
        match self {
            Self::Float(_) => BasicType::Float,
            Self::Int(_) => BasicType::Int,
            Self::UInt(_) => BasicType::UInt,
            Self::Bool(_) => BasicType::Bool,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<u32> {
        match self {
            Self::UInt(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<f32> for ConstantUnion {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<i32> for ConstantUnion {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ConstantUnion {
    fn from(value: u32) -> Self {
        Self::UInt(value)
    }
}

impl From<bool> for ConstantUnion {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl std::fmt::Display for ConstantUnion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "{value}u"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        assert_eq!(ConstantUnion::Int(5).as_int(), Some(5));
        assert_eq!(ConstantUnion::Int(5).as_float(), None);
        assert_eq!(ConstantUnion::from(1.5f32).as_float(), Some(1.5));
        assert_eq!(ConstantUnion::from(7u32).as_uint(), Some(7));
        assert_eq!(ConstantUnion::from(true).as_bool(), Some(true));

        assert_eq!(ConstantUnion::UInt(0).basic_type(), BasicType::UInt);
    }

    #[test]
    fn display() {
        assert_eq!(ConstantUnion::Float(1.0).to_string(), "1.0");
        assert_eq!(ConstantUnion::Int(-8).to_string(), "-8");
        assert_eq!(ConstantUnion::UInt(3).to_string(), "3u");
        assert_eq!(ConstantUnion::Bool(false).to_string(), "false");
    }
}

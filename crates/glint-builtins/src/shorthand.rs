// SPDX-License-Identifier: LGPL-3.0-or-later

//! Short constructors for the types used in built-in signatures.

use glint_symbols::{BasicType, Type};

pub fn void() -> Type {
    Type::scalar(BasicType::Void)
}

pub fn float(size: u8) -> Type {
    Type::vector(BasicType::Float, size)
}

pub fn int(size: u8) -> Type {
    Type::vector(BasicType::Int, size)
}

pub fn uint(size: u8) -> Type {
    Type::vector(BasicType::UInt, size)
}

pub fn boolean(size: u8) -> Type {
    Type::vector(BasicType::Bool, size)
}

pub fn mat(columns: u8, rows: u8) -> Type {
    Type::matrix(columns, rows)
}

/// A scalar of the given basic type, used for opaque types and generic placeholders.
pub fn of(basic: BasicType) -> Type {
    Type::scalar(basic)
}

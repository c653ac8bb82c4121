// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::Type;

/// Builds the storage key for a function overload.
///
/// Two declarations produce the same key exactly when they have the same name
/// and the same parameter shapes in the same order. Return types, precisions
/// and qualifiers don't distinguish overloads, and so are left out.
///
/// ```rust
/// use glint_symbols::{mangled_name, BasicType, Type};
///
/// let vec3 = Type::vector(BasicType::Float, 3);
/// let float = Type::scalar(BasicType::Float);
/// assert_eq!(mangled_name("mix", [&vec3, &vec3, &float]), "mix(f3;f3;f;");
/// ```
pub fn mangled_name<'a>(name: &str, parameters: impl IntoIterator<Item = &'a Type>) -> String {
    let mut mangled = String::with_capacity(name.len() + 8);
    mangled.push_str(name);
    mangled.push('(');
    for parameter in parameters {
        mangled.push_str(&parameter.mangled_name());
        mangled.push(';');
    }
    mangled
}

/// Extracts the plain function name from a mangled key.
pub fn unmangled_name(mangled: &str) -> &str {
    match mangled.find('(') {
        Some(index) => &mangled[..index],
        None => mangled,
    }
}

// SPDX-License-Identifier: LGPL-3.0-or-later

use std::rc::Rc;

/// Reasons a declaration can be rejected by a scope level.
///
/// These are user errors in the shader being compiled; the parser is expected
/// to turn them into a diagnostic with a source location.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DeclarationError {
    #[error("'{name}' is already declared in this scope")]
    Redeclaration { name: Rc<str> },

    #[error("'{name}' is already declared as a function in this scope")]
    ConflictsWithFunction { name: Rc<str> },

    #[error("'{name}' is already declared as a non-function in this scope")]
    ConflictsWithVariable { name: Rc<str> },
}

impl DeclarationError {
    pub fn name(&self) -> &Rc<str> {
        match self {
            Self::Redeclaration { name } => name,
            Self::ConflictsWithFunction { name } => name,
            Self::ConflictsWithVariable { name } => name,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("unsupported shader version {0}")]
    Unsupported(u32),

    #[error("invalid shader version '{0}'")]
    Invalid(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown basic type '{0}'")]
    UnknownBasicType(String),

    #[error("unknown precision qualifier '{0}'")]
    UnknownPrecision(String),

    #[error("unknown extension '{0}'")]
    UnknownExtension(String),

    #[error("unknown built-in tier '{0}'")]
    UnknownTier(String),
}

// SPDX-License-Identifier: LGPL-3.0-or-later

use std::str::FromStr;

use crate::{ParseError, VersionError};

/// The language version a shader declares with `#version`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShaderVersion(u32);

impl ShaderVersion {
    pub const ESSL1: ShaderVersion = ShaderVersion(100);
    pub const ESSL3: ShaderVersion = ShaderVersion(300);
    pub const ESSL3_1: ShaderVersion = ShaderVersion(310);

    pub const ALL: [ShaderVersion; 3] = [Self::ESSL1, Self::ESSL3, Self::ESSL3_1];

    pub const fn number(self) -> u32 {
        self.0
    }

    /// The highest built-in tier a shader of this version can see.
    pub const fn tier(self) -> BuiltInTier {
        match self.0 {
            310.. => BuiltInTier::Essl3_1,
            300.. => BuiltInTier::Essl3,
            _ => BuiltInTier::Essl1,
        }
    }
}

impl Default for ShaderVersion {
    fn default() -> Self {
        Self::ESSL1
    }
}

impl TryFrom<u32> for ShaderVersion {
    type Error = VersionError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|version| version.0 == value)
            .ok_or(VersionError::Unsupported(value))
    }
}

impl FromStr for ShaderVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the profile suffix used in `#version 300 es`
        let number = s.trim().trim_end_matches("es").trim_end();
        let number = number.parse::<u32>().map_err(|_| VersionError::Invalid(s.to_owned()))?;
        Self::try_from(number)
    }
}

impl std::fmt::Display for ShaderVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            100 => write!(f, "100"),
            number => write!(f, "{number} es"),
        }
    }
}

/// A partition of the built-in symbols by the language version that introduced them.
///
/// Tiers are ordered; a shader sees every tier up to the one its version implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BuiltInTier {
    /// Built-ins common to every version.
    Common,
    Essl1,
    Essl3,
    Essl3_1,
    /// Desktop GLSL built-ins that don't exist in ESSL, used to implement
    /// features in the desktop back end. Never visible to the parser.
    Glsl,
}

impl BuiltInTier {
    pub const COUNT: usize = 5;
    pub const ALL: [BuiltInTier; Self::COUNT] =
        [Self::Common, Self::Essl1, Self::Essl3, Self::Essl3_1, Self::Glsl];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Essl1 => "essl1",
            Self::Essl3 => "essl3",
            Self::Essl3_1 => "essl3.1",
            Self::Glsl => "glsl",
        }
    }

    /// Whether a shader of the given version can see this tier.
    ///
    /// The desktop tier is only reachable through an explicit opt-in, so it is
    /// never visible here.
    pub const fn is_visible_to(self, version: ShaderVersion) -> bool {
        match self {
            Self::Glsl => false,
            tier => tier as usize <= version.tier() as usize,
        }
    }

    /// Tiers from the highest to the lowest, the order in which lookups search them.
    pub fn descending() -> impl Iterator<Item = BuiltInTier> {
        Self::ALL.into_iter().rev()
    }
}

impl FromStr for BuiltInTier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.name() == s)
            .ok_or_else(|| ParseError::UnknownTier(s.to_owned()))
    }
}

impl std::fmt::Display for BuiltInTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod version {
        use super::*;

        #[test]
        fn try_from() {
            assert_eq!(ShaderVersion::try_from(100), Ok(ShaderVersion::ESSL1));
            assert_eq!(ShaderVersion::try_from(310), Ok(ShaderVersion::ESSL3_1));
            assert_eq!(ShaderVersion::try_from(200), Err(VersionError::Unsupported(200)));
        }

        #[test]
        fn parse() {
            assert_eq!("100".parse(), Ok(ShaderVersion::ESSL1));
            assert_eq!("300 es".parse(), Ok(ShaderVersion::ESSL3));
            assert_eq!(" 310 es ".parse(), Ok(ShaderVersion::ESSL3_1));
            assert_eq!("abc".parse::<ShaderVersion>(), Err(VersionError::Invalid("abc".to_owned())));
            assert_eq!("330".parse::<ShaderVersion>(), Err(VersionError::Unsupported(330)));
        }

        #[test]
        fn display() {
            assert_eq!(ShaderVersion::ESSL1.to_string(), "100");
            assert_eq!(ShaderVersion::ESSL3.to_string(), "300 es");
        }

        #[test]
        fn tiers() {
            assert_eq!(ShaderVersion::ESSL1.tier(), BuiltInTier::Essl1);
            assert_eq!(ShaderVersion::ESSL3.tier(), BuiltInTier::Essl3);
            assert_eq!(ShaderVersion::ESSL3_1.tier(), BuiltInTier::Essl3_1);
        }
    }

    mod tier {
        use super::*;

        #[test]
        fn ordering() {
            assert!(BuiltInTier::Common < BuiltInTier::Essl1);
            assert!(BuiltInTier::Essl3_1 < BuiltInTier::Glsl);
            assert_eq!(BuiltInTier::descending().next(), Some(BuiltInTier::Glsl));
        }

        #[test]
        fn visibility() {
            assert!(BuiltInTier::Common.is_visible_to(ShaderVersion::ESSL1));
            assert!(BuiltInTier::Essl1.is_visible_to(ShaderVersion::ESSL1));
            assert!(!BuiltInTier::Essl3.is_visible_to(ShaderVersion::ESSL1));

            assert!(BuiltInTier::Essl1.is_visible_to(ShaderVersion::ESSL3));
            assert!(BuiltInTier::Essl3.is_visible_to(ShaderVersion::ESSL3));
            assert!(!BuiltInTier::Essl3_1.is_visible_to(ShaderVersion::ESSL3));

            assert!(BuiltInTier::Essl3_1.is_visible_to(ShaderVersion::ESSL3_1));
            assert!(!BuiltInTier::Glsl.is_visible_to(ShaderVersion::ESSL3_1));
        }

        #[test]
        fn parse() {
            assert_eq!("essl3.1".parse(), Ok(BuiltInTier::Essl3_1));
            assert_eq!("glsl".parse(), Ok(BuiltInTier::Glsl));
            assert_eq!("gles".parse::<BuiltInTier>(), Err(ParseError::UnknownTier("gles".to_owned())));
        }
    }
}

// SPDX-License-Identifier: LGPL-3.0-or-later

use std::collections::HashSet;
use std::str::FromStr;

use super::basic::spelled_enum;
use crate::ParseError;

spelled_enum! {
    /// An extension a built-in symbol requires before it becomes visible.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum Extension {
        /// No extension is required.
        #[default]
        Undefined => "",
        OesStandardDerivatives => "GL_OES_standard_derivatives",
        ExtShaderTextureLod => "GL_EXT_shader_texture_lod",
        ExtFragDepth => "GL_EXT_frag_depth",
        ExtDrawBuffers => "GL_EXT_draw_buffers",
        OesEglImageExternal => "GL_OES_EGL_image_external",
        ExtBlendFuncExtended => "GL_EXT_blend_func_extended",
        OvrMultiview => "GL_OVR_multiview",
        ExtGeometryShader => "GL_EXT_geometry_shader",
        OesTextureStorageMultisample2dArray => "GL_OES_texture_storage_multisample_2d_array",
    }
}

impl Extension {
    pub fn is_required(self) -> bool {
        self != Self::Undefined
    }
}

impl FromStr for Extension {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .filter(|ext| ext.is_required())
            .find(|ext| ext.name() == s)
            .ok_or_else(|| ParseError::UnknownExtension(s.to_owned()))
    }
}

/// Decides which extensions are currently enabled for a compilation.
///
/// The symbol table only records which extension a built-in requires;
/// whether that extension is active is up to the implementor of this trait.
pub trait ExtensionPolicy {
    fn is_enabled(&self, extension: Extension) -> bool;

    /// Whether a symbol requiring the given extension may be used.
    fn permits(&self, extension: Extension) -> bool {
        !extension.is_required() || self.is_enabled(extension)
    }
}

/// Policy with every extension enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllExtensions;

impl ExtensionPolicy for AllExtensions {
    fn is_enabled(&self, _extension: Extension) -> bool {
        true
    }
}

/// Policy with no extension enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExtensions;

impl ExtensionPolicy for NoExtensions {
    fn is_enabled(&self, _extension: Extension) -> bool {
        false
    }
}

impl ExtensionPolicy for HashSet<Extension> {
    fn is_enabled(&self, extension: Extension) -> bool {
        self.contains(&extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("GL_OES_standard_derivatives".parse(), Ok(Extension::OesStandardDerivatives));
        assert_eq!("GL_EXT_frag_depth".parse(), Ok(Extension::ExtFragDepth));
        assert_eq!("".parse::<Extension>(), Err(ParseError::UnknownExtension(String::new())));
        assert_eq!(
            "GL_bogus".parse::<Extension>(),
            Err(ParseError::UnknownExtension("GL_bogus".to_owned()))
        );
    }

    #[test]
    fn policies() {
        assert!(AllExtensions.permits(Extension::ExtDrawBuffers));
        assert!(!NoExtensions.permits(Extension::ExtDrawBuffers));
        assert!(NoExtensions.permits(Extension::Undefined));

        let enabled = HashSet::from([Extension::OesStandardDerivatives]);
        assert!(enabled.permits(Extension::OesStandardDerivatives));
        assert!(!enabled.permits(Extension::ExtShaderTextureLod));
    }
}

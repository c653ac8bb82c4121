// SPDX-License-Identifier: LGPL-3.0-or-later

use std::collections::HashSet;
use std::str::FromStr;

use glint_symbols::Extension;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown shader stage '{0}'")]
pub struct UnknownStageError(pub String);

/// The pipeline stage a shader is compiled for, which decides its stage variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Compute,
}

impl ShaderStage {
    pub const ALL: [ShaderStage; 3] = [Self::Vertex, Self::Fragment, Self::Compute];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
            Self::Compute => "compute",
        }
    }
}

impl FromStr for ShaderStage {
    type Err = UnknownStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertex" | "vert" => Ok(Self::Vertex),
            "fragment" | "frag" => Ok(Self::Fragment),
            "compute" | "comp" => Ok(Self::Compute),
            _ => Err(UnknownStageError(s.to_owned())),
        }
    }
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Optional extensions the implementation exposes to shaders.
///
/// Built-ins belonging to a disabled extension are not registered at all.
#[derive(Debug, Clone, Default)]
pub struct ExtensionSupport {
    pub oes_standard_derivatives: bool,
    pub oes_egl_image_external: bool,
    pub ext_draw_buffers: bool,
    pub ext_frag_depth: bool,
    pub ext_shader_texture_lod: bool,
    pub ext_blend_func_extended: bool,
}

impl ExtensionSupport {
    /// Every extension this crate knows how to register.
    pub fn all() -> Self {
        Self {
            oes_standard_derivatives: true,
            oes_egl_image_external: true,
            ext_draw_buffers: true,
            ext_frag_depth: true,
            ext_shader_texture_lod: true,
            ext_blend_func_extended: true,
        }
    }

    /// The set of enabled extensions, usable as an [`glint_symbols::ExtensionPolicy`].
    pub fn enabled(&self) -> HashSet<Extension> {
        [
            (self.oes_standard_derivatives, Extension::OesStandardDerivatives),
            (self.oes_egl_image_external, Extension::OesEglImageExternal),
            (self.ext_draw_buffers, Extension::ExtDrawBuffers),
            (self.ext_frag_depth, Extension::ExtFragDepth),
            (self.ext_shader_texture_lod, Extension::ExtShaderTextureLod),
            (self.ext_blend_func_extended, Extension::ExtBlendFuncExtended),
        ]
        .into_iter()
        .filter_map(|(enabled, extension)| enabled.then_some(extension))
        .collect()
    }
}

/// Implementation limits, exposed to shaders as `gl_Max*` constants.
#[derive(Debug, Clone)]
pub struct BuiltInResources {
    pub max_vertex_attribs: i32,
    pub max_vertex_uniform_vectors: i32,
    pub max_varying_vectors: i32,
    pub max_vertex_texture_image_units: i32,
    pub max_combined_texture_image_units: i32,
    pub max_texture_image_units: i32,
    pub max_fragment_uniform_vectors: i32,
    pub max_draw_buffers: i32,
    pub max_dual_source_draw_buffers: i32,

    pub max_vertex_output_vectors: i32,
    pub max_fragment_input_vectors: i32,
    pub min_program_texel_offset: i32,
    pub max_program_texel_offset: i32,

    pub max_image_units: i32,
    pub max_vertex_image_uniforms: i32,
    pub max_fragment_image_uniforms: i32,
    pub max_compute_image_uniforms: i32,
    pub max_combined_image_uniforms: i32,
    pub max_combined_shader_output_resources: i32,
    pub max_compute_work_group_count: [i32; 3],
    pub max_compute_work_group_size: [i32; 3],
    pub max_compute_uniform_components: i32,
    pub max_compute_texture_image_units: i32,
    pub max_compute_atomic_counters: i32,
    pub max_compute_atomic_counter_buffers: i32,
    pub max_vertex_atomic_counters: i32,
    pub max_fragment_atomic_counters: i32,
    pub max_combined_atomic_counters: i32,
    pub max_atomic_counter_bindings: i32,

    pub extensions: ExtensionSupport,
}

impl Default for BuiltInResources {
    fn default() -> Self {
        Self {
            max_vertex_attribs: 8,
            max_vertex_uniform_vectors: 128,
            max_varying_vectors: 8,
            max_vertex_texture_image_units: 0,
            max_combined_texture_image_units: 8,
            max_texture_image_units: 8,
            max_fragment_uniform_vectors: 16,
            max_draw_buffers: 1,
            max_dual_source_draw_buffers: 0,

            max_vertex_output_vectors: 16,
            max_fragment_input_vectors: 15,
            min_program_texel_offset: -8,
            max_program_texel_offset: 7,

            max_image_units: 4,
            max_vertex_image_uniforms: 0,
            max_fragment_image_uniforms: 0,
            max_compute_image_uniforms: 4,
            max_combined_image_uniforms: 4,
            max_combined_shader_output_resources: 4,
            max_compute_work_group_count: [65535, 65535, 65535],
            max_compute_work_group_size: [128, 128, 64],
            max_compute_uniform_components: 512,
            max_compute_texture_image_units: 16,
            max_compute_atomic_counters: 8,
            max_compute_atomic_counter_buffers: 1,
            max_vertex_atomic_counters: 0,
            max_fragment_atomic_counters: 0,
            max_combined_atomic_counters: 8,
            max_atomic_counter_bindings: 1,

            extensions: ExtensionSupport::default(),
        }
    }
}

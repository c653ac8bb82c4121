// SPDX-License-Identifier: LGPL-3.0-or-later

//! Texture lookup and image built-in functions.

use glint_symbols::{BasicType, BuiltInTier, Extension, SymbolTable};

use crate::shorthand::*;
use crate::{BuiltInResources, ShaderStage};

pub fn register_funcs(table: &mut SymbolTable, stage: ShaderStage, resources: &BuiltInResources) {
    essl1::register_funcs(table, stage, resources);
    essl3::register_funcs(table, stage);
    images::register_funcs(table);
}

/// The `texture2D` family of ESSL 1.00.
pub mod essl1 {
    use super::*;

    pub fn register_funcs(table: &mut SymbolTable, stage: ShaderStage, resources: &BuiltInResources) {
        let sampler_2d = of(BasicType::Sampler2D);
        let sampler_cube = of(BasicType::SamplerCube);
        let (f, vec2, vec3, vec4) = (float(1), float(2), float(3), float(4));
        let tier = BuiltInTier::Essl1;

        table.insert_built_in(tier, &vec4, "texture2D", &[&sampler_2d, &vec2]);
        table.insert_built_in(tier, &vec4, "texture2DProj", &[&sampler_2d, &vec3]);
        table.insert_built_in(tier, &vec4, "texture2DProj", &[&sampler_2d, &vec4]);
        table.insert_built_in(tier, &vec4, "textureCube", &[&sampler_cube, &vec3]);

        if resources.extensions.oes_egl_image_external {
            let external = of(BasicType::SamplerExternalOes);
            let ext = Extension::OesEglImageExternal;
            table.insert_built_in_ext(tier, ext, &vec4, "texture2D", &[&external, &vec2]);
            table.insert_built_in_ext(tier, ext, &vec4, "texture2DProj", &[&external, &vec3]);
            table.insert_built_in_ext(tier, ext, &vec4, "texture2DProj", &[&external, &vec4]);
        }

        match stage {
            ShaderStage::Vertex => {
                table.insert_built_in(tier, &vec4, "texture2DLod", &[&sampler_2d, &vec2, &f]);
                table.insert_built_in(tier, &vec4, "texture2DProjLod", &[&sampler_2d, &vec3, &f]);
                table.insert_built_in(tier, &vec4, "texture2DProjLod", &[&sampler_2d, &vec4, &f]);
                table.insert_built_in(tier, &vec4, "textureCubeLod", &[&sampler_cube, &vec3, &f]);
            },
            ShaderStage::Fragment => {
                table.insert_built_in(tier, &vec4, "texture2D", &[&sampler_2d, &vec2, &f]);
                table.insert_built_in(tier, &vec4, "texture2DProj", &[&sampler_2d, &vec3, &f]);
                table.insert_built_in(tier, &vec4, "texture2DProj", &[&sampler_2d, &vec4, &f]);
                table.insert_built_in(tier, &vec4, "textureCube", &[&sampler_cube, &vec3, &f]);

                if resources.extensions.ext_shader_texture_lod {
                    let ext = Extension::ExtShaderTextureLod;
                    table.insert_built_in_ext(tier, ext, &vec4, "texture2DLodEXT", &[&sampler_2d, &vec2, &f]);
                    table.insert_built_in_ext(tier, ext, &vec4, "texture2DProjLodEXT", &[&sampler_2d, &vec3, &f]);
                    table.insert_built_in_ext(tier, ext, &vec4, "texture2DProjLodEXT", &[&sampler_2d, &vec4, &f]);
                    table.insert_built_in_ext(tier, ext, &vec4, "textureCubeLodEXT", &[&sampler_cube, &vec3, &f]);
                }
            },
            ShaderStage::Compute => {},
        }
    }
}

/// The overloaded `texture` family of ESSL 3.00.
pub mod essl3 {
    use super::*;

    pub fn register_funcs(table: &mut SymbolTable, stage: ShaderStage) {
        let gvec4 = of(BasicType::GVec4);
        let gsampler_2d = of(BasicType::GSampler2D);
        let gsampler_3d = of(BasicType::GSampler3D);
        let gsampler_cube = of(BasicType::GSamplerCube);
        let gsampler_2d_array = of(BasicType::GSampler2DArray);
        let sampler_2d_shadow = of(BasicType::Sampler2DShadow);
        let sampler_cube_shadow = of(BasicType::SamplerCubeShadow);
        let (f, vec2, vec3, vec4) = (float(1), float(2), float(3), float(4));
        let (i, ivec2, ivec3) = (int(1), int(2), int(3));
        let tier = BuiltInTier::Essl3;

        let lookups = [
            (&gsampler_2d, &vec2),
            (&gsampler_3d, &vec3),
            (&gsampler_cube, &vec3),
            (&gsampler_2d_array, &vec3),
        ];
        for (sampler, coord) in lookups {
            table.insert_built_in(tier, &gvec4, "texture", &[sampler, coord]);
            table.insert_built_in(tier, &gvec4, "textureLod", &[sampler, coord, &f]);
            if stage == ShaderStage::Fragment {
                table.insert_built_in(tier, &gvec4, "texture", &[sampler, coord, &f]);
            }
        }
        table.insert_built_in(tier, &f, "texture", &[&sampler_2d_shadow, &vec3]);
        table.insert_built_in(tier, &f, "texture", &[&sampler_cube_shadow, &vec4]);

        table.insert_built_in(tier, &gvec4, "textureProj", &[&gsampler_2d, &vec3]);
        table.insert_built_in(tier, &gvec4, "textureProj", &[&gsampler_2d, &vec4]);
        table.insert_built_in(tier, &gvec4, "textureProj", &[&gsampler_3d, &vec4]);

        table.insert_built_in(tier, &ivec2, "textureSize", &[&gsampler_2d, &i]);
        table.insert_built_in(tier, &ivec3, "textureSize", &[&gsampler_3d, &i]);
        table.insert_built_in(tier, &ivec2, "textureSize", &[&gsampler_cube, &i]);
        table.insert_built_in(tier, &ivec3, "textureSize", &[&gsampler_2d_array, &i]);
        table.insert_built_in(tier, &ivec2, "textureSize", &[&sampler_2d_shadow, &i]);

        table.insert_built_in(tier, &gvec4, "texelFetch", &[&gsampler_2d, &ivec2, &i]);
        table.insert_built_in(tier, &gvec4, "texelFetch", &[&gsampler_3d, &ivec3, &i]);
        table.insert_built_in(tier, &gvec4, "texelFetch", &[&gsampler_2d_array, &ivec3, &i]);

        table.insert_built_in(tier, &gvec4, "textureOffset", &[&gsampler_2d, &vec2, &ivec2]);
        table.insert_built_in(tier, &gvec4, "textureOffset", &[&gsampler_3d, &vec3, &ivec3]);
        table.insert_built_in(tier, &gvec4, "textureGrad", &[&gsampler_2d, &vec2, &vec2, &vec2]);
        table.insert_built_in(tier, &gvec4, "textureGrad", &[&gsampler_3d, &vec3, &vec3, &vec3]);
        table.insert_built_in(tier, &gvec4, "textureGradOffset", &[&gsampler_2d, &vec2, &vec2, &vec2, &ivec2]);
    }
}

/// Image load/store functions of ESSL 3.10.
pub mod images {
    use super::*;

    pub fn register_funcs(table: &mut SymbolTable) {
        let ivec2 = int(2);
        let tier = BuiltInTier::Essl3_1;

        let images = [
            (BasicType::Image2D, float(4)),
            (BasicType::IImage2D, int(4)),
            (BasicType::UImage2D, uint(4)),
        ];
        for (image, texel) in &images {
            let image = of(*image);
            table.insert_built_in(tier, &ivec2, "imageSize", &[&image]);
            table.insert_built_in(tier, texel, "imageLoad", &[&image, &ivec2]);
            table.insert_built_in(tier, &void(), "imageStore", &[&image, &ivec2, texel]);
        }
    }
}

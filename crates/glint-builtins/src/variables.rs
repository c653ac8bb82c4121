// SPDX-License-Identifier: LGPL-3.0-or-later

//! Built-in variables, implementation constants and default precisions.

use std::rc::Rc;

use glint_symbols::{
    BasicType,
    BuiltInTier,
    Extension,
    Field,
    Precision,
    Qualifier,
    StructType,
    SymbolTable,
    SymbolType,
    Type,
};

use crate::shorthand::*;
use crate::{BuiltInResources, ShaderStage};

pub fn register_variables(table: &mut SymbolTable, stage: ShaderStage, resources: &BuiltInResources) {
    constants::register_constants(table, resources);
    register_depth_range(table);

    match stage {
        ShaderStage::Vertex => stage_variables::register_vertex(table),
        ShaderStage::Fragment => stage_variables::register_fragment(table, resources),
        ShaderStage::Compute => stage_variables::register_compute(table),
    }
}

/// Sets the default precisions a shader starts out with.
///
/// Fragment shaders get no default for `float`, which every fragment shader
/// has to declare itself.
pub fn register_default_precisions(table: &mut SymbolTable, stage: ShaderStage) {
    let tier = BuiltInTier::Common;

    match stage {
        ShaderStage::Fragment => {
            table.set_built_in_default_precision(tier, BasicType::Int, Precision::Medium);
        },
        ShaderStage::Vertex | ShaderStage::Compute => {
            table.set_built_in_default_precision(tier, BasicType::Float, Precision::High);
            table.set_built_in_default_precision(tier, BasicType::Int, Precision::High);
        },
    }

    for sampler in [BasicType::Sampler2D, BasicType::SamplerCube, BasicType::SamplerExternalOes] {
        table.set_built_in_default_precision(tier, sampler, Precision::Low);
    }
    table.set_built_in_default_precision(tier, BasicType::AtomicCounter, Precision::High);
}

/// The `gl_DepthRangeParameters` structure and its `gl_DepthRange` uniform.
pub fn register_depth_range(table: &mut SymbolTable) {
    let highp_float = float(1).with_precision(Precision::High);

    let id = table.next_unique_id();
    let parameters = Rc::new(
        StructType::new(id, "gl_DepthRangeParameters", SymbolType::BuiltIn).with_fields([
            Field::new("near", highp_float.clone()),
            Field::new("far", highp_float.clone()),
            Field::new("diff", highp_float),
        ]),
    );
    table.insert_struct_type(BuiltInTier::Common, parameters.clone());

    let uniform = Type::structure(parameters).with_qualifier(Qualifier::Uniform);
    table.insert_variable(BuiltInTier::Common, "gl_DepthRange", uniform);
}

pub mod constants {
    use super::*;

    pub fn register_constants(table: &mut SymbolTable, resources: &BuiltInResources) {
        let mediump = Precision::Medium;

        let common = [
            ("gl_MaxVertexAttribs", resources.max_vertex_attribs),
            ("gl_MaxVertexUniformVectors", resources.max_vertex_uniform_vectors),
            ("gl_MaxVertexTextureImageUnits", resources.max_vertex_texture_image_units),
            ("gl_MaxCombinedTextureImageUnits", resources.max_combined_texture_image_units),
            ("gl_MaxTextureImageUnits", resources.max_texture_image_units),
            ("gl_MaxFragmentUniformVectors", resources.max_fragment_uniform_vectors),
            ("gl_MaxDrawBuffers", resources.max_draw_buffers),
        ];
        for (name, value) in common {
            table.insert_const_int(BuiltInTier::Common, name, value, mediump);
        }

        table.insert_const_int(BuiltInTier::Essl1, "gl_MaxVaryingVectors", resources.max_varying_vectors, mediump);

        if resources.extensions.ext_blend_func_extended {
            table.insert_const_int_ext(
                BuiltInTier::Common,
                Extension::ExtBlendFuncExtended,
                "gl_MaxDualSourceDrawBuffersEXT",
                resources.max_dual_source_draw_buffers,
                mediump,
            );
        }

        let essl3 = [
            ("gl_MaxVertexOutputVectors", resources.max_vertex_output_vectors),
            ("gl_MaxFragmentInputVectors", resources.max_fragment_input_vectors),
            ("gl_MinProgramTexelOffset", resources.min_program_texel_offset),
            ("gl_MaxProgramTexelOffset", resources.max_program_texel_offset),
        ];
        for (name, value) in essl3 {
            table.insert_const_int(BuiltInTier::Essl3, name, value, mediump);
        }

        let essl3_1 = [
            ("gl_MaxImageUnits", resources.max_image_units),
            ("gl_MaxVertexImageUniforms", resources.max_vertex_image_uniforms),
            ("gl_MaxFragmentImageUniforms", resources.max_fragment_image_uniforms),
            ("gl_MaxComputeImageUniforms", resources.max_compute_image_uniforms),
            ("gl_MaxCombinedImageUniforms", resources.max_combined_image_uniforms),
            ("gl_MaxCombinedShaderOutputResources", resources.max_combined_shader_output_resources),
            ("gl_MaxComputeUniformComponents", resources.max_compute_uniform_components),
            ("gl_MaxComputeTextureImageUnits", resources.max_compute_texture_image_units),
            ("gl_MaxComputeAtomicCounters", resources.max_compute_atomic_counters),
            ("gl_MaxComputeAtomicCounterBuffers", resources.max_compute_atomic_counter_buffers),
            ("gl_MaxVertexAtomicCounters", resources.max_vertex_atomic_counters),
            ("gl_MaxFragmentAtomicCounters", resources.max_fragment_atomic_counters),
            ("gl_MaxCombinedAtomicCounters", resources.max_combined_atomic_counters),
            ("gl_MaxAtomicCounterBindings", resources.max_atomic_counter_bindings),
        ];
        for (name, value) in essl3_1 {
            table.insert_const_int(BuiltInTier::Essl3_1, name, value, mediump);
        }

        let highp = Precision::High;
        let work_group_count = resources.max_compute_work_group_count;
        let work_group_size = resources.max_compute_work_group_size;
        table.insert_const_ivec3(BuiltInTier::Essl3_1, "gl_MaxComputeWorkGroupCount", work_group_count, highp);
        table.insert_const_ivec3(BuiltInTier::Essl3_1, "gl_MaxComputeWorkGroupSize", work_group_size, highp);
    }
}

pub mod stage_variables {
    use super::*;

    fn variable(ty: Type, precision: Precision, qualifier: Qualifier) -> Type {
        ty.with_precision(precision).with_qualifier(qualifier)
    }

    pub fn register_vertex(table: &mut SymbolTable) {
        let position = variable(float(4), Precision::High, Qualifier::Position);
        let point_size = variable(float(1), Precision::Medium, Qualifier::PointSize);
        table.insert_variable(BuiltInTier::Common, "gl_Position", position);
        table.insert_variable(BuiltInTier::Common, "gl_PointSize", point_size);

        let instance_id = variable(int(1), Precision::High, Qualifier::InstanceId);
        let vertex_id = variable(int(1), Precision::High, Qualifier::VertexId);
        table.insert_variable(BuiltInTier::Essl3, "gl_InstanceID", instance_id);
        table.insert_variable(BuiltInTier::Essl3, "gl_VertexID", vertex_id);
    }

    pub fn register_fragment(table: &mut SymbolTable, resources: &BuiltInResources) {
        let frag_coord = variable(float(4), Precision::Medium, Qualifier::FragCoord);
        let front_facing = variable(boolean(1), Precision::Undefined, Qualifier::FrontFacing);
        let point_coord = variable(float(2), Precision::Medium, Qualifier::PointCoord);
        table.insert_variable(BuiltInTier::Common, "gl_FragCoord", frag_coord);
        table.insert_variable(BuiltInTier::Common, "gl_FrontFacing", front_facing);
        table.insert_variable(BuiltInTier::Common, "gl_PointCoord", point_coord);

        let frag_color = variable(float(4), Precision::Medium, Qualifier::FragColor);
        table.insert_variable(BuiltInTier::Essl1, "gl_FragColor", frag_color);

        let draw_buffers = u32::try_from(resources.max_draw_buffers.max(1)).unwrap_or(1);
        let frag_data = variable(float(4), Precision::Medium, Qualifier::FragData).with_array_size(draw_buffers);
        match resources.extensions.ext_draw_buffers {
            true => table.insert_variable_ext(BuiltInTier::Essl1, Extension::ExtDrawBuffers, "gl_FragData", frag_data),
            false => table.insert_variable(BuiltInTier::Essl1, "gl_FragData", frag_data),
        };

        if resources.extensions.ext_frag_depth {
            let frag_depth = variable(float(1), Precision::High, Qualifier::FragDepth);
            table.insert_variable_ext(BuiltInTier::Essl1, Extension::ExtFragDepth, "gl_FragDepthEXT", frag_depth);
        }

        let frag_depth = variable(float(1), Precision::High, Qualifier::FragDepth);
        table.insert_variable(BuiltInTier::Essl3, "gl_FragDepth", frag_depth);
    }

    pub fn register_compute(table: &mut SymbolTable) {
        let uvec3 = |qualifier| variable(uint(3), Precision::High, qualifier);
        let tier = BuiltInTier::Essl3_1;

        table.insert_variable(tier, "gl_NumWorkGroups", uvec3(Qualifier::NumWorkGroups));
        table.insert_variable(tier, "gl_WorkGroupID", uvec3(Qualifier::WorkGroupId));
        table.insert_variable(tier, "gl_LocalInvocationID", uvec3(Qualifier::LocalInvocationId));
        table.insert_variable(tier, "gl_GlobalInvocationID", uvec3(Qualifier::GlobalInvocationId));

        let index = variable(uint(1), Precision::High, Qualifier::LocalInvocationIndex);
        table.insert_variable(tier, "gl_LocalInvocationIndex", index);
    }
}

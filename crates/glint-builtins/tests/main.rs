// SPDX-License-Identifier: LGPL-3.0-or-later

use std::rc::Rc;

use glint_builtins::{BuiltInResources, ExtensionSupport, ShaderStage};
use glint_symbols::{
    BasicType,
    BuiltInTier,
    Extension,
    NoExtensions,
    Operator,
    Precision,
    Qualifier,
    ShaderVersion,
    SymbolTable,
    SymbolType,
    Type,
    Variable,
};

fn fragment_table() -> SymbolTable {
    glint_builtins::new_table(ShaderStage::Fragment, &BuiltInResources::default())
}

fn constant_ints(table: &SymbolTable, name: &str, version: ShaderVersion) -> Vec<i32> {
    let found = table.find(name, version).unwrap_or_else(|| panic!("{name} should be declared"));
    let value = found.symbol.as_variable().and_then(Variable::constant_value).expect("should be a constant");
    value.iter().map(|component| component.as_int().unwrap()).collect()
}

#[test]
fn frozen_after_creation() {
    let table = fragment_table();
    assert!(table.is_built_in_initialization_finished());
    assert!(table.at_built_in_level());
    assert!(!table.is_empty());
}

#[test]
fn resource_constants() {
    let resources = BuiltInResources { max_draw_buffers: 4, ..Default::default() };
    let table = glint_builtins::new_table(ShaderStage::Fragment, &resources);

    assert_eq!(constant_ints(&table, "gl_MaxDrawBuffers", ShaderVersion::ESSL1), [4]);
    assert_eq!(constant_ints(&table, "gl_MaxVertexAttribs", ShaderVersion::ESSL1), [8]);
    assert_eq!(constant_ints(&table, "gl_MinProgramTexelOffset", ShaderVersion::ESSL3), [-8]);
    assert_eq!(
        constant_ints(&table, "gl_MaxComputeWorkGroupSize", ShaderVersion::ESSL3_1),
        [128, 128, 64]
    );

    assert!(table.find("gl_MaxProgramTexelOffset", ShaderVersion::ESSL1).is_none());
    assert!(table.find("gl_MaxComputeWorkGroupCount", ShaderVersion::ESSL3).is_none());

    let symbol = table.find("gl_MaxDrawBuffers", ShaderVersion::ESSL1).unwrap().symbol;
    let ty = symbol.as_variable().unwrap().ty();
    assert_eq!(ty.qualifier(), Qualifier::Const);
    assert_eq!(ty.precision(), Precision::Medium);
}

#[test]
fn math_functions() {
    let table = fragment_table();

    let sin = table.find("sin(f4;", ShaderVersion::ESSL1).unwrap();
    assert!(sin.is_built_in);
    assert_eq!(sin.symbol.as_function().unwrap().op(), Operator::Sin);

    assert!(table.find("clamp(f3;f;f;", ShaderVersion::ESSL1).is_some());
    assert!(table.find("cross(f3;f3;", ShaderVersion::ESSL1).is_some());
    assert!(table.find("lessThan(i2;i2;", ShaderVersion::ESSL1).is_some());
    assert!(table.find("any(b3;", ShaderVersion::ESSL1).is_some());

    // integer overloads and matrix helpers need ESSL 3.00
    assert!(table.find("abs(i2;", ShaderVersion::ESSL1).is_none());
    assert!(table.find("abs(i2;", ShaderVersion::ESSL3).is_some());
    assert!(table.find("lessThan(u3;u3;", ShaderVersion::ESSL3).is_some());
    assert!(table.find("inverse(f3x3;", ShaderVersion::ESSL1).is_none());
    assert!(table.find("inverse(f3x3;", ShaderVersion::ESSL3).is_some());

    let outer = table.find("outerProduct(f2;f3;", ShaderVersion::ESSL3).unwrap().symbol;
    let result = outer.as_function().unwrap().return_type();
    assert_eq!((result.primary_size(), result.secondary_size()), (3, 2));
}

#[test]
fn unmangled_names() {
    let table = fragment_table();

    assert!(table.has_unmangled_built_in_for_shader_version("mix", ShaderVersion::ESSL1));
    assert!(table.has_unmangled_built_in_for_shader_version("texture2D", ShaderVersion::ESSL1));
    assert!(!table.has_unmangled_built_in_for_shader_version("texture", ShaderVersion::ESSL1));
    assert!(table.has_unmangled_built_in_for_shader_version("texture", ShaderVersion::ESSL3));
    assert!(!table.has_unmangled_built_in_for_shader_version("not_a_built_in", ShaderVersion::ESSL3_1));
}

#[test]
fn texture_functions() {
    let table = fragment_table();

    assert!(table.find("texture2D(s2;f2;", ShaderVersion::ESSL1).is_some());
    assert!(table.find("texture2D(s2;f2;f;", ShaderVersion::ESSL1).is_some());

    let integer = table.find("texture(is2;f2;", ShaderVersion::ESSL3).unwrap().symbol;
    let result = integer.as_function().unwrap().return_type();
    assert_eq!((result.basic(), result.primary_size()), (BasicType::Int, 4));

    assert!(table.find("texelFetch(us3;i3;i;", ShaderVersion::ESSL3).is_some());
    assert!(table.find("textureSize(sC;i;", ShaderVersion::ESSL3).is_some());
    assert!(table.find("imageLoad(im2;i2;", ShaderVersion::ESSL3).is_none());
    assert!(table.find("imageStore(uim2;i2;u4;", ShaderVersion::ESSL3_1).is_some());
}

#[test]
fn vertex_lod_lookups() {
    let table = glint_builtins::new_table(ShaderStage::Vertex, &BuiltInResources::default());
    assert!(table.find("texture2DLod(s2;f2;f;", ShaderVersion::ESSL1).is_some());
    assert!(table.find("texture2D(s2;f2;f;", ShaderVersion::ESSL1).is_none());
}

#[test]
fn extensions_registered_when_supported() {
    let table = fragment_table();
    assert!(table.find("dFdx(f2;", ShaderVersion::ESSL1).is_none());
    assert!(table.find("gl_FragDepthEXT", ShaderVersion::ESSL1).is_none());
    assert!(table.find("gl_MaxDualSourceDrawBuffersEXT", ShaderVersion::ESSL1).is_none());
    assert!(table.find("dFdx(f2;", ShaderVersion::ESSL3).is_some());

    let resources = BuiltInResources {
        extensions: ExtensionSupport::all(),
        max_dual_source_draw_buffers: 1,
        ..Default::default()
    };
    let table = glint_builtins::new_table(ShaderStage::Fragment, &resources);

    let derivative = table.find("dFdx(f2;", ShaderVersion::ESSL1).unwrap();
    assert_eq!(derivative.symbol.extension(), Extension::OesStandardDerivatives);

    let dual_source = table.find("gl_MaxDualSourceDrawBuffersEXT", ShaderVersion::ESSL1).unwrap();
    assert_eq!(dual_source.symbol.extension(), Extension::ExtBlendFuncExtended);
    assert_eq!(constant_ints(&table, "gl_MaxDualSourceDrawBuffersEXT", ShaderVersion::ESSL3), [1]);

    let policy = resources.extensions.enabled();
    assert!(table.find_visible("gl_FragDepthEXT", ShaderVersion::ESSL1, &policy).is_some());
    assert!(table.find_visible("gl_FragDepthEXT", ShaderVersion::ESSL1, &NoExtensions).is_none());
    assert!(table.find_visible("texture2DLodEXT(s2;f2;f;", ShaderVersion::ESSL1, &policy).is_some());
}

#[test]
fn stage_variables() {
    let fragment = fragment_table();
    assert!(fragment.find("gl_FragCoord", ShaderVersion::ESSL1).is_some());
    assert!(fragment.find("gl_Position", ShaderVersion::ESSL1).is_none());
    assert!(fragment.find("gl_FragDepth", ShaderVersion::ESSL3).is_some());

    let frag_data = fragment.find("gl_FragData", ShaderVersion::ESSL1).unwrap().symbol;
    assert_eq!(frag_data.as_variable().unwrap().ty().array_sizes(), [1]);

    let vertex = glint_builtins::new_table(ShaderStage::Vertex, &BuiltInResources::default());
    let position = vertex.find("gl_Position", ShaderVersion::ESSL1).unwrap().symbol;
    assert_eq!(position.as_variable().unwrap().ty().qualifier(), Qualifier::Position);
    assert!(vertex.find("gl_VertexID", ShaderVersion::ESSL1).is_none());
    assert!(vertex.find("gl_VertexID", ShaderVersion::ESSL3).is_some());

    let compute = glint_builtins::new_table(ShaderStage::Compute, &BuiltInResources::default());
    assert!(compute.find("gl_GlobalInvocationID", ShaderVersion::ESSL3_1).is_some());
    assert!(compute.find("barrier(", ShaderVersion::ESSL3_1).is_some());
    assert!(vertex.find("barrier(", ShaderVersion::ESSL3_1).is_none());
    assert!(vertex.find("memoryBarrier(", ShaderVersion::ESSL3_1).is_some());
}

#[test]
fn depth_range() {
    let table = fragment_table();

    let structure = table.find("gl_DepthRangeParameters", ShaderVersion::ESSL1).unwrap().symbol;
    let structure = structure.as_struct().unwrap();
    assert_eq!(structure.fields().len(), 3);

    let uniform = table.find("gl_DepthRange", ShaderVersion::ESSL1).unwrap().symbol;
    let ty = uniform.as_variable().unwrap().ty();
    assert_eq!(ty.qualifier(), Qualifier::Uniform);
    assert_eq!(ty, &Type::structure(structure.clone()).with_qualifier(Qualifier::Uniform));
}

#[test]
fn default_precisions() {
    let mut fragment = fragment_table();
    assert_eq!(fragment.get_default_precision(BasicType::Float), Precision::Undefined);
    assert_eq!(fragment.get_default_precision(BasicType::Int), Precision::Medium);
    assert_eq!(fragment.get_default_precision(BasicType::Sampler2D), Precision::Low);

    fragment.push();
    fragment.set_default_precision(BasicType::Float, Precision::Medium);
    assert_eq!(fragment.get_default_precision(BasicType::Float), Precision::Medium);

    let vertex = glint_builtins::new_table(ShaderStage::Vertex, &BuiltInResources::default());
    assert_eq!(vertex.get_default_precision(BasicType::Float), Precision::High);
    assert_eq!(vertex.get_default_precision(BasicType::UInt), Precision::High);
}

#[cfg(feature = "desktop-builtins")]
#[test]
fn desktop_tier() {
    let table = glint_builtins::new_table(ShaderStage::Vertex, &BuiltInResources::default());

    for version in ShaderVersion::ALL {
        assert!(table.find("noise3(f2;", version).is_none());
        assert!(table.find_built_in_with_desktop("noise3(f2;", version, true).is_some());
    }
    assert!(table.find_built_in_with_desktop("ftransform(", ShaderVersion::ESSL1, true).is_some());
    assert!(!table.built_ins().level(BuiltInTier::Glsl).is_empty());
}

#[test]
fn shared_between_compilations() {
    let table = fragment_table();
    let mut first = table.fork();
    let mut second = table.fork();

    for compilation in [&mut first, &mut second] {
        compilation.push();
        let id = compilation.next_unique_id();
        let color = Variable::new(id, "color", Type::vector(BasicType::Float, 4), SymbolType::UserDefined);
        assert!(compilation.declare_variable(color));
    }

    let first_color = first.find("color", ShaderVersion::ESSL3).unwrap().symbol;
    let second_color = second.find("color", ShaderVersion::ESSL3).unwrap().symbol;
    assert!(!Rc::ptr_eq(&first_color, &second_color));
    assert_eq!(first_color.unique_id(), second_color.unique_id());

    assert!(Rc::ptr_eq(
        &first.find("sin(f;", ShaderVersion::ESSL1).unwrap().symbol,
        &second.find("sin(f;", ShaderVersion::ESSL1).unwrap().symbol
    ));
}

// SPDX-License-Identifier: LGPL-3.0-or-later

use std::rc::Rc;

use glint_symbols::{
    BasicType,
    BuiltInTier,
    ConstantUnion,
    DeclarationError,
    Function,
    Operator,
    Parameter,
    Precision,
    Qualifier,
    ShaderVersion,
    SymbolLevel,
    SymbolTable,
    SymbolType,
    Type,
    Variable,
    GLOBAL_LEVEL,
};

fn float(size: u8) -> Type {
    Type::vector(BasicType::Float, size)
}

fn built_in_table() -> SymbolTable {
    let mut table = SymbolTable::new();

    let gen_type = Type::scalar(BasicType::GenType);
    table.insert_built_in_op(BuiltInTier::Common, Operator::Sin, &gen_type, &[&gen_type]);
    table.insert_built_in_op(BuiltInTier::Common, Operator::Max, &gen_type, &[&gen_type, &gen_type]);
    table.insert_built_in_op(BuiltInTier::Common, Operator::Max, &gen_type, &[&gen_type, &Type::scalar(BasicType::Float)]);

    table.insert_const_int(BuiltInTier::Common, "gl_MaxVertexAttribs", 8, Precision::Medium);
    table.insert_variable(BuiltInTier::Essl1, "gl_FragColor", float(4).with_precision(Precision::Medium));
    table.insert_variable(BuiltInTier::Essl3, "gl_FragDepth", float(1).with_precision(Precision::High));
    table.insert_const_ivec3(BuiltInTier::Essl3_1, "gl_MaxComputeWorkGroupCount", [65535, 65535, 65535], Precision::High);
    table.set_built_in_default_precision(BuiltInTier::Common, BasicType::Int, Precision::Medium);

    table.mark_built_in_initialization_finished();
    table
}

fn declare_float(table: &mut SymbolTable, name: &str) -> bool {
    let id = table.next_unique_id();
    table.declare_variable(Variable::new(id, name, float(1), SymbolType::UserDefined))
}

#[test]
fn shadowing() {
    let mut table = built_in_table();
    table.push();
    assert!(declare_float(&mut table, "x"));
    let outer = table.find("x", ShaderVersion::ESSL3).unwrap().symbol;

    table.push();
    assert!(declare_float(&mut table, "x"));
    let inner = table.find("x", ShaderVersion::ESSL3).unwrap();
    assert!(!Rc::ptr_eq(&inner.symbol, &outer));
    assert!(inner.is_same_scope);

    table.pop();
    let found = table.find("x", ShaderVersion::ESSL3).unwrap();
    assert!(Rc::ptr_eq(&found.symbol, &outer));
}

#[test]
fn redeclaration() {
    let mut table = built_in_table();
    table.push();
    assert!(declare_float(&mut table, "x"));
    let original = table.find("x", ShaderVersion::ESSL3).unwrap().symbol;

    let id = table.next_unique_id();
    let duplicate = Variable::new(id, "x", Type::scalar(BasicType::Int), SymbolType::UserDefined);
    let error = table.try_declare_variable(duplicate).unwrap_err();
    assert_eq!(error, DeclarationError::Redeclaration { name: Rc::from("x") });
    assert_eq!(error.to_string(), "'x' is already declared in this scope");

    let found = table.find("x", ShaderVersion::ESSL3).unwrap();
    assert!(Rc::ptr_eq(&found.symbol, &original));
}

#[test]
fn overload_disambiguation() {
    let table = built_in_table();

    let scalar = table.find("max(f;f;", ShaderVersion::ESSL1).unwrap();
    let mixed = table.find("max(f3;f;", ShaderVersion::ESSL1).unwrap();
    let vector = table.find("max(f3;f3;", ShaderVersion::ESSL1).unwrap();

    assert!(!Rc::ptr_eq(&mixed.symbol, &vector.symbol));
    assert_eq!(mixed.symbol.as_function().unwrap().parameters()[1].ty(), &Type::scalar(BasicType::Float));
    assert_eq!(scalar.symbol.as_function().unwrap().op(), Operator::Max);

    // (f;f;) is registered by both signatures; the first one wins
    assert_eq!(scalar.level, SymbolLevel::BuiltIn(BuiltInTier::Common));
    assert!(table.has_unmangled_built_in_for_shader_version("max", ShaderVersion::ESSL1));
}

#[test]
fn user_overloads() {
    let mut table = built_in_table();
    table.push();

    for param in [BasicType::Float, BasicType::Int] {
        let id = table.next_unique_id();
        let function = Function::new(id, "pick", float(1), SymbolType::UserDefined)
            .with_parameter(Parameter::new("value", Type::scalar(param)));
        assert!(table.declare_function(function));
    }

    let id = table.next_unique_id();
    let repeated = Function::new(id, "pick", float(1), SymbolType::UserDefined)
        .with_parameter(Parameter::unnamed(Type::scalar(BasicType::Int)));
    assert!(!table.declare_function(repeated));

    let float_version = table.find_global("pick(f;").unwrap();
    let int_version = table.find_global("pick(i;").unwrap();
    assert!(!Rc::ptr_eq(&float_version, &int_version));
}

#[test]
fn version_gating() {
    let table = built_in_table();

    assert!(table.find("gl_FragDepth", ShaderVersion::ESSL1).is_none());
    assert!(table.find("gl_FragDepth", ShaderVersion::ESSL3).is_some());
    assert!(table.find("gl_FragDepth", ShaderVersion::ESSL3_1).is_some());

    assert!(table.find("gl_MaxComputeWorkGroupCount", ShaderVersion::ESSL3).is_none());
    assert!(table.find("gl_MaxComputeWorkGroupCount", ShaderVersion::ESSL3_1).is_some());

    for version in ShaderVersion::ALL {
        let found = table.find("gl_MaxVertexAttribs", version).unwrap();
        assert!(found.is_built_in);
    }
}

#[test]
fn reuse_isolation() {
    let mut table = built_in_table();
    let boundary = table.built_ins().boundary().unwrap();

    for _ in 0..3 {
        table.push();
        assert!(declare_float(&mut table, "temp"));
        table.push();
        table.set_default_precision(BasicType::Float, Precision::High);
        assert!(declare_float(&mut table, "inner"));

        table.clear_compilation_results();

        assert!(table.at_built_in_level());
        assert!(table.find("temp", ShaderVersion::ESSL3).is_none());
        assert!(table.find("inner", ShaderVersion::ESSL3).is_none());
        assert_eq!(table.get_default_precision(BasicType::Float), Precision::Undefined);
        assert_eq!(table.get_default_precision(BasicType::Int), Precision::Medium);
        assert!(table.find("gl_FragColor", ShaderVersion::ESSL1).is_some());

        assert_eq!(table.next_unique_id(), boundary);
        table.clear_compilation_results();
    }
}

#[test]
fn forked_tables_are_isolated() {
    let table = built_in_table();
    let mut first = table.fork();
    let mut second = table.fork();

    first.push();
    assert!(declare_float(&mut first, "only_in_first"));
    second.push();

    assert!(second.find("only_in_first", ShaderVersion::ESSL3).is_none());
    assert!(Rc::ptr_eq(
        &first.find_built_in("gl_FragColor", ShaderVersion::ESSL1).unwrap(),
        &second.find_built_in("gl_FragColor", ShaderVersion::ESSL1).unwrap()
    ));
}

#[test]
fn constant_sharing() {
    let mut table = SymbolTable::new();
    assert!(table.insert_const_int(BuiltInTier::Common, "gl_MaxX", 4096, Precision::Medium));
    table.mark_built_in_initialization_finished();

    let first = table.find("gl_MaxX", ShaderVersion::ESSL1).unwrap().symbol;
    let second = table.find("gl_MaxX", ShaderVersion::ESSL1).unwrap().symbol;
    let first = first.as_variable().and_then(Variable::constant_value).unwrap();
    let second = second.as_variable().and_then(Variable::constant_value).unwrap();
    assert!(Rc::ptr_eq(first, second));
    assert_eq!(first[..], [ConstantUnion::Int(4096)]);
}

#[test]
fn constant_aliasing() {
    let mut table = SymbolTable::new();
    let value: Rc<[ConstantUnion]> = Rc::from([ConstantUnion::Int(4096)]);

    let mut source = Variable::new(
        table.next_unique_id(),
        "gl_MaxX",
        Type::scalar(BasicType::Int).with_qualifier(Qualifier::Const),
        SymbolType::BuiltIn,
    );
    assert!(source.share_constant_value(value.clone()));
    assert!(!source.share_constant_value(Rc::from([ConstantUnion::Int(1)])));
    assert!(table.insert_variable_symbol(BuiltInTier::Common, source));

    let alias = Variable::new(
        table.next_unique_id(),
        "gl_MaxXAlias",
        Type::scalar(BasicType::Int).with_qualifier(Qualifier::Const),
        SymbolType::BuiltIn,
    )
    .with_constant_value(value.clone());
    assert!(table.insert_variable_symbol(BuiltInTier::Common, alias));
    table.mark_built_in_initialization_finished();

    let found = table.find("gl_MaxX", ShaderVersion::ESSL1).unwrap();
    let shared = found.symbol.as_variable().and_then(Variable::constant_value).unwrap();
    assert!(Rc::ptr_eq(shared, &value));

    let found = table.find("gl_MaxXAlias", ShaderVersion::ESSL1).unwrap();
    let aliased = found.symbol.as_variable().and_then(Variable::constant_value).unwrap();
    assert!(Rc::ptr_eq(aliased, shared));
}

#[test]
fn built_ins_unchanged_by_compilation() {
    let mut table = SymbolTable::new();
    let near = Type::scalar(BasicType::Float).with_precision(Precision::High);
    table.insert_variable(BuiltInTier::Common, "gl_DepthNear", near).unwrap();
    assert!(table.insert_const_int(BuiltInTier::Common, "gl_MaxX", 4096, Precision::Medium));
    table.mark_built_in_initialization_finished();

    let mut first = table.fork();
    let second = table.fork();

    // a compilation folding a user constant from a built-in one
    first.push();
    let built_in = first.find("gl_MaxX", ShaderVersion::ESSL1).unwrap().symbol;
    let value = built_in.as_variable().and_then(Variable::constant_value).unwrap().clone();
    let id = first.next_unique_id();
    let ty = Type::scalar(BasicType::Int).with_qualifier(Qualifier::Const);
    let local = Variable::new(id, "gl_DepthNear", ty, SymbolType::UserDefined).with_constant_value(value);
    assert!(first.declare_variable(local));
    let shadowing = first.find("gl_DepthNear", ShaderVersion::ESSL1).unwrap();
    assert!(!shadowing.is_built_in);
    assert!(shadowing.symbol.as_variable().unwrap().is_constant());
    first.pop();
    first.clear_compilation_results();

    for table in [&first, &second] {
        let near = table.find("gl_DepthNear", ShaderVersion::ESSL1).unwrap();
        assert!(near.is_built_in);
        assert!(!near.symbol.as_variable().unwrap().is_constant());

        let max = table.find("gl_MaxX", ShaderVersion::ESSL1).unwrap().symbol;
        let value = max.as_variable().and_then(Variable::constant_value).unwrap();
        assert_eq!(value[..], [ConstantUnion::Int(4096)]);
    }
}

#[test]
fn invariant_propagation() {
    let mut table = built_in_table();
    table.push();
    assert_eq!(table.current_level(), GLOBAL_LEVEL);

    table.add_invariant_varying("v_texcoord");
    assert!(table.is_varying_invariant("v_texcoord"));
    assert!(!table.is_varying_invariant("v_normal"));

    table.set_global_invariant(true);
    assert!(table.is_varying_invariant("v_normal"));

    table.clear_compilation_results();
    table.push();
    assert!(!table.is_varying_invariant("v_texcoord"));
}

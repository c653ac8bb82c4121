// SPDX-License-Identifier: LGPL-3.0-or-later

use std::rc::Rc;

use tracing::{debug, trace};

use super::{BuiltInCatalog, SymbolTable};
use crate::{
    BasicType,
    BuiltInTier,
    ConstantUnion,
    ConstantValue,
    Extension,
    Function,
    InterfaceBlock,
    Operator,
    Parameter,
    Precision,
    Qualifier,
    SamplerKind,
    StructType,
    Symbol,
    SymbolType,
    Type,
    Variable,
};

/// The largest number of parameters a built-in function signature may have.
pub const MAX_BUILT_IN_PARAMETERS: usize = 5;

/// Registration of built-in symbols.
///
/// These may only be called before [`SymbolTable::mark_built_in_initialization_finished`];
/// afterwards the built-in levels are shared and immutable.
impl SymbolTable {
    fn catalog_mut(&mut self, tier: BuiltInTier) -> &mut BuiltInCatalog {
        assert!(
            !self.ids.is_frozen(),
            "cannot modify built-in tier {tier} after built-in initialization finished"
        );
        Rc::get_mut(&mut self.built_ins).expect("built-in catalog is shared before initialization finished")
    }

    fn insert(&mut self, tier: BuiltInTier, symbol: Symbol) -> Option<Rc<Symbol>> {
        let symbol = Rc::new(symbol);
        match self.catalog_mut(tier).level_mut(tier).try_insert(symbol.clone()) {
            Ok(()) => Some(symbol),
            Err(error) => {
                trace!(%tier, %error, "built-in insertion rejected");
                None
            },
        }
    }

    /// Creates and inserts a built-in variable.
    ///
    /// Returns the inserted symbol, or `None` if the name was already taken in that tier.
    /// The variable's unique id is consumed either way.
    pub fn insert_variable(&mut self, tier: BuiltInTier, name: &str, ty: Type) -> Option<Rc<Symbol>> {
        self.insert_variable_ext(tier, Extension::Undefined, name, ty)
    }

    pub fn insert_variable_ext(
        &mut self,
        tier: BuiltInTier,
        extension: Extension,
        name: &str,
        ty: Type,
    ) -> Option<Rc<Symbol>> {
        let id = self.ids.allocate();
        let variable = Variable::new(id, name, ty, SymbolType::BuiltIn).with_extension(extension);
        self.insert(tier, variable.into())
    }

    /// Inserts an already-constructed variable, e.g. one sharing a constant value.
    pub fn insert_variable_symbol(&mut self, tier: BuiltInTier, variable: Variable) -> bool {
        self.insert(tier, variable.into()).is_some()
    }

    pub fn insert_struct_type(&mut self, tier: BuiltInTier, structure: Rc<StructType>) -> bool {
        self.insert(tier, structure.into()).is_some()
    }

    pub fn insert_interface_block(&mut self, tier: BuiltInTier, block: Rc<InterfaceBlock>) -> bool {
        self.insert(tier, block.into()).is_some()
    }

    /// Inserts a `const int` built-in such as `gl_MaxDrawBuffers`.
    pub fn insert_const_int(&mut self, tier: BuiltInTier, name: &str, value: i32, precision: Precision) -> bool {
        self.insert_const_int_ext(tier, Extension::Undefined, name, value, precision)
    }

    pub fn insert_const_int_ext(
        &mut self,
        tier: BuiltInTier,
        extension: Extension,
        name: &str,
        value: i32,
        precision: Precision,
    ) -> bool {
        let ty = Type::scalar(BasicType::Int);
        self.insert_constant(tier, extension, name, ty, &[value], precision)
    }

    /// Inserts a `const ivec3` built-in such as `gl_MaxComputeWorkGroupCount`.
    pub fn insert_const_ivec3(
        &mut self,
        tier: BuiltInTier,
        name: &str,
        values: [i32; 3],
        precision: Precision,
    ) -> bool {
        let ty = Type::vector(BasicType::Int, 3);
        self.insert_constant(tier, Extension::Undefined, name, ty, &values, precision)
    }

    fn insert_constant(
        &mut self,
        tier: BuiltInTier,
        extension: Extension,
        name: &str,
        ty: Type,
        values: &[i32],
        precision: Precision,
    ) -> bool {
        let ty = ty.with_precision(precision).with_qualifier(Qualifier::Const);
        let value: ConstantValue = values.iter().copied().map(ConstantUnion::from).collect();

        let id = self.ids.allocate();
        let variable = Variable::new(id, name, ty, SymbolType::BuiltIn)
            .with_extension(extension)
            .with_constant_value(value);
        self.insert(tier, variable.into()).is_some()
    }

    /// Sets a default precision on a built-in tier, e.g. `mediump int` for fragment shaders.
    pub fn set_built_in_default_precision(&mut self, tier: BuiltInTier, basic: BasicType, precision: Precision) {
        self.catalog_mut(tier).precision_mut(tier).set(basic, precision);
    }

    /// Registers a built-in function signature.
    ///
    /// Generic placeholder types are expanded into one concrete overload each:
    /// `gsampler*` and `gvec4` into their float, int and uint forms, `genType`
    /// and friends into sizes 1 through 4, and `vec` and friends into sizes 2
    /// through 4. The plain name is recorded for the tier regardless.
    ///
    /// # Panics
    ///
    /// Panics if there are no parameters or more than [`MAX_BUILT_IN_PARAMETERS`];
    /// see [`Self::insert_built_in_function_no_parameters`] for the former.
    pub fn insert_built_in(&mut self, tier: BuiltInTier, return_type: &Type, name: &str, parameters: &[&Type]) {
        self.insert_built_in_with_op(tier, Operator::Null, Extension::Undefined, return_type, name, parameters);
    }

    pub fn insert_built_in_ext(
        &mut self,
        tier: BuiltInTier,
        extension: Extension,
        return_type: &Type,
        name: &str,
        parameters: &[&Type],
    ) {
        self.insert_built_in_with_op(tier, Operator::Null, extension, return_type, name, parameters);
    }

    /// Registers a built-in function that maps to an operator, named after it.
    ///
    /// # Panics
    ///
    /// Panics if the operator has no name of its own.
    pub fn insert_built_in_op(&mut self, tier: BuiltInTier, op: Operator, return_type: &Type, parameters: &[&Type]) {
        self.insert_built_in_op_ext(tier, op, Extension::Undefined, return_type, parameters);
    }

    pub fn insert_built_in_op_ext(
        &mut self,
        tier: BuiltInTier,
        op: Operator,
        extension: Extension,
        return_type: &Type,
        parameters: &[&Type],
    ) {
        assert!(op.is_named(), "operator {op:?} has no function name");
        self.insert_built_in_with_op(tier, op, extension, return_type, op.name(), parameters);
    }

    pub fn insert_built_in_with_op(
        &mut self,
        tier: BuiltInTier,
        op: Operator,
        extension: Extension,
        return_type: &Type,
        name: &str,
        parameters: &[&Type],
    ) {
        assert!(
            (1..=MAX_BUILT_IN_PARAMETERS).contains(&parameters.len()),
            "built-in '{name}' has {} parameters, expected 1 to {MAX_BUILT_IN_PARAMETERS}",
            parameters.len()
        );

        self.insert_unmangled_built_in_name(tier, name);
        self.expand_built_in(tier, op, extension, return_type, name, parameters);
    }

    /// Registers a built-in function taking no parameters, such as `barrier()`.
    pub fn insert_built_in_function_no_parameters(
        &mut self,
        tier: BuiltInTier,
        op: Operator,
        return_type: &Type,
        name: &str,
    ) {
        self.insert_built_in_function_no_parameters_ext(tier, Extension::Undefined, op, return_type, name);
    }

    pub fn insert_built_in_function_no_parameters_ext(
        &mut self,
        tier: BuiltInTier,
        extension: Extension,
        op: Operator,
        return_type: &Type,
        name: &str,
    ) {
        self.insert_unmangled_built_in_name(tier, name);
        self.insert_built_in_function(tier, op, extension, return_type, name, &[]);
    }

    /// Inserts a built-in function under its plain name, regardless of its signature.
    ///
    /// Used for functions that must be resolvable by name alone.
    pub fn insert_unmangled_function(&mut self, tier: BuiltInTier, function: Function) -> bool {
        self.catalog_mut(tier).level_mut(tier).insert_unmangled(Rc::new(function.into()))
    }

    /// Records that a built-in function with this plain name exists in the tier.
    pub fn insert_unmangled_built_in_name(&mut self, tier: BuiltInTier, name: &str) {
        self.catalog_mut(tier).level_mut(tier).insert_unmangled_built_in_name(name);
    }

    fn expand_built_in(
        &mut self,
        tier: BuiltInTier,
        op: Operator,
        extension: Extension,
        return_type: &Type,
        name: &str,
        parameters: &[&Type],
    ) {
        let types = || std::iter::once(return_type).chain(parameters.iter().copied());

        if types().any(|ty| ty.basic().is_sampler_generic()) {
            for kind in SamplerKind::ALL {
                let specialized = parameters.iter().map(|ty| ty.specialize_sampler(kind)).collect::<Vec<_>>();
                let specialized = specialized.iter().collect::<Vec<_>>();
                self.expand_built_in(tier, op, extension, &return_type.specialize_sampler(kind), name, &specialized);
            }
        } else if types().any(|ty| ty.basic().is_gen_type()) {
            self.expand_sizes(tier, op, extension, return_type, name, parameters, 1..=4);
        } else if types().any(|ty| ty.basic().is_vec_type()) {
            self.expand_sizes(tier, op, extension, return_type, name, parameters, 2..=4);
        } else {
            self.insert_built_in_function(tier, op, extension, return_type, name, parameters);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn expand_sizes(
        &mut self,
        tier: BuiltInTier,
        op: Operator,
        extension: Extension,
        return_type: &Type,
        name: &str,
        parameters: &[&Type],
        sizes: std::ops::RangeInclusive<u8>,
    ) {
        for size in sizes {
            let specialized = parameters.iter().map(|ty| ty.specialize(size)).collect::<Vec<_>>();
            let specialized = specialized.iter().collect::<Vec<_>>();
            self.expand_built_in(tier, op, extension, &return_type.specialize(size), name, &specialized);
        }
    }

    fn insert_built_in_function(
        &mut self,
        tier: BuiltInTier,
        op: Operator,
        extension: Extension,
        return_type: &Type,
        name: &str,
        parameters: &[&Type],
    ) {
        let id = self.ids.allocate();
        let function = Function::new(id, name, return_type.clone(), SymbolType::BuiltIn)
            .with_op(op)
            .with_extension(extension)
            .with_parameters(parameters.iter().map(|&ty| Parameter::unnamed(ty.clone())))
            .known_to_not_have_side_effects(return_type.basic() != BasicType::Void);
        self.insert(tier, function.into());
    }

    /// Freezes the built-in levels and records the unique id boundary.
    ///
    /// Every id issued from here on belongs to a user-defined symbol.
    ///
    /// # Panics
    ///
    /// Panics if initialization was already finished.
    pub fn mark_built_in_initialization_finished(&mut self) {
        assert!(!self.ids.is_frozen(), "built-in initialization already finished");

        let boundary = self.ids.freeze();
        Rc::get_mut(&mut self.built_ins)
            .expect("built-in catalog is shared before initialization finished")
            .freeze(boundary);

        debug!(
            boundary = boundary.get(),
            symbols = self.built_ins.symbol_count(),
            "built-in initialization finished"
        );
    }

    /// Releases every user scope and rewinds the unique id counter to the
    /// built-in boundary, so the table can compile another shader.
    ///
    /// # Panics
    ///
    /// Panics if built-in initialization has not finished.
    pub fn clear_compilation_results(&mut self) {
        assert!(
            self.ids.is_frozen(),
            "compilation results can only be cleared after built-in initialization finished"
        );

        let scopes = self.session.depth();
        let released = self.ids.reset_user_ids();
        self.session.clear();

        debug!(scopes, released, "compilation results cleared");
    }
}

// SPDX-License-Identifier: LGPL-3.0-or-later

//! Math, geometric, matrix and relational built-in functions.

use glint_symbols::{BasicType, BuiltInTier, Extension, Operator, SymbolTable};

use crate::shorthand::*;
use crate::{BuiltInResources, ShaderStage};

pub fn register_funcs(table: &mut SymbolTable, stage: ShaderStage, resources: &BuiltInResources) {
    trigonometry::register_funcs(table);
    exponential::register_funcs(table);
    common::register_funcs(table);
    geometric::register_funcs(table);
    matrix::register_funcs(table);
    relational::register_funcs(table);

    if stage == ShaderStage::Fragment {
        derivatives::register_funcs(table, resources);
    }
    synchronization::register_funcs(table, stage);

    #[cfg(feature = "desktop-builtins")]
    desktop::register_funcs(table, stage);
}

pub mod trigonometry {
    use super::*;

    pub fn register_funcs(table: &mut SymbolTable) {
        let gen_type = of(BasicType::GenType);

        for op in [
            Operator::Radians,
            Operator::Degrees,
            Operator::Sin,
            Operator::Cos,
            Operator::Tan,
            Operator::Asin,
            Operator::Acos,
            Operator::Atan,
        ] {
            table.insert_built_in_op(BuiltInTier::Common, op, &gen_type, &[&gen_type]);
        }
        table.insert_built_in_op(BuiltInTier::Common, Operator::Atan, &gen_type, &[&gen_type, &gen_type]);

        for op in [Operator::Sinh, Operator::Cosh, Operator::Tanh] {
            table.insert_built_in_op(BuiltInTier::Essl3, op, &gen_type, &[&gen_type]);
        }
    }
}

pub mod exponential {
    use super::*;

    pub fn register_funcs(table: &mut SymbolTable) {
        let gen_type = of(BasicType::GenType);

        table.insert_built_in_op(BuiltInTier::Common, Operator::Pow, &gen_type, &[&gen_type, &gen_type]);
        for op in [
            Operator::Exp,
            Operator::Log,
            Operator::Exp2,
            Operator::Log2,
            Operator::Sqrt,
            Operator::InverseSqrt,
        ] {
            table.insert_built_in_op(BuiltInTier::Common, op, &gen_type, &[&gen_type]);
        }
    }
}

pub mod common {
    use super::*;

    pub fn register_funcs(table: &mut SymbolTable) {
        let gen_type = of(BasicType::GenType);
        let gen_int = of(BasicType::GenIType);
        let gen_uint = of(BasicType::GenUType);
        let gen_bool = of(BasicType::GenBType);
        let (f, i, u) = (float(1), int(1), uint(1));

        for op in [Operator::Abs, Operator::Sign, Operator::Floor, Operator::Ceil, Operator::Fract] {
            table.insert_built_in_op(BuiltInTier::Common, op, &gen_type, &[&gen_type]);
        }
        table.insert_built_in_op(BuiltInTier::Common, Operator::Mod, &gen_type, &[&gen_type, &f]);
        table.insert_built_in_op(BuiltInTier::Common, Operator::Mod, &gen_type, &[&gen_type, &gen_type]);

        for op in [Operator::Min, Operator::Max] {
            table.insert_built_in_op(BuiltInTier::Common, op, &gen_type, &[&gen_type, &f]);
            table.insert_built_in_op(BuiltInTier::Common, op, &gen_type, &[&gen_type, &gen_type]);
        }
        table.insert_built_in_op(BuiltInTier::Common, Operator::Clamp, &gen_type, &[&gen_type, &f, &f]);
        table.insert_built_in_op(BuiltInTier::Common, Operator::Clamp, &gen_type, &[&gen_type, &gen_type, &gen_type]);
        table.insert_built_in_op(BuiltInTier::Common, Operator::Mix, &gen_type, &[&gen_type, &gen_type, &f]);
        table.insert_built_in_op(BuiltInTier::Common, Operator::Mix, &gen_type, &[&gen_type, &gen_type, &gen_type]);
        table.insert_built_in_op(BuiltInTier::Common, Operator::Step, &gen_type, &[&gen_type, &gen_type]);
        table.insert_built_in_op(BuiltInTier::Common, Operator::Step, &gen_type, &[&f, &gen_type]);
        table.insert_built_in_op(BuiltInTier::Common, Operator::SmoothStep, &gen_type, &[&gen_type, &gen_type, &gen_type]);
        table.insert_built_in_op(BuiltInTier::Common, Operator::SmoothStep, &gen_type, &[&f, &f, &gen_type]);

        // Integer overloads and bit casts arrived with ESSL 3.00
        table.insert_built_in_op(BuiltInTier::Essl3, Operator::Abs, &gen_int, &[&gen_int]);
        table.insert_built_in_op(BuiltInTier::Essl3, Operator::Sign, &gen_int, &[&gen_int]);
        for op in [Operator::Trunc, Operator::Round, Operator::RoundEven] {
            table.insert_built_in_op(BuiltInTier::Essl3, op, &gen_type, &[&gen_type]);
        }

        for (gen_n, n) in [(&gen_int, &i), (&gen_uint, &u)] {
            for op in [Operator::Min, Operator::Max] {
                table.insert_built_in_op(BuiltInTier::Essl3, op, gen_n, &[gen_n, n]);
                table.insert_built_in_op(BuiltInTier::Essl3, op, gen_n, &[gen_n, gen_n]);
            }
            table.insert_built_in_op(BuiltInTier::Essl3, Operator::Clamp, gen_n, &[gen_n, n, n]);
            table.insert_built_in_op(BuiltInTier::Essl3, Operator::Clamp, gen_n, &[gen_n, gen_n, gen_n]);
        }

        table.insert_built_in_op(BuiltInTier::Essl3, Operator::Mix, &gen_type, &[&gen_type, &gen_type, &gen_bool]);
        table.insert_built_in_op(BuiltInTier::Essl3, Operator::IsNan, &gen_bool, &[&gen_type]);
        table.insert_built_in_op(BuiltInTier::Essl3, Operator::IsInf, &gen_bool, &[&gen_type]);

        table.insert_built_in_op(BuiltInTier::Essl3, Operator::FloatBitsToInt, &gen_int, &[&gen_type]);
        table.insert_built_in_op(BuiltInTier::Essl3, Operator::FloatBitsToUint, &gen_uint, &[&gen_type]);
        table.insert_built_in_op(BuiltInTier::Essl3, Operator::IntBitsToFloat, &gen_type, &[&gen_int]);
        table.insert_built_in_op(BuiltInTier::Essl3, Operator::UintBitsToFloat, &gen_type, &[&gen_uint]);
    }
}

pub mod geometric {
    use super::*;

    pub fn register_funcs(table: &mut SymbolTable) {
        let gen_type = of(BasicType::GenType);
        let (f, vec3) = (float(1), float(3));

        table.insert_built_in_op(BuiltInTier::Common, Operator::Length, &f, &[&gen_type]);
        table.insert_built_in_op(BuiltInTier::Common, Operator::Distance, &f, &[&gen_type, &gen_type]);
        table.insert_built_in_op(BuiltInTier::Common, Operator::Dot, &f, &[&gen_type, &gen_type]);
        table.insert_built_in_op(BuiltInTier::Common, Operator::Cross, &vec3, &[&vec3, &vec3]);
        table.insert_built_in_op(BuiltInTier::Common, Operator::Normalize, &gen_type, &[&gen_type]);
        table.insert_built_in_op(BuiltInTier::Common, Operator::FaceForward, &gen_type, &[&gen_type, &gen_type, &gen_type]);
        table.insert_built_in_op(BuiltInTier::Common, Operator::Reflect, &gen_type, &[&gen_type, &gen_type]);
        table.insert_built_in_op(BuiltInTier::Common, Operator::Refract, &gen_type, &[&gen_type, &gen_type, &f]);
    }
}

pub mod matrix {
    use super::*;

    pub fn register_funcs(table: &mut SymbolTable) {
        for size in 2..=4 {
            let m = mat(size, size);
            table.insert_built_in_op(BuiltInTier::Common, Operator::MulMatrixComponentWise, &m, &[&m, &m]);

            table.insert_built_in_op(BuiltInTier::Essl3, Operator::Transpose, &m, &[&m]);
            table.insert_built_in_op(BuiltInTier::Essl3, Operator::Determinant, &float(1), &[&m]);
            table.insert_built_in_op(BuiltInTier::Essl3, Operator::Inverse, &m, &[&m]);
        }

        for columns in 2..=4 {
            for rows in 2..=4 {
                let m = mat(columns, rows);
                if columns != rows {
                    table.insert_built_in_op(BuiltInTier::Essl3, Operator::MulMatrixComponentWise, &m, &[&m, &m]);
                    table.insert_built_in_op(BuiltInTier::Essl3, Operator::Transpose, &mat(rows, columns), &[&m]);
                }

                // outerProduct(c, r) has one column per component of r
                let (c, r) = (float(rows), float(columns));
                table.insert_built_in_op(BuiltInTier::Essl3, Operator::OuterProduct, &m, &[&c, &r]);
            }
        }
    }
}

pub mod relational {
    use super::*;

    pub fn register_funcs(table: &mut SymbolTable) {
        let vec = of(BasicType::Vec);
        let ivec = of(BasicType::IVec);
        let uvec = of(BasicType::UVec);
        let bvec = of(BasicType::BVec);

        let ordered = [
            Operator::LessThanComponentWise,
            Operator::LessThanEqualComponentWise,
            Operator::GreaterThanComponentWise,
            Operator::GreaterThanEqualComponentWise,
        ];
        let equality = [Operator::EqualComponentWise, Operator::NotEqualComponentWise];

        for op in ordered.into_iter().chain(equality) {
            table.insert_built_in_op(BuiltInTier::Common, op, &bvec, &[&vec, &vec]);
            table.insert_built_in_op(BuiltInTier::Common, op, &bvec, &[&ivec, &ivec]);
            table.insert_built_in_op(BuiltInTier::Essl3, op, &bvec, &[&uvec, &uvec]);
        }
        for op in equality {
            table.insert_built_in_op(BuiltInTier::Common, op, &bvec, &[&bvec, &bvec]);
        }

        table.insert_built_in_op(BuiltInTier::Common, Operator::Any, &boolean(1), &[&bvec]);
        table.insert_built_in_op(BuiltInTier::Common, Operator::All, &boolean(1), &[&bvec]);
        table.insert_built_in_op(BuiltInTier::Common, Operator::LogicalNotComponentWise, &bvec, &[&bvec]);
    }
}

pub mod derivatives {
    use super::*;

    pub fn register_funcs(table: &mut SymbolTable, resources: &BuiltInResources) {
        let gen_type = of(BasicType::GenType);

        for op in [Operator::DFdx, Operator::DFdy, Operator::Fwidth] {
            if resources.extensions.oes_standard_derivatives {
                table.insert_built_in_op_ext(BuiltInTier::Essl1, op, Extension::OesStandardDerivatives, &gen_type, &[&gen_type]);
            }
            table.insert_built_in_op(BuiltInTier::Essl3, op, &gen_type, &[&gen_type]);
        }
    }
}

pub mod synchronization {
    use super::*;

    pub fn register_funcs(table: &mut SymbolTable, stage: ShaderStage) {
        let void_type = void();
        let mut insert = |op: Operator| {
            table.insert_built_in_function_no_parameters(BuiltInTier::Essl3_1, op, &void_type, op.name());
        };

        insert(Operator::MemoryBarrier);
        insert(Operator::MemoryBarrierAtomicCounter);
        insert(Operator::MemoryBarrierBuffer);
        insert(Operator::MemoryBarrierImage);

        if stage == ShaderStage::Compute {
            insert(Operator::Barrier);
            insert(Operator::MemoryBarrierShared);
            insert(Operator::GroupMemoryBarrier);
        }
    }
}

/// Desktop GLSL functions with no ESSL counterpart, only reachable through
/// [`SymbolTable::find_built_in_with_desktop`].
#[cfg(feature = "desktop-builtins")]
pub mod desktop {
    use super::*;

    pub fn register_funcs(table: &mut SymbolTable, stage: ShaderStage) {
        let gen_type = of(BasicType::GenType);
        for (name, size) in [("noise1", 1), ("noise2", 2), ("noise3", 3), ("noise4", 4)] {
            table.insert_built_in(BuiltInTier::Glsl, &float(size), name, &[&gen_type]);
        }

        if stage == ShaderStage::Vertex {
            table.insert_built_in_function_no_parameters(BuiltInTier::Glsl, Operator::Null, &float(4), "ftransform");
        }
    }
}

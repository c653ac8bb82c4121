// SPDX-License-Identifier: LGPL-3.0-or-later

use super::basic::spelled_enum;

spelled_enum! {
    /// Operator tag attached to built-in functions, so that calls to them can be
    /// turned directly into operations by the intermediate representation.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub enum Operator {
        /// Not an operator; the built-in is called by name.
        #[default]
        Null => "",
        CallBuiltInFunction => "",

        // Angle and trigonometry
        Radians => "radians",
        Degrees => "degrees",
        Sin => "sin",
        Cos => "cos",
        Tan => "tan",
        Asin => "asin",
        Acos => "acos",
        Atan => "atan",
        Sinh => "sinh",
        Cosh => "cosh",
        Tanh => "tanh",

        // Exponential
        Pow => "pow",
        Exp => "exp",
        Log => "log",
        Exp2 => "exp2",
        Log2 => "log2",
        Sqrt => "sqrt",
        InverseSqrt => "inversesqrt",

        // Common
        Abs => "abs",
        Sign => "sign",
        Floor => "floor",
        Trunc => "trunc",
        Round => "round",
        RoundEven => "roundEven",
        Ceil => "ceil",
        Fract => "fract",
        Mod => "mod",
        Min => "min",
        Max => "max",
        Clamp => "clamp",
        Mix => "mix",
        Step => "step",
        SmoothStep => "smoothstep",
        IsNan => "isnan",
        IsInf => "isinf",
        FloatBitsToInt => "floatBitsToInt",
        FloatBitsToUint => "floatBitsToUint",
        IntBitsToFloat => "intBitsToFloat",
        UintBitsToFloat => "uintBitsToFloat",

        // Geometric
        Length => "length",
        Distance => "distance",
        Dot => "dot",
        Cross => "cross",
        Normalize => "normalize",
        FaceForward => "faceforward",
        Reflect => "reflect",
        Refract => "refract",

        // Matrix
        MulMatrixComponentWise => "matrixCompMult",
        OuterProduct => "outerProduct",
        Transpose => "transpose",
        Determinant => "determinant",
        Inverse => "inverse",

        // Vector relational
        LessThanComponentWise => "lessThan",
        LessThanEqualComponentWise => "lessThanEqual",
        GreaterThanComponentWise => "greaterThan",
        GreaterThanEqualComponentWise => "greaterThanEqual",
        EqualComponentWise => "equal",
        NotEqualComponentWise => "notEqual",
        Any => "any",
        All => "all",
        LogicalNotComponentWise => "not",

        // Fragment processing
        DFdx => "dFdx",
        DFdy => "dFdy",
        Fwidth => "fwidth",

        // Synchronization
        Barrier => "barrier",
        MemoryBarrier => "memoryBarrier",
        MemoryBarrierAtomicCounter => "memoryBarrierAtomicCounter",
        MemoryBarrierBuffer => "memoryBarrierBuffer",
        MemoryBarrierImage => "memoryBarrierImage",
        MemoryBarrierShared => "memoryBarrierShared",
        GroupMemoryBarrier => "groupMemoryBarrier",
    }
}

impl Operator {
    /// Whether built-ins tagged with this operator are registered under the operator's own name.
    pub const fn is_named(self) -> bool {
        !matches!(self, Self::Null | Self::CallBuiltInFunction)
    }
}

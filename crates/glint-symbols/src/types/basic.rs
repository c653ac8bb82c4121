// SPDX-License-Identifier: LGPL-3.0-or-later

use std::str::FromStr;

use crate::ParseError;

/// Generates a fieldless enum along with its shading-language spelling.
macro_rules! spelled_enum {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {
            $($(#[$var_attr:meta])* $variant:ident => $spelling:literal,)+
        }
    ) => {
        $(#[$attr])*
        $vis enum $name {
            $($(#[$var_attr])* $variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The shading-language spelling of this value.
            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $spelling,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

pub(crate) use spelled_enum;

spelled_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum BasicType {
        Void => "void",
        Float => "float",
        Int => "int",
        UInt => "uint",
        Bool => "bool",

        Sampler2D => "sampler2D",
        ISampler2D => "isampler2D",
        USampler2D => "usampler2D",
        Sampler3D => "sampler3D",
        ISampler3D => "isampler3D",
        USampler3D => "usampler3D",
        SamplerCube => "samplerCube",
        ISamplerCube => "isamplerCube",
        USamplerCube => "usamplerCube",
        Sampler2DArray => "sampler2DArray",
        ISampler2DArray => "isampler2DArray",
        USampler2DArray => "usampler2DArray",
        Sampler2DShadow => "sampler2DShadow",
        SamplerCubeShadow => "samplerCubeShadow",
        SamplerExternalOes => "samplerExternalOES",

        Image2D => "image2D",
        IImage2D => "iimage2D",
        UImage2D => "uimage2D",
        AtomicCounter => "atomic_uint",

        Struct => "struct",
        InterfaceBlock => "interface block",

        // Placeholders only used while registering built-ins.
        GenType => "genType",
        GenIType => "genIType",
        GenUType => "genUType",
        GenBType => "genBType",
        Vec => "vec",
        IVec => "ivec",
        UVec => "uvec",
        BVec => "bvec",
        GVec4 => "gvec4",
        GSampler2D => "gsampler2D",
        GSampler3D => "gsampler3D",
        GSamplerCube => "gsamplerCube",
        GSampler2DArray => "gsampler2DArray",
    }
}

impl BasicType {
    pub const fn is_sampler(self) -> bool {
        matches!(
            self,
            Self::Sampler2D
                | Self::ISampler2D
                | Self::USampler2D
                | Self::Sampler3D
                | Self::ISampler3D
                | Self::USampler3D
                | Self::SamplerCube
                | Self::ISamplerCube
                | Self::USamplerCube
                | Self::Sampler2DArray
                | Self::ISampler2DArray
                | Self::USampler2DArray
                | Self::Sampler2DShadow
                | Self::SamplerCubeShadow
                | Self::SamplerExternalOes
        )
    }

    pub const fn is_image(self) -> bool {
        matches!(self, Self::Image2D | Self::IImage2D | Self::UImage2D)
    }

    pub const fn is_opaque(self) -> bool {
        self.is_sampler() || self.is_image() || matches!(self, Self::AtomicCounter)
    }

    /// Whether a precision qualifier applies to this type.
    pub const fn supports_precision(self) -> bool {
        matches!(self, Self::Float | Self::Int | Self::UInt) || self.is_opaque()
    }

    /// `genType`-style placeholders, which expand to 1 through 4 components.
    pub const fn is_gen_type(self) -> bool {
        matches!(self, Self::GenType | Self::GenIType | Self::GenUType | Self::GenBType)
    }

    /// `vec`-style placeholders, which expand to 2 through 4 components.
    pub const fn is_vec_type(self) -> bool {
        matches!(self, Self::Vec | Self::IVec | Self::UVec | Self::BVec)
    }

    /// `gsampler`/`gvec4` placeholders, which expand over float, int and uint variants.
    pub const fn is_sampler_generic(self) -> bool {
        matches!(
            self,
            Self::GVec4 | Self::GSampler2D | Self::GSampler3D | Self::GSamplerCube | Self::GSampler2DArray
        )
    }

    pub const fn is_generic(self) -> bool {
        self.is_gen_type() || self.is_vec_type() || self.is_sampler_generic()
    }

    /// The scalar type a `genType`/`vec` placeholder stands for.
    pub const fn generic_component(self) -> Option<BasicType> {
        match self {
            Self::GenType | Self::Vec => Some(Self::Float),
            Self::GenIType | Self::IVec => Some(Self::Int),
            Self::GenUType | Self::UVec => Some(Self::UInt),
            Self::GenBType | Self::BVec => Some(Self::Bool),
            _ => None,
        }
    }

    /// The concrete type a `gsampler`/`gvec4` placeholder stands for with the given sampler kind.
    pub const fn specialize_sampler(self, kind: SamplerKind) -> BasicType {
        use SamplerKind::*;

        match (self, kind) {
            (Self::GVec4, Float) => Self::Float,
            (Self::GVec4, Int) => Self::Int,
            (Self::GVec4, UInt) => Self::UInt,

            (Self::GSampler2D, Float) => Self::Sampler2D,
            (Self::GSampler2D, Int) => Self::ISampler2D,
            (Self::GSampler2D, UInt) => Self::USampler2D,

            (Self::GSampler3D, Float) => Self::Sampler3D,
            (Self::GSampler3D, Int) => Self::ISampler3D,
            (Self::GSampler3D, UInt) => Self::USampler3D,

            (Self::GSamplerCube, Float) => Self::SamplerCube,
            (Self::GSamplerCube, Int) => Self::ISamplerCube,
            (Self::GSamplerCube, UInt) => Self::USamplerCube,

            (Self::GSampler2DArray, Float) => Self::Sampler2DArray,
            (Self::GSampler2DArray, Int) => Self::ISampler2DArray,
            (Self::GSampler2DArray, UInt) => Self::USampler2DArray,

            (other, _) => other,
        }
    }

    /// Short code identifying this type within a mangled name.
    pub const fn mangled_code(self) -> &'static str {
        match self {
            Self::Void => "v",
            Self::Float => "f",
            Self::Int => "i",
            Self::UInt => "u",
            Self::Bool => "b",

            Self::Sampler2D => "s2",
            Self::ISampler2D => "is2",
            Self::USampler2D => "us2",
            Self::Sampler3D => "s3",
            Self::ISampler3D => "is3",
            Self::USampler3D => "us3",
            Self::SamplerCube => "sC",
            Self::ISamplerCube => "isC",
            Self::USamplerCube => "usC",
            Self::Sampler2DArray => "s2a",
            Self::ISampler2DArray => "is2a",
            Self::USampler2DArray => "us2a",
            Self::Sampler2DShadow => "s2s",
            Self::SamplerCubeShadow => "sCs",
            Self::SamplerExternalOes => "sext",

            Self::Image2D => "im2",
            Self::IImage2D => "iim2",
            Self::UImage2D => "uim2",
            Self::AtomicCounter => "ac",

            Self::Struct => "st",
            Self::InterfaceBlock => "ib",

            // Generic placeholders are expanded before anything is mangled,
            // but they still get distinct codes so a mistake never collides.
            Self::GenType => "gT",
            Self::GenIType => "giT",
            Self::GenUType => "guT",
            Self::GenBType => "gbT",
            Self::Vec => "gv",
            Self::IVec => "giv",
            Self::UVec => "guv",
            Self::BVec => "gbv",
            Self::GVec4 => "gv4",
            Self::GSampler2D => "gs2",
            Self::GSampler3D => "gs3",
            Self::GSamplerCube => "gsC",
            Self::GSampler2DArray => "gs2a",
        }
    }

    /// Vector spelling prefix (`vec`, `ivec`, ...) for scalar component types.
    pub(crate) const fn vector_prefix(self) -> Option<&'static str> {
        match self {
            Self::Float => Some("vec"),
            Self::Int => Some("ivec"),
            Self::UInt => Some("uvec"),
            Self::Bool => Some("bvec"),
            _ => None,
        }
    }
}

impl FromStr for BasicType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .filter(|basic| !matches!(basic, Self::Struct | Self::InterfaceBlock))
            .find(|basic| basic.name() == s)
            .ok_or_else(|| ParseError::UnknownBasicType(s.to_owned()))
    }
}

/// Component type family used to expand `gsampler`/`gvec4` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplerKind {
    Float,
    Int,
    UInt,
}

impl SamplerKind {
    pub const ALL: [SamplerKind; 3] = [SamplerKind::Float, SamplerKind::Int, SamplerKind::UInt];
}

spelled_enum! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum Precision {
        #[default]
        Undefined => "",
        Low => "lowp",
        Medium => "mediump",
        High => "highp",
    }
}

impl FromStr for Precision {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lowp" => Ok(Self::Low),
            "mediump" => Ok(Self::Medium),
            "highp" => Ok(Self::High),
            _ => Err(ParseError::UnknownPrecision(s.to_owned())),
        }
    }
}

spelled_enum! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub enum Qualifier {
        #[default]
        Temporary => "",
        Global => "",
        Const => "const",
        Attribute => "attribute",
        VaryingIn => "varying",
        VaryingOut => "varying",
        Uniform => "uniform",
        Buffer => "buffer",

        In => "in",
        Out => "out",
        InOut => "inout",
        ConstIn => "const in",

        VertexIn => "in",
        FragmentOut => "out",

        // Built-in stage inputs and outputs
        Position => "",
        PointSize => "",
        InstanceId => "",
        VertexId => "",
        FragCoord => "",
        FrontFacing => "",
        PointCoord => "",
        FragColor => "",
        FragData => "",
        FragDepth => "",
        NumWorkGroups => "",
        WorkGroupId => "",
        LocalInvocationId => "",
        GlobalInvocationId => "",
        LocalInvocationIndex => "",
    }
}

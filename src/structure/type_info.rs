// Tue Jan 13 2026 - Alex

use crate::structure::{Member, TypeFlags};
use itertools::Itertools;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeInfo {
    Scalar(PrimitiveType),
    Reference(Box<TypeInfo>),
    Array(Box<TypeInfo>, usize),
    Aggregate(AggregateInfo),
    Union(AggregateInfo),
    Opaque(OpaqueInfo),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    U8,
    U16,
    U32,
    U64,
    U128,
    I8,
    I16,
    I32,
    I64,
    I128,
    F32,
    F64,
    Ptr,
    Bool,
    Char,
    Usize,
    Isize,
}

/// Member list of a struct-like or union type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AggregateInfo {
    name: String,
    members: Vec<Member>,
}

/// A type with user-provided construction, never split by brace elision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpaqueInfo {
    name: String,
    flags: TypeFlags,
}

impl TypeInfo {
    pub fn aggregate(name: impl Into<String>, members: Vec<Member>) -> Self {
        Self::Aggregate(AggregateInfo::new(name, members))
    }

    pub fn union(name: impl Into<String>, members: Vec<Member>) -> Self {
        Self::Union(AggregateInfo::new(name, members))
    }

    pub fn opaque(name: impl Into<String>, flags: TypeFlags) -> Self {
        Self::Opaque(OpaqueInfo::new(name, flags))
    }

    pub fn array(element: TypeInfo, len: usize) -> Self {
        Self::Array(Box::new(element), len)
    }

    pub fn reference(target: TypeInfo) -> Self {
        Self::Reference(Box::new(target))
    }

    pub fn flags(&self) -> TypeFlags {
        match self {
            Self::Scalar(_) => TypeFlags::VALUE,
            Self::Reference(_) => TypeFlags::empty(),
            Self::Array(elem, len) => {
                let mut flags = elem.flags() - TypeFlags::AGGREGATE;
                if *len == 0 {
                    flags |= TypeFlags::DEFAULT_CONSTRUCTIBLE;
                }
                flags | TypeFlags::AGGREGATE
            }
            Self::Aggregate(info) => {
                let mut flags = TypeFlags::VALUE;
                for member in info.members() {
                    flags &= member.type_info().flags();
                }
                (flags & TypeFlags::VALUE) | TypeFlags::AGGREGATE
            }
            Self::Union(info) => {
                let mut flags = TypeFlags::COPYABLE | TypeFlags::MOVABLE;
                for member in info.members() {
                    flags &= member.type_info().flags();
                }
                let defaultable = info
                    .members()
                    .first()
                    .map_or(true, |m| m.type_info().flags().is_default_constructible());
                if defaultable {
                    flags |= TypeFlags::DEFAULT_CONSTRUCTIBLE;
                }
                flags | TypeFlags::AGGREGATE
            }
            Self::Opaque(info) => info.flags() - TypeFlags::AGGREGATE,
        }
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::Aggregate(_) | Self::Union(_) | Self::Array(_, _))
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_, _))
    }

    pub fn is_union(&self) -> bool {
        matches!(self, Self::Union(_))
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque(_))
    }

    /// Number of positional elements a braced list initializes directly.
    ///
    /// Arrays contribute one element per entry and unions only their first
    /// member. Non-aggregates have no elements.
    pub fn element_count(&self) -> usize {
        match self {
            Self::Array(_, len) => *len,
            Self::Aggregate(info) => info.members().len(),
            Self::Union(info) => info.members().len().min(1),
            _ => 0,
        }
    }

    /// The `index`-th positional element of an aggregate.
    pub fn element(&self, index: usize) -> Option<&TypeInfo> {
        match self {
            Self::Array(elem, len) if index < *len => Some(elem),
            Self::Aggregate(info) => info.members().get(index).map(Member::type_info),
            Self::Union(info) if index == 0 => info.members().first().map(Member::type_info),
            _ => None,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Self::Aggregate(info) | Self::Union(info) => info.name().to_string(),
            Self::Opaque(info) => info.name().to_string(),
            other => other.to_string(),
        }
    }
}

impl AggregateInfo {
    pub fn new(name: impl Into<String>, members: Vec<Member>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn base_count(&self) -> usize {
        self.members.iter().filter(|m| m.is_base()).count()
    }
}

impl OpaqueInfo {
    pub fn new(name: impl Into<String>, flags: TypeFlags) -> Self {
        Self {
            name: name.into(),
            flags,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn flags(&self) -> TypeFlags {
        self.flags
    }
}

impl PrimitiveType {
    pub fn c_name(self) -> &'static str {
        match self {
            Self::U8 => "uint8_t",
            Self::U16 => "uint16_t",
            Self::U32 => "uint32_t",
            Self::U64 => "uint64_t",
            Self::U128 => "unsigned __int128",
            Self::I8 => "int8_t",
            Self::I16 => "int16_t",
            Self::I32 => "int32_t",
            Self::I64 => "int64_t",
            Self::I128 => "__int128",
            Self::F32 => "float",
            Self::F64 => "double",
            Self::Ptr => "void*",
            Self::Bool => "bool",
            Self::Char => "char32_t",
            Self::Usize => "size_t",
            Self::Isize => "ptrdiff_t",
        }
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(ty) => write!(f, "{}", ty.c_name()),
            Self::Reference(inner) => write!(f, "{}&", inner),
            Self::Array(elem, count) => write!(f, "{}[{}]", elem, count),
            Self::Aggregate(info) => {
                write!(f, "struct {} {{ {} }}", info.name(), info.members().iter().join("; "))
            }
            Self::Union(info) => {
                write!(f, "union {} {{ {} }}", info.name(), info.members().iter().join("; "))
            }
            Self::Opaque(info) => write!(f, "class {}", info.name()),
        }
    }
}

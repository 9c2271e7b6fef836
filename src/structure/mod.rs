// Tue Jan 15 2026 - Alex

pub mod analyzer;
pub mod layout;
pub mod member;
pub mod type_info;
pub mod flags;
pub mod builder;
pub mod error;
pub mod cache;
pub mod registry;
pub mod reflect;
pub mod serializer;
pub mod macros;

pub use analyzer::FieldCounter;
pub use layout::{CountSource, FieldLayout};
pub use member::{BitFieldInfo, Member, MemberRole};
pub use type_info::{AggregateInfo, OpaqueInfo, PrimitiveType, TypeInfo};
pub use flags::TypeFlags;
pub use builder::AggregateBuilder;
pub use error::ReflectError;
pub use cache::LayoutCache;
pub use registry::{OverrideEntry, TypeRegistry};
pub use reflect::Reflect;
pub use serializer::SerializableLayout;

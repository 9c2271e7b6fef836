// Tue Jan 15 2026 - Alex

//! Field counting for aggregate types.
//!
//! Types describe their initializer shape through [`Reflect`] (usually via
//! [`aggregate!`]). The count is derived by probing which brace initializer
//! lists the description accepts: a binary search finds the flattened slot
//! count, nested brace groups locate members that absorb several slots, and
//! each such span collapses into one field.

pub mod config;
pub mod probe;
pub mod structure;
pub mod utils;

pub use config::ProbeConfig;
pub use structure::{
    AggregateBuilder, CountSource, FieldCounter, FieldLayout, ReflectError, Reflect, TypeFlags,
    TypeInfo, TypeRegistry,
};

use std::sync::Arc;

/// Number of top-level fields of `T`, or 0 when `T` is not an aggregate.
pub fn field_count_of<T: Reflect + 'static>() -> usize {
    FieldCounter::default().field_count_of::<T>()
}

/// Like [`field_count_of`] with caller-supplied limits, which are validated first.
pub fn field_count_of_with<T: Reflect + 'static>(config: &ProbeConfig) -> Result<usize, ReflectError> {
    Ok(FieldCounter::try_new(*config)?.field_count_of::<T>())
}

pub fn layout_of<T: Reflect + 'static>() -> Arc<FieldLayout> {
    FieldCounter::default().layout_of::<T>()
}

/// Separates "empty aggregate" from "not an aggregate", which both count 0.
pub fn is_aggregate<T: Reflect>() -> bool {
    T::type_info().is_aggregate()
}

/// Registers a literal count for `T` in the global registry.
///
/// Fails once `T` has been counted through the global registry.
pub fn register_field_count<T: Reflect + 'static>(field_count: usize) -> Result<(), ReflectError> {
    TypeRegistry::global().register_override::<T>(field_count)
}

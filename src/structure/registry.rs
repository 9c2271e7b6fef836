// Tue Jan 15 2026 - Alex

use crate::structure::{LayoutCache, Reflect, ReflectError};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::any::{type_name, TypeId};

static GLOBAL: Lazy<TypeRegistry> = Lazy::new(TypeRegistry::new);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideEntry {
    pub type_name: &'static str,
    pub field_count: usize,
}

/// Runtime field count overrides plus the memo of resolved layouts.
pub struct TypeRegistry {
    overrides: RwLock<IndexMap<TypeId, OverrideEntry>>,
    cache: LayoutCache,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self {
            overrides: RwLock::new(IndexMap::new()),
            cache: LayoutCache::new(),
        }
    }

    /// Process-wide registry used by the free functions of this crate.
    pub fn global() -> &'static TypeRegistry {
        &GLOBAL
    }

    /// Registers a literal field count for `T`.
    ///
    /// Must happen before `T` is first counted through this registry.
    pub fn register_override<T: Reflect + 'static>(&self, field_count: usize) -> Result<(), ReflectError> {
        let name = type_name::<T>();
        if T::FIELD_COUNT_OVERRIDE.is_some() {
            return Err(ReflectError::OverrideDeclared {
                type_name: name.to_string(),
            });
        }

        let type_id = TypeId::of::<T>();
        let mut overrides = self.overrides.write();
        if let Some(existing) = overrides.get(&type_id) {
            if existing.field_count == field_count {
                return Ok(());
            }
            return Err(ReflectError::OverrideConflict {
                type_name: name.to_string(),
                existing: existing.field_count,
                requested: field_count,
            });
        }
        if self.cache.contains_type(type_id) {
            return Err(ReflectError::AlreadyResolved {
                type_name: name.to_string(),
            });
        }

        log::debug!("Registered field count override {} for {}", field_count, name);
        overrides.insert(
            type_id,
            OverrideEntry {
                type_name: name,
                field_count,
            },
        );
        Ok(())
    }

    pub fn override_for(&self, type_id: TypeId) -> Option<usize> {
        self.overrides.read().get(&type_id).map(|entry| entry.field_count)
    }

    /// Runtime overrides in registration order.
    pub fn overrides(&self) -> Vec<OverrideEntry> {
        self.overrides.read().values().cloned().collect()
    }

    pub fn cache(&self) -> &LayoutCache {
        &self.cache
    }

    pub fn resolved_count(&self) -> usize {
        self.cache.size()
    }

    /// Drops memoized layouts; overrides stay registered.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

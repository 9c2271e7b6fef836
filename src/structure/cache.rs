// Tue Jan 13 2026 - Alex

use crate::config::ProbeConfig;
use crate::structure::FieldLayout;
use ahash::RandomState;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

type Slot = Arc<OnceCell<Arc<FieldLayout>>>;

/// Append-only memo of resolved layouts; each entry is computed once.
pub struct LayoutCache {
    cache: RwLock<HashMap<(TypeId, ProbeConfig), Slot, RandomState>>,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::default()),
        }
    }

    /// Returns the cached layout, computing it with `init` on first use.
    ///
    /// The map lock is only held to find or insert the entry; `init` runs
    /// under that entry's own once-guard.
    pub fn get_or_compute<F>(&self, type_id: TypeId, config: &ProbeConfig, init: F) -> Arc<FieldLayout>
    where
        F: FnOnce() -> FieldLayout,
    {
        let key = (type_id, *config);
        let existing = self.cache.read().get(&key).cloned();
        let slot = match existing {
            Some(slot) => slot,
            None => self.cache.write().entry(key).or_default().clone(),
        };
        slot.get_or_init(|| Arc::new(init())).clone()
    }

    /// Any configuration has started resolving this type.
    pub fn contains_type(&self, type_id: TypeId) -> bool {
        self.cache.read().keys().any(|(id, _)| *id == type_id)
    }

    pub fn clear(&self) {
        self.cache.write().clear();
    }

    pub fn size(&self) -> usize {
        self.cache.read().values().filter(|slot| slot.get().is_some()).count()
    }
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_computes_once_per_key() {
        let cache = LayoutCache::new();
        let calls = AtomicUsize::new(0);
        let config = ProbeConfig::default();
        for _ in 0..3 {
            let layout = cache.get_or_compute(TypeId::of::<u32>(), &config, || {
                calls.fetch_add(1, Ordering::SeqCst);
                FieldLayout::non_aggregate("u32")
            });
            assert_eq!(layout.field_count(), 0);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(cache.contains_type(TypeId::of::<u32>()));
        assert!(!cache.contains_type(TypeId::of::<u64>()));
        assert_eq!(cache.size(), 1);
        cache.get_or_compute(TypeId::of::<u32>(), &config.with_max_span(3), || FieldLayout::non_aggregate("u32"));
        assert_eq!(cache.size(), 2);
    }

    #[test]
    fn test_concurrent_readers_share_entry() {
        let cache = Arc::new(LayoutCache::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let calls = Arc::clone(&calls);
                std::thread::spawn(move || {
                    cache
                        .get_or_compute(TypeId::of::<i8>(), &ProbeConfig::default(), || {
                            calls.fetch_add(1, Ordering::SeqCst);
                            FieldLayout::non_aggregate("i8")
                        })
                        .field_count()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 0);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}

// Tue Jan 13 2026 - Alex

use crate::config::ProbeConfig;
use crate::probe;
use crate::structure::{CountSource, FieldLayout, Reflect, ReflectError, TypeInfo, TypeRegistry};
use crate::utils::logging::ScopedTimer;
use std::any::{type_name, TypeId};
use std::sync::Arc;

/// Resolves field counts against one configuration and registry.
pub struct FieldCounter<'r> {
    config: ProbeConfig,
    registry: &'r TypeRegistry,
}

impl FieldCounter<'static> {
    /// Counter over the global registry. `config` is assumed valid; use
    /// [`FieldCounter::try_new`] for caller-supplied limits.
    pub fn new(config: ProbeConfig) -> Self {
        Self::with_registry(config, TypeRegistry::global())
    }

    pub fn try_new(config: ProbeConfig) -> Result<Self, ReflectError> {
        Self::try_with_registry(config, TypeRegistry::global())
    }
}

impl Default for FieldCounter<'static> {
    fn default() -> Self {
        Self::new(ProbeConfig::default())
    }
}

impl<'r> FieldCounter<'r> {
    pub fn with_registry(config: ProbeConfig, registry: &'r TypeRegistry) -> Self {
        Self { config, registry }
    }

    /// Like [`FieldCounter::with_registry`], rejecting limits that would
    /// make every count degenerate.
    pub fn try_with_registry(config: ProbeConfig, registry: &'r TypeRegistry) -> Result<Self, ReflectError> {
        config.validate()?;
        Ok(Self::with_registry(config, registry))
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    pub fn field_count_of<T: Reflect + 'static>(&self) -> usize {
        self.layout_of::<T>().field_count()
    }

    /// Cached layout of `T`; computed on the first request.
    pub fn layout_of<T: Reflect + 'static>(&self) -> Arc<FieldLayout> {
        let type_id = TypeId::of::<T>();
        self.registry
            .cache()
            .get_or_compute(type_id, &self.config, || self.resolve::<T>(type_id))
    }

    fn resolve<T: Reflect + 'static>(&self, type_id: TypeId) -> FieldLayout {
        let name = type_name::<T>();
        let layout = if let Some(count) = T::FIELD_COUNT_OVERRIDE {
            FieldLayout::overridden(name, CountSource::DeclaredOverride, count)
        } else if let Some(count) = self.registry.override_for(type_id) {
            FieldLayout::overridden(name, CountSource::RegisteredOverride, count)
        } else {
            self.analyze_named(name, &T::type_info())
        };
        log::debug!("{}", layout);
        layout
    }

    /// Runs the pipeline over a description without caching or overrides.
    pub fn analyze(&self, info: &TypeInfo) -> FieldLayout {
        self.analyze_named(&info.name(), info)
    }

    fn analyze_named(&self, name: &str, info: &TypeInfo) -> FieldLayout {
        if !info.is_aggregate() {
            return FieldLayout::non_aggregate(name);
        }
        let _timer = log::log_enabled!(log::Level::Debug).then(|| ScopedTimer::new(&format!("probe {}", name)));
        let outcome = probe::probe_aggregate(info, &self.config);
        FieldLayout::probed(name, &outcome)
    }
}

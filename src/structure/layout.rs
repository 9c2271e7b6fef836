// Tue Jan 13 2026 - Alex

use crate::probe::{ProbeOutcome, SlotSpan};
use crate::structure::{ReflectError, SerializableLayout};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a field count came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountSource {
    DeclaredOverride,
    RegisteredOverride,
    Probed,
    NonAggregate,
}

/// Partition of a type's initializer list into top-level fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    type_name: String,
    source: CountSource,
    raw_slots: usize,
    spans: Vec<SlotSpan>,
    field_count: usize,
}

impl FieldLayout {
    pub fn probed(type_name: impl Into<String>, outcome: &ProbeOutcome) -> Self {
        Self {
            type_name: type_name.into(),
            source: CountSource::Probed,
            raw_slots: outcome.raw_slots,
            spans: outcome.table.heads(),
            field_count: outcome.field_count,
        }
    }

    pub fn overridden(type_name: impl Into<String>, source: CountSource, field_count: usize) -> Self {
        Self {
            type_name: type_name.into(),
            source,
            raw_slots: 0,
            spans: Vec::new(),
            field_count,
        }
    }

    pub fn non_aggregate(type_name: impl Into<String>) -> Self {
        Self::overridden(type_name, CountSource::NonAggregate, 0)
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn source(&self) -> CountSource {
        self.source
    }

    pub fn raw_slots(&self) -> usize {
        self.raw_slots
    }

    pub fn spans(&self) -> &[SlotSpan] {
        &self.spans
    }

    pub fn field_count(&self) -> usize {
        self.field_count
    }

    /// Fields that absorbed more than one raw slot.
    pub fn nested_fields(&self) -> impl Iterator<Item = &SlotSpan> {
        self.spans.iter().filter(|span| span.len > 1)
    }

    pub fn to_json(&self) -> Result<String, ReflectError> {
        Ok(serde_json::to_string_pretty(&SerializableLayout::from(self))?)
    }
}

impl fmt::Display for FieldLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} fields", self.type_name, self.field_count)?;
        if self.source == CountSource::Probed {
            write!(f, " from {} raw slots", self.raw_slots)?;
        } else {
            write!(f, " ({:?})", self.source)?;
        }
        Ok(())
    }
}

// Tue Jan 13 2026 - Alex

use crate::probe::SlotSpan;
use crate::structure::{CountSource, FieldLayout};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct SerializableLayout {
    pub type_name: String,
    pub source: CountSource,
    pub raw_slots: usize,
    pub field_count: usize,
    pub spans: Vec<SlotSpan>,
}

impl From<&FieldLayout> for SerializableLayout {
    fn from(layout: &FieldLayout) -> Self {
        Self {
            type_name: layout.type_name().to_string(),
            source: layout.source(),
            raw_slots: layout.raw_slots(),
            field_count: layout.field_count(),
            spans: layout.spans().to_vec(),
        }
    }
}

// Tue Jan 15 2026 - Alex

use crate::probe::ArityProber;
use serde::{Deserialize, Serialize};

/// Span length per raw slot: the width at each field head, 0 inside a span.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlotTable {
    spans: Vec<usize>,
}

/// One top-level field and the raw slots it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotSpan {
    pub start: usize,
    pub len: usize,
}

impl SlotTable {
    pub fn new(raw_slots: usize) -> Self {
        Self {
            spans: vec![0; raw_slots],
        }
    }

    pub fn raw_slots(&self) -> usize {
        self.spans.len()
    }

    pub fn span_at(&self, position: usize) -> usize {
        self.spans.get(position).copied().unwrap_or(0)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.spans
    }

    /// Head positions and their spans, left to right.
    pub fn heads(&self) -> Vec<SlotSpan> {
        let mut heads = Vec::new();
        let mut position = 0;
        while position < self.spans.len() {
            let len = self.spans[position].max(1);
            heads.push(SlotSpan { start: position, len });
            position += len;
        }
        heads
    }

    fn record(&mut self, position: usize, len: usize) {
        if let Some(slot) = self.spans.get_mut(position) {
            *slot = len;
        }
    }
}

pub struct SpanResolver<'p, 'a> {
    prober: &'p ArityProber<'a>,
    raw_slots: usize,
    max_span: usize,
}

impl<'p, 'a> SpanResolver<'p, 'a> {
    pub fn new(prober: &'p ArityProber<'a>, raw_slots: usize, max_span: usize) -> Self {
        Self {
            prober,
            raw_slots,
            max_span,
        }
    }

    /// Some width up to `max_span` can be wrapped in its own braces at
    /// `position` without breaking the rest of the list.
    pub fn has_aggregate_at(&self, position: usize) -> bool {
        let limit = self.max_span.min(self.raw_slots.saturating_sub(position));
        (1..=limit).any(|width| self.prober.can_place_at(position, width, self.raw_slots))
    }

    /// Widest group that can be wrapped at `position`.
    pub fn max_size_at(&self, position: usize) -> usize {
        let limit = self.raw_slots.saturating_sub(position);
        (0..=limit)
            .rev()
            .find(|&width| self.prober.can_place_at(position, width, self.raw_slots))
            .unwrap_or(1)
    }

    /// Walks the heads left to right, skipping the interior of each span.
    pub fn populate(&self) -> SlotTable {
        let mut table = SlotTable::new(self.raw_slots);
        let mut position = 0;
        while position < self.raw_slots {
            let span = if self.has_aggregate_at(position) {
                self.max_size_at(position).max(1)
            } else {
                1
            };
            log::trace!(
                "{}: slot {} spans {}",
                self.prober.target().name(),
                position,
                span
            );
            table.record(position, span);
            position += span;
        }
        table
    }
}

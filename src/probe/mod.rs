// Tue Jan 15 2026 - Alex

pub mod any;
pub mod init_list;
pub mod oracle;
pub mod arity;
pub mod search;
pub mod span;
pub mod reducer;

pub use any::{Conversion, Probe};
pub use init_list::{InitItem, InitList};
pub use arity::ArityProber;
pub use search::binary_search_field_count;
pub use span::{SlotSpan, SlotTable, SpanResolver};
pub use reducer::reduce_field_count;

use crate::config::ProbeConfig;
use crate::structure::TypeInfo;

/// Result of running the probing pipeline over one aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub raw_slots: usize,
    pub table: SlotTable,
    pub field_count: usize,
}

/// Raw slot search, span resolution and reduction for an aggregate.
pub fn probe_aggregate(info: &TypeInfo, config: &ProbeConfig) -> ProbeOutcome {
    let prober = ArityProber::new(info);
    let raw_slots = binary_search_field_count(&prober, 0, config.search_ceiling);
    if raw_slots >= config.search_ceiling {
        log::warn!(
            "{} reached the search ceiling of {} raw slots; the count may be truncated",
            info.name(),
            config.search_ceiling
        );
    }
    if raw_slots == 0 {
        return ProbeOutcome {
            raw_slots,
            table: SlotTable::new(0),
            field_count: 0,
        };
    }

    let table = SpanResolver::new(&prober, raw_slots, config.max_span).populate();
    let field_count = reduce_field_count(&table);
    ProbeOutcome {
        raw_slots,
        table,
        field_count,
    }
}

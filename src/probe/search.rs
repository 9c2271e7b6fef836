// Tue Jan 15 2026 - Alex

use crate::probe::ArityProber;

/// Largest `n` in `[low, high]` accepted by the prober, bisecting on the
/// assumption that acceptance is monotonic in `n`.
///
/// The upper bound is a ceiling: a type with more raw slots reports `high`.
pub fn binary_search_field_count(prober: &ArityProber<'_>, low: usize, high: usize) -> usize {
    let (mut low, mut high) = (low, high);
    while low < high {
        let mid = low + (high - low + 1) / 2;
        if prober.can_initialize_with_n(mid) {
            low = mid;
        } else {
            high = mid - 1;
        }
    }
    log::trace!("raw slot search for {} settled at {}", prober.target().name(), low);
    low
}

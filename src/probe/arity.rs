// Tue Jan 15 2026 - Alex

use crate::probe::{oracle, InitList};
use crate::structure::TypeInfo;

/// Checks initializer lists of a fixed shape against one type.
pub struct ArityProber<'a> {
    target: &'a TypeInfo,
}

impl<'a> ArityProber<'a> {
    pub fn new(target: &'a TypeInfo) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &TypeInfo {
        self.target
    }

    /// `T{ Any×n }` is well-formed.
    pub fn can_initialize_with_n(&self, n: usize) -> bool {
        let list = InitList::probes(n);
        let ok = oracle::list_initializes(self.target, list.items());
        log::trace!("{}{} -> {}", self.target.name(), list, ok);
        ok
    }

    /// `T{ Any×prefix, { Any×group }, Any×suffix }` is well-formed.
    pub fn can_initialize_with_three_parts(&self, prefix: usize, group: usize, suffix: usize) -> bool {
        let list = InitList::three_parts(prefix, group, suffix);
        let ok = oracle::list_initializes(self.target, list.items());
        log::trace!("{}{} -> {}", self.target.name(), list, ok);
        ok
    }

    /// A nested group of `width` slots fits at `position` with the remaining
    /// `total - position - width` slots trailing it.
    pub fn can_place_at(&self, position: usize, width: usize, total: usize) -> bool {
        match total.checked_sub(position + width) {
            Some(suffix) => self.can_initialize_with_three_parts(position, width, suffix),
            None => false,
        }
    }
}

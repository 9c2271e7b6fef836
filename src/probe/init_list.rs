// Tue Jan 15 2026 - Alex

use crate::probe::Probe;
use itertools::Itertools;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitItem {
    Probe(Probe),
    Braced(Vec<InitItem>),
}

/// A brace-enclosed initializer list made of probes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InitList {
    items: Vec<InitItem>,
}

impl InitList {
    /// `{ Any, Any, ..., Any }` with `n` probes.
    pub fn probes(n: usize) -> Self {
        Self {
            items: (0..n).map(|i| InitItem::Probe(Probe::new(i))).collect(),
        }
    }

    /// `{ Any×prefix, { Any×group }, Any×suffix }`.
    pub fn three_parts(prefix: usize, group: usize, suffix: usize) -> Self {
        let mut items: Vec<InitItem> = (0..prefix).map(|i| InitItem::Probe(Probe::new(i))).collect();
        let nested = (prefix..prefix + group)
            .map(|i| InitItem::Probe(Probe::new(i)))
            .collect();
        items.push(InitItem::Braced(nested));
        let start = prefix + group;
        items.extend((start..start + suffix).map(|i| InitItem::Probe(Probe::new(i))));
        Self { items }
    }

    pub fn items(&self) -> &[InitItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for InitItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Probe(_) => write!(f, "Any"),
            Self::Braced(items) => write!(f, "{{{}}}", items.iter().join(", ")),
        }
    }
}

impl fmt::Display for InitList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.items.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_parts_shape() {
        let list = InitList::three_parts(1, 2, 1);
        assert_eq!(list.len(), 3);
        assert_eq!(list.to_string(), "{Any, {Any, Any}, Any}");
    }

    #[test]
    fn test_empty_group() {
        assert_eq!(InitList::three_parts(0, 0, 0).to_string(), "{{}}");
        assert!(InitList::probes(0).is_empty());
    }
}

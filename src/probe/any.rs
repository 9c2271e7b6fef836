// Tue Jan 15 2026 - Alex

use crate::structure::TypeInfo;
use std::fmt;

/// A placeholder initializer that stands in for a value of any slot type.
///
/// The index only keeps probes positionally distinct; it never influences
/// which conversion is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Probe {
    index: usize,
}

/// How a probe becomes a value of the slot it is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    ByRef,
    ByMove,
    Fallback,
}

impl Probe {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Selects the conversion into `target`, in priority order.
    ///
    /// References always bind through the fallback. Types that are neither
    /// copyable, movable nor constructible from `{}` reject the probe.
    pub fn convert_to(&self, target: &TypeInfo) -> Option<Conversion> {
        if target.is_reference() {
            return Some(Conversion::Fallback);
        }
        let flags = target.flags();
        if flags.is_copyable() {
            Some(Conversion::ByRef)
        } else if flags.is_movable() {
            Some(Conversion::ByMove)
        } else if flags.is_default_constructible() {
            Some(Conversion::Fallback)
        } else {
            None
        }
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Any({})", self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{PrimitiveType, TypeFlags};

    #[test]
    fn test_conversion_priority() {
        let probe = Probe::new(0);
        let int = TypeInfo::Scalar(PrimitiveType::I32);
        assert_eq!(probe.convert_to(&int), Some(Conversion::ByRef));
        assert_eq!(
            probe.convert_to(&TypeInfo::opaque("Handle", TypeFlags::MOVABLE)),
            Some(Conversion::ByMove)
        );
        assert_eq!(
            probe.convert_to(&TypeInfo::opaque("Pinned", TypeFlags::DEFAULT_CONSTRUCTIBLE)),
            Some(Conversion::Fallback)
        );
        assert_eq!(probe.convert_to(&TypeInfo::reference(int)), Some(Conversion::Fallback));
        assert_eq!(probe.convert_to(&TypeInfo::opaque("Sealed", TypeFlags::empty())), None);
    }

    #[test]
    fn test_index_is_structural_only() {
        let int = TypeInfo::Scalar(PrimitiveType::U8);
        assert_eq!(Probe::new(3).convert_to(&int), Probe::new(40).convert_to(&int));
        assert_eq!(Probe::new(3).to_string(), "Any(3)");
    }
}

// Tue Jan 13 2026 - Alex

use bitflags::bitflags;

bitflags! {
    /// Construction capabilities of a described type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u32 {
        const COPYABLE = 1 << 0;
        const MOVABLE = 1 << 1;
        const DEFAULT_CONSTRUCTIBLE = 1 << 2;
        const AGGREGATE = 1 << 3;
    }
}

impl TypeFlags {
    /// Flags of a plain value: copyable, movable and value-initializable.
    pub const VALUE: TypeFlags = TypeFlags::from_bits_retain(
        TypeFlags::COPYABLE.bits() | TypeFlags::MOVABLE.bits() | TypeFlags::DEFAULT_CONSTRUCTIBLE.bits(),
    );

    pub fn is_copyable(self) -> bool {
        self.contains(Self::COPYABLE)
    }

    pub fn is_movable(self) -> bool {
        self.contains(Self::MOVABLE)
    }

    pub fn is_default_constructible(self) -> bool {
        self.contains(Self::DEFAULT_CONSTRUCTIBLE)
    }

    pub fn is_aggregate(self) -> bool {
        self.contains(Self::AGGREGATE)
    }
}

impl Default for TypeFlags {
    fn default() -> Self {
        Self::empty()
    }
}

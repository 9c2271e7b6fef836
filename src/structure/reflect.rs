// Tue Jan 15 2026 - Alex

use crate::structure::{Member, PrimitiveType, TypeFlags, TypeInfo};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

/// Describes the initializer shape of a type.
///
/// Implemented by [`aggregate!`](crate::aggregate) for declared structs and by
/// [`opaque_type!`](crate::opaque_type) for types with their own constructors.
pub trait Reflect {
    /// Literal field count that bypasses probing when set.
    const FIELD_COUNT_OVERRIDE: Option<usize> = None;

    fn type_info() -> TypeInfo;
}

macro_rules! reflect_scalar {
    ($($ty:ty => $prim:ident),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn type_info() -> TypeInfo {
                    TypeInfo::Scalar(PrimitiveType::$prim)
                }
            }
        )*
    };
}

reflect_scalar! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    f32 => F32,
    f64 => F64,
    bool => Bool,
    char => Char,
    usize => Usize,
    isize => Isize,
}

impl<T: ?Sized> Reflect for *const T {
    fn type_info() -> TypeInfo {
        TypeInfo::Scalar(PrimitiveType::Ptr)
    }
}

impl<T: ?Sized> Reflect for *mut T {
    fn type_info() -> TypeInfo {
        TypeInfo::Scalar(PrimitiveType::Ptr)
    }
}

impl<'a, T: Reflect + ?Sized> Reflect for &'a T {
    fn type_info() -> TypeInfo {
        TypeInfo::reference(T::type_info())
    }
}

impl<'a, T: Reflect + ?Sized> Reflect for &'a mut T {
    fn type_info() -> TypeInfo {
        TypeInfo::reference(T::type_info())
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn type_info() -> TypeInfo {
        TypeInfo::array(T::type_info(), N)
    }
}

impl Reflect for () {
    fn type_info() -> TypeInfo {
        TypeInfo::aggregate("()", Vec::new())
    }
}

macro_rules! reflect_tuple {
    ($(($($name:ident $idx:tt),+)),* $(,)?) => {
        $(
            impl<$($name: Reflect),+> Reflect for ($($name,)+) {
                fn type_info() -> TypeInfo {
                    TypeInfo::aggregate(
                        std::any::type_name::<Self>(),
                        vec![$(Member::field(stringify!($idx), $name::type_info())),+],
                    )
                }
            }
        )*
    };
}

reflect_tuple! {
    (A 0),
    (A 0, B 1),
    (A 0, B 1, C 2),
    (A 0, B 1, C 2, D 3),
    (A 0, B 1, C 2, D 3, E 4),
    (A 0, B 1, C 2, D 3, E 4, F 5),
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6),
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7),
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8),
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9),
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10),
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11),
}

macro_rules! reflect_opaque_generic {
    ($($ty:ident<$($param:ident),+> => $flags:expr),* $(,)?) => {
        $(
            impl<$($param),+> Reflect for $ty<$($param),+> {
                fn type_info() -> TypeInfo {
                    TypeInfo::opaque(std::any::type_name::<Self>(), $flags)
                }
            }
        )*
    };
}

reflect_opaque_generic! {
    Vec<T> => TypeFlags::VALUE,
    Option<T> => TypeFlags::VALUE,
    Arc<T> => TypeFlags::VALUE,
    Rc<T> => TypeFlags::VALUE,
    Box<T> => TypeFlags::MOVABLE | TypeFlags::DEFAULT_CONSTRUCTIBLE,
    HashMap<K, V> => TypeFlags::VALUE,
    BTreeMap<K, V> => TypeFlags::VALUE,
}

impl Reflect for str {
    fn type_info() -> TypeInfo {
        TypeInfo::opaque("str", TypeFlags::empty())
    }
}

impl Reflect for String {
    fn type_info() -> TypeInfo {
        TypeInfo::opaque("String", TypeFlags::VALUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_members() {
        let info = <(i32, (u8, u8), f32)>::type_info();
        assert_eq!(info.element_count(), 3);
        assert!(info.element(1).is_some_and(TypeInfo::is_aggregate));
    }

    #[test]
    fn test_box_is_move_only() {
        let flags = <Box<u32>>::type_info().flags();
        assert!(flags.is_movable());
        assert!(flags.is_default_constructible());
        assert!(!flags.is_copyable());
        assert!(!flags.is_aggregate());
    }

    #[test]
    fn test_shared_handles_value_initialize() {
        assert!(<std::sync::Arc<u8>>::type_info().flags().is_default_constructible());
        assert!(<Rc<u8>>::type_info().flags().is_default_constructible());
    }

    #[test]
    fn test_reference_and_array() {
        assert!(<&'static u8>::type_info().is_reference());
        assert_eq!(<[i32; 3]>::type_info(), TypeInfo::array(TypeInfo::Scalar(PrimitiveType::I32), 3));
    }
}

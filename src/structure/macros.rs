// Tue Jan 15 2026 - Alex

/// Declares one or more structs (or unions) together with their
/// [`Reflect`](crate::Reflect) description.
///
/// Base subobjects are listed in brackets after the name and are emitted as
/// leading fields. A leading `@field_count(N)` declares a literal count that
/// bypasses probing.
///
/// ```
/// use aggregate_fields::{aggregate, field_count_of};
///
/// aggregate! {
///     #[derive(Debug, Default)]
///     pub struct Inner { pub x: i32, pub y: f64 }
///
///     pub struct Outer { pub p: i32, pub inner: Inner, pub q: f32 }
/// }
///
/// assert_eq!(field_count_of::<Outer>(), 3);
/// ```
#[macro_export]
macro_rules! aggregate {
    () => {};
    (
        $(@field_count($count:expr))?
        $(#[$meta:meta])*
        $vis:vis struct $name:ident $(<$($lt:lifetime),+>)?
        $(: [$($bvis:vis $base:ident : $bty:ty),+ $(,)?])?
        {
            $($(#[$fmeta:meta])* $fvis:vis $field:ident : $fty:ty),* $(,)?
        }
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        $vis struct $name $(<$($lt),+>)? {
            $($($bvis $base: $bty,)+)?
            $($(#[$fmeta])* $fvis $field: $fty,)*
        }

        impl $(<$($lt),+>)? $crate::Reflect for $name $(<$($lt),+>)? {
            $(const FIELD_COUNT_OVERRIDE: ::core::option::Option<usize> = ::core::option::Option::Some($count);)?

            fn type_info() -> $crate::structure::TypeInfo {
                $crate::structure::TypeInfo::aggregate(
                    stringify!($name),
                    vec![
                        $($($crate::structure::Member::base(
                            stringify!($base),
                            <$bty as $crate::Reflect>::type_info(),
                        ),)+)?
                        $($crate::structure::Member::field(
                            stringify!($field),
                            <$fty as $crate::Reflect>::type_info(),
                        ),)*
                    ],
                )
            }
        }

        $crate::aggregate! { $($rest)* }
    };
    (
        $(@field_count($count:expr))?
        $(#[$meta:meta])*
        $vis:vis union $name:ident {
            $($(#[$fmeta:meta])* $fvis:vis $field:ident : $fty:ty),+ $(,)?
        }
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        $vis union $name {
            $($(#[$fmeta])* $fvis $field: $fty,)+
        }

        impl $crate::Reflect for $name {
            $(const FIELD_COUNT_OVERRIDE: ::core::option::Option<usize> = ::core::option::Option::Some($count);)?

            fn type_info() -> $crate::structure::TypeInfo {
                $crate::structure::TypeInfo::union(
                    stringify!($name),
                    vec![
                        $($crate::structure::Member::field(
                            stringify!($field),
                            <$fty as $crate::Reflect>::type_info(),
                        ),)+
                    ],
                )
            }
        }

        $crate::aggregate! { $($rest)* }
    };
}

/// Marks types with their own constructors as non-aggregates.
///
/// ```
/// use aggregate_fields::{opaque_type, field_count_of, TypeFlags};
///
/// pub struct Handle { fd: i32 }
/// impl Handle { pub fn new() -> Self { Self { fd: -1 } } }
///
/// opaque_type!(Handle => TypeFlags::MOVABLE | TypeFlags::DEFAULT_CONSTRUCTIBLE);
///
/// assert_eq!(field_count_of::<Handle>(), 0);
/// ```
#[macro_export]
macro_rules! opaque_type {
    ($($ty:ty => $flags:expr),+ $(,)?) => {
        $(
            impl $crate::Reflect for $ty {
                fn type_info() -> $crate::structure::TypeInfo {
                    $crate::structure::TypeInfo::opaque(stringify!($ty), $flags)
                }
            }
        )+
    };
}

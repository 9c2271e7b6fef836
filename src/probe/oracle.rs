// Tue Jan 15 2026 - Alex

//! Well-formedness of brace initialization over a described type.
//!
//! Elements are filled in declaration order. A probe that meets a nested
//! aggregate, array or union descends into it (brace elision); a braced
//! group always initializes exactly one element; elements left without an
//! initializer must be value-initializable.

use crate::probe::InitItem;
use crate::structure::TypeInfo;

/// True iff `ty{ items... }` is a well-formed initialization.
pub fn list_initializes(ty: &TypeInfo, items: &[InitItem]) -> bool {
    match ty {
        TypeInfo::Scalar(_) => match items {
            [] | [InitItem::Probe(_)] => true,
            [InitItem::Braced(inner)] => list_initializes(ty, inner),
            _ => false,
        },
        TypeInfo::Reference(_) => matches!(items, [InitItem::Probe(_)]),
        TypeInfo::Opaque(_) => match items {
            [] => ty.flags().is_default_constructible(),
            [InitItem::Probe(probe)] => probe.convert_to(ty).is_some(),
            [InitItem::Braced(inner)] => list_initializes(ty, inner),
            _ => false,
        },
        TypeInfo::Aggregate(_) | TypeInfo::Union(_) | TypeInfo::Array(_, _) => {
            let mut cursor = 0;
            fill_elements(ty, items, &mut cursor) && cursor == items.len()
        }
    }
}

fn fill_elements(ty: &TypeInfo, items: &[InitItem], cursor: &mut usize) -> bool {
    let count = ty.element_count();
    for index in 0..count {
        if *cursor == items.len() {
            return rest_defaultable(ty, index);
        }
        let Some(element) = ty.element(index) else {
            return false;
        };
        if !fill(element, items, cursor) {
            return false;
        }
    }
    true
}

fn fill(element: &TypeInfo, items: &[InitItem], cursor: &mut usize) -> bool {
    match &items[*cursor] {
        InitItem::Braced(inner) => {
            *cursor += 1;
            list_initializes(element, inner)
        }
        InitItem::Probe(probe) => {
            if is_elidable(element) {
                fill_elements(element, items, cursor)
            } else {
                *cursor += 1;
                probe.convert_to(element).is_some()
            }
        }
    }
}

fn is_elidable(ty: &TypeInfo) -> bool {
    ty.is_aggregate() && ty.element_count() > 0
}

fn rest_defaultable(ty: &TypeInfo, from: usize) -> bool {
    match ty {
        TypeInfo::Array(elem, len) => from >= *len || elem.flags().is_default_constructible(),
        _ => (from..ty.element_count())
            .filter_map(|i| ty.element(i))
            .all(|elem| elem.flags().is_default_constructible()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::InitList;
    use crate::structure::{AggregateBuilder, PrimitiveType, TypeFlags};

    fn inner() -> TypeInfo {
        AggregateBuilder::new("Inner")
            .scalar("x", PrimitiveType::I32)
            .scalar("y", PrimitiveType::F64)
            .build()
    }

    fn outer() -> TypeInfo {
        AggregateBuilder::new("Outer")
            .scalar("p", PrimitiveType::I32)
            .field("inner", inner())
            .scalar("q", PrimitiveType::F32)
            .build()
    }

    fn accepts(ty: &TypeInfo, list: InitList) -> bool {
        list_initializes(ty, list.items())
    }

    #[test]
    fn test_brace_elision_flattens_nested() {
        let ty = outer();
        for n in 0..=4 {
            assert!(accepts(&ty, InitList::probes(n)), "{n} probes");
        }
        assert!(!accepts(&ty, InitList::probes(5)));
    }

    #[test]
    fn test_braced_group_takes_one_element() {
        let ty = outer();
        assert!(accepts(&ty, InitList::three_parts(1, 2, 1)));
        assert!(accepts(&ty, InitList::three_parts(1, 0, 1)));
        assert!(!accepts(&ty, InitList::three_parts(1, 1, 2)));
        assert!(!accepts(&ty, InitList::three_parts(1, 3, 0)));
        assert!(!accepts(&ty, InitList::three_parts(0, 2, 2)));
    }

    #[test]
    fn test_scalar_accepts_single_braced_probe() {
        let ty = TypeInfo::Scalar(PrimitiveType::U8);
        assert!(accepts(&ty, InitList::probes(0)));
        assert!(accepts(&ty, InitList::probes(1)));
        assert!(accepts(&ty, InitList::three_parts(0, 1, 0)));
        assert!(!accepts(&ty, InitList::probes(2)));
    }

    #[test]
    fn test_reference_requires_initializer() {
        let ty = AggregateBuilder::new("Ref")
            .field("r", TypeInfo::reference(TypeInfo::Scalar(PrimitiveType::I32)))
            .scalar("n", PrimitiveType::I32)
            .build();
        assert!(!accepts(&ty, InitList::probes(0)));
        assert!(accepts(&ty, InitList::probes(1)));
        assert!(accepts(&ty, InitList::probes(2)));
        assert!(accepts(&ty, InitList::three_parts(0, 1, 1)));
        assert!(!accepts(&ty, InitList::three_parts(0, 0, 2)));
    }

    #[test]
    fn test_empty_member_takes_a_slot() {
        let ty = AggregateBuilder::new("Gap")
            .scalar("a", PrimitiveType::I32)
            .field("e", TypeInfo::aggregate("Empty", Vec::new()))
            .scalar("b", PrimitiveType::I32)
            .build();
        assert!(accepts(&ty, InitList::probes(3)));
        assert!(!accepts(&ty, InitList::probes(4)));
    }

    #[test]
    fn test_union_initializes_first_member() {
        let ty = AggregateBuilder::new("U")
            .field("pair", inner())
            .scalar("raw", PrimitiveType::U64)
            .build_union();
        assert!(accepts(&ty, InitList::probes(2)));
        assert!(!accepts(&ty, InitList::probes(3)));
        assert!(accepts(&ty, InitList::three_parts(0, 2, 0)));
    }

    #[test]
    fn test_opaque_rejects_multiple_probes() {
        let ty = TypeInfo::opaque("Widget", TypeFlags::VALUE);
        assert!(accepts(&ty, InitList::probes(0)));
        assert!(accepts(&ty, InitList::probes(1)));
        assert!(!accepts(&ty, InitList::probes(2)));
    }

    #[test]
    fn test_large_array_runs_out_quickly() {
        let ty = TypeInfo::array(TypeInfo::Scalar(PrimitiveType::U8), 1 << 20);
        assert!(accepts(&ty, InitList::probes(3)));
    }
}

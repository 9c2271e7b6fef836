// Tue Jan 15 2026 - Alex

use crate::probe::SlotTable;

/// Collapses every span of the table into one logical field.
pub fn reduce_field_count(table: &SlotTable) -> usize {
    let raw = table.raw_slots();
    let mut field_count = raw;
    let mut position = 0;
    while position < raw {
        let span = table.span_at(position).max(1);
        field_count -= span - 1;
        position += span;
    }
    field_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{ArityProber, SpanResolver};
    use crate::structure::{AggregateBuilder, PrimitiveType};

    #[test]
    fn test_empty_table() {
        assert_eq!(reduce_field_count(&SlotTable::new(0)), 0);
    }

    #[test]
    fn test_array_collapses() {
        let ty = AggregateBuilder::new("Arr")
            .field(
                "arr",
                crate::structure::TypeInfo::array(
                    crate::structure::TypeInfo::Scalar(PrimitiveType::I32),
                    3,
                ),
            )
            .scalar("f", PrimitiveType::F32)
            .build();
        let prober = ArityProber::new(&ty);
        let table = SpanResolver::new(&prober, 4, 10).populate();
        assert_eq!(reduce_field_count(&table), 2);
    }
}

//! Identifier assignment for new records.

use crate::entities::Identified;
use std::collections::HashSet;

/// Returns the next free numeric id for a collection.
///
/// This is one more than the largest id that parses as a number, or `"1"`
/// when there is none. When the largest id is already `u64::MAX` the
/// smallest unused number from 1 is taken instead. Non-numeric ids are
/// ignored and cannot collide with the result.
#[must_use]
pub fn next_id<T: Identified>(records: &[T]) -> String {
    let taken: HashSet<u64> = records
        .iter()
        .filter_map(|r| r.id().parse::<u64>().ok())
        .collect();
    let next = match taken.iter().max() {
        None => 1,
        Some(max) => max
            .checked_add(1)
            .unwrap_or_else(|| (1..).find(|n| !taken.contains(n)).unwrap_or_default()),
    };
    next.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Supplier;
    use crate::test_utils::supplier_named;

    #[test]
    fn test_next_id_empty() {
        let none: Vec<Supplier> = Vec::new();
        assert_eq!(next_id(&none), "1");
    }

    #[test]
    fn test_next_id_follows_max() {
        let suppliers = vec![
            supplier_named("3", "A"),
            supplier_named("11", "B"),
            supplier_named("legacy-7", "C"),
        ];
        assert_eq!(next_id(&suppliers), "12");
    }

    #[test]
    fn test_next_id_never_collides() {
        let suppliers = vec![supplier_named("abc", "A"), supplier_named("1", "B")];
        let id = next_id(&suppliers);
        assert!(suppliers.iter().all(|s| s.id != id));
    }

    #[test]
    fn test_next_id_after_largest_number() {
        let suppliers = vec![
            supplier_named("18446744073709551615", "A"),
            supplier_named("1", "B"),
            supplier_named("3", "C"),
        ];
        let id = next_id(&suppliers);
        assert_eq!(id, "2");
        assert!(suppliers.iter().all(|s| s.id != id));
    }
}

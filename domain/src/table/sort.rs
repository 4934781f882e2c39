//! Stable, type-aware column sort.

use serde::{Deserialize, Serialize};

use super::value::{FieldValue, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Reorder `indices` (positions into `records`) by `field`.
///
/// `None` leaves the order untouched. Ties keep their relative order in both
/// directions because descending flips the comparison, not the output.
pub fn sort_indices<T: Record>(
    records: &[T],
    indices: &mut Vec<usize>,
    field: Option<&str>,
    direction: SortDirection,
) {
    let Some(field) = field else {
        return;
    };

    let mut keyed: Vec<(usize, FieldValue)> = indices
        .iter()
        .map(|&index| {
            let value = records[index].field(field).unwrap_or(FieldValue::Empty);
            (index, value)
        })
        .collect();

    keyed.sort_by(|(_, a), (_, b)| {
        let ordering = a.compare(b);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    *indices = keyed.into_iter().map(|(index, _)| index).collect();
}

/// Borrowing sort over a whole collection; the input is never mutated
pub fn sort<'a, T: Record>(
    records: &'a [T],
    field: Option<&str>,
    direction: SortDirection,
) -> Vec<&'a T> {
    let mut indices: Vec<usize> = (0..records.len()).collect();
    sort_indices(records, &mut indices, field, direction);
    indices.into_iter().map(|index| &records[index]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::test_support::{fruits, names, Fruit};

    #[test]
    fn test_no_field_keeps_order() {
        let records = fruits(&["Banana", "Apple", "Cherry"]);
        let sorted = sort(&records, None, SortDirection::Descending);
        assert_eq!(names(&sorted), vec!["Banana", "Apple", "Cherry"]);
    }

    #[test]
    fn test_sorts_strings_both_ways() {
        let records = fruits(&["banana", "Apple", "cherry"]);
        assert_eq!(
            names(&sort(&records, Some("name"), SortDirection::Ascending)),
            vec!["Apple", "banana", "cherry"]
        );
        assert_eq!(
            names(&sort(&records, Some("name"), SortDirection::Descending)),
            vec!["cherry", "banana", "Apple"]
        );
    }

    #[test]
    fn test_sorts_numbers() {
        let records = vec![Fruit::new(10, "a"), Fruit::new(2, "b"), Fruit::new(33, "c")];
        assert_eq!(
            names(&sort(&records, Some("id"), SortDirection::Ascending)),
            vec!["b", "a", "c"]
        );
    }

    #[test]
    fn test_stable_for_equal_keys_in_both_directions() {
        let mut records = Vec::new();
        for (id, name) in [(1, "Kiwi"), (2, "Apple"), (3, "Kiwi"), (4, "Apple"), (5, "Kiwi")] {
            records.push(Fruit::new(id, name));
        }

        let ids = |sorted: Vec<&Fruit>| sorted.iter().map(|f| f.id).collect::<Vec<_>>();
        assert_eq!(
            ids(sort(&records, Some("name"), SortDirection::Ascending)),
            vec![2, 4, 1, 3, 5]
        );
        assert_eq!(
            ids(sort(&records, Some("name"), SortDirection::Descending)),
            vec![1, 3, 5, 2, 4]
        );
    }

    #[test]
    fn test_descending_is_exact_reverse_without_duplicates() {
        let records = fruits(&["Mango", "Apple", "Papaya", "Cherry", "Banana"]);
        let mut ascending = names(&sort(&records, Some("name"), SortDirection::Ascending));
        let descending = names(&sort(&records, Some("name"), SortDirection::Descending));
        ascending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn test_unknown_field_keeps_order() {
        let records = fruits(&["Banana", "Apple"]);
        let sorted = sort(&records, Some("weight"), SortDirection::Ascending);
        assert_eq!(names(&sorted), vec!["Banana", "Apple"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let records = fruits(&["Banana", "Apple"]);
        let _ = sort(&records, Some("name"), SortDirection::Ascending);
        assert_eq!(records[0].name, "Banana");
    }

    #[test]
    fn test_toggled() {
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggled().toggled(), SortDirection::Descending);
    }
}

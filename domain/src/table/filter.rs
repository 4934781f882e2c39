//! Free-text row filter.

use super::value::Record;

/// Whether any field of `record` contains `query`
pub fn record_matches<T: Record>(record: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query_lower = query.to_lowercase();
    matches_prepared(record, query, &query_lower)
}

fn matches_prepared<T: Record>(record: &T, query: &str, query_lower: &str) -> bool {
    record
        .fields()
        .iter()
        .any(|value| value.contains(query, query_lower))
}

/// Positions (into `records`) of every record matching `query`, in input order.
/// An empty query keeps everything.
pub fn filter_indices<T: Record>(records: &[T], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..records.len()).collect();
    }
    let query_lower = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_prepared(*record, query, &query_lower))
        .map(|(index, _)| index)
        .collect()
}

/// Borrowing form of [`filter_indices`]
pub fn filter<'a, T: Record>(records: &'a [T], query: &str) -> Vec<&'a T> {
    filter_indices(records, query)
        .into_iter()
        .map(|index| &records[index])
        .collect()
}

//! Dynamic field values and the `Record` trait that exposes them.
//!
//! Every entity shown in a list screen is viewed by the list core as a flat
//! mapping from field name to [`FieldValue`]. Filtering works on the textual
//! form of each value; sorting works on the values themselves.

use std::cmp::Ordering;
use std::fmt;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// A single field of a record, as seen by the list core
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Number(f64),
    Bool(bool),
    List(Vec<FieldValue>),
    /// Absent optional field
    Empty,
}

/// A row that can flow through filter, sort and paginate
pub trait Record {
    /// Every field name of the record, in declaration order
    const FIELDS: &'static [&'static str];

    /// Value of the key field, used only for row identity
    fn key(&self) -> String;

    /// Look up a field by name; `None` for names the record doesn't have
    fn field(&self, name: &str) -> Option<FieldValue>;

    fn fields(&self) -> Vec<FieldValue> {
        Self::FIELDS
            .iter()
            .filter_map(|name| self.field(name))
            .collect()
    }
}

impl FieldValue {
    /// Whether this value contains `query`.
    ///
    /// Text is matched case-insensitively against `query_lower`; every other
    /// kind is converted to its canonical string and matched case-sensitively.
    pub fn contains(&self, query: &str, query_lower: &str) -> bool {
        match self {
            FieldValue::Text(text) => text.to_lowercase().contains(query_lower),
            FieldValue::Empty => false,
            other => other.to_string().contains(query),
        }
    }

    /// Ordering used by the column sorter.
    ///
    /// Two strings collate; numbers, booleans compare naturally; any other
    /// pairing is treated as equal.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => collate(a, b),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            (FieldValue::Integer(_) | FieldValue::Number(_), FieldValue::Integer(_) | FieldValue::Number(_)) => {
                match (self.as_f64(), other.as_f64()) {
                    (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                    _ => Ordering::Equal,
                }
            }
            _ => Ordering::Equal,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(value) => Some(*value as f64),
            FieldValue::Number(value) => Some(*value),
            _ => None,
        }
    }
}

/// Locale-style string ordering in three tiers: base letters compared
/// case- and accent-insensitively, then accents (unaccented first), then case
/// (lowercase first).
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accent_marks(a).cmp(&accent_marks(b)))
        .then_with(|| case_order(a, b))
}

fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Combining marks attached to each base letter, in order
fn accent_marks(text: &str) -> Vec<Vec<char>> {
    let mut marks: Vec<Vec<char>> = Vec::new();
    for c in text.nfd() {
        if is_combining_mark(c) {
            if let Some(last) = marks.last_mut() {
                last.push(c);
            }
        } else {
            marks.push(Vec::new());
        }
    }
    marks
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (ca, cb) in a.nfd().zip(b.nfd()) {
        if ca != cb {
            return match (ca.is_lowercase(), cb.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => ca.cmp(&cb),
            };
        }
    }
    a.len().cmp(&b.len())
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{}", text),
            FieldValue::Integer(value) => write!(f, "{}", value),
            FieldValue::Number(value) => write!(f, "{}", value),
            FieldValue::Bool(value) => write!(f, "{}", value),
            FieldValue::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            FieldValue::Empty => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        FieldValue::Text(value.clone())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl<V: Into<FieldValue>> From<Option<V>> for FieldValue {
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Empty)
    }
}

impl<V: Into<FieldValue>> From<Vec<V>> for FieldValue {
    fn from(values: Vec<V>) -> Self {
        FieldValue::List(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_text_forms() {
        assert_eq!(FieldValue::Integer(42).to_string(), "42");
        assert_eq!(FieldValue::Number(2.0).to_string(), "2");
        assert_eq!(FieldValue::Number(2.5).to_string(), "2.5");
        assert_eq!(FieldValue::Bool(true).to_string(), "true");
        assert_eq!(
            FieldValue::from(vec!["kale", "Mint"]).to_string(),
            "kale,Mint"
        );
        assert_eq!(FieldValue::Empty.to_string(), "");
    }

    #[test]
    fn test_text_matches_case_insensitively() {
        let value = FieldValue::from("Banana");
        assert!(value.contains("AN", "an"));
        assert!(value.contains("ban", "ban"));
        assert!(!value.contains("x", "x"));
    }

    #[test]
    fn test_non_text_matches_case_sensitively() {
        assert!(FieldValue::Integer(1250).contains("25", "25"));
        assert!(FieldValue::Bool(false).contains("fal", "fal"));
        assert!(!FieldValue::Bool(false).contains("FAL", "fal"));

        let tags = FieldValue::from(vec!["Vegan", "keto"]);
        assert!(tags.contains("Vegan", "vegan"));
        assert!(!tags.contains("VEGAN", "vegan"));
    }

    #[test]
    fn test_empty_never_matches() {
        assert!(!FieldValue::Empty.contains("a", "a"));
    }

    #[test]
    fn test_compare_mixed_numbers() {
        assert_eq!(
            FieldValue::Integer(3).compare(&FieldValue::Number(2.5)),
            Ordering::Greater
        );
        assert_eq!(
            FieldValue::Number(f64::NAN).compare(&FieldValue::Number(1.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_compare_incomparable_is_equal() {
        assert_eq!(
            FieldValue::from("10").compare(&FieldValue::Integer(5)),
            Ordering::Equal
        );
        assert_eq!(
            FieldValue::Empty.compare(&FieldValue::from("a")),
            Ordering::Equal
        );
        assert_eq!(
            FieldValue::Bool(false).compare(&FieldValue::Bool(true)),
            Ordering::Less
        );
    }

    #[test]
    fn test_collate_ignores_case_first() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Cherry", "banana"), Ordering::Greater);
        assert_eq!(collate("apple", "Apple"), Ordering::Less);
        assert_eq!(collate("Apple", "Apple"), Ordering::Equal);
        assert_eq!(collate("app", "apple"), Ordering::Less);
    }

    #[test]
    fn test_collate_accented_letters_sort_with_their_base() {
        assert_eq!(collate("Éclair", "Fig"), Ordering::Less);
        assert_eq!(collate("Date", "Éclair"), Ordering::Less);
        assert_eq!(collate("açaí", "acerola"), Ordering::Less);
        assert_eq!(collate("purée", "purslane"), Ordering::Less);
        assert_eq!(collate("crème", "crema"), Ordering::Greater);
    }

    #[test]
    fn test_collate_unaccented_before_accented_then_case() {
        assert_eq!(collate("resume", "résumé"), Ordering::Less);
        assert_eq!(collate("résumé", "Résumé"), Ordering::Less);
        assert_eq!(collate("Açaí", "açaí"), Ordering::Greater);
        assert_eq!(collate("açaí", "açaí"), Ordering::Equal);
    }
}

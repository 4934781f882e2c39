//! List core shared by every entity screen: row filter, column sorter,
//! pager and the controller tying them together.

pub mod column;
pub mod controller;
pub mod filter;
pub mod pager;
pub mod records;
pub mod sort;
pub mod value;

pub use column::{Accessor, Cell, Column};
pub use controller::{ListController, ListState, ListView, DEFAULT_PAGE_SIZE};
pub use filter::{filter, filter_indices, record_matches};
pub use pager::{clamp_page, page_count, paginate, Page};
pub use sort::{sort, sort_indices, SortDirection};
pub use value::{collate, FieldValue, Record};

#[cfg(test)]
pub(crate) mod test_support {
    use super::{FieldValue, Record};

    #[derive(Debug, Clone, PartialEq)]
    pub struct Fruit {
        pub id: i64,
        pub name: String,
        pub ripe: bool,
    }

    impl Fruit {
        pub fn new(id: i64, name: &str) -> Self {
            Self {
                id,
                name: name.to_string(),
                ripe: false,
            }
        }
    }

    impl Record for Fruit {
        const FIELDS: &'static [&'static str] = &["id", "name", "ripe"];

        fn key(&self) -> String {
            self.id.to_string()
        }

        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "id" => Some(self.id.into()),
                "name" => Some(FieldValue::from(&self.name)),
                "ripe" => Some(self.ripe.into()),
                _ => None,
            }
        }
    }

    /// Fruits with ids 1.. in the given order
    pub fn fruits(names: &[&str]) -> Vec<Fruit> {
        names
            .iter()
            .enumerate()
            .map(|(index, name)| Fruit::new(index as i64 + 1, name))
            .collect()
    }

    pub fn names(rows: &[&Fruit]) -> Vec<String> {
        rows.iter().map(|fruit| fruit.name.clone()).collect()
    }
}

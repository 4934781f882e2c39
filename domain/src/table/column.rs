use std::rc::Rc;

use super::value::Record;

/// How a column pulls its displayable value out of a record
pub enum Accessor<T, V = String> {
    /// Read a named field directly
    Field(&'static str),
    /// Derive the cell from the whole record
    Derived {
        render: Rc<dyn Fn(&T) -> V>,
        /// Field to sort on when the header is clicked
        sort_field: Option<&'static str>,
    },
}

/// What a column produced for one record
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<V> {
    Text(String),
    Rendered(V),
}

/// Static description of one table column
pub struct Column<T, V = String> {
    pub header: String,
    pub accessor: Accessor<T, V>,
    pub sortable: bool,
}

impl<T: Record, V> Column<T, V> {
    pub fn field(header: impl Into<String>, name: &'static str) -> Self {
        Self {
            header: header.into(),
            accessor: Accessor::Field(name),
            sortable: false,
        }
    }

    pub fn derived(header: impl Into<String>, render: impl Fn(&T) -> V + 'static) -> Self {
        Self {
            header: header.into(),
            accessor: Accessor::Derived {
                render: Rc::new(render),
                sort_field: None,
            },
            sortable: false,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Make a derived column sortable by the given record field
    pub fn sort_by(mut self, field: &'static str) -> Self {
        if let Accessor::Derived { sort_field, .. } = &mut self.accessor {
            *sort_field = Some(field);
        }
        self.sortable = true;
        self
    }

    /// The field a header click sorts on, if the column is sortable at all
    pub fn sort_field(&self) -> Option<&'static str> {
        if !self.sortable {
            return None;
        }
        match &self.accessor {
            Accessor::Field(name) => Some(*name),
            Accessor::Derived { sort_field, .. } => *sort_field,
        }
    }

    pub fn cell(&self, record: &T) -> Cell<V> {
        match &self.accessor {
            Accessor::Field(name) => Cell::Text(
                record
                    .field(name)
                    .map(|value| value.to_string())
                    .unwrap_or_default(),
            ),
            Accessor::Derived { render, .. } => Cell::Rendered(render.as_ref()(record)),
        }
    }
}

impl<T, V> Clone for Accessor<T, V> {
    fn clone(&self) -> Self {
        match self {
            Accessor::Field(name) => Accessor::Field(*name),
            Accessor::Derived { render, sort_field } => Accessor::Derived {
                render: Rc::clone(render),
                sort_field: *sort_field,
            },
        }
    }
}

impl<T, V> PartialEq for Accessor<T, V> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Accessor::Field(a), Accessor::Field(b)) => a == b,
            (
                Accessor::Derived { render: a, sort_field: sa },
                Accessor::Derived { render: b, sort_field: sb },
            ) => Rc::ptr_eq(a, b) && sa == sb,
            _ => false,
        }
    }
}

impl<T, V> Clone for Column<T, V> {
    fn clone(&self) -> Self {
        Self {
            header: self.header.clone(),
            accessor: self.accessor.clone(),
            sortable: self.sortable,
        }
    }
}

impl<T, V> PartialEq for Column<T, V> {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header
            && self.sortable == other.sortable
            && self.accessor == other.accessor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::test_support::Fruit;

    #[test]
    fn test_field_column_reads_text() {
        let column: Column<Fruit> = Column::field("Name", "name").sortable();
        let fruit = Fruit::new(1, "Banana");

        assert_eq!(column.cell(&fruit), Cell::Text("Banana".to_string()));
        assert_eq!(column.sort_field(), Some("name"));
    }

    #[test]
    fn test_unsortable_column_has_no_sort_field() {
        let column: Column<Fruit> = Column::field("Name", "name");
        assert_eq!(column.sort_field(), None);
    }

    #[test]
    fn test_derived_column_renders_and_sorts_by_explicit_field() {
        let column: Column<Fruit> =
            Column::derived("Label", |fruit: &Fruit| format!("#{} {}", fruit.id, fruit.name));
        assert_eq!(column.sort_field(), None);

        let column = column.sort_by("id");
        let fruit = Fruit::new(7, "Kiwi");
        assert_eq!(column.cell(&fruit), Cell::Rendered("#7 Kiwi".to_string()));
        assert_eq!(column.sort_field(), Some("id"));
    }

    #[test]
    fn test_derived_sortable_without_field_is_not_clickable() {
        let column: Column<Fruit> = Column::derived("Label", |fruit: &Fruit| fruit.name.clone()).sortable();
        assert_eq!(column.sort_field(), None);
    }

    #[test]
    fn test_unknown_field_renders_blank() {
        let column: Column<Fruit> = Column::field("Color", "color");
        assert_eq!(column.cell(&Fruit::new(1, "Fig")), Cell::Text(String::new()));
    }

    #[test]
    fn test_clone_is_equal() {
        let column: Column<Fruit> = Column::derived("Label", |fruit: &Fruit| fruit.name.clone());
        assert!(column.clone() == column);
    }
}

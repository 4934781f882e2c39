use domain::table::{filter, paginate, sort, FieldValue, ListController, Record, SortDirection};

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: i64,
    name: String,
}

impl Item {
    fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

impl Record for Item {
    const FIELDS: &'static [&'static str] = &["id", "name"];

    fn key(&self) -> String {
        self.id.to_string()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Integer(self.id)),
            "name" => Some(FieldValue::Text(self.name.clone())),
            _ => None,
        }
    }
}

fn fruit_basket() -> Vec<Item> {
    vec![
        Item::new(1, "Banana"),
        Item::new(2, "Apple"),
        Item::new(3, "Cherry"),
    ]
}

fn numbered(count: i64) -> Vec<Item> {
    (1..=count).map(|id| Item::new(id, &format!("Item {:02}", id))).collect()
}

fn visible_names(controller: &ListController<Item>) -> Vec<String> {
    controller
        .view()
        .rows
        .iter()
        .map(|item| item.name.clone())
        .collect()
}

#[test]
fn test_query_narrows_to_matching_rows() {
    let mut controller = ListController::with_page_size(fruit_basket(), 10);
    controller.set_query("an");

    let view = controller.view();
    assert_eq!(view.rows, vec![&Item::new(1, "Banana")]);
    assert_eq!(view.total_matching, 1);
}

#[test]
fn test_toggle_sort_twice_flips_direction() {
    let mut controller = ListController::with_page_size(fruit_basket(), 10);

    controller.toggle_sort("name");
    assert_eq!(visible_names(&controller), vec!["Apple", "Banana", "Cherry"]);

    controller.toggle_sort("name");
    assert_eq!(visible_names(&controller), vec!["Cherry", "Banana", "Apple"]);
    assert_eq!(controller.state().sort_direction, SortDirection::Descending);

    controller.toggle_sort("name");
    assert_eq!(controller.state().sort_direction, SortDirection::Ascending);
}

#[test]
fn test_paging_through_twenty_five_records() {
    let mut controller = ListController::with_page_size(numbered(25), 10);
    assert_eq!(controller.view().page_count, 3);

    controller.set_page(2);
    let view = controller.view();
    assert_eq!(view.rows.len(), 10);
    assert_eq!(view.effective_page, 2);

    controller.set_page(5);
    let view = controller.view();
    assert_eq!(view.effective_page, 3);
    assert_eq!(view.rows.len(), 5);
}

#[test]
fn test_empty_collection() {
    let mut controller: ListController<Item> = ListController::with_page_size(Vec::new(), 10);
    controller.set_query("anything");
    controller.toggle_sort("name");
    controller.set_page(4);

    let view = controller.view();
    assert!(view.rows.is_empty());
    assert_eq!(view.page_count, 0);
    assert_eq!(view.effective_page, 1);
    assert_eq!(view.total_matching, 0);
}

#[test]
fn test_query_resets_page() {
    let mut controller = ListController::with_page_size(numbered(40), 10);
    controller.set_page(3);
    assert_eq!(controller.view().effective_page, 3);

    controller.set_query("x");
    assert_eq!(controller.view().effective_page, 1);
    assert_eq!(controller.state().current_page, 1);
}

#[test]
fn test_filter_properties() {
    let records = numbered(30);
    for query in ["", "1", "Item 2", "item", "zz"] {
        let once: Vec<Item> = filter(&records, query).into_iter().cloned().collect();
        let twice: Vec<Item> = filter(&once, query).into_iter().cloned().collect();
        assert_eq!(once, twice);
        assert!(once.len() <= records.len());
    }
    let identity: Vec<Item> = filter(&records, "").into_iter().cloned().collect();
    assert_eq!(identity, records);
}

#[test]
fn test_sort_stability_and_inversion() {
    let records = vec![
        Item::new(1, "Kiwi"),
        Item::new(2, "apple"),
        Item::new(3, "Kiwi"),
        Item::new(4, "Apple"),
        Item::new(5, "kiwi"),
    ];
    let ids: Vec<i64> = sort(&records, Some("name"), SortDirection::Ascending)
        .iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(ids, vec![2, 4, 5, 1, 3]);

    let distinct = numbered(9);
    let ascending: Vec<i64> = sort(&distinct, Some("id"), SortDirection::Ascending)
        .iter()
        .map(|item| item.id)
        .collect();
    let mut descending: Vec<i64> = sort(&distinct, Some("id"), SortDirection::Descending)
        .iter()
        .map(|item| item.id)
        .collect();
    descending.reverse();
    assert_eq!(ascending, descending);
}

#[test]
fn test_pagination_coverage_and_clamp() {
    let records = numbered(37);
    let first = paginate(&records, 8, 1);

    let mut rebuilt = Vec::new();
    for page in 1..=first.page_count {
        rebuilt.extend(paginate(&records, 8, page as i64).items.iter().cloned());
    }
    assert_eq!(rebuilt, records);

    assert_eq!(
        paginate(&records, 8, 9999).effective_page,
        paginate(&records, 8, first.page_count as i64).effective_page
    );

    let empty: Vec<Item> = Vec::new();
    assert_eq!(paginate(&empty, 8, 9999).effective_page, 1);
}

//! Searchable, sortable, paged table over any `Record`.
//!
//! The component owns a `ListController` and feeds it the latest collection
//! whenever the parent hands over a new one.

use std::rc::Rc;

use domain::table::{Cell, Column, ListController, Record, SortDirection};
use web_sys::HtmlInputElement;
use yew::prelude::*;

const PAGE_WINDOW: usize = 5;

#[derive(Properties)]
pub struct DataTableProps<T: Record + Clone + PartialEq + 'static> {
    pub data: Rc<Vec<T>>,
    pub columns: Rc<Vec<Column<T, Html>>>,
    #[prop_or(domain::table::DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
    #[prop_or_default]
    pub search_placeholder: Option<AttrValue>,
    /// Per-row action buttons, rendered in a trailing column
    #[prop_or_default]
    pub row_actions: Option<Callback<T, Html>>,
    #[prop_or_default]
    pub empty_message: Option<AttrValue>,
}

impl<T: Record + Clone + PartialEq + 'static> PartialEq for DataTableProps<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
            && self.columns == other.columns
            && self.page_size == other.page_size
            && self.search_placeholder == other.search_placeholder
            && self.row_actions == other.row_actions
            && self.empty_message == other.empty_message
    }
}

struct TableState<T> {
    source: Rc<Vec<T>>,
    controller: ListController<T>,
}

#[function_component(DataTable)]
pub fn data_table<T>(props: &DataTableProps<T>) -> Html
where
    T: Record + Clone + PartialEq + 'static,
{
    let state = {
        let data = props.data.clone();
        let page_size = props.page_size;
        use_mut_ref(move || TableState {
            controller: ListController::with_page_size(data.as_ref().clone(), page_size),
            source: data,
        })
    };
    let trigger = use_force_update();

    {
        let mut state = state.borrow_mut();
        if !Rc::ptr_eq(&state.source, &props.data) {
            state.source = props.data.clone();
            let records = props.data.as_ref().clone();
            state.controller.set_records(records);
        }
        if state.controller.page_size() != props.page_size {
            state.controller.set_page_size(props.page_size);
        }
    }

    let on_search = {
        let state = state.clone();
        let trigger = trigger.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.borrow_mut().controller.set_query(input.value());
            trigger.force_update();
        })
    };

    let sort_by = {
        let state = state.clone();
        let trigger = trigger.clone();
        move |field: &'static str| {
            let state = state.clone();
            let trigger = trigger.clone();
            Callback::from(move |_: MouseEvent| {
                state.borrow_mut().controller.toggle_sort(field);
                trigger.force_update();
            })
        }
    };

    let go_to = {
        let state = state.clone();
        let trigger = trigger.clone();
        move |page: usize| {
            let state = state.clone();
            let trigger = trigger.clone();
            Callback::from(move |_: MouseEvent| {
                state.borrow_mut().controller.set_page(page as i64);
                trigger.force_update();
            })
        }
    };

    let state_ref = state.borrow();
    let controller = &state_ref.controller;
    let list_state = controller.state();
    let view = controller.view();
    let (from, to, of) = view.showing_range();
    let has_actions = props.row_actions.is_some();
    let colspan = (props.columns.len() + usize::from(has_actions)).to_string();

    let header_cell = |column: &Column<T, Html>| -> Html {
        match column.sort_field() {
            Some(field) => {
                let indicator = if list_state.sort_field.as_deref() == Some(field) {
                    match list_state.sort_direction {
                        SortDirection::Ascending => " ▲",
                        SortDirection::Descending => " ▼",
                    }
                } else {
                    ""
                };
                html! {
                    <th class="sortable" onclick={sort_by(field)}>
                        {&column.header}{indicator}
                    </th>
                }
            }
            None => html! { <th>{&column.header}</th> },
        }
    };

    let body = if view.rows.is_empty() {
        let message = props
            .empty_message
            .clone()
            .unwrap_or_else(|| AttrValue::from("No records found"));
        html! {
            <tr><td class="empty" colspan={colspan}>{message}</td></tr>
        }
    } else {
        view.rows
            .iter()
            .map(|record| {
                html! {
                    <tr key={record.key()}>
                        {for props.columns.iter().map(|column| match column.cell(record) {
                            Cell::Text(text) => html! { <td>{text}</td> },
                            Cell::Rendered(content) => html! { <td>{content}</td> },
                        })}
                        {if let Some(actions) = &props.row_actions {
                            html! { <td class="actions">{actions.emit((*record).clone())}</td> }
                        } else {
                            html! {}
                        }}
                    </tr>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class="data-table-wrapper">
            <div class="table-toolbar">
                <input
                    type="search"
                    class="table-search"
                    placeholder={props.search_placeholder.clone().unwrap_or_else(|| AttrValue::from("Search..."))}
                    value={list_state.query.clone()}
                    oninput={on_search}
                />
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        {for props.columns.iter().map(header_cell)}
                        {if has_actions { html! { <th class="actions">{"Actions"}</th> } } else { html! {} }}
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
            {if view.page_count > 1 {
                html! {
                    <div class="pager">
                        <span class="pager-summary">
                            {format!("Showing {} to {} of {} results", from, to, of)}
                        </span>
                        <div class="pager-buttons">
                            <button
                                disabled={!view.has_previous()}
                                onclick={go_to(view.effective_page.saturating_sub(1))}
                            >{"Previous"}</button>
                            {for view.page_window(PAGE_WINDOW).into_iter().map(|page| html! {
                                <button
                                    class={classes!((page == view.effective_page).then_some("current"))}
                                    onclick={go_to(page)}
                                >{page}</button>
                            })}
                            <button
                                disabled={!view.has_next()}
                                onclick={go_to(view.effective_page + 1)}
                            >{"Next"}</button>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

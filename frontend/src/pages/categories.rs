use std::rc::Rc;

use domain::forms::{delete_warning, CategoryForm};
use domain::table::Column;
use shared::Category;
use yew::prelude::*;

use super::{emit_on_click, error_banner, format_date, spawn_mutation, status_badge};
use crate::components::{bind_field, ConfirmDialog, DataTable, Modal, Spinner, TextAreaField, TextField};
use crate::hooks::{use_app, use_entity_list};
use crate::services::api::Method;

#[function_component(CategoriesPage)]
pub fn categories_page() -> Html {
    let app = use_app();
    let categories = use_entity_list::<Category>("categories");
    let form = use_state(CategoryForm::new);
    let editing = use_state(|| None::<String>);
    let modal_open = use_state(|| false);
    let pending_delete = use_state(|| None::<Category>);
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    let columns: Rc<Vec<Column<Category, Html>>> = use_memo((), |_| {
        vec![
            Column::field("Name", "name").sortable(),
            Column::field("Description", "description"),
            Column::field("Smoothies", "smoothieCount").sortable(),
            Column::derived("Status", |category: &Category| {
                status_badge(category.is_active.unwrap_or(true), "Active", "Inactive")
            })
            .sort_by("isActive"),
            Column::derived("Created", |category: &Category| {
                html! { <span>{category.created_at.as_deref().map(format_date).unwrap_or_default()}</span> }
            })
            .sort_by("createdAt"),
        ]
    });

    let open_create = {
        let form = form.clone();
        let editing = editing.clone();
        let modal_open = modal_open.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(CategoryForm::new());
            editing.set(None);
            error.set(None);
            modal_open.set(true);
        })
    };

    let open_edit = {
        let form = form.clone();
        let editing = editing.clone();
        let modal_open = modal_open.clone();
        let error = error.clone();
        Callback::from(move |category: Category| {
            form.set(CategoryForm::from_category(&category));
            editing.set(Some(category.id));
            error.set(None);
            modal_open.set(true);
        })
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };

    let after_save = {
        let modal_open = modal_open.clone();
        let refresh = categories.refresh.clone();
        Callback::from(move |_: ()| {
            modal_open.set(false);
            refresh.emit(());
        })
    };

    let on_submit = {
        let app = app.clone();
        let form = form.clone();
        let editing = editing.clone();
        let busy = busy.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = match form.validate() {
                Ok(payload) => payload,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            let method = Method::for_save(editing.is_some());
            let path = match editing.as_ref() {
                Some(id) => format!("categories/{}", id),
                None => "categories".to_string(),
            };
            let api = app.api();
            spawn_mutation(&app, &busy, &error, after_save.clone(), async move {
                api.send_json(method, &path, &payload).await.map(|_| ())
            });
        })
    };

    let request_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |category: Category| pending_delete.set(Some(category)))
    };

    let cancel_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_: ()| pending_delete.set(None))
    };

    let confirm_delete = {
        let app = app.clone();
        let pending_delete = pending_delete.clone();
        let busy = busy.clone();
        let error = error.clone();
        let refresh = categories.refresh.clone();
        Callback::from(move |_: ()| {
            let Some(category) = (*pending_delete).clone() else {
                return;
            };
            let done = {
                let pending_delete = pending_delete.clone();
                let refresh = refresh.clone();
                Callback::from(move |_: ()| {
                    pending_delete.set(None);
                    refresh.emit(());
                })
            };
            let api = app.api();
            spawn_mutation(&app, &busy, &error, done, async move {
                api.delete(&format!("categories/{}", category.id)).await
            });
        })
    };

    let row_actions = Callback::from(move |category: Category| {
        html! {
            <div class="row-actions">
                <button class="btn-link" onclick={emit_on_click(&open_edit, category.clone())}>{"Edit"}</button>
                <button class="btn-link danger" onclick={emit_on_click(&request_delete, category)}>{"Delete"}</button>
            </div>
        }
    });

    let is_editing = editing.is_some();

    html! {
        <div class="page categories-page">
            <div class="page-header">
                <h2>{"Categories"}</h2>
                <button class="btn-primary" onclick={open_create}>{"Add Category"}</button>
            </div>
            {error_banner(&categories.error)}
            {if *modal_open { html! {} } else { error_banner(&error) }}
            {if categories.loading {
                html! { <Spinner /> }
            } else {
                html! {
                    <DataTable<Category>
                        data={categories.items.clone()}
                        columns={columns}
                        page_size={app.config.page_size}
                        search_placeholder="Search categories..."
                        row_actions={row_actions}
                    />
                }
            }}

            <Modal
                is_open={*modal_open}
                title={if is_editing { "Edit Category" } else { "Add New Category" }}
                on_close={close_modal.clone()}
            >
                <form onsubmit={on_submit}>
                    {error_banner(&error)}
                    <TextField label="Category Name" value={form.name.clone()} required=true
                        on_input={bind_field(&form, |f, v| f.name = v)} />
                    <TextAreaField label="Description" value={form.description.clone()} rows={3}
                        on_input={bind_field(&form, |f, v| f.description = v)} />
                    <TextField label="Image URL" value={form.image.clone()}
                        on_input={bind_field(&form, |f, v| f.image = v)} />
                    {if let Some(count) = &form.smoothie_count {
                        html! {
                            <TextField label="Number of Smoothies" input_type="number" value={count.clone()}
                                on_input={bind_field(&form, |f, v| f.smoothie_count = Some(v))} />
                        }
                    } else {
                        html! {}
                    }}
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" onclick={emit_on_click(&close_modal, ())}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn-primary" disabled={*busy}>
                            {if is_editing { "Update" } else { "Create" }}
                        </button>
                    </div>
                </form>
            </Modal>

            <ConfirmDialog
                is_open={pending_delete.is_some()}
                title="Delete Category"
                message={pending_delete
                    .as_ref()
                    .map(|category| format!("Are you sure you want to delete \"{}\"?", category.name))
                    .unwrap_or_default()}
                warning={pending_delete.as_ref().and_then(delete_warning)}
                busy={*busy}
                on_confirm={confirm_delete}
                on_cancel={cancel_delete}
            />
        </div>
    }
}

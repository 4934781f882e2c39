use std::rc::Rc;

use domain::forms::IngredientForm;
use domain::table::Column;
use shared::Ingredient;
use yew::prelude::*;

use super::{emit_on_click, error_banner, format_date, spawn_mutation};
use crate::components::{bind_field, ConfirmDialog, DataTable, Modal, SelectField, Spinner, TextField};
use crate::hooks::{use_app, use_entity_list};
use crate::services::api::Method;

const UNITS: [&str; 6] = ["kg", "g", "l", "ml", "pcs", "bunch"];

fn unit_options() -> Vec<(AttrValue, AttrValue)> {
    UNITS
        .into_iter()
        .map(|unit| (AttrValue::from(unit), AttrValue::from(unit)))
        .collect()
}

#[function_component(IngredientsPage)]
pub fn ingredients_page() -> Html {
    let app = use_app();
    let ingredients = use_entity_list::<Ingredient>("ingredients");
    let form = use_state(IngredientForm::new);
    let editing = use_state(|| None::<String>);
    let modal_open = use_state(|| false);
    let pending_delete = use_state(|| None::<Ingredient>);
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    let threshold = app.config.low_stock_threshold;
    let columns: Rc<Vec<Column<Ingredient, Html>>> = use_memo(threshold.to_bits(), move |_| {
        vec![
            Column::field("Name", "name").sortable(),
            Column::field("Category", "category").sortable(),
            Column::derived("Stock", move |ingredient: &Ingredient| {
                let low = ingredient.stock < threshold;
                html! {
                    <span class={classes!("stock", low.then_some("low"))}>
                        {format!("{} {}", ingredient.stock, ingredient.unit)}
                        {if low { html! { <span class="badge off">{"Low"}</span> } } else { html! {} }}
                    </span>
                }
            })
            .sort_by("stock"),
            Column::derived("Price", |ingredient: &Ingredient| {
                html! { <span>{format!("${:.2}", ingredient.price)}</span> }
            })
            .sort_by("price"),
            Column::field("Supplier", "supplier").sortable(),
            Column::derived("Last Restock", |ingredient: &Ingredient| {
                html! { <span>{format_date(&ingredient.last_restock)}</span> }
            })
            .sort_by("lastRestock"),
        ]
    });

    let open_create = {
        let form = form.clone();
        let editing = editing.clone();
        let modal_open = modal_open.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(IngredientForm::new());
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
        Callback::from(move |ingredient: Ingredient| {
            form.set(IngredientForm::from_ingredient(&ingredient));
            editing.set(Some(ingredient.id));
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
        let refresh = ingredients.refresh.clone();
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
                Some(id) => format!("ingredients/{}", id),
                None => "ingredients".to_string(),
            };
            let api = app.api();
            spawn_mutation(&app, &busy, &error, after_save.clone(), async move {
                api.send_json(method, &path, &payload).await.map(|_| ())
            });
        })
    };

    let request_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |ingredient: Ingredient| pending_delete.set(Some(ingredient)))
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
        let refresh = ingredients.refresh.clone();
        Callback::from(move |_: ()| {
            let Some(ingredient) = (*pending_delete).clone() else {
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
                api.delete(&format!("ingredients/{}", ingredient.id)).await
            });
        })
    };

    let row_actions = Callback::from(move |ingredient: Ingredient| {
        html! {
            <div class="row-actions">
                <button class="btn-link" onclick={emit_on_click(&open_edit, ingredient.clone())}>{"Edit"}</button>
                <button class="btn-link danger" onclick={emit_on_click(&request_delete, ingredient)}>{"Delete"}</button>
            </div>
        }
    });

    let is_editing = editing.is_some();

    html! {
        <div class="page ingredients-page">
            <div class="page-header">
                <h2>{"Ingredients"}</h2>
                <button class="btn-primary" onclick={open_create}>{"Add Ingredient"}</button>
            </div>
            {error_banner(&ingredients.error)}
            {if *modal_open { html! {} } else { error_banner(&error) }}
            {if ingredients.loading {
                html! { <Spinner /> }
            } else {
                html! {
                    <DataTable<Ingredient>
                        data={ingredients.items.clone()}
                        columns={columns}
                        page_size={app.config.page_size}
                        search_placeholder="Search ingredients..."
                        row_actions={row_actions}
                    />
                }
            }}

            <Modal
                is_open={*modal_open}
                title={if is_editing { "Edit Ingredient" } else { "Add New Ingredient" }}
                on_close={close_modal.clone()}
            >
                <form onsubmit={on_submit}>
                    {error_banner(&error)}
                    <TextField label="Name" value={form.name.clone()} required=true
                        on_input={bind_field(&form, |f, v| f.name = v)} />
                    <TextField label="Category" value={form.category.clone()}
                        on_input={bind_field(&form, |f, v| f.category = v)} />
                    <div class="field-row">
                        <TextField label="Stock" input_type="number" value={form.stock.clone()}
                            on_input={bind_field(&form, |f, v| f.stock = v)} />
                        <SelectField label="Unit" value={form.unit.clone()} options={unit_options()}
                            on_change={bind_field(&form, |f, v| f.unit = v)} />
                    </div>
                    <TextField label="Price" input_type="number" value={form.price.clone()}
                        on_input={bind_field(&form, |f, v| f.price = v)} />
                    <TextField label="Supplier" value={form.supplier.clone()}
                        on_input={bind_field(&form, |f, v| f.supplier = v)} />
                    <TextField label="Last Restock" input_type="date" value={form.last_restock.clone()}
                        on_input={bind_field(&form, |f, v| f.last_restock = v)} />
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
                title="Delete Ingredient"
                message={pending_delete
                    .as_ref()
                    .map(|ingredient| format!("Are you sure you want to delete {}?", ingredient.name))
                    .unwrap_or_default()}
                busy={*busy}
                on_confirm={confirm_delete}
                on_cancel={cancel_delete}
            />
        </div>
    }
}

//! Product catalog screen.
//!
//! Products are saved as multipart forms because the gallery can carry newly
//! picked image files next to the paths already stored on the server.

use std::rc::Rc;

use domain::catalog::{self, PRODUCT_PAGES};
use domain::forms::{ImageCandidate, ImageSlot, ProductForm, RecipeField};
use domain::table::Column;
use shared::{Category, Product};
use web_sys::{File, HtmlInputElement, Url};
use yew::prelude::*;

use super::{emit_on_click, error_banner, spawn_mutation, status_badge};
use crate::components::{
    bind_field, CheckboxField, ConfirmDialog, DataTable, Modal, SelectField, Spinner, TextAreaField,
    TextField,
};
use crate::hooks::{use_app, use_entity_list};
use crate::services::api::Method;

type Form = ProductForm<File>;

fn candidates_from(input: &HtmlInputElement) -> Vec<ImageCandidate<File>> {
    let Some(files) = input.files() else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|index| files.get(index))
        .map(|file| ImageCandidate {
            name: file.name(),
            mime_type: file.type_(),
            size: file.size() as u64,
            preview: Url::create_object_url_with_blob(&file).unwrap_or_default(),
            file,
        })
        .collect()
}

fn release_preview(slot: &ImageSlot<File>) {
    if let ImageSlot::Pending { preview, .. } = slot {
        if Url::revoke_object_url(preview).is_err() {
            log::warn!("Could not release image preview {}", preview);
        }
    }
}

fn slot_src(server_base: &str, slot: &ImageSlot<File>) -> String {
    match slot {
        ImageSlot::Existing(path) => catalog::image_url(server_base, path),
        ImageSlot::Pending { preview, .. } => preview.clone(),
    }
}

#[function_component(ProductsPage)]
pub fn products_page() -> Html {
    let app = use_app();
    let products = use_entity_list::<Product>("products");
    let categories = use_entity_list::<Category>("categories");
    let (max_images, max_bytes) = (app.config.max_product_images, app.config.max_image_bytes);
    let blank_form = move || Form::new().with_limits(max_images, max_bytes);

    let form = use_state(blank_form);
    let editing = use_state(|| None::<String>);
    let modal_open = use_state(|| false);
    let pending_delete = use_state(|| None::<Product>);
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);
    let server_base = app.config.server_base_url().to_string();

    let columns: Rc<Vec<Column<Product, Html>>> = use_memo(
        (server_base.clone(), categories.items.clone()),
        |(server_base, categories)| {
            let server_base = server_base.clone();
            let categories = categories.clone();
            vec![
                Column::derived("Image", move |product: &Product| {
                    let path = product.images.first().map(String::as_str).unwrap_or_default();
                    html! {
                        <img class="thumb" src={catalog::image_url(&server_base, path)} alt={product.name.clone()} />
                    }
                }),
                Column::field("Name", "name").sortable(),
                Column::derived("Category", move |product: &Product| {
                    html! { <span>{catalog::category_name(product, &categories)}</span> }
                })
                .sort_by("categoryName"),
                Column::derived("Price", |product: &Product| {
                    html! { <span>{format!("${:.2}", product.price)}</span> }
                })
                .sort_by("price"),
                Column::field("Stock", "stock").sortable(),
                Column::derived("Pages", |product: &Product| {
                    html! { <span class="pages">{catalog::page_names(&product.selected_pages)}</span> }
                }),
                Column::derived("Status", |product: &Product| {
                    status_badge(product.is_active, "Active", "Inactive")
                })
                .sort_by("isActive"),
            ]
        },
    );

    let open_create = {
        let form = form.clone();
        let editing = editing.clone();
        let modal_open = modal_open.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(blank_form());
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
        Callback::from(move |product: Product| {
            form.set(Form::from_product(&product).with_limits(max_images, max_bytes));
            editing.set(Some(product.id));
            error.set(None);
            modal_open.set(true);
        })
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        let form = form.clone();
        Callback::from(move |_: ()| {
            form.images().iter().for_each(release_preview);
            modal_open.set(false);
        })
    };

    let after_save = {
        let close_modal = close_modal.clone();
        let refresh = products.refresh.clone();
        Callback::from(move |_: ()| {
            close_modal.emit(());
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
                Some(id) => format!("products/{}", id),
                None => "products".to_string(),
            };
            log::info!("Saving product with {} form parts", payload.len());
            let api = app.api();
            spawn_mutation(&app, &busy, &error, after_save.clone(), async move {
                api.send_multipart(method, &path, payload).await.map(|_| ())
            });
        })
    };

    let on_files = {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let candidates = candidates_from(&input);
            let previews: Vec<String> = candidates.iter().map(|c| c.preview.clone()).collect();

            let mut next = (*form).clone();
            let report = next.attach_images(candidates);
            for preview in previews {
                if !next.images().iter().any(|slot| slot.source() == preview) {
                    let _ = Url::revoke_object_url(&preview);
                }
            }
            log::debug!("Attached {} product images", report.accepted);
            error.set(report.rejection.map(|rejection| rejection.to_string()));
            input.set_value("");
            form.set(next);
        })
    };

    let remove_image = {
        let form = form.clone();
        Callback::from(move |index: usize| {
            let mut next = (*form).clone();
            if let Some(slot) = next.remove_image(index) {
                release_preview(&slot);
            }
            form.set(next);
        })
    };

    let recipe_input = {
        let form = form.clone();
        move |index: usize, field: RecipeField| {
            let form = form.clone();
            Callback::from(move |value: String| {
                let mut next = (*form).clone();
                next.update_recipe(index, field, value);
                form.set(next);
            })
        }
    };

    let add_recipe = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.add_recipe();
            form.set(next);
        })
    };

    let remove_recipe = {
        let form = form.clone();
        Callback::from(move |index: usize| {
            let mut next = (*form).clone();
            next.remove_recipe(index);
            form.set(next);
        })
    };

    let toggle_page = {
        let form = form.clone();
        Callback::from(move |url: &'static str| {
            let mut next = (*form).clone();
            next.toggle_page(url);
            form.set(next);
        })
    };

    let request_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |product: Product| pending_delete.set(Some(product)))
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
        let refresh = products.refresh.clone();
        Callback::from(move |_: ()| {
            let Some(product) = (*pending_delete).clone() else {
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
                api.delete(&format!("products/{}", product.id)).await
            });
        })
    };

    let row_actions = Callback::from(move |product: Product| {
        html! {
            <div class="row-actions">
                <button class="btn-link" onclick={emit_on_click(&open_edit, product.clone())}>{"Edit"}</button>
                <button class="btn-link danger" onclick={emit_on_click(&request_delete, product)}>{"Delete"}</button>
            </div>
        }
    });

    let category_options: Vec<(AttrValue, AttrValue)> = categories
        .items
        .iter()
        .map(|category| {
            (
                AttrValue::from(category.id.clone()),
                AttrValue::from(category.name.clone()),
            )
        })
        .collect();

    let recipes = form
        .recipes()
        .iter()
        .enumerate()
        .map(|(index, recipe)| {
            html! {
                <fieldset class="recipe" key={index}>
                    <legend>{format!("Recipe {}", index + 1)}</legend>
                    <TextField label="Recipe Name" value={recipe.name.clone()}
                        on_input={recipe_input(index, RecipeField::Name)} />
                    <TextAreaField label="Ingredients" value={recipe.ingredients.clone()} rows={3}
                        on_input={recipe_input(index, RecipeField::Ingredients)} />
                    <TextAreaField label="Instructions" value={recipe.instructions.clone()} rows={3}
                        on_input={recipe_input(index, RecipeField::Instructions)} />
                    {if form.recipes().len() > 1 {
                        html! {
                            <button type="button" class="btn-link danger" onclick={emit_on_click(&remove_recipe, index)}>
                                {"Remove Recipe"}
                            </button>
                        }
                    } else {
                        html! {}
                    }}
                </fieldset>
            }
        })
        .collect::<Html>();

    let gallery = form
        .images()
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            html! {
                <div class={classes!("gallery-item", slot.is_pending().then_some("pending"))} key={index}>
                    <img class="thumb" src={slot_src(&server_base, slot)} alt={format!("Image {}", index + 1)} />
                    <button type="button" class="gallery-remove" onclick={emit_on_click(&remove_image, index)}>
                        {"×"}
                    </button>
                </div>
            }
        })
        .collect::<Html>();

    let is_editing = editing.is_some();

    html! {
        <div class="page products-page">
            <div class="page-header">
                <h2>{"Products"}</h2>
                <button class="btn-primary" onclick={open_create}>{"Add Product"}</button>
            </div>
            {error_banner(&products.error)}
            {if *modal_open { html! {} } else { error_banner(&error) }}
            {if products.loading {
                html! { <Spinner /> }
            } else {
                html! {
                    <DataTable<Product>
                        data={products.items.clone()}
                        columns={columns}
                        page_size={app.config.page_size}
                        search_placeholder="Search products..."
                        row_actions={row_actions}
                    />
                }
            }}

            <Modal
                is_open={*modal_open}
                title={if is_editing { "Edit Product" } else { "Add New Product" }}
                on_close={close_modal.clone()}
            >
                <form class="product-form" onsubmit={on_submit}>
                    {error_banner(&error)}
                    <TextField label="Product Name" value={form.name.clone()} required=true
                        on_input={bind_field(&form, |f, v| f.name = v)} />
                    <TextAreaField label="Description" value={form.description.clone()} rows={3}
                        on_input={bind_field(&form, |f, v| f.description = v)} />
                    <div class="field-row">
                        <TextField label="Price" input_type="number" value={form.price.clone()} required=true
                            on_input={bind_field(&form, |f, v| f.price = v)} />
                        <TextField label="Cost Price" input_type="number" value={form.cost_price.clone()}
                            on_input={bind_field(&form, |f, v| f.cost_price = v)} />
                        <TextField label="Stock" input_type="number" value={form.stock.clone()} required=true
                            on_input={bind_field(&form, |f, v| f.stock = v)} />
                    </div>
                    <SelectField label="Category" value={form.category.clone()} options={category_options}
                        placeholder="Select a category"
                        on_change={bind_field(&form, |f, v| f.category = v)} />
                    <div class="field-row">
                        <TextField label="Volume (ml)" input_type="number" value={form.volume.clone()}
                            on_input={bind_field(&form, |f, v| f.volume = v)} />
                        <TextField label="Weight (g)" input_type="number" value={form.weight.clone()}
                            on_input={bind_field(&form, |f, v| f.weight = v)} />
                    </div>
                    <div class="field-row">
                        <TextField label="SKU" value={form.sku.clone()}
                            on_input={bind_field(&form, |f, v| f.sku = v)} />
                        <TextField label="Barcode" value={form.barcode.clone()}
                            on_input={bind_field(&form, |f, v| f.barcode = v)} />
                    </div>
                    <TextField label="Dimensions" value={form.dimensions.clone()}
                        placeholder={r#"{"length": 10, "width": 5, "height": 20}"#}
                        on_input={bind_field(&form, |f, v| f.dimensions = v)} />
                    <TextField label="Tags" value={form.tags.clone()} placeholder="comma, separated, tags"
                        on_input={bind_field(&form, |f, v| f.tags = v)} />
                    <CheckboxField label="Active" checked={form.is_active}
                        on_toggle={bind_field_bool(&form)} />

                    <section class="product-pages">
                        <h4>{"Show on pages *"}</h4>
                        {for PRODUCT_PAGES.into_iter().map(|(name, url)| {
                            let toggle_page = toggle_page.clone();
                            html! {
                                <CheckboxField
                                    label={name}
                                    checked={form.selected_pages.iter().any(|page| page == url)}
                                    on_toggle={Callback::from(move |_: bool| toggle_page.emit(url))}
                                />
                            }
                        })}
                    </section>

                    <section class="recipes">
                        <h4>{"Recipes"}</h4>
                        {recipes}
                        <button type="button" class="btn-secondary" onclick={add_recipe}>{"Add Recipe"}</button>
                    </section>

                    <section class="gallery">
                        <h4>{format!("Images ({}/{})", form.images().len(), max_images)}</h4>
                        <div class="gallery-grid">{gallery}</div>
                        {if form.remaining_image_slots() > 0 {
                            html! { <input type="file" accept="image/*" multiple=true onchange={on_files} /> }
                        } else {
                            html! { <p class="hint">{format!("Maximum {} images allowed", max_images)}</p> }
                        }}
                    </section>

                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" onclick={emit_on_click(&close_modal, ())}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn-primary" disabled={*busy}>
                            {if *busy { "Saving..." } else if is_editing { "Update" } else { "Create" }}
                        </button>
                    </div>
                </form>
            </Modal>

            <ConfirmDialog
                is_open={pending_delete.is_some()}
                title="Delete Product"
                message={pending_delete
                    .as_ref()
                    .map(|product| format!("Are you sure you want to delete \"{}\"?", product.name))
                    .unwrap_or_default()}
                busy={*busy}
                on_confirm={confirm_delete}
                on_cancel={cancel_delete}
            />
        </div>
    }
}

fn bind_field_bool(form: &UseStateHandle<Form>) -> Callback<bool> {
    let form = form.clone();
    Callback::from(move |checked: bool| {
        let mut next = (*form).clone();
        next.is_active = checked;
        form.set(next);
    })
}

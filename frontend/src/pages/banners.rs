use std::rc::Rc;

use domain::catalog;
use domain::forms::BannerForm;
use domain::table::Column;
use shared::{Banner, BannerImageKind, BannerType};
use web_sys::File;
use yew::prelude::*;

use super::{emit_on_click, error_banner, format_date, spawn_mutation, status_badge};
use crate::components::{
    bind_field, CheckboxField, ConfirmDialog, DataTable, Modal, SelectField, Spinner, TextAreaField,
    TextField,
};
use crate::hooks::{use_app, use_entity_list};
use crate::services::api::Method;

fn type_options() -> Vec<(AttrValue, AttrValue)> {
    [BannerType::HomeSlider, BannerType::InnerPage]
        .into_iter()
        .map(|kind| (AttrValue::from(kind.as_str()), AttrValue::from(kind.label())))
        .collect()
}

fn image_kind_options() -> Vec<(AttrValue, AttrValue)> {
    [BannerImageKind::HomeSlider, BannerImageKind::InnerPage]
        .into_iter()
        .map(|kind| (AttrValue::from(kind.as_str()), AttrValue::from(kind.label())))
        .collect()
}

fn edit_with(form: &UseStateHandle<BannerForm>, apply: impl Fn(&mut BannerForm) + 'static) -> Callback<MouseEvent> {
    let form = form.clone();
    Callback::from(move |_: MouseEvent| {
        let mut next = (*form).clone();
        apply(&mut next);
        form.set(next);
    })
}

#[function_component(BannersPage)]
pub fn banners_page() -> Html {
    let app = use_app();
    let banners = use_entity_list::<Banner>("banners");
    let form = use_state(BannerForm::new);
    let editing = use_state(|| None::<String>);
    let modal_open = use_state(|| false);
    let previewing = use_state(|| None::<Banner>);
    let pending_delete = use_state(|| None::<Banner>);
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);
    let server_base = app.config.server_base_url().to_string();

    let columns: Rc<Vec<Column<Banner, Html>>> = use_memo(server_base.clone(), |server_base| {
        let server_base = server_base.clone();
        vec![
            Column::derived("Image", move |banner: &Banner| {
                html! {
                    <img class="thumb" src={catalog::image_url(&server_base, &banner.image_url)} alt={banner.title.clone()} />
                }
            }),
            Column::field("Title", "title").sortable(),
            Column::derived("Type", |banner: &Banner| {
                html! { <span>{banner.banner_type.label()}</span> }
            }),
            Column::field("Order", "displayOrder").sortable(),
            Column::derived("Schedule", |banner: &Banner| {
                html! {
                    <span>{format!("{} - {}", format_date(&banner.start_date), format_date(&banner.end_date))}</span>
                }
            })
            .sort_by("startDate"),
            Column::derived("Status", |banner: &Banner| {
                status_badge(banner.is_active, "Active", "Inactive")
            })
            .sort_by("isActive"),
        ]
    });

    let open_create = {
        let form = form.clone();
        let editing = editing.clone();
        let modal_open = modal_open.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(BannerForm::new());
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
        Callback::from(move |banner: Banner| {
            form.set(BannerForm::from_banner(&banner));
            editing.set(Some(banner.id));
            error.set(None);
            modal_open.set(true);
        })
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };

    let open_preview = {
        let previewing = previewing.clone();
        Callback::from(move |banner: Banner| previewing.set(Some(banner)))
    };

    let close_preview = {
        let previewing = previewing.clone();
        Callback::from(move |_: ()| previewing.set(None))
    };

    let after_save = {
        let modal_open = modal_open.clone();
        let refresh = banners.refresh.clone();
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
            let payload = match form.validate::<File>() {
                Ok(payload) => payload,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            let method = Method::for_save(editing.is_some());
            let path = match editing.as_ref() {
                Some(id) => format!("banners/{}", id),
                None => "banners".to_string(),
            };
            let api = app.api();
            spawn_mutation(&app, &busy, &error, after_save.clone(), async move {
                api.send_multipart(method, &path, payload).await.map(|_| ())
            });
        })
    };

    let toggle_active = {
        let app = app.clone();
        let busy = busy.clone();
        let error = error.clone();
        let refresh = banners.refresh.clone();
        Callback::from(move |banner: Banner| {
            let mut form = BannerForm::from_banner(&banner);
            form.is_active = !banner.is_active;
            let payload = match form.validate::<File>() {
                Ok(payload) => payload,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            let api = app.api();
            spawn_mutation(&app, &busy, &error, refresh.clone(), async move {
                api.send_multipart(Method::Put, &format!("banners/{}", banner.id), payload)
                    .await
                    .map(|_| ())
            });
        })
    };

    let request_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |banner: Banner| pending_delete.set(Some(banner)))
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
        let refresh = banners.refresh.clone();
        Callback::from(move |_: ()| {
            let Some(banner) = (*pending_delete).clone() else {
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
                api.delete(&format!("banners/{}", banner.id)).await
            });
        })
    };

    let row_actions = {
        let busy = *busy;
        Callback::from(move |banner: Banner| {
            html! {
                <div class="row-actions">
                    <button class="btn-link" onclick={emit_on_click(&open_preview, banner.clone())}>{"Preview"}</button>
                    <button class="btn-link" disabled={busy} onclick={emit_on_click(&toggle_active, banner.clone())}>
                        {if banner.is_active { "Deactivate" } else { "Activate" }}
                    </button>
                    <button class="btn-link" onclick={emit_on_click(&open_edit, banner.clone())}>{"Edit"}</button>
                    <button class="btn-link danger" onclick={emit_on_click(&request_delete, banner)}>{"Delete"}</button>
                </div>
            }
        })
    };

    let image_list = form
        .banner_images
        .iter()
        .map(|image| {
            let id = image.id.clone();
            html! {
                <li key={image.id.clone()}>
                    <img class="thumb" src={catalog::image_url(&server_base, &image.url)} alt={image.kind.label()} />
                    <span class="badge">{image.kind.label()}</span>
                    <button type="button" class="btn-link danger"
                        onclick={edit_with(&form, move |f| f.remove_image(&id))}>{"Remove"}</button>
                </li>
            }
        })
        .collect::<Html>();

    let ingredient_list = form
        .ingredients
        .iter()
        .map(|ingredient| {
            let id = ingredient.id.clone();
            html! {
                <li key={ingredient.id.clone()} class="chip">
                    {&ingredient.name}
                    <button type="button" class="chip-remove"
                        onclick={edit_with(&form, move |f| f.remove_ingredient(&id))}>{"×"}</button>
                </li>
            }
        })
        .collect::<Html>();

    let preview = match previewing.as_ref() {
        Some(banner) => html! {
            <Modal is_open=true title={banner.title.clone()} on_close={close_preview}>
                <div class={classes!("banner-preview", banner.banner_type.as_str())}>
                    <img src={catalog::image_url(&server_base, &banner.image_url)} alt={banner.title.clone()} />
                    <div class="banner-copy">
                        <h3>{&banner.title}</h3>
                        {for banner.description.iter().map(|text| html! { <p>{text}</p> })}
                        {for banner.link_url.iter().map(|url| html! { <a href={url.clone()}>{"Learn more"}</a> })}
                    </div>
                    {if banner.ingredients.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <ul class="chips">
                                {for banner.ingredients.iter().map(|i| html! { <li class="chip">{&i.name}</li> })}
                            </ul>
                        }
                    }}
                </div>
            </Modal>
        },
        None => html! {},
    };

    let is_editing = editing.is_some();

    html! {
        <div class="page banners-page">
            <div class="page-header">
                <h2>{"Banners"}</h2>
                <button class="btn-primary" onclick={open_create}>{"Add Banner"}</button>
            </div>
            {error_banner(&banners.error)}
            {if *modal_open { html! {} } else { error_banner(&error) }}
            {if banners.loading {
                html! { <Spinner /> }
            } else {
                html! {
                    <DataTable<Banner>
                        data={banners.items.clone()}
                        columns={columns}
                        page_size={app.config.page_size}
                        search_placeholder="Search banners..."
                        row_actions={row_actions}
                    />
                }
            }}

            <Modal
                is_open={*modal_open}
                title={if is_editing { "Edit Banner" } else { "Add New Banner" }}
                on_close={close_modal.clone()}
            >
                <form onsubmit={on_submit}>
                    {error_banner(&error)}
                    <TextField label="Title" value={form.title.clone()} required=true
                        on_input={bind_field(&form, |f, v| f.title = v)} />
                    <TextAreaField label="Description" value={form.description.clone()} rows={3}
                        on_input={bind_field(&form, |f, v| f.description = v)} />
                    <TextField label="Banner Image URL" value={form.image_url.clone()} required=true
                        on_input={bind_field(&form, |f, v| f.image_url = v)} />
                    <TextField label="Link URL" value={form.link_url.clone()}
                        on_input={bind_field(&form, |f, v| f.link_url = v)} />
                    <div class="field-row">
                        <SelectField label="Banner Type" value={form.banner_type.as_str()} options={type_options()}
                            on_change={bind_field(&form, |f, v| {
                                if let Some(kind) = BannerType::parse(&v) {
                                    f.banner_type = kind;
                                }
                            })} />
                        <TextField label="Display Order" input_type="number" value={form.display_order.clone()}
                            on_input={bind_field(&form, |f, v| f.display_order = v)} />
                    </div>
                    <div class="field-row">
                        <TextField label="Start Date" input_type="date" value={form.start_date.clone()}
                            on_input={bind_field(&form, |f, v| f.start_date = v)} />
                        <TextField label="End Date" input_type="date" value={form.end_date.clone()}
                            on_input={bind_field(&form, |f, v| f.end_date = v)} />
                    </div>
                    <CheckboxField label="Active" checked={form.is_active}
                        on_toggle={{
                            let form = form.clone();
                            Callback::from(move |checked: bool| {
                                let mut next = (*form).clone();
                                next.is_active = checked;
                                form.set(next);
                            })
                        }} />

                    <section class="banner-images">
                        <h4>{"Additional Images"}</h4>
                        <ul class="image-list">{image_list}</ul>
                        <div class="field-row">
                            <TextField label="Image URL" value={form.new_image_url.clone()}
                                on_input={bind_field(&form, |f, v| f.new_image_url = v)} />
                            <SelectField label="Placement" value={form.new_image_kind.as_str()}
                                options={image_kind_options()}
                                on_change={bind_field(&form, |f, v| {
                                    if let Some(kind) = BannerImageKind::parse(&v) {
                                        f.new_image_kind = kind;
                                    }
                                })} />
                            <button type="button" class="btn-secondary"
                                onclick={edit_with(&form, |f| { f.add_image(); })}>{"Add Image"}</button>
                        </div>
                    </section>

                    <section class="banner-ingredients">
                        <h4>{"Featured Ingredients"}</h4>
                        <ul class="chips">{ingredient_list}</ul>
                        <div class="field-row">
                            <TextField label="Ingredient" value={form.new_ingredient_name.clone()}
                                on_input={bind_field(&form, |f, v| f.new_ingredient_name = v)} />
                            <button type="button" class="btn-secondary"
                                onclick={edit_with(&form, |f| { f.add_ingredient(); })}>{"Add Ingredient"}</button>
                        </div>
                    </section>

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

            {preview}

            <ConfirmDialog
                is_open={pending_delete.is_some()}
                title="Delete Banner"
                message={pending_delete
                    .as_ref()
                    .map(|banner| format!("Are you sure you want to delete \"{}\"?", banner.title))
                    .unwrap_or_default()}
                busy={*busy}
                on_confirm={confirm_delete}
                on_cancel={cancel_delete}
            />
        </div>
    }
}

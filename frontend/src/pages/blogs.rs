use std::rc::Rc;

use domain::forms::BlogForm;
use domain::table::Column;
use shared::{Blog, BlogStatus};
use yew::prelude::*;

use super::{emit_on_click, error_banner, format_date, spawn_mutation, status_badge};
use crate::components::{
    bind_field, ConfirmDialog, DataTable, Modal, SelectField, Spinner, TextAreaField, TextField,
};
use crate::hooks::{use_app, use_entity_list};
use crate::services::api::Method;

fn status_options() -> Vec<(AttrValue, AttrValue)> {
    vec![
        ("draft".into(), "Draft".into()),
        ("published".into(), "Published".into()),
    ]
}

#[function_component(BlogsPage)]
pub fn blogs_page() -> Html {
    let app = use_app();
    let blogs = use_entity_list::<Blog>("blogs");
    let form = use_state(BlogForm::new);
    let editing = use_state(|| None::<String>);
    let modal_open = use_state(|| false);
    let previewing = use_state(|| None::<Blog>);
    let pending_delete = use_state(|| None::<Blog>);
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    let columns: Rc<Vec<Column<Blog, Html>>> = use_memo((), |_| {
        vec![
            Column::field("Title", "title").sortable(),
            Column::field("Author", "author").sortable(),
            Column::derived("Tags", |blog: &Blog| {
                html! {
                    <div class="tags">
                        {for blog.tags.iter().map(|tag| html! { <span class="tag">{tag}</span> })}
                    </div>
                }
            }),
            Column::derived("Published", |blog: &Blog| {
                html! { <span>{format_date(&blog.publish_date)}</span> }
            })
            .sort_by("publishDate"),
            Column::derived("Status", |blog: &Blog| {
                status_badge(blog.status == BlogStatus::Published, "Published", "Draft")
            })
            .sort_by("status"),
        ]
    });

    let open_create = {
        let form = form.clone();
        let editing = editing.clone();
        let modal_open = modal_open.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(BlogForm::new());
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
        Callback::from(move |blog: Blog| {
            form.set(BlogForm::from_blog(&blog));
            editing.set(Some(blog.id));
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
        Callback::from(move |blog: Blog| previewing.set(Some(blog)))
    };

    let close_preview = {
        let previewing = previewing.clone();
        Callback::from(move |_: ()| previewing.set(None))
    };

    let after_save = {
        let modal_open = modal_open.clone();
        let refresh = blogs.refresh.clone();
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
                Some(id) => format!("blogs/{}", id),
                None => "blogs".to_string(),
            };
            let api = app.api();
            spawn_mutation(&app, &busy, &error, after_save.clone(), async move {
                api.send_json(method, &path, &payload).await.map(|_| ())
            });
        })
    };

    // Publishing and unpublishing resend the whole post with the flipped status
    let toggle_status = {
        let app = app.clone();
        let busy = busy.clone();
        let error = error.clone();
        let refresh = blogs.refresh.clone();
        Callback::from(move |blog: Blog| {
            let mut form = BlogForm::from_blog(&blog);
            form.status = blog.status.toggled();
            let payload = match form.validate() {
                Ok(payload) => payload,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            let api = app.api();
            spawn_mutation(&app, &busy, &error, refresh.clone(), async move {
                api.send_json(Method::Put, &format!("blogs/{}", blog.id), &payload)
                    .await
                    .map(|_| ())
            });
        })
    };

    let request_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |blog: Blog| pending_delete.set(Some(blog)))
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
        let refresh = blogs.refresh.clone();
        Callback::from(move |_: ()| {
            let Some(blog) = (*pending_delete).clone() else {
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
                api.delete(&format!("blogs/{}", blog.id)).await
            });
        })
    };

    let row_actions = {
        let busy = *busy;
        Callback::from(move |blog: Blog| {
            let toggle_label = match blog.status {
                BlogStatus::Published => "Unpublish",
                BlogStatus::Draft => "Publish",
            };
            html! {
                <div class="row-actions">
                    <button class="btn-link" onclick={emit_on_click(&open_preview, blog.clone())}>{"Preview"}</button>
                    <button class="btn-link" disabled={busy} onclick={emit_on_click(&toggle_status, blog.clone())}>
                        {toggle_label}
                    </button>
                    <button class="btn-link" onclick={emit_on_click(&open_edit, blog.clone())}>{"Edit"}</button>
                    <button class="btn-link danger" onclick={emit_on_click(&request_delete, blog)}>{"Delete"}</button>
                </div>
            }
        })
    };

    let is_editing = editing.is_some();

    let preview = match previewing.as_ref() {
        Some(blog) => html! {
            <Modal is_open=true title={blog.title.clone()} on_close={close_preview}>
                <article class="blog-preview">
                    {if blog.image_url.is_empty() {
                        html! {}
                    } else {
                        html! { <img src={blog.image_url.clone()} alt={blog.title.clone()} /> }
                    }}
                    <p class="meta">
                        {format!("By {} on {}", blog.author, format_date(&blog.publish_date))}
                    </p>
                    <div class="content">
                        {for blog.content.lines().map(|line| html! { <p>{line}</p> })}
                    </div>
                </article>
            </Modal>
        },
        None => html! {},
    };

    html! {
        <div class="page blogs-page">
            <div class="page-header">
                <h2>{"Blog Posts"}</h2>
                <button class="btn-primary" onclick={open_create}>{"New Post"}</button>
            </div>
            {error_banner(&blogs.error)}
            {if *modal_open { html! {} } else { error_banner(&error) }}
            {if blogs.loading {
                html! { <Spinner /> }
            } else {
                html! {
                    <DataTable<Blog>
                        data={blogs.items.clone()}
                        columns={columns}
                        page_size={app.config.page_size}
                        search_placeholder="Search posts..."
                        row_actions={row_actions}
                    />
                }
            }}

            <Modal
                is_open={*modal_open}
                title={if is_editing { "Edit Post" } else { "New Post" }}
                on_close={close_modal.clone()}
            >
                <form onsubmit={on_submit}>
                    {error_banner(&error)}
                    <TextField label="Title" value={form.title.clone()} required=true
                        on_input={bind_field(&form, |f, v| f.title = v)} />
                    <TextField label="Author" value={form.author.clone()}
                        on_input={bind_field(&form, |f, v| f.author = v)} />
                    <TextField label="Image URL" value={form.image_url.clone()}
                        on_input={bind_field(&form, |f, v| f.image_url = v)} />
                    <TextAreaField label="Content" value={form.content.clone()} rows={8}
                        on_input={bind_field(&form, |f, v| f.content = v)} />
                    <TextField label="Tags" value={form.tags.clone()} placeholder="comma, separated, tags"
                        on_input={bind_field(&form, |f, v| f.tags = v)} />
                    <div class="field-row">
                        <TextField label="Publish Date" input_type="date" value={form.publish_date.clone()}
                            on_input={bind_field(&form, |f, v| f.publish_date = v)} />
                        <SelectField label="Status" value={form.status.to_string()} options={status_options()}
                            on_change={bind_field(&form, |f, v| {
                                if let Some(status) = BlogStatus::parse(&v) {
                                    f.status = status;
                                }
                            })} />
                    </div>
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
                title="Delete Post"
                message={pending_delete
                    .as_ref()
                    .map(|blog| format!("Are you sure you want to delete \"{}\"?", blog.title))
                    .unwrap_or_default()}
                busy={*busy}
                on_confirm={confirm_delete}
                on_cancel={cancel_delete}
            />
        </div>
    }
}

use std::rc::Rc;

use domain::forms::UserForm;
use domain::table::Column;
use shared::{User, UserRole, UserStatus};
use yew::prelude::*;

use super::{emit_on_click, error_banner, format_date, spawn_mutation, status_badge};
use crate::components::{bind_field, ConfirmDialog, DataTable, Modal, SelectField, Spinner, TextField};
use crate::hooks::{use_app, use_entity_list};
use crate::services::api::Method;

fn role_options() -> Vec<(AttrValue, AttrValue)> {
    [UserRole::Admin, UserRole::Manager, UserRole::Staff]
        .into_iter()
        .map(|role| {
            let value = AttrValue::from(role.to_string());
            (value.clone(), value)
        })
        .collect()
}

fn status_options() -> Vec<(AttrValue, AttrValue)> {
    vec![
        ("active".into(), "Active".into()),
        ("inactive".into(), "Inactive".into()),
    ]
}

#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let app = use_app();
    let users = use_entity_list::<User>("users");
    let form = use_state(UserForm::new);
    let editing = use_state(|| None::<String>);
    let modal_open = use_state(|| false);
    let pending_delete = use_state(|| None::<User>);
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    let columns: Rc<Vec<Column<User, Html>>> = use_memo((), |_| {
        vec![
            Column::field("Name", "name").sortable(),
            Column::field("Email", "email").sortable(),
            Column::derived("Role", |user: &User| {
                html! { <span class="badge">{user.role.to_string()}</span> }
            })
            .sort_by("role"),
            Column::derived("Status", |user: &User| {
                status_badge(user.status == UserStatus::Active, "Active", "Inactive")
            })
            .sort_by("status"),
            Column::derived("Created", |user: &User| {
                html! { <span>{format_date(&user.created_at)}</span> }
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
            form.set(UserForm::new());
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
        Callback::from(move |user: User| {
            form.set(UserForm::from_user(&user));
            editing.set(Some(user.id));
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
        let refresh = users.refresh.clone();
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
            let (method, path) = match editing.as_ref() {
                Some(id) => (Method::Put, format!("users/{}", id)),
                None => (Method::Post, "users".to_string()),
            };
            let api = app.api();
            spawn_mutation(&app, &busy, &error, after_save.clone(), async move {
                api.send_json(method, &path, &payload).await.map(|_| ())
            });
        })
    };

    let request_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |user: User| pending_delete.set(Some(user)))
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
        let refresh = users.refresh.clone();
        Callback::from(move |_: ()| {
            let Some(user) = (*pending_delete).clone() else {
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
                api.delete(&format!("users/{}", user.id)).await
            });
        })
    };

    let row_actions = Callback::from(move |user: User| {
        html! {
            <div class="row-actions">
                <button class="btn-link" onclick={emit_on_click(&open_edit, user.clone())}>{"Edit"}</button>
                <button class="btn-link danger" onclick={emit_on_click(&request_delete, user)}>{"Delete"}</button>
            </div>
        }
    });

    let modal_title = if editing.is_some() { "Edit User" } else { "Add New User" };

    html! {
        <div class="page users-page">
            <div class="page-header">
                <h2>{"Users"}</h2>
                <button class="btn-primary" onclick={open_create}>{"Add User"}</button>
            </div>
            {error_banner(&users.error)}
            {if *modal_open { html! {} } else { error_banner(&error) }}
            {if users.loading {
                html! { <Spinner /> }
            } else {
                html! {
                    <DataTable<User>
                        data={users.items.clone()}
                        columns={columns}
                        page_size={app.config.page_size}
                        search_placeholder="Search users..."
                        row_actions={row_actions}
                    />
                }
            }}

            <Modal is_open={*modal_open} title={modal_title} on_close={close_modal.clone()}>
                <form onsubmit={on_submit}>
                    {error_banner(&error)}
                    <TextField label="Name" value={form.name.clone()} required=true
                        on_input={bind_field(&form, |f, v| f.name = v)} />
                    <TextField label="Email" input_type="email" value={form.email.clone()} required=true
                        on_input={bind_field(&form, |f, v| f.email = v)} />
                    <SelectField label="Role" value={form.role.to_string()} options={role_options()}
                        on_change={bind_field(&form, |f, v| {
                            if let Some(role) = UserRole::parse(&v) {
                                f.role = role;
                            }
                        })} />
                    <SelectField label="Status" value={form.status.to_string()} options={status_options()}
                        on_change={bind_field(&form, |f, v| {
                            if let Some(status) = UserStatus::parse(&v) {
                                f.status = status;
                            }
                        })} />
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" onclick={emit_on_click(&close_modal, ())}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn-primary" disabled={*busy}>
                            {if editing.is_some() { "Update" } else { "Create" }}
                        </button>
                    </div>
                </form>
            </Modal>

            <ConfirmDialog
                is_open={pending_delete.is_some()}
                title="Delete User"
                message={pending_delete
                    .as_ref()
                    .map(|user| format!("Are you sure you want to delete {}? This action cannot be undone.", user.name))
                    .unwrap_or_default()}
                busy={*busy}
                on_confirm={confirm_delete}
                on_cancel={cancel_delete}
            />
        </div>
    }
}

use domain::forms::RegisterForm;
use domain::{Route, Session};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::error_banner;
use crate::components::{bind_field, TextField};
use crate::hooks::use_app;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let app = use_app();
    let form = use_state(RegisterForm::default);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);
    let admin_exists = use_state(|| false);

    {
        let app = app.clone();
        let admin_exists = admin_exists.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match app.api().admin_exists().await {
                    Ok(exists) => {
                        admin_exists.set(exists);
                        if exists {
                            error.set(Some(domain::FormError::AdminExists.to_string()));
                        }
                    }
                    Err(e) => log::error!("Error checking admin existence: {}", e),
                }
            });
            || ()
        });
    }

    let on_submit = {
        let app = app.clone();
        let form = form.clone();
        let error = error.clone();
        let busy = busy.clone();
        let admin_exists = *admin_exists;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match form.validate(admin_exists) {
                Ok(request) => request,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            let app = app.clone();
            let error = error.clone();
            let busy = busy.clone();
            spawn_local(async move {
                busy.set(true);
                error.set(None);
                match app.api().register(&request).await {
                    Ok(response) => app.on_login.emit(Session::from_auth(response)),
                    Err(e) => error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        })
    };

    let to_login = {
        let navigate = app.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Login))
    };

    html! {
        <div class="auth-page">
            <form class="auth-card" onsubmit={on_submit}>
                <h2>{"Create admin account"}</h2>
                {error_banner(&error)}
                <TextField label="Full name" value={form.name.clone()}
                    on_input={bind_field(&form, |f, v| f.name = v)} required=true />
                <TextField label="Email address" input_type="email" value={form.email.clone()}
                    on_input={bind_field(&form, |f, v| f.email = v)} required=true />
                <TextField label="Password" input_type="password" value={form.password.clone()}
                    on_input={bind_field(&form, |f, v| f.password = v)} required=true />
                <TextField label="Confirm password" input_type="password" value={form.confirm_password.clone()}
                    on_input={bind_field(&form, |f, v| f.confirm_password = v)} required=true />
                <button type="submit" class="btn-primary" disabled={*busy || *admin_exists}>
                    {if *busy { "Creating account..." } else { "Create account" }}
                </button>
                <p class="auth-switch">
                    {"Already registered? "}
                    <button type="button" class="btn-link" onclick={to_login}>{"Sign in"}</button>
                </p>
            </form>
        </div>
    }
}

use domain::forms::LoginForm;
use domain::{Route, Session};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::error_banner;
use crate::components::{bind_field, TextField};
use crate::hooks::use_app;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let app = use_app();
    let form = use_state(LoginForm::default);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_submit = {
        let app = app.clone();
        let form = form.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match form.validate() {
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
                match app.api().login(&request).await {
                    Ok(response) => app.on_login.emit(Session::from_auth(response)),
                    Err(e) => {
                        log::warn!("Login failed: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                busy.set(false);
            });
        })
    };

    let to_register = {
        let navigate = app.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Register))
    };

    html! {
        <div class="auth-page">
            <form class="auth-card" onsubmit={on_submit}>
                <h2>{"Sign in to your account"}</h2>
                {error_banner(&error)}
                <TextField
                    label="Email address"
                    input_type="email"
                    value={form.email.clone()}
                    on_input={bind_field(&form, |f, v| f.email = v)}
                    required=true
                />
                <TextField
                    label="Password"
                    input_type="password"
                    value={form.password.clone()}
                    on_input={bind_field(&form, |f, v| f.password = v)}
                    required=true
                />
                <button type="submit" class="btn-primary" disabled={*busy}>
                    {if *busy { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-switch">
                    {"First time here? "}
                    <button type="button" class="btn-link" onclick={to_register}>{"Create the admin account"}</button>
                </p>
            </form>
        </div>
    }
}

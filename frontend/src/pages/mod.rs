pub mod banners;
pub mod blogs;
pub mod categories;
pub mod dashboard;
pub mod ingredients;
pub mod login;
pub mod products;
pub mod register;
pub mod users;

use std::future::Future;

use chrono::{DateTime, NaiveDate};
use domain::ApiError;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::AppContext;

/// Human-readable date ("Jun 01, 2024") from a stored date or timestamp
pub fn format_date(stored: &str) -> String {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(stored) {
        return timestamp.format("%b %d, %Y").to_string();
    }
    match NaiveDate::parse_from_str(stored.get(..10).unwrap_or(stored), "%Y-%m-%d") {
        Ok(date) => date.format("%b %d, %Y").to_string(),
        Err(_) => stored.to_string(),
    }
}

pub fn status_badge(active: bool, on: &'static str, off: &'static str) -> Html {
    html! {
        <span class={classes!("badge", if active { "on" } else { "off" })}>
            {if active { on } else { off }}
        </span>
    }
}

pub fn error_banner(error: &Option<String>) -> Html {
    match error {
        Some(message) => html! { <div class="error-banner" role="alert">{message}</div> },
        None => html! {},
    }
}

/// A click handler that ignores the event and emits `value`
pub fn emit_on_click<T: Clone + 'static>(callback: &Callback<T>, value: T) -> Callback<MouseEvent> {
    let callback = callback.clone();
    Callback::from(move |_: MouseEvent| callback.emit(value.clone()))
}

/// Run a create/update/delete call against the backend.
///
/// `busy` is raised for the duration. On success `on_done` fires (pages use it
/// to close their dialog and re-fetch the list); on failure the message lands
/// in `error`.
pub fn spawn_mutation<Fut>(
    app: &AppContext,
    busy: &UseStateHandle<bool>,
    error: &UseStateHandle<Option<String>>,
    on_done: Callback<()>,
    task: Fut,
) where
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    let app = app.clone();
    let busy = busy.clone();
    let error = error.clone();
    spawn_local(async move {
        busy.set(true);
        match task.await {
            Ok(()) => {
                error.set(None);
                on_done.emit(());
            }
            Err(e) => {
                log::error!("Save failed: {}", e);
                error.set(Some(app.handle_error(e)));
            }
        }
        busy.set(false);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_format_date() {
        assert_eq!(format_date("2024-06-01T10:30:00.000Z"), "Jun 01, 2024");
        assert_eq!(format_date("2024-02-29"), "Feb 29, 2024");
        assert_eq!(format_date("soon"), "soon");
    }
}

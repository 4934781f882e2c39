use std::rc::Rc;

use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_session::use_app;

/// A collection fetched wholesale from one endpoint
pub struct EntityList<T> {
    pub items: Rc<Vec<T>>,
    pub loading: bool,
    pub error: Option<String>,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_entity_list<T>(path: &'static str) -> EntityList<T>
where
    T: DeserializeOwned + 'static,
{
    let app = use_app();
    let items = use_state(|| Rc::new(Vec::<T>::new()));
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    let refresh = {
        let items = items.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback(app.clone(), move |_: (), app| {
            let app = app.clone();
            let items = items.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);
                match app.api().list::<T>(path).await {
                    Ok(fetched) => {
                        log::info!("Loaded {} records from {}", fetched.len(), path);
                        items.set(Rc::new(fetched));
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("Failed to fetch {}: {}", path, e);
                        error.set(Some(app.handle_error(e)));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    EntityList {
        items: (*items).clone(),
        loading: *loading,
        error: (*error).clone(),
        refresh,
    }
}

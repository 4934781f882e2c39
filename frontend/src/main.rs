mod components;
mod hooks;
mod pages;
mod services;

use std::rc::Rc;

use domain::{resolve, ConsoleConfig, Route, RouteDecision, Session, SessionStore};
use gloo::history::{BrowserHistory, History};
use log::LevelFilter;
use yew::prelude::*;

use crate::components::{Layout, Spinner};
use crate::hooks::AppContext;
use crate::services::logging::ConsoleLogger;
use crate::services::storage::BrowserStore;

const CONSOLE_CONFIG: &str = include_str!("../console.yaml");

fn session_store() -> SessionStore<BrowserStore> {
    SessionStore::new(BrowserStore)
}

fn render_route(route: Route) -> Html {
    match route {
        Route::Login => html! { <pages::login::LoginPage /> },
        Route::Register => html! { <pages::register::RegisterPage /> },
        signed_in => {
            let page = match signed_in {
                Route::Dashboard => html! { <pages::dashboard::DashboardPage /> },
                Route::Users => html! { <pages::users::UsersPage /> },
                Route::Categories => html! { <pages::categories::CategoriesPage /> },
                Route::Products => html! { <pages::products::ProductsPage /> },
                Route::Banners => html! { <pages::banners::BannersPage /> },
                Route::Blogs => html! { <pages::blogs::BlogsPage /> },
                Route::Ingredients => html! { <pages::ingredients::IngredientsPage /> },
                Route::Login | Route::Register => html! {},
            };
            html! { <Layout route={signed_in}>{page}</Layout> }
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| ConsoleConfig::from_yaml_str_or_default(CONSOLE_CONFIG));
    let history = use_memo((), |_| BrowserHistory::new());
    let session = use_state(|| session_store().load());
    let path = {
        let history = history.clone();
        use_state(move || history.location().path().to_string())
    };

    // Back/forward buttons
    {
        let history = history.clone();
        let path = path.clone();
        use_effect_with((), move |_| {
            let listened = (*history).clone();
            let listener = history.listen(move || {
                path.set(listened.location().path().to_string());
            });
            move || drop(listener)
        });
    }

    let navigate = {
        let history = history.clone();
        let path = path.clone();
        Callback::from(move |route: Route| {
            log::debug!("navigate to {}", route.path());
            history.push(route.path());
            path.set(route.path().to_string());
        })
    };

    let on_login = {
        let session = session.clone();
        let navigate = navigate.clone();
        Callback::from(move |signed_in: Session| {
            log::info!("Signed in as {}", signed_in.user.email);
            session_store().save(&signed_in);
            session.set(Some(signed_in));
            navigate.emit(Route::Dashboard);
        })
    };

    let on_logout = {
        let session = session.clone();
        let navigate = navigate.clone();
        Callback::from(move |_| {
            session_store().clear();
            session.set(None);
            navigate.emit(Route::Login);
        })
    };

    let on_unauthorized = {
        let session = session.clone();
        let navigate = navigate.clone();
        Callback::from(move |_| {
            log::warn!("Session rejected by the backend, signing out");
            session_store().purge_legacy_tokens();
            session.set(None);
            navigate.emit(Route::Login);
        })
    };

    let decision = resolve(&path, session.is_some());

    {
        let history = history.clone();
        let path = path.clone();
        use_effect_with(decision, move |decision| {
            if let RouteDecision::Redirect(target) = *decision {
                history.replace(target.path());
                path.set(target.path().to_string());
            }
            || ()
        });
    }

    let context = AppContext {
        config: Rc::clone(&config),
        session: (*session).clone(),
        on_login,
        on_logout,
        on_unauthorized,
        navigate,
    };

    html! {
        <ContextProvider<AppContext> {context}>
            {match decision {
                RouteDecision::Render(route) => render_route(route),
                RouteDecision::Redirect(_) => html! { <Spinner /> },
            }}
        </ContextProvider<AppContext>>
    }
}

fn main() {
    if let Err(e) = ConsoleLogger::init(LevelFilter::Debug) {
        gloo::console::error!(format!("Logger already installed: {}", e));
    }
    yew::Renderer::<App>::new().render();
}

use std::rc::Rc;

use domain::{ApiError, ConsoleConfig, Route, Session};
use yew::prelude::*;

use crate::services::api::ApiClient;

/// Everything a page needs from the shell, handed down through a yew context
#[derive(Clone, PartialEq, Default)]
pub struct AppContext {
    pub config: Rc<ConsoleConfig>,
    pub session: Option<Session>,
    pub on_login: Callback<Session>,
    pub on_logout: Callback<()>,
    /// The backend rejected our token
    pub on_unauthorized: Callback<()>,
    pub navigate: Callback<Route>,
}

impl AppContext {
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.config.api_base_url.clone())
            .with_token(self.session.as_ref().map(|session| session.token.clone()))
    }

    /// Route a failed call: 401 ends the session, anything else becomes a
    /// message for the page's error banner
    pub fn handle_error(&self, error: ApiError) -> String {
        if error.is_unauthorized() {
            self.on_unauthorized.emit(());
        }
        error.to_string()
    }
}

#[hook]
pub fn use_app() -> AppContext {
    use_context::<AppContext>().unwrap_or_default()
}

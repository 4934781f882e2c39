use domain::Route;
use yew::prelude::*;

use super::{Header, Sidebar};
use crate::hooks::use_app;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub route: Route,
    #[prop_or_default]
    pub children: Html,
}

/// Sidebar and header around a signed-in screen
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let app = use_app();

    html! {
        <div class="app-shell">
            <Sidebar current={props.route} on_navigate={app.navigate.clone()} />
            <div class="main">
                <Header
                    title={props.route.title()}
                    session={app.session.clone()}
                    on_logout={app.on_logout.clone()}
                />
                <main class="content">
                    {props.children.clone()}
                </main>
            </div>
        </div>
    }
}

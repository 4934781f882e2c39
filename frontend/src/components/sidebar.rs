use domain::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub current: Route,
    pub on_navigate: Callback<Route>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <nav class="sidebar">
            <div class="brand">{"Smoothie Admin"}</div>
            {for Route::NAVIGATION.into_iter().map(|route| {
                let onclick = {
                    let on_navigate = props.on_navigate.clone();
                    Callback::from(move |_: MouseEvent| on_navigate.emit(route))
                };
                html! {
                    <button
                        class={classes!("nav-item", (route == props.current).then_some("active"))}
                        {onclick}
                    >
                        {route.title()}
                    </button>
                }
            })}
        </nav>
    }
}

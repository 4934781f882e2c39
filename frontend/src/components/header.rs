use domain::Session;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
    pub session: Option<Session>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <header class="header">
            <h1 class="header-title">{&props.title}</h1>
            {if let Some(session) = &props.session {
                html! {
                    <div class="header-user">
                        <span class="avatar">{session.initial()}</span>
                        <span class="user-name">{&session.user.name}</span>
                        <button class="btn-link" onclick={on_logout}>{"Logout"}</button>
                    </div>
                }
            } else {
                html! {}
            }}
        </header>
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub detail: Option<AttrValue>,
    #[prop_or_default]
    pub tone: Option<AttrValue>,
}

#[function_component(StatsCard)]
pub fn stats_card(props: &StatsCardProps) -> Html {
    html! {
        <div class={classes!("stats-card", props.tone.clone())}>
            <p class="stats-title">{&props.title}</p>
            <p class="stats-value">{&props.value}</p>
            {if let Some(detail) = &props.detail {
                html! { <p class="stats-detail">{detail}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}

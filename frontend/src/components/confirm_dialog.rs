use yew::prelude::*;

use super::modal::Modal;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub is_open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or_default]
    pub warning: Option<AttrValue>,
    #[prop_or(AttrValue::from("Delete"))]
    pub confirm_label: AttrValue,
    #[prop_or_default]
    pub busy: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <Modal is_open={props.is_open} title={props.title.clone()} on_close={props.on_cancel.clone()}>
            <p>{&props.message}</p>
            {if let Some(warning) = &props.warning {
                html! { <p class="warning">{warning}</p> }
            } else {
                html! {}
            }}
            <div class="modal-actions">
                <button class="btn-secondary" onclick={on_cancel} disabled={props.busy}>{"Cancel"}</button>
                <button class="btn-danger" onclick={on_confirm} disabled={props.busy}>
                    {if props.busy { AttrValue::from("Working...") } else { props.confirm_label.clone() }}
                </button>
            </div>
        </Modal>
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingOverlayProps {
    pub visible: bool,
    /// Abandons the pending requests when the backend does not answer
    pub on_cancel: Callback<MouseEvent>,
}

#[function_component(LoadingOverlay)]
pub fn loading_overlay(props: &LoadingOverlayProps) -> Html {
    if !props.visible {
        return html! {};
    }

    html! {
        <div class="loading">
            <div class="spinner"></div>
            <p>{"报告生成中，请稍候..."}</p>
            <button type="button" class="btn btn-link" onclick={props.on_cancel.clone()}>
                {"取消"}
            </button>
        </div>
    }
}

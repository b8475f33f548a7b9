use yew::prelude::*;

use crate::controller::view::CodeStatus;

#[derive(Properties, PartialEq)]
pub struct RedeemSectionProps {
    pub visible: bool,
    pub code_status: Option<CodeStatus>,
    pub generate_visible: bool,
    pub checking_code: bool,
    pub generating: bool,

    // Event handlers
    pub on_code_input: Callback<InputEvent>,
    pub on_check_code: Callback<MouseEvent>,
    pub on_generate: Callback<MouseEvent>,
}

#[function_component(RedeemSection)]
pub fn redeem_section(props: &RedeemSectionProps) -> Html {
    let class = classes!("redeem-section", (!props.visible).then_some("hidden"));
    html! {
        <section class={class}>
            <h2>{"生成完整解读报告"}</h2>
            <div class="form-group redeem-row">
                <input
                    type="text"
                    id="redeemCode"
                    placeholder="请输入兑换码"
                    oninput={props.on_code_input.clone()}
                    disabled={props.generating}
                />
                <button
                    type="button"
                    class="btn btn-secondary"
                    disabled={props.checking_code || props.generating}
                    onclick={props.on_check_code.clone()}
                >
                    {if props.checking_code { "验证中..." } else { "验证" }}
                </button>
                {if let Some(status) = props.code_status.as_ref() {
                    html! { <span class={status.css_class()}>{status.text()}</span> }
                } else { html! {} }}
            </div>

            <button
                type="submit"
                class={classes!("btn", "btn-primary", "generate-btn", (!props.generate_visible).then_some("hidden"))}
                disabled={props.generating}
                onclick={props.on_generate.clone()}
            >
                {"生成报告"}
            </button>
        </section>
    }
}

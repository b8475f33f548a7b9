use shared::LifeResult;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub life_result: Option<LifeResult>,
    pub visible: bool,
    /// Changes whenever a new result arrives
    pub revision: u32,
}

#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    let panel_ref = use_node_ref();

    // Bring each new result into view once it is rendered
    {
        let panel_ref = panel_ref.clone();
        use_effect_with(props.revision, move |revision| {
            if *revision > 0 {
                if let Some(panel) = panel_ref.cast::<Element>() {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Center);
                    panel.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
            || ()
        });
    }

    let class = classes!("result-area", (!props.visible).then_some("hidden"));
    html! {
        <section class={class} ref={panel_ref}>
            <h2>{"你的生命数字"}</h2>
            {if let Some(result) = props.life_result.as_ref() {
                html! {
                    <div class="life-number-display">
                        <span class="life-number">{result.life_number.to_string()}</span>
                        <span class={classes!("master-label", (!result.is_master).then_some("hidden"))}>
                            {"大师数"}
                        </span>
                    </div>
                }
            } else { html! {} }}
        </section>
    }
}

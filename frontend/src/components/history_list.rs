use yew::prelude::*;

use crate::controller::view::HistoryView;

#[derive(Properties, PartialEq)]
pub struct HistoryListProps {
    /// `None` until history has been loaded
    pub history: Option<HistoryView>,
}

#[function_component(HistoryList)]
pub fn history_list(props: &HistoryListProps) -> Html {
    html! {
        <section class="history-section">
            <h2>{"历史记录"}</h2>
            <div class="history-list">
                {match props.history.as_ref() {
                    None => html! {},
                    Some(history @ HistoryView::Empty) => html! { {history.text()} },
                    Some(HistoryView::Lines(lines)) => html! {
                        {for lines.iter().map(|line| html! {
                            <span class="history-item">{line}</span>
                        })}
                    },
                }}
            </div>
        </section>
    }
}

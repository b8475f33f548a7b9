use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"生命数字解读"}</h1>
                <p class="subtitle">{"输入出生日期，了解你的生命数字"}</p>
            </div>
        </header>
    }
}

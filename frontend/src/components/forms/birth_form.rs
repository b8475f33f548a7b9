use shared::Gender;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BirthFormProps {
    pub derived_age: Option<u32>,
    pub calculating: bool,

    // Event handlers
    pub on_birthday_change: Callback<Event>,
    pub on_gender_change: Callback<Event>,
    pub on_question_change: Callback<Event>,
    pub on_calculate: Callback<MouseEvent>,
}

#[function_component(BirthForm)]
pub fn birth_form(props: &BirthFormProps) -> Html {
    html! {
        <section class="birth-form-section">
            <div class="form-group">
                <label for="birthday">{"出生日期"}</label>
                <input
                    type="date"
                    id="birthday"
                    onchange={props.on_birthday_change.clone()}
                />
            </div>

            <div class="form-group">
                <label for="gender">{"性别"}</label>
                <select id="gender" onchange={props.on_gender_change.clone()}>
                    <option value="" selected=true>{"请选择"}</option>
                    {for [Gender::Male, Gender::Female].iter().map(|gender| html! {
                        <option value={gender.as_form_value()}>{gender.label()}</option>
                    })}
                </select>
            </div>

            <div class="form-group">
                <label for="age">{"年龄"}</label>
                <input
                    type="number"
                    id="age"
                    readonly=true
                    value={props.derived_age.map(|age| age.to_string()).unwrap_or_default()}
                />
            </div>

            <div class="form-group">
                <label for="question">{"当前困惑（可选）"}</label>
                <textarea
                    id="question"
                    rows="3"
                    placeholder="例如：今年适合换工作吗？"
                    onchange={props.on_question_change.clone()}
                />
            </div>

            <button
                type="button"
                class="btn btn-primary calc-btn"
                disabled={props.calculating}
                onclick={props.on_calculate.clone()}
            >
                {if props.calculating { "计算中..." } else { "计算生命数字" }}
            </button>
        </section>
    }
}

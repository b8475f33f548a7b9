mod components;
mod controller;
mod hooks;
mod services;

use yew::prelude::*;

use components::forms::birth_form::BirthForm;
use components::header::Header;
use components::history_list::HistoryList;
use components::loading_overlay::LoadingOverlay;
use components::redeem_section::RedeemSection;
use components::result_panel::ResultPanel;
use hooks::use_life_form::use_life_form;
use services::api::ApiClient;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let life_form = use_life_form(&api_client);
    let screen = &life_form.screen;
    let actions = &life_form.actions;

    html! {
        <>
            <Header />
            <main class="container">
                <BirthForm
                    derived_age={screen.derived_age}
                    calculating={screen.calculating}
                    on_birthday_change={actions.on_birthday_change.clone()}
                    on_gender_change={actions.on_gender_change.clone()}
                    on_question_change={actions.on_question_change.clone()}
                    on_calculate={actions.on_calculate.clone()}
                />
                <ResultPanel
                    life_result={screen.life_result.clone()}
                    visible={screen.result_visible}
                    revision={screen.result_revision}
                />
                <RedeemSection
                    visible={screen.redeem_visible}
                    code_status={screen.code_status.clone()}
                    generate_visible={screen.generate_visible}
                    checking_code={screen.checking_code}
                    generating={screen.generating}
                    on_code_input={actions.on_code_input.clone()}
                    on_check_code={actions.on_check_code.clone()}
                    on_generate={actions.on_generate.clone()}
                />
                <LoadingOverlay visible={screen.loading} on_cancel={actions.on_cancel.clone()} />
                <HistoryList history={screen.history.clone()} />
            </main>
        </>
    }
}

fn main() {
    Logger::init(log::Level::Debug);
    yew::Renderer::<App>::new().render();
}

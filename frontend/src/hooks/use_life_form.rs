use std::rc::Rc;

use shared::LifeResult;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::controller::state::FormAction;
use crate::controller::view::{CodeStatus, FormView, HistoryView};
use crate::controller::{LifeFormController, COMPONENT};
use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::services::logging::Logger;

/// Everything the page renders, driven by the controller through `ScreenView`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormScreen {
    pub derived_age: Option<u32>,
    pub life_result: Option<LifeResult>,
    pub result_visible: bool,
    pub redeem_visible: bool,
    /// Bumped on every new result so the panel scrolls into view again
    pub result_revision: u32,
    pub code_status: Option<CodeStatus>,
    pub generate_visible: bool,
    pub loading: bool,
    pub calculating: bool,
    pub checking_code: bool,
    pub generating: bool,
    /// `None` until the history call succeeds
    pub history: Option<HistoryView>,
}

pub enum ScreenAction {
    Age(Option<u32>),
    LifeResult(LifeResult),
    CodeStatus(Option<CodeStatus>),
    GenerateVisible(bool),
    Loading(bool),
    Busy(FormAction, bool),
    History(HistoryView),
}

impl Reducible for FormScreen {
    type Action = ScreenAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ScreenAction::Age(age) => next.derived_age = age,
            ScreenAction::LifeResult(result) => {
                next.life_result = Some(result);
                next.result_visible = true;
                next.redeem_visible = true;
                next.result_revision = next.result_revision.wrapping_add(1);
            }
            ScreenAction::CodeStatus(status) => next.code_status = status,
            ScreenAction::GenerateVisible(visible) => next.generate_visible = visible,
            ScreenAction::Loading(visible) => next.loading = visible,
            ScreenAction::Busy(action, busy) => match action {
                FormAction::Calculate => next.calculating = busy,
                FormAction::CheckCode => next.checking_code = busy,
                FormAction::Generate => next.generating = busy,
                FormAction::History => {}
            },
            ScreenAction::History(history) => next.history = Some(history),
        }
        Rc::new(next)
    }
}

/// `FormView` backed by the page reducer plus the browser window
#[derive(Clone)]
pub struct ScreenView {
    dispatcher: UseReducerDispatcher<FormScreen>,
}

impl ScreenView {
    pub fn new(dispatcher: UseReducerDispatcher<FormScreen>) -> Self {
        Self { dispatcher }
    }
}

impl FormView for ScreenView {
    fn alert(&self, message: &str) {
        gloo::dialogs::alert(message);
    }

    fn show_age(&self, age: Option<u32>) {
        self.dispatcher.dispatch(ScreenAction::Age(age));
    }

    fn show_life_result(&self, result: &LifeResult) {
        self.dispatcher.dispatch(ScreenAction::LifeResult(result.clone()));
    }

    fn show_code_status(&self, status: Option<&CodeStatus>) {
        self.dispatcher.dispatch(ScreenAction::CodeStatus(status.cloned()));
    }

    fn set_generate_visible(&self, visible: bool) {
        self.dispatcher.dispatch(ScreenAction::GenerateVisible(visible));
    }

    fn set_loading(&self, visible: bool) {
        self.dispatcher.dispatch(ScreenAction::Loading(visible));
    }

    fn set_busy(&self, action: FormAction, busy: bool) {
        self.dispatcher.dispatch(ScreenAction::Busy(action, busy));
    }

    fn show_history(&self, history: &HistoryView) {
        self.dispatcher.dispatch(ScreenAction::History(history.clone()));
    }

    fn navigate(&self, path: &str) {
        if let Err(e) = gloo::utils::window().location().set_href(path) {
            Logger::error_with_component(COMPONENT, &format!("Navigation to {} failed: {:?}", path, e));
        }
    }
}

type PageController = LifeFormController<ApiClient, ScreenView>;

pub struct UseLifeFormResult {
    pub screen: FormScreen,
    pub actions: UseLifeFormActions,
}

#[derive(Clone, PartialEq)]
pub struct UseLifeFormActions {
    pub on_birthday_change: Callback<Event>,
    pub on_gender_change: Callback<Event>,
    pub on_question_change: Callback<Event>,
    pub on_code_input: Callback<InputEvent>,
    pub on_calculate: Callback<MouseEvent>,
    pub on_check_code: Callback<MouseEvent>,
    pub on_generate: Callback<MouseEvent>,
    pub on_cancel: Callback<MouseEvent>,
}

/// Hook wiring the life number form controller into the component tree
///
/// The controller is built once per mount; the history list is loaded on mount.
#[hook]
pub fn use_life_form(api_client: &ApiClient) -> UseLifeFormResult {
    let screen = use_reducer(FormScreen::default);

    let controller: Rc<PageController> = {
        let dispatcher = screen.dispatcher();
        let api_client = api_client.clone();
        use_memo((), move |_| {
            let config = api_client.config().clone();
            LifeFormController::new(api_client, ScreenView::new(dispatcher), config)
        })
    };

    // Load history once on mount
    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                controller.load_history().await;
            });
            || ()
        });
    }

    let on_birthday_change = {
        let controller = controller.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            controller.set_birthday(input.value(), date_utils::today());
        })
    };

    let on_gender_change = {
        let controller = controller.clone();
        use_callback((), move |e: Event, _| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            controller.set_gender(&select.value());
        })
    };

    let on_question_change = {
        let controller = controller.clone();
        use_callback((), move |e: Event, _| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            controller.set_question(textarea.value());
        })
    };

    let on_code_input = {
        let controller = controller.clone();
        use_callback((), move |e: InputEvent, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            controller.set_code_input(input.value());
        })
    };

    let on_calculate = {
        let controller = controller.clone();
        use_callback((), move |_: MouseEvent, _| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.calculate().await;
            });
        })
    };

    let on_check_code = {
        let controller = controller.clone();
        use_callback((), move |_: MouseEvent, _| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.check_code().await;
            });
        })
    };

    let on_generate = {
        let controller = controller.clone();
        use_callback((), move |e: MouseEvent, _| {
            e.prevent_default();
            let controller = controller.clone();
            spawn_local(async move {
                controller.generate_report().await;
            });
        })
    };

    let on_cancel = {
        let controller = controller.clone();
        use_callback((), move |_: MouseEvent, _| {
            controller.cancel_pending();
        })
    };

    UseLifeFormResult {
        screen: (*screen).clone(),
        actions: UseLifeFormActions {
            on_birthday_change,
            on_gender_change,
            on_question_change,
            on_code_input,
            on_calculate,
            on_check_code,
            on_generate,
            on_cancel,
        },
    }
}

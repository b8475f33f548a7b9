//! # Life Number Form Controller
//!
//! Orchestrates the form: age derivation, life number calculation, redeem
//! code check, the consume-then-generate report sequence and the startup
//! history load. Network access goes through [`LifeApi`] and everything
//! visible through [`FormView`].
//!
//! State lives in `RefCell`s so handlers can take `&self` from an `Rc`;
//! no borrow is held across an `.await`.

pub mod messages;
pub mod state;
pub mod view;


use std::cell::RefCell;

use chrono::NaiveDate;
use shared::{derive_age, normalize_redeem_code, Gender, LifeResult, RedeemCodeRequest};

use crate::services::api::{ApiError, LifeApi};
use crate::services::config::ClientConfig;
use crate::services::logging::Logger;
use state::{FormAction, FormState, RedeemState, RequestToken, RequestTracker};
use view::{CodeStatus, FormView, HistoryView};

pub(crate) const COMPONENT: &str = "life-form";

pub struct LifeFormController<A, V> {
    api: A,
    view: V,
    config: ClientConfig,
    form: RefCell<FormState>,
    life_result: RefCell<Option<LifeResult>>,
    redeem: RefCell<RedeemState>,
    requests: RefCell<RequestTracker>,
}

impl<A: LifeApi, V: FormView> LifeFormController<A, V> {
    pub fn new(api: A, view: V, config: ClientConfig) -> Self {
        Self {
            api,
            view,
            config,
            form: RefCell::new(FormState::default()),
            life_result: RefCell::new(None),
            redeem: RefCell::new(RedeemState::default()),
            requests: RefCell::new(RequestTracker::default()),
        }
    }

    /// Birthday input changed
    ///
    /// A cleared input leaves the age as it was; any other value replaces it,
    /// with no age for a future or unparseable date.
    pub fn set_birthday(&self, value: String, today: Option<NaiveDate>) {
        let cleared = value.trim().is_empty();
        let age = today.and_then(|today| derive_age(&value, today));
        let mut form = self.form.borrow_mut();
        form.birthday = value;
        if cleared {
            return;
        }
        form.derived_age = age;
        drop(form);
        self.view.show_age(age);
    }

    pub fn set_gender(&self, value: &str) {
        self.form.borrow_mut().gender = Gender::from_form_value(value);
    }

    pub fn set_question(&self, value: String) {
        self.form.borrow_mut().question = value;
    }

    /// Code input changed
    ///
    /// A validated code stays valid only while the input still normalizes to
    /// it; any other edit closes the gate until the next check.
    pub fn set_code_input(&self, value: String) {
        let normalized = normalize_redeem_code(&value);
        self.form.borrow_mut().code_input = value;

        let mut redeem = self.redeem.borrow_mut();
        let still_valid = match redeem.ready_code() {
            Some(code) => normalized.as_deref() == Some(code),
            None => return,
        };
        if !still_valid {
            *redeem = RedeemState::Idle;
            drop(redeem);
            Logger::debug_with_component(COMPONENT, "Redeem code edited after check, gate closed");
            self.view.show_code_status(None);
            self.view.set_generate_visible(false);
        }
    }

    /// Submit birthday and gender for a life number
    pub async fn calculate(&self) {
        let Some(request) = self.form.borrow().calculate_request() else {
            self.view.alert(messages::MISSING_BIRTHDAY_OR_GENDER);
            return;
        };

        let Some(token) = self.begin(FormAction::Calculate) else {
            return;
        };
        let outcome = self.api.calculate(&request).await;
        if !self.finish(token) {
            return;
        }

        match outcome {
            Ok(response) => match response.into_result() {
                Ok(result) => {
                    Logger::info_with_component(
                        COMPONENT,
                        &format!("Life number {} (master: {})", result.life_number, result.is_master),
                    );
                    let local_age = self.form.borrow().derived_age;
                    if let (Some(server_age), Some(local_age)) = (result.age, local_age) {
                        if server_age != i64::from(local_age) {
                            Logger::debug_with_component(
                                COMPONENT,
                                &format!("Backend age {} differs from local age {}", server_age, local_age),
                            );
                        }
                    }
                    self.view.show_life_result(&result);
                    *self.life_result.borrow_mut() = Some(result);
                }
                Err(message) => self.view.alert(&message),
            },
            Err(e) => {
                Logger::error_with_component(COMPONENT, &format!("Calculate failed: {}", e));
                self.view.alert(messages::CALCULATE_FAILED);
            }
        }
    }

    /// Validate the entered redeem code with the backend
    pub async fn check_code(&self) {
        if self.redeem.borrow().is_locked() {
            Logger::debug_with_component(COMPONENT, "Ignoring code check while generation is running");
            return;
        }
        let Some(code) = normalize_redeem_code(&self.form.borrow().code_input) else {
            self.view.alert(messages::EMPTY_REDEEM_CODE);
            return;
        };

        let Some(token) = self.begin(FormAction::CheckCode) else {
            return;
        };
        *self.redeem.borrow_mut() = RedeemState::Checking { code: code.clone() };
        self.view.show_code_status(None);
        self.view.set_generate_visible(false);

        let outcome = self
            .api
            .check_redeem_code(&RedeemCodeRequest { code: code.clone() })
            .await;
        if !self.finish(token) {
            return;
        }

        match outcome {
            Ok(response) if response.valid => {
                // The input may have been edited while the check was running
                let current = normalize_redeem_code(&self.form.borrow().code_input);
                if current.as_deref() != Some(code.as_str()) {
                    Logger::debug_with_component(COMPONENT, "Checked code no longer matches the input");
                    *self.redeem.borrow_mut() = RedeemState::Idle;
                    self.view.show_code_status(None);
                    return;
                }
                *self.redeem.borrow_mut() = RedeemState::Ready { code };
                self.view.show_code_status(Some(&CodeStatus::Valid));
                self.view.set_generate_visible(true);
            }
            Ok(response) => {
                *self.redeem.borrow_mut() = RedeemState::Idle;
                let status = CodeStatus::Invalid(response.message.unwrap_or_default());
                self.view.show_code_status(Some(&status));
                self.view.set_generate_visible(false);
            }
            Err(e) => {
                *self.redeem.borrow_mut() = RedeemState::Idle;
                self.view.set_generate_visible(false);
                Logger::error_with_component(COMPONENT, &format!("Redeem code check failed: {}", e));
                self.view.alert(messages::CHECK_FAILED);
            }
        }
    }

    /// Consume the validated code, then generate the report and open it
    ///
    /// The consume and generate calls are not atomic: a consumed code whose
    /// generation fails stays spent.
    pub async fn generate_report(&self) {
        match &*self.redeem.borrow() {
            RedeemState::Generating { .. } => {
                Logger::debug_with_component(COMPONENT, "Report generation already running, ignoring trigger");
                return;
            }
            RedeemState::Redeemed { report_id } => {
                Logger::debug_with_component(
                    COMPONENT,
                    &format!("Report {} already generated, ignoring trigger", report_id),
                );
                return;
            }
            _ => {}
        }
        let Some(code) = self.redeem.borrow().ready_code().map(str::to_string) else {
            self.view.alert(messages::REDEEM_CODE_NOT_CHECKED);
            return;
        };
        let Some(request) = self.form.borrow().generate_request() else {
            self.view.alert(messages::MISSING_BIRTHDAY_OR_GENDER);
            return;
        };

        let Some(token) = self.begin(FormAction::Generate) else {
            return;
        };
        *self.redeem.borrow_mut() = RedeemState::Generating { code: code.clone() };
        self.view.set_loading(true);

        let consumed = self
            .api
            .use_redeem_code(&RedeemCodeRequest { code: code.clone() })
            .await;
        if !self.requests.borrow().is_current(&token) {
            Logger::debug_with_component(COMPONENT, "Dropping redeem response for a cancelled request");
            return;
        }
        match consumed {
            Ok(response) if response.success => {}
            Ok(response) => {
                self.view.set_loading(false);
                self.finish(token);
                *self.redeem.borrow_mut() = RedeemState::Ready { code };
                self.view.alert(&response.message.unwrap_or_default());
                return;
            }
            Err(e) => return self.fail_generation(token, code, e),
        }

        let generated = self.api.generate_report(&request).await;
        if !self.requests.borrow().is_current(&token) {
            Logger::warn_with_component(
                COMPONENT,
                &format!("Redeem code {} was consumed but report generation was cancelled", code),
            );
            return;
        }

        match generated {
            Ok(response) => {
                self.view.set_loading(false);
                self.finish(token);
                match response.into_result() {
                    Ok(report_id) => {
                        let path = report_id.report_path(&self.config.report_path_prefix);
                        Logger::info_with_component(COMPONENT, &format!("Report {} generated", report_id));
                        *self.redeem.borrow_mut() = RedeemState::Redeemed { report_id };
                        self.view.navigate(&path);
                    }
                    Err(message) => {
                        Logger::warn_with_component(
                            COMPONENT,
                            &format!("Redeem code {} was consumed but generation failed: {}", code, message),
                        );
                        *self.redeem.borrow_mut() = RedeemState::Ready { code };
                        self.view.alert(&message);
                    }
                }
            }
            Err(e) => self.fail_generation(token, code, e),
        }
    }

    /// Load the history list once at startup; failures leave the list as is
    pub async fn load_history(&self) {
        let Some(token) = self.begin(FormAction::History) else {
            return;
        };
        let outcome = self.api.fetch_history().await;
        if !self.finish(token) {
            return;
        }

        match outcome {
            Ok(entries) => {
                Logger::debug_with_component(COMPONENT, &format!("Loaded {} history entries", entries.len()));
                self.view.show_history(&HistoryView::from_entries(&entries));
            }
            Err(e) => Logger::error_with_component(COMPONENT, &format!("Failed to load history: {}", e)),
        }
    }

    /// Abandon every in-flight request and return the form to a usable state
    ///
    /// Late responses for the abandoned requests are dropped. A code whose
    /// consumption was already sent may still have been spent server side.
    pub fn cancel_pending(&self) {
        let cancelled = self.requests.borrow_mut().cancel_all();
        if cancelled.is_empty() {
            return;
        }
        for action in &cancelled {
            self.view.set_busy(*action, false);
        }

        let restored = match self.redeem.take() {
            RedeemState::Generating { code } => {
                self.view.set_loading(false);
                self.view.set_generate_visible(true);
                RedeemState::Ready { code }
            }
            RedeemState::Checking { .. } => RedeemState::Idle,
            other => other,
        };
        *self.redeem.borrow_mut() = restored;
        Logger::info_with_component(COMPONENT, &format!("Cancelled pending requests: {:?}", cancelled));
    }

    fn fail_generation(&self, token: RequestToken, code: String, error: ApiError) {
        self.view.set_loading(false);
        self.finish(token);
        *self.redeem.borrow_mut() = RedeemState::Ready { code };
        Logger::error_with_component(COMPONENT, &format!("Report generation failed: {}", error));
        self.view.alert(messages::GENERATE_FAILED);
    }

    fn begin(&self, action: FormAction) -> Option<RequestToken> {
        let token = self.requests.borrow_mut().begin(action);
        match token {
            Some(_) => self.view.set_busy(action, true),
            None => Logger::debug_with_component(
                COMPONENT,
                &format!("{:?} already in flight, ignoring trigger", action),
            ),
        }
        token
    }

    /// Release a request slot; false means the request was cancelled and its
    /// response must be dropped
    fn finish(&self, token: RequestToken) -> bool {
        let current = self.requests.borrow_mut().finish(token);
        if current {
            self.view.set_busy(token.action(), false);
        } else {
            Logger::debug_with_component(
                COMPONENT,
                &format!("Dropping response for cancelled {:?} request", token.action()),
            );
        }
        current
    }
}

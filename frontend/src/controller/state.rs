use std::collections::HashMap;

use shared::{CalculateRequest, Gender, GenerateReportRequest, ReportId};

/// User-triggered actions that talk to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormAction {
    Calculate,
    CheckCode,
    Generate,
    History,
}

/// Raw form inputs, as last reported by the input controls
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub birthday: String,
    pub gender: Option<Gender>,
    pub derived_age: Option<u32>,
    pub question: String,
    pub code_input: String,
}

impl FormState {
    /// Trimmed birthday, `None` when the field is blank
    pub fn birthday(&self) -> Option<&str> {
        let birthday = self.birthday.trim();
        if birthday.is_empty() {
            None
        } else {
            Some(birthday)
        }
    }

    /// Body for the calculate call; `None` unless birthday and gender are set
    pub fn calculate_request(&self) -> Option<CalculateRequest> {
        Some(CalculateRequest {
            birthday: self.birthday()?.to_string(),
            gender: self.gender?,
        })
    }

    /// Body for the generate call; the question is optional
    pub fn generate_request(&self) -> Option<GenerateReportRequest> {
        Some(GenerateReportRequest {
            birthday: self.birthday()?.to_string(),
            gender: self.gender?,
            question: self.question.trim().to_string(),
        })
    }
}

/// Redeem gate for the report generation path
///
/// `Idle -> Checking -> Ready | Idle`, then
/// `Ready -> Generating -> Redeemed | Ready`.
/// Only `Ready` unlocks report generation.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RedeemState {
    #[default]
    Idle,
    Checking { code: String },
    Ready { code: String },
    Generating { code: String },
    /// Terminal: the browser is navigating to the report page
    Redeemed { report_id: ReportId },
}

impl RedeemState {
    /// The validated code, when generation is allowed
    pub fn ready_code(&self) -> Option<&str> {
        match self {
            RedeemState::Ready { code } => Some(code),
            _ => None,
        }
    }

    /// Generation is running or the page is leaving
    pub fn is_locked(&self) -> bool {
        matches!(
            self,
            RedeemState::Generating { .. } | RedeemState::Redeemed { .. }
        )
    }
}

/// Handle for one in-flight request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    action: FormAction,
    id: u64,
}

impl RequestToken {
    pub fn action(&self) -> FormAction {
        self.action
    }
}

/// Tracks at most one in-flight request per action
///
/// A token stays valid until it is finished or cancelled; responses that
/// arrive for a revoked token must be dropped by the caller.
#[derive(Debug, Default)]
pub struct RequestTracker {
    next_id: u64,
    active: HashMap<FormAction, u64>,
}

impl RequestTracker {
    /// Start a request, or `None` if the same action is already in flight
    pub fn begin(&mut self, action: FormAction) -> Option<RequestToken> {
        if self.active.contains_key(&action) {
            return None;
        }
        self.next_id += 1;
        self.active.insert(action, self.next_id);
        Some(RequestToken { action, id: self.next_id })
    }

    pub fn is_current(&self, token: &RequestToken) -> bool {
        self.active.get(&token.action) == Some(&token.id)
    }

    /// Release the slot; returns false if the token had been revoked
    pub fn finish(&mut self, token: RequestToken) -> bool {
        if self.is_current(&token) {
            self.active.remove(&token.action);
            true
        } else {
            false
        }
    }

    /// Revoke every outstanding token and return the affected actions
    pub fn cancel_all(&mut self) -> Vec<FormAction> {
        self.active.drain().map(|(action, _)| action).collect()
    }
}

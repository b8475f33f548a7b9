use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date format used by the birthday input and the backend (`YYYY-MM-DD`)
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Gender selected on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse the value of the gender `<select>`; the empty placeholder option yields `None`
    pub fn from_form_value(value: &str) -> Option<Self> {
        match value.trim() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn as_form_value(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "男",
            Gender::Female => "女",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// Birthday in `YYYY-MM-DD` form, sent verbatim from the date input
    pub birthday: String,
    pub gender: Gender,
}

/// Response of `POST /api/calculate`
///
/// The backend answers either with an `error` message (often with a 400 status)
/// or with the computed life number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalculateResponse {
    Failure {
        error: String,
    },
    Success {
        life_number: i64,
        is_master: bool,
        #[serde(default)]
        age: Option<i64>,
    },
}

/// Result of a successful life number calculation
#[derive(Debug, Clone, PartialEq)]
pub struct LifeResult {
    pub life_number: i64,
    pub is_master: bool,
    /// Age as computed by the backend, when it reports one
    pub age: Option<i64>,
}

impl CalculateResponse {
    /// Split the wire response into the result or the server's message
    pub fn into_result(self) -> Result<LifeResult, String> {
        match self {
            CalculateResponse::Failure { error } => Err(error),
            CalculateResponse::Success { life_number, is_master, age } => Ok(LifeResult {
                life_number,
                is_master,
                age,
            }),
        }
    }
}

/// Body shared by the redeem check and redeem use calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedeemCodeRequest {
    pub code: String,
}

/// Response of `POST /api/redeem/check`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedeemCheckResponse {
    pub valid: bool,
    /// Reason the code was rejected (present when `valid` is false)
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `POST /api/redeem/use`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedeemUseResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateReportRequest {
    pub birthday: String,
    pub gender: Gender,
    /// Optional free-text question; sent as an empty string when blank
    pub question: String,
}

/// Response of `POST /api/generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerateReportResponse {
    Failure {
        error: String,
    },
    Success {
        report_id: ReportId,
        #[serde(default)]
        life_number: Option<i64>,
    },
}

impl GenerateReportResponse {
    pub fn into_result(self) -> Result<ReportId, String> {
        match self {
            GenerateReportResponse::Failure { error } => Err(error),
            GenerateReportResponse::Success { report_id, .. } => Ok(report_id),
        }
    }
}

/// Opaque report identifier
///
/// The backend hands out integer row ids, but the client never interprets them,
/// so both JSON numbers and strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawReportId", into = "String")]
pub struct ReportId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawReportId {
    Number(i64),
    Text(String),
}

impl From<RawReportId> for ReportId {
    fn from(raw: RawReportId) -> Self {
        match raw {
            RawReportId::Number(n) => ReportId(n.to_string()),
            RawReportId::Text(s) => ReportId(s),
        }
    }
}

impl From<ReportId> for String {
    fn from(id: ReportId) -> Self {
        id.0
    }
}

impl ReportId {
    pub fn new(id: impl Into<String>) -> Self {
        ReportId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Browser path of the report page, e.g. `/report/42`
    pub fn report_path(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.0)
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of `GET /api/reports/history`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub id: Option<ReportId>,
    pub birthday: String,
    pub age: i64,
    pub life_number: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl HistoryEntry {
    /// Summary line shown in the history list, e.g. `1990-05-12 (36岁)生命数字 5`
    pub fn summary_line(&self) -> String {
        format!("{} ({}岁)生命数字 {}", self.birthday, self.age, self.life_number)
    }
}

/// Parse a `YYYY-MM-DD` birthday; blank or malformed input yields `None`
pub fn parse_birthday(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT).ok()
}

/// Age in whole years on `today`
///
/// Calendar-year difference, minus one when today's month/day is still before
/// the birth month/day. Returns `None` for birthdays after `today`.
pub fn age_on(birthday: NaiveDate, today: NaiveDate) -> Option<u32> {
    let mut age = today.year() - birthday.year();
    if (today.month(), today.day()) < (birthday.month(), birthday.day()) {
        age -= 1;
    }
    u32::try_from(age).ok()
}

/// Age derived from the raw birthday input value
pub fn derive_age(birthday: &str, today: NaiveDate) -> Option<u32> {
    parse_birthday(birthday).and_then(|date| age_on(date, today))
}

/// Trim and upper-case a redeem code; an empty result yields `None`
pub fn normalize_redeem_code(raw: &str) -> Option<String> {
    let code = raw.trim().to_uppercase();
    if code.is_empty() {
        None
    } else {
        Some(code)
    }
}

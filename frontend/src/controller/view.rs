use shared::{HistoryEntry, LifeResult};

use super::messages;
use super::state::FormAction;

/// Outcome of the last redeem code check, as shown next to the code input
#[derive(Debug, Clone, PartialEq)]
pub enum CodeStatus {
    Valid,
    Invalid(String),
}

impl CodeStatus {
    pub fn text(&self) -> String {
        match self {
            CodeStatus::Valid => messages::REDEEM_CODE_VALID.to_string(),
            CodeStatus::Invalid(reason) => format!("✗ {}", reason),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CodeStatus::Valid => "code-status valid",
            CodeStatus::Invalid(_) => "code-status invalid",
        }
    }
}

/// Rendered history list
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryView {
    Empty,
    /// One summary line per entry, in the order the backend returned them
    Lines(Vec<String>),
}

impl HistoryView {
    pub fn from_entries(entries: &[HistoryEntry]) -> Self {
        if entries.is_empty() {
            HistoryView::Empty
        } else {
            HistoryView::Lines(entries.iter().map(HistoryEntry::summary_line).collect())
        }
    }

    /// Flat text of the list; lines are joined without a separator
    pub fn text(&self) -> String {
        match self {
            HistoryView::Empty => messages::NO_HISTORY_RECORDS.to_string(),
            HistoryView::Lines(lines) => lines.concat(),
        }
    }
}

/// Rendering target of the life number form
///
/// The controller never touches the DOM directly; everything visible goes
/// through this trait so tests can swap in a recording view.
pub trait FormView {
    /// Blocking user-facing message (validation and failure reports)
    fn alert(&self, message: &str);

    /// Show the derived age; `None` blanks the field
    fn show_age(&self, age: Option<u32>);

    /// Display the life number, toggle the master label, reveal the result
    /// and redeem sections and bring the result into view
    fn show_life_result(&self, result: &LifeResult);

    /// `None` clears the status next to the code input
    fn show_code_status(&self, status: Option<&CodeStatus>);

    fn set_generate_visible(&self, visible: bool);

    fn set_loading(&self, visible: bool);

    /// Disable or re-enable the control that triggers `action`
    fn set_busy(&self, action: FormAction, busy: bool);

    fn show_history(&self, history: &HistoryView);

    fn navigate(&self, path: &str);
}

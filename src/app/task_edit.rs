use chrono::NaiveDate;

use crate::app::error::{InputError, Result};
use crate::app::models::Urgency;
use crate::app::storage::TaskStore;

// Raw answers collected by the "add task" prompts, before validation
#[derive(Debug, Clone, Default)]
pub struct TaskEditInput {
    pub description: String,
    pub due_date: String,
    pub urgency: String,
}

// Validated content of a task about to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub urgency: Urgency,
}

impl TaskEditInput {
    // Turn the raw answers into a draft.
    // A bad due date does not reject the draft: it is dropped and the error
    // is handed back as a warning.
    pub fn validate(&self, date_format: &str) -> (TaskDraft, Option<InputError>) {
        let (due_date, warning) = match parse_due_date(&self.due_date, date_format) {
            Ok(due_date) => (due_date, None),
            Err(err) => (None, Some(err)),
        };

        let draft = TaskDraft {
            description: self.description.clone(),
            due_date,
            urgency: normalize_urgency(&self.urgency),
        };
        (draft, warning)
    }
}

impl TaskDraft {
    // Saves the draft as a new task and returns its id
    pub fn save(self, storage: &mut TaskStore) -> u32 {
        storage
            .add(self.description, self.due_date, Some(self.urgency))
            .id
    }
}

/// Parses an optional due date. Blank input means "not set".
pub fn parse_due_date(input: &str, date_format: &str) -> Result<Option<NaiveDate>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(input, date_format)
        .map(Some)
        .map_err(|source| InputError::InvalidDate {
            input: input.to_string(),
            source,
        })
}

/// Maps free text to an urgency, case-insensitively. Anything unknown is Low.
pub fn normalize_urgency(input: &str) -> Urgency {
    Urgency::from_label(&capitalize(input.trim())).unwrap_or_default()
}

// "hIGH" -> "High"
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

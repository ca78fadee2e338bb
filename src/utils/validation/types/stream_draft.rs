//! The data a streamer fills in before going live.

use serde::Serialize;
use validator::ValidateLength;

use super::field_error::ValidationErrors;
use crate::utils::error_messages::{DESCRIPTION_TOO_SHORT, MISSING_TAGS, TITLE_TOO_SHORT};
use crate::utils::validation::{MIN_DESCRIPTION_LENGTH, MIN_TAGS, MIN_TITLE_LENGTH};

/// Title, description and tags of a stream about to start.
///
/// A draft carries values exactly as submitted; nothing is trimmed or
/// otherwise rewritten. Use [`StreamDraft::validate`] on a typed draft, or
/// [`crate::utils::validation::validate`] on raw JSON input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StreamDraft {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl StreamDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tags,
        }
    }

    /// Checks all three constraints and reports every one that fails
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_title(&self.title, &mut errors);
        check_description(&self.description, &mut errors);
        check_tags(&self.tags, &mut errors);
        errors.into_result(())
    }
}

pub(crate) fn check_title(title: &str, errors: &mut ValidationErrors) {
    check_min_text_length(title, MIN_TITLE_LENGTH, "title", TITLE_TOO_SHORT, errors);
}

pub(crate) fn check_description(description: &str, errors: &mut ValidationErrors) {
    check_min_text_length(description, MIN_DESCRIPTION_LENGTH, "description", DESCRIPTION_TOO_SHORT, errors);
}

pub(crate) fn check_tags<T>(tags: &T, errors: &mut ValidationErrors)
where
    T: ValidateLength<u64> + ?Sized,
{
    if !tags.validate_length(Some(MIN_TAGS), None, None) {
        errors.push("tags", MISSING_TAGS);
    }
}

// Text is measured in UTF-16 code units, the unit the browser form counts in.
fn check_min_text_length(value: &str, min: u64, field: &str, message: &str, errors: &mut ValidationErrors) {
    if (value.encode_utf16().count() as u64) < min {
        errors.push(field, message);
    }
}

//! Tagged result sent back to the form.
//!
//! On the wire a success reads `{ "ok": true, "value": { .. } }` and a
//! failure reads `{ "ok": false, "errors": [ { "field", "message" } ] }`.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::field_error::ValidationErrors;
use super::stream_draft::StreamDraft;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid(StreamDraft),
    Invalid(ValidationErrors),
}

impl ValidationOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

impl From<Result<StreamDraft, ValidationErrors>> for ValidationOutcome {
    fn from(result: Result<StreamDraft, ValidationErrors>) -> Self {
        match result {
            Ok(draft) => Self::Valid(draft),
            Err(errors) => Self::Invalid(errors),
        }
    }
}

impl Serialize for ValidationOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ValidationOutcome", 2)?;
        match self {
            Self::Valid(draft) => {
                state.serialize_field("ok", &true)?;
                state.serialize_field("value", draft)?;
            }
            Self::Invalid(errors) => {
                state.serialize_field("ok", &false)?;
                state.serialize_field("errors", errors)?;
            }
        }
        state.end()
    }
}

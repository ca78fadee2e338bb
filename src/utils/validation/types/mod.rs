//! Type definitions for the validation system

mod field_error;
mod outcome;
pub(crate) mod stream_draft;

// Re-export commonly used types and functions
pub use field_error::{FieldError, ValidationErrors};
pub use outcome::ValidationOutcome;
pub use stream_draft::StreamDraft;

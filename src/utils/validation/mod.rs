//! Root module for the validation system.
//! Exposes the public API for the start stream form.

mod constants;
mod start_stream;
mod types;

// Re-export commonly used types and functions
pub use constants::*;
pub use start_stream::validate;
pub use types::{FieldError, StreamDraft, ValidationErrors, ValidationOutcome};

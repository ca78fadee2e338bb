//! Shared helpers: input validation and the messages it reports.

pub mod error_messages;
pub mod validation;

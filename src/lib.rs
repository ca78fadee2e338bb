//! Validation of the "start stream" form, and the HTTP backend serving it.

pub mod backend;
pub mod consts;
pub mod utils;

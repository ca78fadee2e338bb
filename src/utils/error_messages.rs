//! Messages reported to the client when a field is rejected

pub const TITLE_TOO_SHORT: &str = "Title must be at least 10 characters long";

// The client has always shown this text, even though a single character passes.
pub const DESCRIPTION_TOO_SHORT: &str = "Description must be at least 10 characters long";

pub const MISSING_TAGS: &str = "You must provide at least one tag";

pub const REQUIRED: &str = "Required";

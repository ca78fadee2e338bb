//! Constants used throughout the validation system


/// Minimum length of a stream title, in UTF-16 code units
pub const MIN_TITLE_LENGTH: u64 = 10;
/// Minimum length of a stream description, in UTF-16 code units
pub const MIN_DESCRIPTION_LENGTH: u64 = 1;
/// Minimum number of tags attached to a stream
pub const MIN_TAGS: u64 = 1;

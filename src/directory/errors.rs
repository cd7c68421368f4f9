use std::num::ParseIntError;

use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

/// Reasons a directory row is rejected. Rows are static configuration, so
/// these never reach callers: the builder logs them and skips the row.
#[derive(Debug, PartialEq, Error)]
pub enum DirectoryRowError {
    #[error("Line {line_num} has no '|' separator")]
    MissingSeparator { line_num: usize },

    #[error("Line {line_num} has an empty key")]
    EmptyKey { line_num: usize },

    #[error("Country code '{0}' is not numeric")]
    InvalidCountryCode(String),

    #[error("Country data row has {found} fields, expected {expected}")]
    FieldCount { found: usize, expected: usize },

    #[error("Invalid flag '{0}', expected 0/1/true/false")]
    InvalidFlag(String),

    #[error("Failed to parse length override '{value}': {source}")]
    InvalidLength {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{0}")]
    InvalidRegex(#[from] InvalidRegexError),
}

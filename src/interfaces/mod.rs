use std::ops::RangeInclusive;

use crate::regexp_cache::InvalidRegexError;

/// Internal prefix matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
    /// Returns the number of leading characters of `digits` that are matched
    /// by `code`. Literal codes match when `digits` starts with them, regex
    /// codes when the pattern fully matches a prefix whose length lies in
    /// `regex_window` (longest prefix tried first).
    fn match_prefix(
        &self,
        code: &str,
        is_regex: bool,
        digits: &str,
        regex_window: RangeInclusive<usize>,
    ) -> Option<usize>;

    /// Compiles `pattern` ahead of the first match.
    fn check_pattern(&self, pattern: &str) -> Result<(), InvalidRegexError>;
}

/// Anything stored in the directory under a literal or regex code.
pub trait CodeEntry {
    fn code(&self) -> &str;
    fn is_regex(&self) -> bool;
}

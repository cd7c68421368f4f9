use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Concurrent cache of compiled patterns. Directory patterns are compiled on
/// first use and shared by every thread afterwards.
pub struct RegexCache {
    cache: DashMap<String, Arc<regex::Regex>>
}

impl RegexCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            Ok(regex.value().clone())
        } else {
            let entry = self.cache.entry(pattern.to_string()).or_try_insert_with(|| {
                regex::Regex::new(pattern).map(Arc::new)
            })?;
            Ok(entry.value().clone())
        }
    }

    /// Same as [`RegexCache::get_regex`] but the pattern is anchored at both
    /// ends, so a match always spans the whole input.
    pub fn get_anchored_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        self.get_regex(&fast_cat::concat_str!("^(?:", pattern, ")$"))
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::RegexCache;

    #[test]
    fn caches_compiled_patterns() {
        let cache = RegexCache::with_capacity(4);
        let first = cache.get_anchored_regex("15[0-9]").unwrap();
        let second = cache.get_anchored_regex("15[0-9]").unwrap();
        assert!(std::sync::Arc::ptr_eq(&first, &second));
        assert_eq!(1, cache.len());
        assert!(first.is_match("151"));
        assert!(!first.is_match("1512"));
    }

    #[test]
    fn reports_invalid_patterns() {
        let cache = RegexCache::new();
        assert!(cache.get_regex("15[0-9").is_err());
        assert_eq!(0, cache.len());
    }
}

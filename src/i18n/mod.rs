//! Language and region tag helpers. Callers hand in whatever their locale
//! layer produced (`de`, `de-DE`, `de_AT`, `DE`); the directory only stores
//! primary languages in lower case and region codes in upper case.

/// Language used for display names when the requested one is not available.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Returns the lower-cased primary subtag of a language tag.
pub fn primary_language(tag: &str) -> String {
    tag.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Returns the upper-cased ISO 3166 region code.
pub fn normalize_region(region: &str) -> String {
    region.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::{normalize_region, primary_language};

    #[test]
    fn reduces_language_tags() {
        assert_eq!("de", primary_language("de-DE"));
        assert_eq!("de", primary_language("DE_at"));
        assert_eq!("en", primary_language(" en "));
        assert_eq!("", primary_language(""));
    }

    #[test]
    fn upper_cases_regions() {
        assert_eq!("DE", normalize_region(" de"));
    }
}

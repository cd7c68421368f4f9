#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Dialect, PhoneNumberFormat};

/// Which renderings [`validate`](super::PhoneNumberUtil::validate) accepts.
/// Everything is allowed by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ValidationOptions {
    pub allow_e123: bool,
    pub allow_din5008: bool,
    pub allow_rfc3966: bool,
    pub allow_ms: bool,
    pub allow_url: bool,
    pub allow_common: bool,
    pub allow_national: bool,
    pub allow_international: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            allow_e123: true,
            allow_din5008: true,
            allow_rfc3966: true,
            allow_ms: true,
            allow_url: true,
            allow_common: true,
            allow_national: true,
            allow_international: true,
        }
    }
}

impl ValidationOptions {
    /// True when both the dialect and the national/international flag of
    /// `format` are set. MS only has an international form.
    pub fn allows(&self, format: PhoneNumberFormat) -> bool {
        let dialect_allowed = match format.dialect() {
            Dialect::E123 => self.allow_e123,
            Dialect::Din5008 => self.allow_din5008,
            Dialect::Rfc3966 => self.allow_rfc3966,
            Dialect::Ms => self.allow_ms,
            Dialect::Url => self.allow_url,
            Dialect::Common => self.allow_common,
        };
        let form_allowed = if format.is_international() {
            self.allow_international
        } else {
            self.allow_national
        };
        dialect_allowed && form_allowed
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::ValidationOptions;
    use crate::PhoneNumberFormat;

    #[test]
    fn default_allows_everything() {
        let options = ValidationOptions::default();
        assert!(PhoneNumberFormat::iter().all(|format| options.allows(format)));
    }

    #[test]
    fn ms_follows_international_flag() {
        let options = ValidationOptions { allow_international: false, ..Default::default() };
        assert!(!options.allows(PhoneNumberFormat::Ms));
        assert!(options.allows(PhoneNumberFormat::E123National));
        assert!(!options.allows(PhoneNumberFormat::E123International));

        let options = ValidationOptions { allow_ms: false, ..Default::default() };
        assert!(!options.allows(PhoneNumberFormat::Ms));
        assert!(options.allows(PhoneNumberFormat::UrlInternational));
    }
}

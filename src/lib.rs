mod interfaces;
mod phonenumber;
mod phonenumberutil;
mod regexp_cache;
mod regex_based_matcher;
pub mod directory;
pub mod i18n;
pub mod ibanutil;
pub mod positioned;
pub(crate) mod regex_util;

/// Boilerplate shared by the per-dialect formatter methods is generated
/// here, so the method list reads as a table instead of fifty copies of the
/// same three lines.
mod macros;

#[cfg(test)]
mod tests;

pub use directory::{AreaCodeEntry, CountryCodeEntry, CountryData, DirectoryBuilder, PhoneDirectory};
pub use ibanutil::{iban_compress, iban_format, iban_format_with_pos, IbanUtil, IBAN_UTIL};
pub use interfaces::CodeEntry;
pub use phonenumber::PhoneNumberRecord;
pub use phonenumberutil::{
    phonenumberutil::PhoneNumberUtil, Dialect, FormattedPhoneNumbers, PhoneNumberFormat,
    ValidationOptions, PHONE_NUMBER_UTIL,
};
pub use regexp_cache::InvalidRegexError;
pub use positioned::{rewrite, Edit, PositionedValue, PositionedValueWithCountry};

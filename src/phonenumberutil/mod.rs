pub(crate) mod helper_constants;
mod helper_functions;
pub mod enums;
mod formatter;
pub mod phonenumberutil;
mod phone_number_regexps_and_mappings;
pub(self) mod helper_types;
mod validation_options;

use std::sync::LazyLock;

pub use enums::{Dialect, PhoneNumberFormat};
pub use formatter::FormattedPhoneNumbers;
pub use validation_options::ValidationOptions;
use crate::phonenumberutil::phonenumberutil::PhoneNumberUtil;

/// Engine over the embedded directory, built on first use.
pub static PHONE_NUMBER_UTIL: LazyLock<PhoneNumberUtil> = LazyLock::new(|| {
    PhoneNumberUtil::new()
});

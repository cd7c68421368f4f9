//! IBAN block formatting (`DE16 7016 0000 0000 5554 44`) with the same
//! cursor preserving rewrite the phone number formatters use, plus length
//! and checksum validation.

mod iban_util;

use std::sync::LazyLock;

pub use iban_util::{iban_compress, iban_format, iban_format_with_pos, IbanUtil};

/// Validator over the embedded length table, built on first use.
pub static IBAN_UTIL: LazyLock<IbanUtil> = LazyLock::new(IbanUtil::new);

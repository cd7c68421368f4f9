mod region_code;
mod with_pos_tests;

use crate::{PhoneNumberUtil, PHONE_NUMBER_UTIL};

static ONCE: std::sync::Once = std::sync::Once::new();

// Shared engine over the embedded directory, with trace logging switched on
// for the first test that runs.
fn get_phone_util() -> &'static PhoneNumberUtil {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .init()
    );
    &PHONE_NUMBER_UTIL
}

use strum::IntoEnumIterator;

use super::{get_phone_util, region_code::RegionCode};
use crate::{PhoneNumberFormat, PhoneNumberRecord, PositionedValue, PositionedValueWithCountry};

fn input(value: &str, pos: usize) -> PositionedValueWithCountry<String> {
    PositionedValueWithCountry::new(value.to_owned(), pos, RegionCode::de(), "de")
}

fn expected(value: &str, pos: usize) -> PositionedValue<String> {
    PositionedValue::new(value.to_owned(), pos)
}

#[test]
fn groups_digits_while_typing() {
    let phone_util = get_phone_util();
    assert_eq!(
        expected("(030) 123", 9),
        phone_util.format_e123_national_with_pos(&input("030123", 6))
    );
    // cursor after "03" stays after "03"
    assert_eq!(
        expected("(030) 123", 3),
        phone_util.format_e123_national_with_pos(&input("030123", 2))
    );
    assert_eq!(
        expected("(030) 1234567", 3),
        phone_util.format_e123_national_with_pos(&input("(030) 1234567", 3))
    );
}

#[test]
fn switches_between_national_and_international() {
    let phone_util = get_phone_util();
    assert_eq!(
        expected("+49 30 123", 10),
        phone_util.format_e123_international_with_pos(&input("030123", 6))
    );
    // insertion at the cursor pushes it behind the country code
    assert_eq!(
        expected("+49 30 1234567", 4),
        phone_util.format_e123_international_with_pos(&input("0301234567", 0))
    );
    assert_eq!(
        expected("030/12", 6),
        phone_util.format_common_national_with_pos(&input("+49 (0)30 12", 12))
    );
}

#[test]
fn picks_form_by_country() {
    let phone_util = get_phone_util();
    assert_eq!(
        expected("(030) 1234567", 13),
        phone_util.format_e123_with_pos(&input("+49301234567", 12))
    );
    let austrian = PositionedValueWithCountry::new("+49301234567".to_owned(), 12, RegionCode::at(), "de");
    assert_eq!(expected("+49 30 1234567", 14), phone_util.format_e123_with_pos(&austrian));
    assert_eq!(expected("+49 (30) 1234567", 16), phone_util.format_ms_with_pos(&austrian));
}

#[test]
fn formats_extension_while_typing() {
    let phone_util = get_phone_util();
    assert_eq!(
        expected("(030) 1234567 ext. 8", 20),
        phone_util.format_e123_national_with_pos(&input("030 1234567 x8", 14))
    );
    assert_eq!(
        expected("030 1234567-8", 13),
        phone_util.format_din5008_national_with_pos(&input("030 1234567 ext 8", 17))
    );
}

#[test]
fn keeps_unrecognized_input() {
    let phone_util = get_phone_util();
    assert_eq!(expected("abc", 2), phone_util.format_e123_national_with_pos(&input("abc", 2)));
    assert_eq!(expected("abc", 3), phone_util.format_e123_national_with_pos(&input("abc", 10)));
    assert_eq!(expected("", 0), phone_util.format_url_national_with_pos(&input("", 3)));
    assert_eq!(expected("00", 2), phone_util.format_din5008_national_with_pos(&input("00", 2)));
}

/// Types `keys` one by one the way an input field does: each key goes in at
/// the cursor returned for the previous key.
fn type_keys(format: PhoneNumberFormat, keys: &str) -> PositionedValue<String> {
    let phone_util = get_phone_util();
    let mut state = PositionedValue::new(String::new(), 0);
    for key in keys.chars() {
        let mut chars: Vec<char> = state.value.chars().collect();
        chars.insert(state.pos, key);
        let typed: String = chars.into_iter().collect();
        state = phone_util.format_with_pos(&input(&typed, state.pos + 1), format);

        assert!(state.pos <= state.value.chars().count(), "{:?}: {}", format, state.value);
        let behind_cursor: String = state.value.chars().skip(state.pos).collect();
        assert!(
            behind_cursor.is_empty() || behind_cursor.starts_with(";phone-context="),
            "{:?}: {} at {}",
            format,
            state.value,
            state.pos
        );
    }
    state
}

#[test]
fn typing_key_by_key_keeps_the_number() {
    let phone_util = get_phone_util();
    let berlin = PhoneNumberRecord::from_parts("49", "30", "1234567", None);
    for keys in ["0301234567", "+49301234567", "0049301234567"] {
        for format in PhoneNumberFormat::iter() {
            let typed = type_keys(format, keys);
            let record = phone_util.parse(&typed.value, RegionCode::de(), "de");
            assert_eq!(berlin, record, "{} as {:?}: {}", keys, format, typed.value);
            assert!(record.is_valid(), "{} as {:?}: {}", keys, format, typed.value);
            assert_eq!(
                phone_util.format(Some(&record), format).as_deref(),
                Some(typed.value.as_str()),
                "{} as {:?}",
                keys,
                format
            );
        }
    }
}

#[test]
fn typing_rfc3966_national_stays_before_phone_context() {
    let typed = type_keys(PhoneNumberFormat::Rfc3966National, "0301234567");
    assert_eq!(expected("tel:030-1234567;phone-context=+49", 15), typed);

    let phone_util = get_phone_util();
    assert_eq!(
        expected("tel:030-12;phone-context=+49", 10),
        phone_util.format_rfc3966_national_with_pos(&input("03012", 5))
    );
}

#[test]
fn keeps_input_while_country_code_is_typed() {
    let phone_util = get_phone_util();
    assert_eq!(expected("+4", 2), phone_util.format_e123_national_with_pos(&input("+4", 2)));
    assert_eq!(expected("004", 3), phone_util.format_common_national_with_pos(&input("004", 3)));
    assert_eq!(expected("0", 1), phone_util.format_e123_international_with_pos(&input("0", 1)));
    assert_eq!(expected("00", 2), phone_util.format_ms_with_pos(&input("00", 2)));

    // the country code completes the prefix
    assert_eq!(expected("0", 1), phone_util.format_e123_national_with_pos(&input("+49", 3)));
    assert_eq!(expected("+49 ", 4), phone_util.format_e123_international_with_pos(&input("0049", 4)));
}

#[test]
fn cursor_stays_in_bounds() {
    let phone_util = get_phone_util();
    let value = "+49 (0)30 1234567-89";
    for pos in 0..=value.chars().count() + 2 {
        for format in PhoneNumberFormat::iter() {
            let result = phone_util.format_with_pos(&input(value, pos), format);
            assert!(result.pos <= result.value.chars().count(), "{:?} at {}", format, pos);
        }
    }
}

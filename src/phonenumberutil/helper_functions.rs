// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{
    directory::{AreaCodeEntry, CountryCodeEntry},
    positioned::{drop_n, insert_all, keep_all, Edit},
};

use super::{
    helper_constants::{MAX_LENGTH_FOR_NUMBER, MIN_LENGTH_FOR_LINE_NUMBER},
    helper_types::{CharRole, DigitLayout, Tokens},
};

/// Converts a byte offset into `s` to a character offset.
pub(super) fn char_offset(s: &str, byte_offset: usize) -> usize {
    s[..byte_offset].chars().count()
}

/// Number is complete: known country, line number within the bounds of its
/// area code (or the generic bounds without one), area code present where
/// the country requires it and no extension marker waiting for digits.
/// Country code, matched area code and line number together never exceed
/// [`MAX_LENGTH_FOR_NUMBER`], whatever bounds a pattern row declares.
pub(super) fn is_complete_number(
    country: Option<&CountryCodeEntry>,
    area: Option<&AreaCodeEntry>,
    area_code: &str,
    line_number: &str,
    extension: Option<&str>,
) -> bool {
    let Some(country) = country else {
        return false;
    };
    if line_number.is_empty() || extension.is_some_and(str::is_empty) {
        return false;
    }
    if area.is_none() && country.country_data().area_code_must_be_filled() {
        return false;
    }
    let (min_length, max_length) = match area {
        Some(area) => (area.min_length(), area.max_length()),
        None => (
            MIN_LENGTH_FOR_LINE_NUMBER,
            MAX_LENGTH_FOR_NUMBER.saturating_sub(country.country_code().len()),
        ),
    };
    let total_length = country.country_code().len() + area_code.len() + line_number.len();
    (min_length..=max_length).contains(&line_number.len()) && total_length <= MAX_LENGTH_FOR_NUMBER
}

/// First rewrite pass: keeps the digits of the number and its extension,
/// drops everything else.
pub(super) fn cleaning_edits(tokens: &Tokens) -> impl Iterator<Item = Edit> + '_ {
    tokens.chars.iter().zip(&tokens.roles).map(|(c, role)| match role {
        CharRole::MainDigit | CharRole::ExtensionDigit => Edit::Keep(*c),
        CharRole::Plus | CharRole::Ignored => Edit::Drop,
    })
}

/// Second rewrite pass: turns the typed digits, laid out as `layout`
/// describes, into the digits an international (country code, area code,
/// line number, extension) or national (trunk code, area code, line number,
/// extension) format shows. Digits the target lacks are inserted.
pub(super) fn layout_edits(
    digits: &str,
    layout: &DigitLayout,
    country_code: &str,
    trunk_code: &str,
    international: bool,
) -> Vec<Edit> {
    let mut rest = digits;
    let exit_code = split_off(&mut rest, layout.exit_code);
    let typed_country_code = split_off(&mut rest, layout.country_code);
    let typed_trunk_code = split_off(&mut rest, layout.trunk_code);

    let mut edits = Vec::with_capacity(digits.len() + country_code.len() + trunk_code.len());
    edits.extend(drop_n(exit_code.len()));
    if international {
        if typed_country_code.is_empty() {
            edits.extend(insert_all(country_code));
        } else {
            edits.extend(keep_all(typed_country_code));
        }
        edits.extend(drop_n(typed_trunk_code.len()));
    } else {
        edits.extend(drop_n(typed_country_code.len()));
        if typed_trunk_code.is_empty() {
            edits.extend(insert_all(trunk_code));
        } else {
            edits.extend(keep_all(typed_trunk_code));
        }
    }
    edits.extend(keep_all(rest));
    edits
}

/// Splits the first `count` ASCII digits off `rest`.
fn split_off<'a>(rest: &mut &'a str, count: usize) -> &'a str {
    let (head, tail) = rest.split_at(count.min(rest.len()));
    *rest = tail;
    head
}

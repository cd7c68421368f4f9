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

use crate::{directory::CountryCodeEntry, phonenumber::PhoneNumberRecord};

/// What the cleaning pass does with one input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CharRole {
    /// Digit of the number itself.
    MainDigit,
    /// Digit of the extension.
    ExtensionDigit,
    /// The leading plus sign. Dropped from the digits, but remembered.
    Plus,
    /// Punctuation, labels, `tel:`, `(0)`, parameters.
    Ignored,
}

/// Input text split into significant characters.
#[derive(Debug)]
pub(super) struct Tokens {
    /// Normalized input characters.
    pub chars: Vec<char>,
    /// One role per entry of `chars`.
    pub roles: Vec<CharRole>,
    /// An extension marker (`;ext=`, label, DIN hyphen) was found.
    pub has_extension_marker: bool,
    /// The marker is a DIN 5008 hyphen, which only counts when a complete
    /// number stands in front of it.
    pub extension_from_hyphen: bool,
    /// Digits of an RFC 3966 `phone-context` parameter.
    pub phone_context: Option<String>,
    /// First parenthesized digit group, `(0)` in `+49 (0)30 1234567`.
    pub parenthesized: Option<ParenthesizedDigits>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ParenthesizedDigits {
    /// Number of main digits in front of the group.
    pub digits_before: usize,
    pub digits: String,
}

impl Tokens {
    pub fn digits_with_role(&self, role: CharRole) -> String {
        self.chars
            .iter()
            .zip(&self.roles)
            .filter(|(_, r)| **r == role)
            .map(|(c, _)| *c)
            .collect()
    }

    pub fn has_plus(&self) -> bool {
        self.roles.contains(&CharRole::Plus)
    }
}

/// How the cleaned digits (main digits followed by extension digits) are
/// split, in digit counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct DigitLayout {
    /// Exit code digits (`00`) in front of the country code.
    pub exit_code: usize,
    /// Country code digits that were typed (zero when implied).
    pub country_code: usize,
    /// Trunk code digits that were typed.
    pub trunk_code: usize,
    pub area_code: usize,
    pub line_number: usize,
    pub extension: usize,
}

/// Result of parsing: the record plus what the cursor-preserving variants
/// need to map positions.
pub(super) struct ParsedNumber<'d> {
    pub record: PhoneNumberRecord,
    pub country: Option<&'d CountryCodeEntry>,
    pub layout: DigitLayout,
    /// Country, area code and line number are complete, extension aside.
    pub number_complete: bool,
    /// The digits typed so far still lead to a country code: an
    /// international prefix whose country has not been matched yet, or a
    /// proper prefix of the exit code (`0` of `00`).
    pub country_pending: bool,
}

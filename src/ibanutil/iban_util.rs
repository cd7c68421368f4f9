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

use std::collections::HashMap;

use log::trace;

use crate::{
    i18n::normalize_region,
    positioned::{rewrite, Edit, PositionedValue},
};

/// Characters per printed block.
const BLOCK_SIZE: usize = 4;

/// ISO 13616 checksum modulus.
const IBAN_MODULUS: u32 = 97;

/// IBAN length per country, as registered with SWIFT.
const IBAN_LENGTHS: &[(&str, usize)] = &[
    ("AD", 24), ("AE", 23), ("AL", 28), ("AT", 20), ("AZ", 28), ("BA", 20),
    ("BE", 16), ("BG", 22), ("BH", 22), ("BR", 29), ("BY", 28), ("CH", 21),
    ("CR", 22), ("CY", 28), ("CZ", 24), ("DE", 22), ("DK", 18), ("DO", 28),
    ("EE", 20), ("EG", 29), ("ES", 24), ("FI", 18), ("FO", 18), ("FR", 27),
    ("GB", 22), ("GE", 22), ("GI", 23), ("GL", 18), ("GR", 27), ("GT", 28),
    ("HR", 21), ("HU", 28), ("IE", 22), ("IL", 23), ("IQ", 23), ("IS", 26),
    ("IT", 27), ("JO", 30), ("KW", 30), ("KZ", 20), ("LB", 28), ("LC", 32),
    ("LI", 21), ("LT", 20), ("LU", 20), ("LV", 21), ("MC", 27), ("MD", 24),
    ("ME", 22), ("MK", 19), ("MR", 27), ("MT", 31), ("MU", 30), ("NL", 18),
    ("NO", 15), ("PK", 24), ("PL", 28), ("PS", 29), ("PT", 25), ("QA", 29),
    ("RO", 24), ("RS", 22), ("SA", 24), ("SC", 31), ("SE", 24), ("SI", 19),
    ("SK", 24), ("SM", 27), ("ST", 25), ("SV", 28), ("TL", 23), ("TN", 24),
    ("TR", 26), ("UA", 29), ("VA", 22), ("VG", 24), ("XK", 20),
];

/// Edits grouping the alphanumeric characters of `iban` in blocks of four,
/// upper-cased. Everything else is dropped.
fn block_edits(iban: &str) -> impl Iterator<Item = Edit> + '_ {
    let mut kept = 0usize;
    iban.chars().flat_map(move |c| {
        if !c.is_ascii_alphanumeric() {
            return [Some(Edit::Drop), None];
        }
        let separator = (kept > 0 && kept % BLOCK_SIZE == 0).then_some(Edit::Insert(' '));
        kept += 1;
        [separator, Some(Edit::Keep(c.to_ascii_uppercase()))]
    })
    .flatten()
}

/// Prints an IBAN in blocks of four: `DE16 7016 0000 0000 5554 44`.
pub fn iban_format(iban: Option<&str>) -> Option<String> {
    iban.map(|iban| rewrite(0, block_edits(iban)).value)
}

/// [`iban_format`] for text being typed: the cursor stays next to the
/// character it was next to.
pub fn iban_format_with_pos(input: &PositionedValue<String>) -> PositionedValue<String> {
    rewrite(input.pos, block_edits(&input.value))
}

/// Strips everything but letters and digits: `DE16701600000000555444`.
pub fn iban_compress(iban: Option<&str>) -> Option<String> {
    iban.map(|iban| iban.chars().filter(char::is_ascii_alphanumeric).collect())
}

/// Length and checksum validation.
pub struct IbanUtil {
    lengths: HashMap<String, usize>,
}

impl IbanUtil {
    /// Validator over the embedded length table.
    pub fn new() -> Self {
        Self::from_lengths(IBAN_LENGTHS.iter().copied())
    }

    /// Validator over a caller supplied `(country, length)` table.
    pub fn from_lengths<'a>(lengths: impl IntoIterator<Item = (&'a str, usize)>) -> Self {
        Self {
            lengths: lengths
                .into_iter()
                .map(|(country, length)| (normalize_region(country), length))
                .collect(),
        }
    }

    /// Country of a (possibly formatted) IBAN when the country is known.
    pub fn country_of_iban(&self, iban: &str) -> Option<String> {
        let compressed = iban_compress(Some(iban))?;
        let country = normalize_region(compressed.get(..2)?);
        self.lengths.contains_key(&country).then_some(country)
    }

    /// True for an IBAN of a known country with the registered length and a
    /// correct checksum. Blanks and other separators are ignored.
    pub fn is_valid_iban(&self, iban: &str) -> bool {
        let Some(compressed) = iban_compress(Some(iban)) else {
            return false;
        };
        let compressed = compressed.to_ascii_uppercase();
        let Some(country) = self.country_of_iban(&compressed) else {
            trace!("Unknown IBAN country in '{}'", iban);
            return false;
        };
        if self.lengths.get(&country) != Some(&compressed.len()) {
            trace!("IBAN '{}' has the wrong length for {}", iban, country);
            return false;
        }
        checksum_remainder(&compressed) == Some(1)
    }
}

impl Default for IbanUtil {
    fn default() -> Self {
        Self::new()
    }
}

/// ISO 13616 checksum: the first four characters move to the end, letters
/// count as 10 to 35, the resulting number modulo 97 is 1 for a correct IBAN.
fn checksum_remainder(iban: &str) -> Option<u32> {
    if iban.len() < 4 || !iban.is_ascii() {
        return None;
    }
    let (head, tail) = iban.split_at(4);
    let mut buffer = itoa::Buffer::new();
    let mut remainder = 0u32;
    for c in tail.chars().chain(head.chars()) {
        let value = c.to_digit(36)?;
        for digit in buffer.format(value).bytes() {
            remainder = (remainder * 10 + u32::from(digit - b'0')) % IBAN_MODULUS;
        }
    }
    Some(remainder)
}

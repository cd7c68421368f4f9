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

use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A phone number split into its dialing components.
///
/// Equality and hashing only look at the numeric components (country code,
/// area code, line number, extension); display names and the validity flag
/// are ignored.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhoneNumberRecord {
    pub country_code: String,
    pub country_name: String,
    /// Empty when no area code was recognized.
    pub area_code: String,
    pub area_name: String,
    pub line_number: String,
    /// `Some("")` when an extension marker was typed but no digits yet.
    pub extension: Option<String>,
    /// `None` until the record went through a full parse.
    pub valid: Option<bool>,
}

impl PhoneNumberRecord {
    /// Builds a record from its components. Display names stay empty and the
    /// record is not checked, `valid` is `None`.
    pub fn from_parts(
        country_code: &str,
        area_code: &str,
        line_number: &str,
        extension: Option<&str>,
    ) -> Self {
        Self {
            country_code: country_code.to_owned(),
            area_code: area_code.to_owned(),
            line_number: line_number.to_owned(),
            extension: extension.map(str::to_owned),
            ..Default::default()
        }
    }

    /// True when nothing at all was recognized.
    pub fn is_empty(&self) -> bool {
        self.country_code.is_empty()
            && self.area_code.is_empty()
            && self.line_number.is_empty()
            && self.extension.is_none()
    }

    pub fn is_valid(&self) -> bool {
        self.valid.unwrap_or(false)
    }

    /// Extension digits, empty when there is none.
    pub fn extension(&self) -> &str {
        self.extension.as_deref().unwrap_or_default()
    }
}

impl PartialEq for PhoneNumberRecord {
    fn eq(&self, other: &Self) -> bool {
        self.country_code == other.country_code
            && self.area_code == other.area_code
            && self.line_number == other.line_number
            && self.extension == other.extension
    }
}

impl Eq for PhoneNumberRecord {}

impl Hash for PhoneNumberRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.country_code.hash(state);
        self.area_code.hash(state);
        self.line_number.hash(state);
        self.extension.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::PhoneNumberRecord;

    #[test]
    fn equality_ignores_display_fields() {
        let mut parsed = PhoneNumberRecord::from_parts("49", "30", "1234567", None);
        parsed.country_name = "Germany".to_owned();
        parsed.area_name = "Berlin".to_owned();
        parsed.valid = Some(true);
        let built = PhoneNumberRecord::from_parts("49", "30", "1234567", None);
        assert_eq!(built, parsed);
        assert_eq!(None, built.valid);

        let mut set = HashSet::new();
        set.insert(parsed);
        assert!(set.contains(&built));
    }

    #[test]
    fn extension_takes_part_in_equality() {
        let plain = PhoneNumberRecord::from_parts("49", "30", "1234567", None);
        let with_ext = PhoneNumberRecord::from_parts("49", "30", "1234567", Some("89"));
        let empty_ext = PhoneNumberRecord::from_parts("49", "30", "1234567", Some(""));
        assert_ne!(plain, with_ext);
        assert_ne!(plain, empty_ext);
        assert_eq!("", plain.extension());
    }
}

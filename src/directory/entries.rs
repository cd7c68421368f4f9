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

use crate::{
    i18n::{primary_language, DEFAULT_LANGUAGE},
    interfaces::CodeEntry,
    phonenumberutil::helper_constants::{
        AREA_NAME_LENGTH_SEPARATOR, MAX_LENGTH_FOR_NUMBER, MIN_LENGTH_FOR_LINE_NUMBER,
    },
};

use super::errors::DirectoryRowError;

/// Dialing conventions of one country.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryData {
    trunk_code: String,
    exit_code: String,
    area_code_must_be_filled: bool,
}

impl CountryData {
    pub fn new(trunk_code: &str, exit_code: &str, area_code_must_be_filled: bool) -> Self {
        Self {
            trunk_code: trunk_code.to_owned(),
            exit_code: exit_code.to_owned(),
            area_code_must_be_filled,
        }
    }

    /// Digits dialed in front of the area code inside the country, `"0"` in
    /// most of Europe. May be empty.
    pub fn trunk_code(&self) -> &str {
        &self.trunk_code
    }

    /// Digits dialed instead of `+`, `"00"` in most of Europe. May be empty.
    pub fn exit_code(&self) -> &str {
        &self.exit_code
    }

    pub fn area_code_must_be_filled(&self) -> bool {
        self.area_code_must_be_filled
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaCodeEntry {
    area_code: String,
    is_regex: bool,
    area_name: String,
    min_length: usize,
    max_length: usize,
}

impl AreaCodeEntry {
    /// Builds an entry from a directory row. `raw_name` may carry explicit
    /// line number bounds: `Name~min` or `Name~min~max`.
    pub fn new(country_code: &str, area_code: &str, raw_name: &str) -> Result<Self, DirectoryRowError> {
        let is_regex = !is_numeric(area_code);
        let mut parts = raw_name.split(AREA_NAME_LENGTH_SEPARATOR);
        let area_name = parts.next().unwrap_or_default().trim().to_owned();

        // a pattern has no fixed length; the overall budget is checked
        // against the code it actually matched
        let area_code_length = if is_regex { 0 } else { area_code.len() };
        let default_max = MAX_LENGTH_FOR_NUMBER
            .saturating_sub(country_code.len())
            .saturating_sub(area_code_length);

        let min_length = match parts.next() {
            Some(value) => parse_length(value)?,
            None => MIN_LENGTH_FOR_LINE_NUMBER,
        };
        let max_length = match parts.next() {
            Some(value) => parse_length(value)?,
            None => default_max,
        };

        Ok(Self {
            area_code: area_code.to_owned(),
            is_regex,
            area_name,
            min_length,
            max_length: max_length.max(min_length),
        })
    }

    pub fn area_code(&self) -> &str {
        &self.area_code
    }

    pub fn is_regex(&self) -> bool {
        self.is_regex
    }

    pub fn area_name(&self) -> &str {
        &self.area_name
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub(crate) fn set_area_name(&mut self, area_name: String) {
        self.area_name = area_name;
    }
}

impl CodeEntry for AreaCodeEntry {
    fn code(&self) -> &str {
        &self.area_code
    }

    fn is_regex(&self) -> bool {
        self.is_regex
    }
}

#[derive(Debug, Clone)]
pub struct CountryCodeEntry {
    country_code: String,
    country_names: HashMap<String, String>,
    country_data: CountryData,
    region_codes: Vec<String>,
    area_codes: Vec<AreaCodeEntry>,
}

impl CountryCodeEntry {
    pub(super) fn new(
        country_code: String,
        country_names: HashMap<String, String>,
        country_data: CountryData,
        region_codes: Vec<String>,
        area_codes: Vec<AreaCodeEntry>,
    ) -> Self {
        Self { country_code, country_names, country_data, region_codes, area_codes }
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Display name in the requested language, falling back to English and
    /// then to an empty string.
    pub fn display_name(&self, language: &str) -> &str {
        self.country_names
            .get(&primary_language(language))
            .or_else(|| self.country_names.get(DEFAULT_LANGUAGE))
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn country_data(&self) -> &CountryData {
        &self.country_data
    }

    /// ISO 3166 regions dialed with this code, in directory order.
    pub fn region_codes(&self) -> &[String] {
        &self.region_codes
    }

    /// Area codes in matching order.
    pub fn area_codes(&self) -> &[AreaCodeEntry] {
        &self.area_codes
    }
}

impl CodeEntry for CountryCodeEntry {
    fn code(&self) -> &str {
        &self.country_code
    }

    fn is_regex(&self) -> bool {
        !is_numeric(&self.country_code)
    }
}

pub(super) fn is_numeric(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit())
}

fn parse_length(value: &str) -> Result<usize, DirectoryRowError> {
    value.trim().parse().map_err(|source| DirectoryRowError::InvalidLength {
        value: value.to_owned(),
        source,
    })
}

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

//! Country and area code directory.
//!
//! The directory is built once, either from the rows embedded in the crate
//! ([`PhoneDirectory::embedded`]) or from caller supplied rows
//! ([`PhoneDirectory::builder`]), and is read-only afterwards.

mod entries;
pub mod errors;
pub mod loader;
pub mod ordering;

use std::{collections::HashMap, ops::RangeInclusive};

use log::{trace, warn};

pub use entries::{AreaCodeEntry, CountryCodeEntry, CountryData};
use errors::DirectoryRowError;
use loader::{parse_flag, parse_rows};

use crate::{
    i18n::{normalize_region, primary_language},
    interfaces::{CodeEntry, MatcherApi},
    phonenumberutil::helper_constants::{AREA_CODE_REGEX_WINDOW, COUNTRY_CODE_REGEX_WINDOW},
    regex_based_matcher::RegexBasedMatcher,
};

pub struct PhoneDirectory {
    /// An API for prefix matching.
    matcher_api: Box<dyn MatcherApi>,

    /// Country entries in matching order, see [`ordering::entry_order`].
    countries: Vec<CountryCodeEntry>,

    /// Country calling code to index in `countries`.
    country_code_to_index: HashMap<String, usize>,

    /// ISO region code to index in `countries`. Regions sharing a calling
    /// code (US and CA share 1) point to the same entry.
    region_to_index: HashMap<String, usize>,
}

impl PhoneDirectory {
    /// Directory built from the rows shipped in `resources/`.
    pub fn embedded() -> Self {
        let mut builder = Self::builder();
        for (language, text) in loader::COUNTRY_NAMES {
            builder.country_name_rows(language, text);
        }
        builder.country_data_rows(loader::COUNTRY_DATA);
        for (country_code, text) in loader::AREA_CODES {
            builder.area_code_rows(country_code, text);
        }
        builder.build()
    }

    pub fn builder() -> DirectoryBuilder {
        DirectoryBuilder::new()
    }

    /// All countries in matching order.
    pub fn countries(&self) -> &[CountryCodeEntry] {
        &self.countries
    }

    pub fn country_for_code(&self, country_code: &str) -> Option<&CountryCodeEntry> {
        self.country_code_to_index
            .get(country_code)
            .map(|index| &self.countries[*index])
    }

    /// Looks a country up by ISO 3166 region code (`"DE"`, case-insensitive).
    pub fn country_for_region(&self, region_code: &str) -> Option<&CountryCodeEntry> {
        self.region_to_index
            .get(&normalize_region(region_code))
            .map(|index| &self.countries[*index])
    }

    /// Finds the country whose calling code starts `digits`. Returns the entry
    /// and the digits after the code.
    ///
    /// Entries are tried in matching order and the first hit wins, so `"49"`
    /// is always preferred to `"4"`.
    pub fn match_country<'d, 's>(&'d self, digits: &'s str) -> Option<(&'d CountryCodeEntry, &'s str)> {
        let (entry, length) =
            self.first_structural_match(&self.countries, digits, COUNTRY_CODE_REGEX_WINDOW, |_, _| true)?;
        trace!("Digits '{}' matched country code {}", digits, entry.country_code());
        Some((entry, &digits[length..]))
    }

    /// Finds the area code of `country` starting `digits`. An entry only
    /// matches when the remaining line number has at least the entry's
    /// minimal length. Without a match the whole input is the remainder.
    pub fn match_area<'d, 's>(
        &'d self,
        country: &'d CountryCodeEntry,
        digits: &'s str,
    ) -> (Option<&'d AreaCodeEntry>, &'s str) {
        let found = self.first_structural_match(
            country.area_codes(),
            digits,
            AREA_CODE_REGEX_WINDOW,
            |entry, length| digits.len() - length >= entry.min_length(),
        );
        match found {
            Some((entry, length)) => {
                trace!(
                    "Digits '{}' matched area code {} ({}) of country {}",
                    digits, &digits[..length], entry.area_name(), country.country_code()
                );
                (Some(entry), &digits[length..])
            }
            None => (None, digits),
        }
    }

    fn first_structural_match<'e, E: CodeEntry>(
        &self,
        entries: &'e [E],
        digits: &str,
        regex_window: RangeInclusive<usize>,
        accept: impl Fn(&E, usize) -> bool,
    ) -> Option<(&'e E, usize)> {
        entries.iter().find_map(|entry| {
            self.matcher_api
                .match_prefix(entry.code(), entry.is_regex(), digits, regex_window.clone())
                .filter(|length| accept(entry, *length))
                .map(|length| (entry, length))
        })
    }
}

#[derive(Default)]
struct PendingCountry {
    names: HashMap<String, String>,
    data: Option<CountryData>,
    regions: Vec<String>,
    areas: Vec<AreaCodeEntry>,
}

/// Collects directory rows. Every `add_*` call validates its row; the
/// `*_rows` helpers parse whole resource texts and skip (and log) rows that
/// fail.
pub struct DirectoryBuilder {
    matcher_api: Box<dyn MatcherApi>,
    countries: HashMap<String, PendingCountry>,
}

impl DirectoryBuilder {
    fn new() -> Self {
        Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            countries: HashMap::new(),
        }
    }

    /// Registers a display name. A later name for the same country and
    /// language replaces the earlier one.
    pub fn add_country_name(
        &mut self,
        language: &str,
        country_code: &str,
        name: &str,
    ) -> Result<&mut Self, DirectoryRowError> {
        self.pending(country_code)?
            .names
            .insert(primary_language(language), name.trim().to_owned());
        Ok(self)
    }

    /// Registers the dialing conventions of `region_code`. The first data
    /// registered for a calling code is kept, later regions sharing the code
    /// are only added to its region list.
    pub fn add_country_data(
        &mut self,
        region_code: &str,
        country_code: &str,
        data: CountryData,
    ) -> Result<&mut Self, DirectoryRowError> {
        let region_code = normalize_region(region_code);
        let pending = self.pending(country_code)?;
        if pending.data.is_none() {
            pending.data = Some(data);
        }
        if !pending.regions.contains(&region_code) {
            pending.regions.push(region_code);
        }
        Ok(self)
    }

    /// Registers an area code (literal digits or a regex pattern). A
    /// duplicate code only replaces the area name.
    pub fn add_area_code(
        &mut self,
        country_code: &str,
        area_code: &str,
        raw_name: &str,
    ) -> Result<&mut Self, DirectoryRowError> {
        let entry = AreaCodeEntry::new(country_code, area_code, raw_name)?;
        if entry.is_regex() {
            self.matcher_api.check_pattern(area_code)?;
        }
        let pending = self.pending(country_code)?;
        match pending.areas.iter_mut().find(|known| known.area_code() == area_code) {
            Some(known) => known.set_area_name(entry.area_name().to_owned()),
            None => pending.areas.push(entry),
        }
        Ok(self)
    }

    /// Rows `country-code|name`.
    pub fn country_name_rows(&mut self, language: &str, text: &str) -> &mut Self {
        for row in parse_rows(text) {
            let result = row.and_then(|row| {
                self.add_country_name(language, row.key, row.value).map(|_| ())
            });
            if let Err(err) = result {
                warn!("Skipping country name row ({}): {}", language, err);
            }
        }
        self
    }

    /// Rows `ISO|country-code|trunk-code|exit-code|area-code-must-be-filled`.
    pub fn country_data_rows(&mut self, text: &str) -> &mut Self {
        for row in parse_rows(text) {
            let result = row.and_then(|row| {
                let fields: Vec<&str> = row.value.split('|').map(str::trim).collect();
                let [country_code, trunk_code, exit_code, must_be_filled] = fields[..] else {
                    return Err(DirectoryRowError::FieldCount { found: fields.len() + 1, expected: 5 });
                };
                let data = CountryData::new(trunk_code, exit_code, parse_flag(must_be_filled)?);
                self.add_country_data(row.key, country_code, data).map(|_| ())
            });
            if let Err(err) = result {
                warn!("Skipping country data row: {}", err);
            }
        }
        self
    }

    /// Rows `area-code-or-pattern|area name[~min[~max]]` of one country.
    pub fn area_code_rows(&mut self, country_code: &str, text: &str) -> &mut Self {
        for row in parse_rows(text) {
            let result = row.and_then(|row| {
                self.add_area_code(country_code, row.key, row.value).map(|_| ())
            });
            if let Err(err) = result {
                warn!("Skipping area code row of country {}: {}", country_code, err);
            }
        }
        self
    }

    pub fn build(self) -> PhoneDirectory {
        let mut countries: Vec<CountryCodeEntry> = self
            .countries
            .into_iter()
            .map(|(country_code, mut pending)| {
                pending.areas.sort_by(ordering::entry_order);
                CountryCodeEntry::new(
                    country_code,
                    pending.names,
                    pending.data.unwrap_or_default(),
                    pending.regions,
                    pending.areas,
                )
            })
            .collect();
        countries.sort_by(ordering::entry_order);

        let mut country_code_to_index = HashMap::with_capacity(countries.len());
        let mut region_to_index = HashMap::new();
        for (index, country) in countries.iter().enumerate() {
            country_code_to_index.insert(country.country_code().to_owned(), index);
            for region in country.region_codes() {
                region_to_index.insert(region.clone(), index);
            }
        }

        PhoneDirectory {
            matcher_api: self.matcher_api,
            countries,
            country_code_to_index,
            region_to_index,
        }
    }

    fn pending(&mut self, country_code: &str) -> Result<&mut PendingCountry, DirectoryRowError> {
        let country_code = country_code.trim();
        if !entries::is_numeric(country_code) {
            return Err(DirectoryRowError::InvalidCountryCode(country_code.to_owned()));
        }
        Ok(self.countries.entry(country_code.to_owned()).or_default())
    }
}

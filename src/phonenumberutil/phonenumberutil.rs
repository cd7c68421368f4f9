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

use std::sync::Arc;

use log::{trace, warn};
use strum::IntoEnumIterator;

use super::{
    formatter::{self, FormattedPhoneNumbers, RenderParts},
    helper_constants::{PLUS_CHAR, RFC3966_EXTN_PARAM, RFC3966_PHONE_CONTEXT_PARAM},
    helper_functions::{char_offset, cleaning_edits, is_complete_number, layout_edits},
    helper_types::{CharRole, DigitLayout, ParenthesizedDigits, ParsedNumber, Tokens},
    phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings,
    Dialect, PhoneNumberFormat, ValidationOptions,
};
use crate::{
    directory::{ordering::suggestion_order, CountryCodeEntry, PhoneDirectory},
    macros::dialect_formatters,
    phonenumber::PhoneNumberRecord,
    positioned::{rewrite, PositionedValue, PositionedValueWithCountry},
};

pub struct PhoneNumberUtil {
    /// Country and area codes numbers are matched against.
    directory: Arc<PhoneDirectory>,

    /// Helper class holding useful regular expressions.
    reg_exps: PhoneNumberRegExpsAndMappings,
}

impl PhoneNumberUtil {
    pub(super) fn new() -> Self {
        Self::new_for_directory(Arc::new(PhoneDirectory::embedded()))
    }

    /// Engine working on a caller supplied directory.
    pub fn new_for_directory(directory: Arc<PhoneDirectory>) -> Self {
        Self {
            directory,
            reg_exps: PhoneNumberRegExpsAndMappings::new(),
        }
    }

    pub fn directory(&self) -> &PhoneDirectory {
        &self.directory
    }

    /// Parses free-form text into a record.
    ///
    /// `country` is the ISO region assumed for numbers without country code
    /// (`"DE"`), `language` selects the display names. Parsing never fails:
    /// whatever could be recognized is filled in and `valid` tells whether
    /// the number is complete. Blank input yields an empty invalid record.
    pub fn parse(&self, phone_number: &str, country: &str, language: &str) -> PhoneNumberRecord {
        if phone_number.trim().is_empty() {
            return PhoneNumberRecord { valid: Some(false), ..Default::default() };
        }
        self.analyze(phone_number, country, language).1.record
    }

    /// Parses `phone_number` and renders it as `format`.
    pub fn parse_and_format(
        &self,
        phone_number: &str,
        country: &str,
        language: &str,
        format: PhoneNumberFormat,
    ) -> String {
        let record = self.parse(phone_number, country, language);
        self.format_record(&record, format)
    }

    /// Renders `record` as `format`; `None` for an absent record.
    pub fn format(&self, record: Option<&PhoneNumberRecord>, format: PhoneNumberFormat) -> Option<String> {
        record.map(|record| self.format_record(record, format))
    }

    /// Renders `record` in every format.
    pub fn format_all(&self, record: Option<&PhoneNumberRecord>) -> Option<FormattedPhoneNumbers> {
        let record = record?;
        let mut formatted = FormattedPhoneNumbers::default();
        for format in PhoneNumberFormat::iter() {
            *formatted.get_mut(format) = self.format_record(record, format);
        }
        Some(formatted)
    }

    /// Microsoft canonical address. There is no national form, so there is no
    /// choice to make either.
    pub fn format_ms(&self, record: Option<&PhoneNumberRecord>) -> Option<String> {
        self.format(record, PhoneNumberFormat::Ms)
    }

    pub fn format_ms_with_pos(
        &self,
        input: &PositionedValueWithCountry<String>,
    ) -> PositionedValue<String> {
        self.format_with_pos(input, PhoneNumberFormat::Ms)
    }

    dialect_formatters! {
        E123 {
            auto: format_e123,
            international: format_e123_international,
            national: format_e123_national,
            auto_with_pos: format_e123_with_pos,
            international_with_pos: format_e123_international_with_pos,
            national_with_pos: format_e123_national_with_pos,
        }
        Din5008 {
            auto: format_din5008,
            international: format_din5008_international,
            national: format_din5008_national,
            auto_with_pos: format_din5008_with_pos,
            international_with_pos: format_din5008_international_with_pos,
            national_with_pos: format_din5008_national_with_pos,
        }
        Rfc3966 {
            auto: format_rfc3966,
            international: format_rfc3966_international,
            national: format_rfc3966_national,
            auto_with_pos: format_rfc3966_with_pos,
            international_with_pos: format_rfc3966_international_with_pos,
            national_with_pos: format_rfc3966_national_with_pos,
        }
        Url {
            auto: format_url,
            international: format_url_international,
            national: format_url_national,
            auto_with_pos: format_url_with_pos,
            international_with_pos: format_url_international_with_pos,
            national_with_pos: format_url_national_with_pos,
        }
        Common {
            auto: format_common,
            international: format_common_international,
            national: format_common_national,
            auto_with_pos: format_common_with_pos,
            international_with_pos: format_common_international_with_pos,
            national_with_pos: format_common_national_with_pos,
        }
    }

    /// Reformats text while the user types in it.
    ///
    /// The input is parsed with its own country and language hints and
    /// rendered as `format`; the cursor keeps its place relative to the
    /// digits around it. Input in which nothing could be recognized is
    /// returned unchanged (cursor clamped), and so is input whose country
    /// code is still being typed (`+4`, `00`, a lone `0`).
    pub fn format_with_pos(
        &self,
        input: &PositionedValueWithCountry<String>,
        format: PhoneNumberFormat,
    ) -> PositionedValue<String> {
        let positioned = &input.positioned;
        if positioned.value.trim().is_empty() {
            return positioned.clamped();
        }
        let (tokens, parsed) = self.analyze(&positioned.value, &input.country, &input.language);
        self.format_parsed_with_pos(positioned, &tokens, &parsed, format)
    }

    /// Cursor preserving variant of the per-dialect "auto" formatters.
    fn auto_format_with_pos(
        &self,
        input: &PositionedValueWithCountry<String>,
        dialect: Dialect,
    ) -> PositionedValue<String> {
        let positioned = &input.positioned;
        if positioned.value.trim().is_empty() {
            return positioned.clamped();
        }
        let (tokens, parsed) = self.analyze(&positioned.value, &input.country, &input.language);
        let format = self.preferred_format(dialect, &parsed.record.country_code, &input.country);
        self.format_parsed_with_pos(positioned, &tokens, &parsed, format)
    }

    fn format_parsed_with_pos(
        &self,
        positioned: &PositionedValue<String>,
        tokens: &Tokens,
        parsed: &ParsedNumber<'_>,
        format: PhoneNumberFormat,
    ) -> PositionedValue<String> {
        let record = &parsed.record;
        let has_digits = tokens
            .roles
            .iter()
            .any(|role| matches!(role, CharRole::MainDigit | CharRole::ExtensionDigit));
        if !has_digits || (record.country_code.is_empty() && record.line_number.is_empty()) {
            trace!("Nothing recognized in '{}', keeping it", positioned.value);
            return positioned.clamped();
        }
        if parsed.country_pending {
            trace!("Country code of '{}' not typed yet, keeping it", positioned.value);
            return positioned.clamped();
        }

        let cleaned = rewrite(positioned.pos, cleaning_edits(tokens));
        let parts = self.render_parts(record, parsed.country);
        let laid_out = rewrite(
            cleaned.pos,
            layout_edits(
                &cleaned.value,
                &parsed.layout,
                parts.country_code,
                parts.trunk_code,
                format.is_international(),
            ),
        );
        let rendered = rewrite(laid_out.pos, formatter::render(&parts, format));
        let cursor_limit =
            rendered.value.chars().count() - formatter::trailing_parameter_len(&parts, format);
        PositionedValue::new(rendered.value, rendered.pos.min(cursor_limit))
    }

    /// True when `phone_number` is a complete number written exactly as one
    /// of the formats `options` allows.
    pub fn validate(&self, phone_number: &str, country: &str, options: &ValidationOptions) -> bool {
        if phone_number.trim().is_empty() {
            return false;
        }
        let record = self.parse(phone_number, country, "");
        if !record.is_valid() {
            trace!("'{}' is not a complete number", phone_number);
            return false;
        }
        PhoneNumberFormat::iter()
            .filter(|format| options.allows(*format))
            .any(|format| self.format_record(&record, format) == phone_number)
    }

    /// Completions for a partially typed number.
    ///
    /// As long as the digits typed do not select a country, every country
    /// whose code starts with them is suggested. Afterwards the literal area
    /// codes of that country starting with the remaining digits are.
    /// A leading `+` or `00` is ignored.
    pub fn get_suggestions(&self, query: &str, limit: usize, language: &str) -> Vec<PhoneNumberRecord> {
        let normalized = dec_from_char::normalize_decimals(query);
        let trimmed = normalized.trim();
        let trimmed = trimmed
            .strip_prefix(PLUS_CHAR)
            .or_else(|| trimmed.strip_prefix("00"))
            .unwrap_or(trimmed);
        let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();

        let mut suggestions: Vec<PhoneNumberRecord> = match self.directory.match_country(&digits) {
            None => self
                .directory
                .countries()
                .iter()
                .filter(|country| country.country_code().starts_with(digits.as_str()))
                .map(|country| Self::suggestion(country, "", "", language))
                .collect(),
            Some((country, rest)) => country
                .area_codes()
                .iter()
                .filter(|area| !area.is_regex() && area.area_code().starts_with(rest))
                .map(|area| Self::suggestion(country, area.area_code(), area.area_name(), language))
                .collect(),
        };
        suggestions.sort_by(suggestion_order);
        suggestions.truncate(limit);
        suggestions
    }

    fn suggestion(
        country: &CountryCodeEntry,
        area_code: &str,
        area_name: &str,
        language: &str,
    ) -> PhoneNumberRecord {
        PhoneNumberRecord {
            country_name: country.display_name(language).to_owned(),
            area_name: area_name.to_owned(),
            ..PhoneNumberRecord::from_parts(country.country_code(), area_code, "", None)
        }
    }

    /// National form when the number belongs to `country`, international
    /// otherwise.
    fn preferred_format(&self, dialect: Dialect, country_code: &str, country: &str) -> PhoneNumberFormat {
        let home = self.directory.country_for_region(country);
        match home {
            Some(home) if !country_code.is_empty() && home.country_code() == country_code => {
                dialect.national()
            }
            _ => dialect.international(),
        }
    }

    fn format_record(&self, record: &PhoneNumberRecord, format: PhoneNumberFormat) -> String {
        let country = self.directory.country_for_code(&record.country_code);
        formatter::to_text(&formatter::render(&self.render_parts(record, country), format))
    }

    fn render_parts<'a>(
        &self,
        record: &'a PhoneNumberRecord,
        country: Option<&'a CountryCodeEntry>,
    ) -> RenderParts<'a> {
        RenderParts {
            country_code: &record.country_code,
            trunk_code: country.map(|c| c.country_data().trunk_code()).unwrap_or_default(),
            area_code: &record.area_code,
            line_number: &record.line_number,
            extension: record.extension.as_deref(),
        }
    }

    /// Tokenizes and parses `phone_number`. A DIN 5008 hyphen only starts an
    /// extension when the digits in front of it form a complete number, so
    /// `(212) 555-1234` stays one number.
    fn analyze(&self, phone_number: &str, country: &str, language: &str) -> (Tokens, ParsedNumber<'_>) {
        let tokens = self.tokenize(phone_number, true);
        let parsed = self.parse_tokens(&tokens, country, language);
        if !tokens.extension_from_hyphen || parsed.number_complete {
            return (tokens, parsed);
        }
        trace!("Hyphen in '{}' does not follow a complete number", phone_number);
        let tokens = self.tokenize(phone_number, false);
        let parsed = self.parse_tokens(&tokens, country, language);
        (tokens, parsed)
    }

    /// Splits the text into number digits, extension digits and noise.
    fn tokenize(&self, phone_number: &str, hyphen_extension: bool) -> Tokens {
        let text: String = dec_from_char::normalize_decimals(phone_number).chars().collect();
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Tokens {
            roles: vec![CharRole::Ignored; chars.len()],
            chars,
            has_extension_marker: false,
            extension_from_hyphen: false,
            phone_context: None,
            parenthesized: None,
        };

        let rfc3966_prefix = self.reg_exps.rfc3966_prefix_pattern.find(&text);
        let start = rfc3966_prefix.map_or(0, |prefix| char_offset(&text, prefix.end()));
        let mut end = tokens.chars[start..]
            .iter()
            .position(|c| *c == ';')
            .map_or(tokens.chars.len(), |offset| start + offset);

        self.tokenize_parameters(&mut tokens, end);
        if !tokens.has_extension_marker {
            let main: String = tokens.chars[start..end].iter().collect();
            let (captures, from_hyphen) = match self.reg_exps.explicit_extension_pattern.captures(&main) {
                Some(captures) => (Some(captures), false),
                None if hyphen_extension && rfc3966_prefix.is_none() => {
                    (self.reg_exps.hyphen_extension_pattern.captures(&main), true)
                }
                None => (None, false),
            };
            if let Some(captures) = captures {
                if let (Some(main_part), Some(extension)) = (captures.name("main"), captures.name("ext")) {
                    let extension_start = start + char_offset(&main, extension.start());
                    let extension_end = start + char_offset(&main, extension.end());
                    Self::mark_digits(&mut tokens, extension_start..extension_end, CharRole::ExtensionDigit);
                    tokens.has_extension_marker = true;
                    tokens.extension_from_hyphen = from_hyphen;
                    end = start + char_offset(&main, main_part.end());
                }
            }
        }

        let mut digits_seen = 0;
        let mut index = start;
        while index < end {
            let c = tokens.chars[index];
            if c.is_ascii_digit() {
                tokens.roles[index] = CharRole::MainDigit;
                digits_seen += 1;
            } else if c == PLUS_CHAR && digits_seen == 0 && !tokens.has_plus() {
                tokens.roles[index] = CharRole::Plus;
            } else if c == '(' && tokens.parenthesized.is_none() {
                let group: String = tokens.chars[index + 1..end]
                    .iter()
                    .take_while(|c| c.is_ascii_digit())
                    .collect();
                if !group.is_empty() && tokens.chars.get(index + 1 + group.len()) == Some(&')') {
                    tokens.parenthesized = Some(ParenthesizedDigits { digits_before: digits_seen, digits: group });
                }
            }
            index += 1;
        }
        tokens
    }

    /// Reads the `;`-separated RFC 3966 parameters starting at `start`.
    fn tokenize_parameters(&self, tokens: &mut Tokens, start: usize) {
        let len = tokens.chars.len();
        let mut segment_start = start + 1;
        while segment_start <= len {
            let segment_end = tokens.chars[segment_start..]
                .iter()
                .position(|c| *c == ';')
                .map_or(len, |offset| segment_start + offset);
            let segment: String = tokens.chars[segment_start..segment_end].iter().collect();
            let segment = segment.to_ascii_lowercase();
            if segment.starts_with(RFC3966_EXTN_PARAM) {
                let value_start = segment_start + RFC3966_EXTN_PARAM.len();
                Self::mark_digits(tokens, value_start..segment_end, CharRole::ExtensionDigit);
                tokens.has_extension_marker = true;
            } else if let Some(context) = segment.strip_prefix(RFC3966_PHONE_CONTEXT_PARAM) {
                tokens.phone_context = Some(context.chars().filter(char::is_ascii_digit).collect());
            }
            segment_start = segment_end + 1;
        }
    }

    fn mark_digits(tokens: &mut Tokens, range: std::ops::Range<usize>, role: CharRole) {
        for index in range {
            if tokens.chars[index].is_ascii_digit() {
                tokens.roles[index] = role;
            }
        }
    }

    /// Resolves country, trunk, area code and line number of the tokens.
    fn parse_tokens(&self, tokens: &Tokens, country: &str, language: &str) -> ParsedNumber<'_> {
        let main_digits = tokens.digits_with_role(CharRole::MainDigit);
        let extension_digits = tokens.digits_with_role(CharRole::ExtensionDigit);
        let mut layout = DigitLayout::default();

        let default_country = match &tokens.phone_context {
            Some(context) => self.directory.country_for_code(context),
            None => self.directory.country_for_region(country),
        };
        if default_country.is_none() && !country.trim().is_empty() {
            warn!("Unknown region code provided: {}", country);
        }
        let default_exit_code = default_country
            .map(|c| c.country_data().exit_code())
            .unwrap_or_default();
        let exit_code = Some(default_exit_code)
            .filter(|exit_code| !exit_code.is_empty() && main_digits.starts_with(exit_code));
        let typing_exit_code = !tokens.has_plus()
            && !main_digits.is_empty()
            && main_digits.len() < default_exit_code.len()
            && default_exit_code.starts_with(main_digits.as_str());

        let (matched_country, national) = if tokens.has_plus() || exit_code.is_some() {
            let after_exit = &main_digits[exit_code.map_or(0, str::len)..];
            layout.exit_code = main_digits.len() - after_exit.len();
            match self.directory.match_country(after_exit) {
                Some((matched, rest)) => {
                    layout.country_code = after_exit.len() - rest.len();
                    let trunk_code = matched.country_data().trunk_code();
                    let marked_trunk = tokens.parenthesized.as_ref().is_some_and(|group| {
                        group.digits_before == layout.exit_code + layout.country_code
                            && group.digits == trunk_code
                    });
                    let rest = match rest.strip_prefix(trunk_code) {
                        Some(without_trunk) if marked_trunk => {
                            layout.trunk_code = trunk_code.len();
                            without_trunk
                        }
                        _ => rest,
                    };
                    (Some(matched), rest)
                }
                None => (None, after_exit),
            }
        } else if let Some(default_country) = default_country {
            let trunk_code = default_country.country_data().trunk_code();
            match main_digits.strip_prefix(trunk_code) {
                Some(without_trunk) if !trunk_code.is_empty() => {
                    layout.trunk_code = trunk_code.len();
                    (Some(default_country), without_trunk)
                }
                _ => (Some(default_country), main_digits.as_str()),
            }
        } else {
            (None, main_digits.as_str())
        };

        let (area, line_number) = match matched_country {
            Some(matched) => self.directory.match_area(matched, national),
            None => (None, national),
        };
        let area_code = &national[..national.len() - line_number.len()];
        layout.area_code = area_code.len();
        layout.line_number = line_number.len();
        layout.extension = extension_digits.len();

        let extension = tokens.has_extension_marker.then_some(extension_digits);
        let number_complete = is_complete_number(matched_country, area, area_code, line_number, None);
        let valid = is_complete_number(matched_country, area, area_code, line_number, extension.as_deref());
        let international = tokens.has_plus() || layout.exit_code > 0;
        let country_pending = (international && matched_country.is_none()) || typing_exit_code;
        trace!(
            "Parsed digits '{}' as country '{}', area '{}', line '{}' (valid: {})",
            main_digits,
            matched_country.map(|c| c.country_code()).unwrap_or_default(),
            area_code,
            line_number,
            valid
        );

        let record = PhoneNumberRecord {
            country_code: matched_country.map(|c| c.country_code().to_owned()).unwrap_or_default(),
            country_name: matched_country
                .map(|c| c.display_name(language).to_owned())
                .unwrap_or_default(),
            area_code: area_code.to_owned(),
            area_name: area.map(|a| a.area_name().to_owned()).unwrap_or_default(),
            line_number: line_number.to_owned(),
            extension,
            valid: Some(valid),
        };
        ParsedNumber {
            record,
            country: matched_country,
            layout,
            number_complete,
            country_pending,
        }
    }
}

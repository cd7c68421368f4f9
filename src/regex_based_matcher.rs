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

use std::ops::RangeInclusive;

use log::error;

use super::regex_util::RegexFullMatch;
use crate::{interfaces::MatcherApi, regexp_cache::{InvalidRegexError, RegexCache}};

pub struct RegexBasedMatcher {
    cache: RegexCache,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self { cache: RegexCache::with_capacity(128) }
    }

    fn match_pattern(
        &self,
        digits: &str,
        pattern: &str,
        regex_window: RangeInclusive<usize>,
    ) -> Result<Option<usize>, InvalidRegexError> {
        let regexp = self.cache.get_anchored_regex(pattern)?;
        let longest = (*regex_window.end()).min(digits.len());
        let shortest = (*regex_window.start()).max(1);
        if longest < shortest {
            return Ok(None);
        }
        Ok((shortest..=longest)
            .rev()
            .find(|len| digits.is_char_boundary(*len) && regexp.full_match(&digits[..*len])))
    }
}

impl Default for RegexBasedMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MatcherApi for RegexBasedMatcher {
    fn match_prefix(
        &self,
        code: &str,
        is_regex: bool,
        digits: &str,
        regex_window: RangeInclusive<usize>,
    ) -> Option<usize> {
        // We don't want to consider it a prefix match when matching non-empty input
        // against an empty code.
        if code.is_empty() {
            return None;
        }
        if !is_regex {
            return digits.starts_with(code).then_some(code.len());
        }
        match self.match_pattern(digits, code, regex_window) {
            Ok(matched) => matched,
            Err(err) => {
                error!("Invalid regex! {}: {}", code, err);
                None
            }
        }
    }

    fn check_pattern(&self, pattern: &str) -> Result<(), InvalidRegexError> {
        self.cache.get_anchored_regex(pattern).map(|_| ())
    }
}

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

use regex::Regex;

use super::helper_constants::{EXPLICIT_EXTN_LABELS, GROUP_SEPARATORS};

pub(super) struct PhoneNumberRegExpsAndMappings {
    /// An extension introduced by a label at the end of the number, e.g.
    /// `030 1234567 ext. 89`, `030 1234567 x89`. The `marker` group covers
    /// the label and the white space around it, `ext` the digits (possibly
    /// none yet).
    pub explicit_extension_pattern: Regex,

    /// DIN 5008 / common notation extension: `030 1234567-89`. Only a
    /// candidate when the number in front was grouped by a space, a slash or
    /// a closing parenthesis, so `030-1234567` stays a plain number. `main`
    /// runs up to the last hyphen.
    pub hyphen_extension_pattern: Regex,

    /// RFC 3966 prefix, matched case-insensitively.
    pub rfc3966_prefix_pattern: Regex,
}

impl PhoneNumberRegExpsAndMappings {
    pub fn new() -> Self {
        let explicit_extension = fast_cat::concat_str!(
            r"^(?P<main>.*?\d)(?P<marker>\s*(?i:",
            EXPLICIT_EXTN_LABELS,
            r")\s*)(?P<ext>\d*)\s*$"
        );
        let hyphen_extension = fast_cat::concat_str!(
            r"^(?P<main>.*",
            GROUP_SEPARATORS,
            r".*\d)(?P<marker>\s*-\s*)(?P<ext>\d*)\s*$"
        );
        Self {
            explicit_extension_pattern: Regex::new(&explicit_extension)
                .expect("Invalid constant pattern!"),
            hyphen_extension_pattern: Regex::new(&hyphen_extension)
                .expect("Invalid constant pattern!"),
            rfc3966_prefix_pattern: Regex::new(r"^\s*(?i:tel:)")
                .expect("Invalid constant pattern!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PhoneNumberRegExpsAndMappings;

    #[test]
    fn finds_labelled_extensions() {
        let reg_exps = PhoneNumberRegExpsAndMappings::new();
        let captures = reg_exps
            .explicit_extension_pattern
            .captures("(030) 1234567 ext. 89")
            .unwrap();
        assert_eq!("(030) 1234567", &captures["main"]);
        assert_eq!(" ext. ", &captures["marker"]);
        assert_eq!("89", &captures["ext"]);

        let captures = reg_exps.explicit_extension_pattern.captures("030 1234567 X").unwrap();
        assert_eq!("", &captures["ext"]);

        assert!(reg_exps.explicit_extension_pattern.captures("0301234567").is_none());
    }

    #[test]
    fn hyphen_needs_grouped_number() {
        let reg_exps = PhoneNumberRegExpsAndMappings::new();
        let captures = reg_exps.hyphen_extension_pattern.captures("030 1234567-89").unwrap();
        assert_eq!("030 1234567", &captures["main"]);
        assert_eq!("89", &captures["ext"]);

        let captures = reg_exps.hyphen_extension_pattern.captures("030/1234567-").unwrap();
        assert_eq!("", &captures["ext"]);

        let captures = reg_exps.hyphen_extension_pattern.captures("+1 212-555-1234").unwrap();
        assert_eq!("+1 212-555", &captures["main"]);

        assert!(reg_exps.hyphen_extension_pattern.captures("030-1234567").is_none());
        assert!(reg_exps.hyphen_extension_pattern.captures("030 123-45 67").is_none());
    }
}

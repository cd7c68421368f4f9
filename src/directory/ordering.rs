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

//! Explicit orders used by the directory. Matching scans entries in
//! [`entry_order`] and takes the first hit, so that order *is* the matching
//! algorithm and must not be swapped for `Ord` on the entry types.

use std::cmp::Ordering;

use crate::{interfaces::CodeEntry, phonenumber::PhoneNumberRecord};

/// Character-wise comparison in which a code sorts *before* every code it is
/// a proper prefix of, e.g. `"49" < "4" < "5"`.
///
/// This is lexical order with "end of string" ranking above every character,
/// hence a total order.
pub fn prefix_priority_order(a: &str, b: &str) -> Ordering {
    let mut left = a.chars();
    let mut right = b.chars();
    loop {
        match (left.next(), right.next()) {
            (Some(l), Some(r)) => match l.cmp(&r) {
                Ordering::Equal => continue,
                other => return other,
            },
            (None, None) => return Ordering::Equal,
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
        }
    }
}

/// Literal codes before regex codes; literal codes by
/// [`prefix_priority_order`], patterns lexically.
pub fn entry_order<E: CodeEntry>(a: &E, b: &E) -> Ordering {
    match (a.is_regex(), b.is_regex()) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (false, false) => prefix_priority_order(a.code(), b.code()),
        (true, true) => a.code().cmp(b.code()),
    }
}

/// Order of suggestion lists: country code, area code, line number and
/// extension, each lexically so a shorter prefix comes first.
pub fn suggestion_order(a: &PhoneNumberRecord, b: &PhoneNumberRecord) -> Ordering {
    a.country_code
        .cmp(&b.country_code)
        .then_with(|| a.area_code.cmp(&b.area_code))
        .then_with(|| a.line_number.cmp(&b.line_number))
        .then_with(|| a.extension.cmp(&b.extension))
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{entry_order, prefix_priority_order, suggestion_order};
    use crate::{interfaces::CodeEntry, phonenumber::PhoneNumberRecord};

    struct Code(&'static str);

    impl CodeEntry for Code {
        fn code(&self) -> &str {
            self.0
        }

        fn is_regex(&self) -> bool {
            !self.0.bytes().all(|b| b.is_ascii_digit())
        }
    }

    #[test]
    fn longer_code_precedes_its_prefix() {
        assert_eq!(Ordering::Less, prefix_priority_order("49", "4"));
        assert_eq!(Ordering::Greater, prefix_priority_order("4", "49"));
        assert_eq!(Ordering::Less, prefix_priority_order("4", "5"));
        assert_eq!(Ordering::Less, prefix_priority_order("45", "49"));
        assert_eq!(Ordering::Equal, prefix_priority_order("49", "49"));
    }

    #[test]
    fn sorts_literals_then_patterns() {
        let mut codes = vec![
            Code("5"),
            Code("1[67][0-9]"),
            Code("4"),
            Code("49"),
            Code("15[0-9]"),
            Code("45"),
            Code("1"),
        ];
        codes.sort_by(entry_order);
        let sorted: Vec<_> = codes.iter().map(|c| c.0).collect();
        assert_eq!(vec!["1", "45", "49", "4", "5", "15[0-9]", "1[67][0-9]"], sorted);
    }

    #[test]
    fn order_is_transitive_on_sample() {
        let sample = ["", "1", "12", "121", "2", "21", "211", "3"];
        for a in sample {
            for b in sample {
                for c in sample {
                    if prefix_priority_order(a, b) != Ordering::Greater
                        && prefix_priority_order(b, c) != Ordering::Greater
                    {
                        assert_ne!(Ordering::Greater, prefix_priority_order(a, c), "{a} {b} {c}");
                    }
                }
            }
        }
    }

    #[test]
    fn suggestions_sort_shorter_area_first() {
        let berlin = PhoneNumberRecord::from_parts("49", "30", "", None);
        let long = PhoneNumberRecord::from_parts("49", "3021", "", None);
        let austria = PhoneNumberRecord::from_parts("43", "1", "", None);
        assert_eq!(Ordering::Less, suggestion_order(&berlin, &long));
        assert_eq!(Ordering::Less, suggestion_order(&austria, &berlin));
    }
}

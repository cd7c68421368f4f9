//! Line based `key|value` rows the directory is built from.
//!
//! Blank lines and lines starting with `#` are ignored; everything else must
//! contain a `|` and a non-empty key.

use super::errors::DirectoryRowError;

pub(super) const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("en", include_str!("../../resources/country_names_en.txt")),
    ("de", include_str!("../../resources/country_names_de.txt")),
];

pub(super) const COUNTRY_DATA: &str = include_str!("../../resources/country_data.txt");

pub(super) const AREA_CODES: &[(&str, &str)] = &[
    ("1", include_str!("../../resources/area_codes/1.txt")),
    ("33", include_str!("../../resources/area_codes/33.txt")),
    ("41", include_str!("../../resources/area_codes/41.txt")),
    ("43", include_str!("../../resources/area_codes/43.txt")),
    ("44", include_str!("../../resources/area_codes/44.txt")),
    ("49", include_str!("../../resources/area_codes/49.txt")),
];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Row<'a> {
    pub line_num: usize,
    pub key: &'a str,
    pub value: &'a str,
}

/// Splits `text` into rows. Malformed lines are yielded as errors so the
/// caller can report them with their line number and carry on.
pub fn parse_rows(text: &str) -> impl Iterator<Item = Result<Row<'_>, DirectoryRowError>> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line_num = index + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            let Some((key, value)) = line.split_once('|') else {
                return Some(Err(DirectoryRowError::MissingSeparator { line_num }));
            };
            let key = key.trim();
            if key.is_empty() {
                return Some(Err(DirectoryRowError::EmptyKey { line_num }));
            }
            Some(Ok(Row { line_num, key, value: value.trim() }))
        })
}

/// Parses `1`/`0`/`true`/`false` (any case, `y`/`n` as well).
pub fn parse_flag(value: &str) -> Result<bool, DirectoryRowError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "y" | "yes" => Ok(true),
        "0" | "false" | "n" | "no" | "" => Ok(false),
        _ => Err(DirectoryRowError::InvalidFlag(value.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_flag, parse_rows, Row};
    use crate::directory::errors::DirectoryRowError;

    #[test]
    fn skips_comments_and_reports_malformed_lines() {
        let text = "# comment\n\n30|Berlin\nno separator\n|nameless\n 40 | Hamburg \n";
        let rows: Vec<_> = parse_rows(text).collect();
        assert_eq!(
            vec![
                Ok(Row { line_num: 3, key: "30", value: "Berlin" }),
                Err(DirectoryRowError::MissingSeparator { line_num: 4 }),
                Err(DirectoryRowError::EmptyKey { line_num: 5 }),
                Ok(Row { line_num: 6, key: "40", value: "Hamburg" }),
            ],
            rows
        );
    }

    #[test]
    fn reads_flags() {
        assert_eq!(Ok(true), parse_flag("1"));
        assert_eq!(Ok(true), parse_flag("TRUE"));
        assert_eq!(Ok(false), parse_flag("0"));
        assert!(parse_flag("maybe").is_err());
    }
}

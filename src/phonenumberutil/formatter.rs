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

//! Rendering of a parsed number. Every format is expressed as a list of
//! [`Edit`]s over the digits the format shows: digits are kept, punctuation
//! is inserted. Plain formatting just collects the characters, the cursor
//! preserving variants feed the same list to the rewriter.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    helper_constants::{
        DEFAULT_EXTN_PREFIX, HYPHEN_EXTN_PREFIX, PLUS_SIGN, RFC3966_EXTN_PREFIX,
        RFC3966_PHONE_CONTEXT, RFC3966_PREFIX,
    },
    PhoneNumberFormat,
};
use crate::positioned::{insert_all, keep_all, Edit};

/// The components a format is rendered from.
#[derive(Debug, Clone, Copy)]
pub(super) struct RenderParts<'a> {
    /// Empty when the country is unknown.
    pub country_code: &'a str,
    pub trunk_code: &'a str,
    pub area_code: &'a str,
    pub line_number: &'a str,
    pub extension: Option<&'a str>,
}

#[derive(Default)]
struct Renderer {
    edits: Vec<Edit>,
}

impl Renderer {
    fn digits(&mut self, digits: &str) -> &mut Self {
        self.edits.extend(keep_all(digits));
        self
    }

    fn text(&mut self, text: &str) -> &mut Self {
        self.edits.extend(insert_all(text));
        self
    }

    fn text_if(&mut self, condition: bool, text: &str) -> &mut Self {
        if condition {
            self.text(text);
        }
        self
    }
}

/// Edits producing `format` from the digits it shows, in this order:
/// country code (international forms) or trunk code (national forms), area
/// code, line number, extension.
pub(super) fn render(parts: &RenderParts<'_>, format: PhoneNumberFormat) -> Vec<Edit> {
    let mut out = Renderer::default();
    let RenderParts { country_code, trunk_code, area_code, line_number, extension } = *parts;
    let has_area = !area_code.is_empty();

    if country_code.is_empty() {
        out.text_if(format.dialect() == super::Dialect::Rfc3966, RFC3966_PREFIX)
            .text_if(format.is_international(), PLUS_SIGN)
            .digits(line_number);
    } else {
        match format {
            PhoneNumberFormat::E123International | PhoneNumberFormat::Din5008International => {
                out.text(PLUS_SIGN).digits(country_code).text(" ");
                if has_area {
                    out.digits(area_code).text(" ");
                }
            }
            PhoneNumberFormat::E123National => {
                if has_area {
                    out.text("(").digits(trunk_code).digits(area_code).text(") ");
                } else {
                    out.digits(trunk_code);
                }
            }
            PhoneNumberFormat::Din5008National => {
                out.digits(trunk_code).digits(area_code).text_if(has_area, " ");
            }
            PhoneNumberFormat::Rfc3966International => {
                out.text(RFC3966_PREFIX).text(PLUS_SIGN).digits(country_code).text("-");
                if has_area {
                    out.digits(area_code).text("-");
                }
            }
            PhoneNumberFormat::Rfc3966National => {
                out.text(RFC3966_PREFIX)
                    .digits(trunk_code)
                    .digits(area_code)
                    .text_if(has_area, "-");
            }
            PhoneNumberFormat::Ms => {
                out.text(PLUS_SIGN).digits(country_code).text(" ");
                if has_area {
                    out.text("(").digits(area_code).text(") ");
                }
            }
            PhoneNumberFormat::UrlInternational => {
                out.text(PLUS_SIGN).digits(country_code).digits(area_code);
            }
            PhoneNumberFormat::UrlNational => {
                out.digits(trunk_code).digits(area_code);
            }
            PhoneNumberFormat::CommonInternational => {
                out.text(PLUS_SIGN).digits(country_code).text(" ");
                if !trunk_code.is_empty() {
                    out.text("(").text(trunk_code).text(")");
                }
                if has_area {
                    out.digits(area_code).text(" ");
                }
            }
            PhoneNumberFormat::CommonNational => {
                out.digits(trunk_code).digits(area_code).text_if(has_area, "/");
            }
        }
        out.digits(line_number);
    }

    if let Some(extension) = extension {
        out.text(extension_prefix(format)).digits(extension);
    }
    if has_phone_context(parts, format) {
        out.text(RFC3966_PHONE_CONTEXT).text(PLUS_SIGN).text(country_code);
    }
    out.edits
}

fn has_phone_context(parts: &RenderParts<'_>, format: PhoneNumberFormat) -> bool {
    format == PhoneNumberFormat::Rfc3966National && !parts.country_code.is_empty()
}

/// Length of the parameter `format` appends behind the number and its
/// extension. A cursor must stay in front of it, otherwise the next digit
/// typed lands inside the parameter.
pub(super) fn trailing_parameter_len(parts: &RenderParts<'_>, format: PhoneNumberFormat) -> usize {
    if has_phone_context(parts, format) {
        RFC3966_PHONE_CONTEXT.len() + PLUS_SIGN.len() + parts.country_code.chars().count()
    } else {
        0
    }
}

/// Collects rendered edits into the formatted text.
pub(super) fn to_text(edits: &[Edit]) -> String {
    edits
        .iter()
        .filter_map(|edit| match edit {
            Edit::Keep(c) | Edit::Insert(c) => Some(*c),
            Edit::Drop => None,
        })
        .collect()
}

fn extension_prefix(format: PhoneNumberFormat) -> &'static str {
    use super::Dialect;
    match format.dialect() {
        Dialect::E123 | Dialect::Ms => DEFAULT_EXTN_PREFIX,
        Dialect::Din5008 | Dialect::Common => HYPHEN_EXTN_PREFIX,
        Dialect::Rfc3966 | Dialect::Url => RFC3966_EXTN_PREFIX,
    }
}

/// A number rendered in every format, see
/// [`format_all`](super::PhoneNumberUtil::format_all).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormattedPhoneNumbers {
    pub e123_international: String,
    pub e123_national: String,
    pub din5008_international: String,
    pub din5008_national: String,
    pub rfc3966_international: String,
    pub rfc3966_national: String,
    pub ms: String,
    pub url_international: String,
    pub url_national: String,
    pub common_international: String,
    pub common_national: String,
}

impl FormattedPhoneNumbers {
    pub fn get(&self, format: PhoneNumberFormat) -> &str {
        match format {
            PhoneNumberFormat::E123International => &self.e123_international,
            PhoneNumberFormat::E123National => &self.e123_national,
            PhoneNumberFormat::Din5008International => &self.din5008_international,
            PhoneNumberFormat::Din5008National => &self.din5008_national,
            PhoneNumberFormat::Rfc3966International => &self.rfc3966_international,
            PhoneNumberFormat::Rfc3966National => &self.rfc3966_national,
            PhoneNumberFormat::Ms => &self.ms,
            PhoneNumberFormat::UrlInternational => &self.url_international,
            PhoneNumberFormat::UrlNational => &self.url_national,
            PhoneNumberFormat::CommonInternational => &self.common_international,
            PhoneNumberFormat::CommonNational => &self.common_national,
        }
    }

    pub(super) fn get_mut(&mut self, format: PhoneNumberFormat) -> &mut String {
        match format {
            PhoneNumberFormat::E123International => &mut self.e123_international,
            PhoneNumberFormat::E123National => &mut self.e123_national,
            PhoneNumberFormat::Din5008International => &mut self.din5008_international,
            PhoneNumberFormat::Din5008National => &mut self.din5008_national,
            PhoneNumberFormat::Rfc3966International => &mut self.rfc3966_international,
            PhoneNumberFormat::Rfc3966National => &mut self.rfc3966_national,
            PhoneNumberFormat::Ms => &mut self.ms,
            PhoneNumberFormat::UrlInternational => &mut self.url_international,
            PhoneNumberFormat::UrlNational => &mut self.url_national,
            PhoneNumberFormat::CommonInternational => &mut self.common_international,
            PhoneNumberFormat::CommonNational => &mut self.common_national,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{render, to_text, trailing_parameter_len, RenderParts};
    use crate::{positioned::Edit, PhoneNumberFormat};

    const BERLIN: RenderParts<'static> = RenderParts {
        country_code: "49",
        trunk_code: "0",
        area_code: "30",
        line_number: "1234567",
        extension: None,
    };

    fn text(parts: &RenderParts<'_>, format: PhoneNumberFormat) -> String {
        to_text(&render(parts, format))
    }

    #[test]
    fn renders_every_format() {
        let with_ext = RenderParts { extension: Some("89"), ..BERLIN };
        let expected = [
            (PhoneNumberFormat::E123International, "+49 30 1234567", "+49 30 1234567 ext. 89"),
            (PhoneNumberFormat::E123National, "(030) 1234567", "(030) 1234567 ext. 89"),
            (PhoneNumberFormat::Din5008International, "+49 30 1234567", "+49 30 1234567-89"),
            (PhoneNumberFormat::Din5008National, "030 1234567", "030 1234567-89"),
            (PhoneNumberFormat::Rfc3966International, "tel:+49-30-1234567", "tel:+49-30-1234567;ext=89"),
            (
                PhoneNumberFormat::Rfc3966National,
                "tel:030-1234567;phone-context=+49",
                "tel:030-1234567;ext=89;phone-context=+49",
            ),
            (PhoneNumberFormat::Ms, "+49 (30) 1234567", "+49 (30) 1234567 ext. 89"),
            (PhoneNumberFormat::UrlInternational, "+49301234567", "+49301234567;ext=89"),
            (PhoneNumberFormat::UrlNational, "0301234567", "0301234567;ext=89"),
            (PhoneNumberFormat::CommonInternational, "+49 (0)30 1234567", "+49 (0)30 1234567-89"),
            (PhoneNumberFormat::CommonNational, "030/1234567", "030/1234567-89"),
        ];
        for (format, plain, extended) in expected {
            assert_eq!(plain, text(&BERLIN, format), "{:?}", format);
            assert_eq!(extended, text(&with_ext, format), "{:?}", format);
        }
    }

    #[test]
    fn renders_without_area_code() {
        let parts = RenderParts { area_code: "", line_number: "12345", ..BERLIN };
        assert_eq!("012345", text(&parts, PhoneNumberFormat::E123National));
        assert_eq!("+49 12345", text(&parts, PhoneNumberFormat::E123International));
        assert_eq!("012345", text(&parts, PhoneNumberFormat::CommonNational));
        assert_eq!("+49 (0)12345", text(&parts, PhoneNumberFormat::CommonInternational));
    }

    #[test]
    fn renders_unknown_country() {
        let parts = RenderParts { country_code: "", trunk_code: "", area_code: "", ..BERLIN };
        assert_eq!("+1234567", text(&parts, PhoneNumberFormat::E123International));
        assert_eq!("1234567", text(&parts, PhoneNumberFormat::Din5008National));
        assert_eq!("tel:1234567", text(&parts, PhoneNumberFormat::Rfc3966National));
    }

    #[test]
    fn omits_trunk_marker_without_trunk_code() {
        let parts = RenderParts { trunk_code: "", ..BERLIN };
        assert_eq!("+49 30 1234567", text(&parts, PhoneNumberFormat::CommonInternational));
    }

    #[test]
    fn measures_phone_context() {
        let rendered = text(&BERLIN, PhoneNumberFormat::Rfc3966National);
        let len = trailing_parameter_len(&BERLIN, PhoneNumberFormat::Rfc3966National);
        assert_eq!(";phone-context=+49", &rendered[rendered.len() - len..]);
        assert_eq!(0, trailing_parameter_len(&BERLIN, PhoneNumberFormat::Rfc3966International));

        let unknown = RenderParts { country_code: "", ..BERLIN };
        assert_eq!(0, trailing_parameter_len(&unknown, PhoneNumberFormat::Rfc3966National));
    }

    #[test]
    fn only_digits_are_kept() {
        let edits = render(&BERLIN, PhoneNumberFormat::E123National);
        let kept: String = edits
            .iter()
            .filter_map(|edit| match edit {
                Edit::Keep(c) => Some(*c),
                _ => None,
            })
            .collect();
        assert_eq!("0301234567", kept);
    }
}

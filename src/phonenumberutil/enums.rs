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

use strum::EnumIter;

/// Every output form the formatter knows.
///
/// For a Berlin number (country code 49, trunk code 0, area code 30, line
/// number 1234567, extension 89) the formats render as:
/// - **E123International**: `+49 30 1234567 ext. 89`
/// - **E123National**: `(030) 1234567 ext. 89`
/// - **Din5008International**: `+49 30 1234567-89`
/// - **Din5008National**: `030 1234567-89`
/// - **Rfc3966International**: `tel:+49-30-1234567;ext=89`
/// - **Rfc3966National**: `tel:030-1234567;ext=89;phone-context=+49`
/// - **Ms**: `+49 (30) 1234567 ext. 89`
/// - **UrlInternational**: `+49301234567;ext=89`
/// - **UrlNational**: `0301234567;ext=89`
/// - **CommonInternational**: `+49 (0)30 1234567-89`
/// - **CommonNational**: `030/1234567-89`
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// **ITU-T E.123, international notation.** Groups separated by spaces.
    E123International,
    /// **ITU-T E.123, national notation.** Trunk and area code in parentheses.
    E123National,
    /// **DIN 5008, international notation.** Extension appended with a hyphen.
    Din5008International,
    /// **DIN 5008, national notation.**
    Din5008National,
    /// **RFC 3966 `tel:` URI, global number.**
    Rfc3966International,
    /// **RFC 3966 `tel:` URI, local number.** The country travels in the
    /// `phone-context` parameter.
    Rfc3966National,
    /// **Microsoft canonical address.** Only exists in international form.
    Ms,
    /// **Digits only, international.** Meant for `tel:` links and query strings.
    UrlInternational,
    /// **Digits only, national.**
    UrlNational,
    /// **Common notation, international.** Keeps the trunk code as `(0)`.
    CommonInternational,
    /// **Common notation, national.** Area code separated by a slash.
    CommonNational,
}

impl PhoneNumberFormat {
    pub fn dialect(self) -> Dialect {
        match self {
            Self::E123International | Self::E123National => Dialect::E123,
            Self::Din5008International | Self::Din5008National => Dialect::Din5008,
            Self::Rfc3966International | Self::Rfc3966National => Dialect::Rfc3966,
            Self::Ms => Dialect::Ms,
            Self::UrlInternational | Self::UrlNational => Dialect::Url,
            Self::CommonInternational | Self::CommonNational => Dialect::Common,
        }
    }

    /// True for the forms carrying the country code.
    pub fn is_international(self) -> bool {
        matches!(
            self,
            Self::E123International
                | Self::Din5008International
                | Self::Rfc3966International
                | Self::Ms
                | Self::UrlInternational
                | Self::CommonInternational
        )
    }
}

/// A punctuation convention, independent of national or international form.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    E123,
    Din5008,
    Rfc3966,
    Ms,
    Url,
    Common,
}

impl Dialect {
    pub fn international(self) -> PhoneNumberFormat {
        match self {
            Self::E123 => PhoneNumberFormat::E123International,
            Self::Din5008 => PhoneNumberFormat::Din5008International,
            Self::Rfc3966 => PhoneNumberFormat::Rfc3966International,
            Self::Ms => PhoneNumberFormat::Ms,
            Self::Url => PhoneNumberFormat::UrlInternational,
            Self::Common => PhoneNumberFormat::CommonInternational,
        }
    }

    /// National form of the dialect. MS has none and stays international.
    pub fn national(self) -> PhoneNumberFormat {
        match self {
            Self::E123 => PhoneNumberFormat::E123National,
            Self::Din5008 => PhoneNumberFormat::Din5008National,
            Self::Rfc3966 => PhoneNumberFormat::Rfc3966National,
            Self::Ms => PhoneNumberFormat::Ms,
            Self::Url => PhoneNumberFormat::UrlNational,
            Self::Common => PhoneNumberFormat::CommonNational,
        }
    }
}

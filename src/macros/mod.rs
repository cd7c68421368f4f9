/// Generates the per-dialect convenience methods of `PhoneNumberUtil`.
///
/// For every dialect there are three plain formatters (auto, international,
/// national) and their three cursor preserving twins. "Auto" renders the
/// national form when the number belongs to the caller's country and the
/// international form otherwise. Must be invoked inside the
/// `impl PhoneNumberUtil` block.
macro_rules! dialect_formatters {
    ($(
        $dialect:ident {
            auto: $auto:ident,
            international: $international:ident,
            national: $national:ident,
            auto_with_pos: $auto_with_pos:ident,
            international_with_pos: $international_with_pos:ident,
            national_with_pos: $national_with_pos:ident $(,)?
        }
    )*) => {
        $(
            #[doc = concat!("Formats `record` in ", stringify!($dialect),
                ", national when it belongs to `country`, international otherwise.")]
            pub fn $auto(
                &self,
                record: Option<&$crate::phonenumber::PhoneNumberRecord>,
                country: &str,
            ) -> Option<String> {
                let record = record?;
                let format = self.preferred_format(
                    $crate::phonenumberutil::Dialect::$dialect,
                    &record.country_code,
                    country,
                );
                self.format(Some(record), format)
            }

            pub fn $international(
                &self,
                record: Option<&$crate::phonenumber::PhoneNumberRecord>,
            ) -> Option<String> {
                self.format(record, $crate::phonenumberutil::Dialect::$dialect.international())
            }

            pub fn $national(
                &self,
                record: Option<&$crate::phonenumber::PhoneNumberRecord>,
            ) -> Option<String> {
                self.format(record, $crate::phonenumberutil::Dialect::$dialect.national())
            }

            pub fn $auto_with_pos(
                &self,
                input: &$crate::positioned::PositionedValueWithCountry<String>,
            ) -> $crate::positioned::PositionedValue<String> {
                self.auto_format_with_pos(input, $crate::phonenumberutil::Dialect::$dialect)
            }

            pub fn $international_with_pos(
                &self,
                input: &$crate::positioned::PositionedValueWithCountry<String>,
            ) -> $crate::positioned::PositionedValue<String> {
                self.format_with_pos(input, $crate::phonenumberutil::Dialect::$dialect.international())
            }

            pub fn $national_with_pos(
                &self,
                input: &$crate::positioned::PositionedValueWithCountry<String>,
            ) -> $crate::positioned::PositionedValue<String> {
                self.format_with_pos(input, $crate::phonenumberutil::Dialect::$dialect.national())
            }
        )*
    };
}

pub(crate) use dialect_formatters;

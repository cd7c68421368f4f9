use std::ops::RangeInclusive;

// The ITU says the maximum length of a number, country code included, should
// be 15.
pub const MAX_LENGTH_FOR_NUMBER: usize = 15;
// The minimum line number length an area code accepts unless its row says
// otherwise.
pub const MIN_LENGTH_FOR_LINE_NUMBER: usize = 2;

/// Prefix lengths a regex country code is tried against.
pub const COUNTRY_CODE_REGEX_WINDOW: RangeInclusive<usize> = 2..=4;
/// Prefix lengths a regex area code is tried against.
pub const AREA_CODE_REGEX_WINDOW: RangeInclusive<usize> = 1..=6;

/// Separates the area name from explicit line length bounds in a directory
/// row: `Mobilfunk~7~8`.
pub const AREA_NAME_LENGTH_SEPARATOR: char = '~';

pub const PLUS_SIGN: &str = "+";
pub const PLUS_CHAR: char = '+';

pub const RFC3966_EXTN_PREFIX: &str = ";ext=";
pub const RFC3966_PREFIX: &str = "tel:";
pub const RFC3966_PHONE_CONTEXT: &str = ";phone-context=";

// Default extension prefix to use when formatting E123 and MS numbers. This
// will be put in front of any extension component of the number, after the
// main national number is formatted.
pub const DEFAULT_EXTN_PREFIX: &str = " ext. ";
// DIN 5008 and common notation append the extension with a hyphen.
pub const HYPHEN_EXTN_PREFIX: &str = "-";

// Explicit extension labels accepted when parsing, matched case-insensitively
// at the end of the input.
pub const EXPLICIT_EXTN_LABELS: &str = r"(?:e?xt(?:ension)?\.?|x|#)";

// A hyphen may introduce an extension when the number before it was already
// split into groups by a space, a slash or a closing parenthesis. The parser
// additionally requires that number to be complete.
pub const GROUP_SEPARATORS: &str = r"[ /)]";

// RFC 3966 parameter names as they appear after the `;` separator.
pub const RFC3966_EXTN_PARAM: &str = "ext=";
pub const RFC3966_PHONE_CONTEXT_PARAM: &str = "phone-context=";

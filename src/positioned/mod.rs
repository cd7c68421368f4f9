//! Values travelling together with a text cursor, and the rewriter that keeps
//! the cursor in place while the text around it is reformatted.

mod rewriter;

pub use rewriter::{rewrite, Edit};
pub(crate) use rewriter::{drop_n, insert_all, keep_all};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value with a cursor offset, counted in characters, into its string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionedValue<T> {
    pub value: T,
    pub pos: usize,
}

impl<T> PositionedValue<T> {
    pub fn new(value: T, pos: usize) -> Self {
        Self { value, pos }
    }
}

impl PositionedValue<String> {
    /// Cursor at the end of `value`.
    pub fn at_end(value: impl Into<String>) -> Self {
        let value = value.into();
        let pos = value.chars().count();
        Self { value, pos }
    }

    /// Copy with the cursor clamped into the value.
    pub fn clamped(&self) -> Self {
        Self {
            value: self.value.clone(),
            pos: self.pos.min(self.value.chars().count()),
        }
    }
}

/// Input envelope of the "with position" operations: the positioned text plus
/// the caller's region and language hints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionedValueWithCountry<T> {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub positioned: PositionedValue<T>,
    pub country: String,
    pub language: String,
}

impl<T> PositionedValueWithCountry<T> {
    pub fn new(value: T, pos: usize, country: &str, language: &str) -> Self {
        Self {
            positioned: PositionedValue::new(value, pos),
            country: country.to_owned(),
            language: language.to_owned(),
        }
    }
}

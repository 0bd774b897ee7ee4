//! Japanese reading engine.
//!
//! Converts numeric values (years, dates, clock times, counted quantities)
//! into their written Japanese form and its kana reading. Regular values are
//! derived by the positional algorithm in [`numerals`]; everything with a
//! lexically irregular reading (days of the month, hours, per-classifier
//! counts, ...) comes from the hand-curated tables in [`tables`] and
//! [`counters`] and is never recomputed from digit names.
//!
//! All composition in this module is pure and deterministic; the only
//! randomness in the crate lives in [`drill`] card selection.

pub mod counters;
pub mod datetime;
pub mod drill;
pub mod furigana;
pub mod numerals;
pub mod tables;

use serde::Serialize;

pub use counters::{
    counter_phrase, phrase_catalog, quantity_reading, CounterId, CounterObject,
    CounterPhraseCatalogEntry, CounterSelection,
};
pub use datetime::{compose_date_time, DateTimeReading, DateTimeReadingParts, HourFormat};
pub use drill::{draw_card, CounterPracticeCard, Exposure};
pub use numerals::number_kana;

/// Errors produced by the reading engine.
///
/// Range violations are programming errors: silently clamping an
/// out-of-range month or quantity would yield a linguistically wrong
/// reading, so they fail loudly instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadingError {
    #[error("{field} {value} is out of range {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("no counters are enabled")]
    NoCountersEnabled,
}

/// Validate that `value` lies in `min..=max`, naming the bound on failure.
pub(crate) fn check_range(
    field: &'static str,
    value: u32,
    min: u32,
    max: u32,
) -> Result<u32, ReadingError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ReadingError::OutOfRange {
            field,
            value: value as i64,
            min: min as i64,
            max: max as i64,
        })
    }
}

/// One numeric magnitude in one semantic category (a year, a minute, a
/// counted quantity), paired with its written form and kana reading.
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumeralReading {
    pub value: u32,
    pub script: String,
    pub kana: String,
}

/// A script/kana pair for a non-numeric fragment (weekday, AM/PM period).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingPair {
    pub script: String,
    pub kana: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_error_names_field_and_bounds() {
        let err = check_range("quantity", 11, 1, 10).unwrap_err();
        assert_eq!(err.to_string(), "quantity 11 is out of range 1..=10");
    }

    #[test]
    fn range_check_accepts_bounds() {
        assert_eq!(check_range("minute", 0, 0, 59), Ok(0));
        assert_eq!(check_range("minute", 59, 0, 59), Ok(59));
    }
}

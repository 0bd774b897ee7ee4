//! Date and wall-clock time reading composition.
//!
//! Combines the numeral algorithm (years) with the irregular tables
//! (months, days, weekdays, hours, minutes) into a structured
//! [`DateTimeReadingParts`] and its concatenated [`DateTimeReading`]
//! projection. Composition is pure; calling twice with the same input
//! yields identical output.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::numerals::number_kana;
use super::tables::{day_reading, hour_reading, minute_reading, month_reading, weekday_reading};
use super::{NumeralReading, ReadingError, ReadingPair};

/// Whether clock hours are read on a 12-hour or 24-hour dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HourFormat {
    #[serde(rename = "12h")]
    Twelve,
    #[serde(rename = "24h")]
    TwentyFour,
}

impl HourFormat {
    /// Path segment used by the clip path builder.
    pub(crate) fn path_segment(self) -> &'static str {
        match self {
            HourFormat::Twelve => "12h",
            HourFormat::TwentyFour => "24h",
        }
    }
}

/// Structured reading for one concrete date + wall-clock time.
///
/// `period` is present exactly when the reading was composed in 12-hour
/// mode; `hour.value` is then the 1-12 display hour rather than the
/// wall-clock hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeReadingParts {
    pub year: NumeralReading,
    pub month: NumeralReading,
    pub day: NumeralReading,
    pub weekday: ReadingPair,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<ReadingPair>,
    pub hour: NumeralReading,
    pub minute: NumeralReading,
}

/// Concatenated phrases derived from [`DateTimeReadingParts`].
///
/// Script fragments join with no separator; kana fragments join with a
/// single space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeReading {
    pub date_script: String,
    pub date_kana: String,
    pub time_script: String,
    pub time_kana: String,
    pub full_script: String,
    pub full_kana: String,
}

impl DateTimeReadingParts {
    /// Project the parts into their concatenated phrases.
    pub fn reading(&self) -> DateTimeReading {
        let date_script = format!(
            "{}{}{}({})",
            self.year.script, self.month.script, self.day.script, self.weekday.script
        );
        let date_kana = [
            self.year.kana.as_str(),
            self.month.kana.as_str(),
            self.day.kana.as_str(),
            self.weekday.kana.as_str(),
        ]
        .join(" ");

        let mut time_script = String::new();
        let mut time_kana_parts = Vec::with_capacity(3);
        if let Some(period) = &self.period {
            time_script.push_str(&period.script);
            time_kana_parts.push(period.kana.as_str());
        }
        time_script.push_str(&self.hour.script);
        time_script.push_str(&self.minute.script);
        time_kana_parts.push(self.hour.kana.as_str());
        time_kana_parts.push(self.minute.kana.as_str());
        let time_kana = time_kana_parts.join(" ");

        let full_script = format!("{date_script}{time_script}");
        let full_kana = format!("{date_kana} {time_kana}");

        DateTimeReading {
            date_script,
            date_kana,
            time_script,
            time_kana,
            full_script,
            full_kana,
        }
    }
}

/// Reduce a 0-23 wall-clock hour to the 1-12 display hour.
pub fn display_hour(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

fn year_reading(year: i32) -> Result<NumeralReading, ReadingError> {
    if !(1..=9999).contains(&year) {
        return Err(ReadingError::OutOfRange {
            field: "year",
            value: year as i64,
            min: 1,
            max: 9999,
        });
    }
    Ok(NumeralReading {
        value: year as u32,
        script: format!("{year}年"),
        kana: format!("{}ねん", number_kana(year as u64)),
    })
}

/// Compose the structured reading for `date` at `hour`:`minute`.
///
/// In 12-hour mode the hour is first reduced to its display value and a
/// period word is attached: ごぜん strictly before noon, ごご from noon
/// onward (noon itself is ごご).
pub fn compose_date_time(
    date: NaiveDate,
    hour: u32,
    minute: u32,
    format: HourFormat,
) -> Result<DateTimeReadingParts, ReadingError> {
    let year = year_reading(date.year())?;
    let month = month_reading(date.month())?;
    let day = day_reading(date.day())?;
    let weekday = weekday_reading(date.weekday().num_days_from_sunday())?;

    super::check_range("hour", hour, 0, 23)?;
    let (period, hour) = match format {
        HourFormat::TwentyFour => (None, hour_reading(hour)?),
        HourFormat::Twelve => {
            let (script, kana) = if hour < 12 {
                ("午前", "ごぜん")
            } else {
                ("午後", "ごご")
            };
            let period = ReadingPair {
                script: script.to_string(),
                kana: kana.to_string(),
            };
            (Some(period), hour_reading(display_hour(hour))?)
        }
    };
    let minute = minute_reading(minute)?;

    Ok(DateTimeReadingParts {
        year,
        month,
        day,
        weekday,
        period,
        hour,
        minute,
    })
}

//! Irregular lexicon tables for dates and clock times.
//!
//! Every entry here is authored, not derived. Some rows (11日, 15時, ...)
//! would fall out of a "tens prefix + digit + suffix" rule, but they are
//! stored anyway so the lookups stay free of special-casing and the
//! irregular rows (ついたち, よじ, しちがつ, ...) have nowhere to hide.

use super::numerals::DIGIT_KANA;
use super::{check_range, NumeralReading, ReadingError, ReadingPair};

/// Month readings, index 0 = January. 4月, 7月 and 9月 are lexically
/// irregular (し, しち, く — not よん, なな, きゅう).
pub(crate) const MONTH_KANA: [&str; 12] = [
    "いちがつ",
    "にがつ",
    "さんがつ",
    "しがつ",
    "ごがつ",
    "ろくがつ",
    "しちがつ",
    "はちがつ",
    "くがつ",
    "じゅうがつ",
    "じゅういちがつ",
    "じゅうにがつ",
];

/// Day-of-month readings, index 0 = the 1st. Days 1-10, 14, 20 and 24 are
/// fully irregular.
pub(crate) const DAY_KANA: [&str; 31] = [
    "ついたち",
    "ふつか",
    "みっか",
    "よっか",
    "いつか",
    "むいか",
    "なのか",
    "ようか",
    "ここのか",
    "とおか",
    "じゅういちにち",
    "じゅうににち",
    "じゅうさんにち",
    "じゅうよっか",
    "じゅうごにち",
    "じゅうろくにち",
    "じゅうしちにち",
    "じゅうはちにち",
    "じゅうくにち",
    "はつか",
    "にじゅういちにち",
    "にじゅうににち",
    "にじゅうさんにち",
    "にじゅうよっか",
    "にじゅうごにち",
    "にじゅうろくにち",
    "にじゅうしちにち",
    "にじゅうはちにち",
    "にじゅうくにち",
    "さんじゅうにち",
    "さんじゅういちにち",
];

/// Hour readings, index 0 = 0時. Irregular at 4, 7, 9 (and their teens)
/// for the same euphonic reasons as the months.
pub(crate) const HOUR_KANA: [&str; 24] = [
    "れいじ",
    "いちじ",
    "にじ",
    "さんじ",
    "よじ",
    "ごじ",
    "ろくじ",
    "しちじ",
    "はちじ",
    "くじ",
    "じゅうじ",
    "じゅういちじ",
    "じゅうにじ",
    "じゅうさんじ",
    "じゅうよじ",
    "じゅうごじ",
    "じゅうろくじ",
    "じゅうしちじ",
    "じゅうはちじ",
    "じゅうくじ",
    "にじゅうじ",
    "にじゅういちじ",
    "にじゅうにじ",
    "にじゅうさんじ",
];

/// Weekday readings keyed by weekday index, 0 = Sunday.
pub(crate) const WEEKDAY_READINGS: [(&str, &str); 7] = [
    ("日曜日", "にちようび"),
    ("月曜日", "げつようび"),
    ("火曜日", "かようび"),
    ("水曜日", "すいようび"),
    ("木曜日", "もくようび"),
    ("金曜日", "きんようび"),
    ("土曜日", "どようび"),
];

/// Minute ones-digit suffixes, index 0 = 1分. The digits 1, 3, 4, 6 and 8
/// take the p-form (matching the recorded clips); 2, 5, 7 and 9 keep the
/// plain ふん form.
const MINUTE_ONES_KANA: [&str; 9] = [
    "いっぷん",
    "にふん",
    "さんぷん",
    "よんぷん",
    "ごふん",
    "ろっぷん",
    "ななふん",
    "はっぷん",
    "きゅうふん",
];

pub fn month_reading(month: u32) -> Result<NumeralReading, ReadingError> {
    let month = check_range("month", month, 1, 12)?;
    Ok(NumeralReading {
        value: month,
        script: format!("{month}月"),
        kana: MONTH_KANA[(month - 1) as usize].to_string(),
    })
}

pub fn day_reading(day: u32) -> Result<NumeralReading, ReadingError> {
    let day = check_range("day", day, 1, 31)?;
    Ok(NumeralReading {
        value: day,
        script: format!("{day}日"),
        kana: DAY_KANA[(day - 1) as usize].to_string(),
    })
}

pub fn hour_reading(hour: u32) -> Result<NumeralReading, ReadingError> {
    let hour = check_range("hour", hour, 0, 23)?;
    Ok(NumeralReading {
        value: hour,
        script: format!("{hour}時"),
        kana: HOUR_KANA[hour as usize].to_string(),
    })
}

/// Weekday lookup; `index` is 0 = Sunday .. 6 = Saturday.
pub fn weekday_reading(index: u32) -> Result<ReadingPair, ReadingError> {
    let index = check_range("weekday index", index, 0, 6)?;
    let (script, kana) = WEEKDAY_READINGS[index as usize];
    Ok(ReadingPair {
        script: script.to_string(),
        kana: kana.to_string(),
    })
}

pub fn minute_reading(minute: u32) -> Result<NumeralReading, ReadingError> {
    let minute = check_range("minute", minute, 0, 59)?;
    Ok(NumeralReading {
        value: minute,
        script: format!("{minute}分"),
        kana: minute_kana(minute),
    })
}

/// Compose a minute reading from a tens prefix and a ones suffix.
///
/// A ones digit of zero with a nonzero tens value drops the suffix and
/// geminates the trailing syllable of the tens word instead (じゅう →
/// じゅっぷん).
fn minute_kana(minute: u32) -> String {
    if minute == 0 {
        return "れいふん".to_string();
    }

    let tens = (minute / 10) as usize;
    let ones = (minute % 10) as usize;

    let mut out = String::new();
    match tens {
        0 => {}
        1 => out.push_str("じゅう"),
        d => {
            out.push_str(DIGIT_KANA[d]);
            out.push_str("じゅう");
        }
    }
    if ones == 0 {
        out.pop();
        out.push_str("っぷん");
    } else {
        out.push_str(MINUTE_ONES_KANA[ones - 1]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_month_has_a_reading() {
        for month in 1..=12 {
            assert!(month_reading(month).is_ok(), "month {month}");
        }
    }

    #[test]
    fn irregular_months_do_not_use_digit_names() {
        assert_eq!(month_reading(4).unwrap().kana, "しがつ");
        assert_eq!(month_reading(7).unwrap().kana, "しちがつ");
        assert_eq!(month_reading(9).unwrap().kana, "くがつ");
    }

    #[test]
    fn regular_months_follow_digit_plus_gatsu() {
        assert_eq!(month_reading(1).unwrap().kana, "いちがつ");
        assert_eq!(month_reading(8).unwrap().kana, "はちがつ");
        assert_eq!(month_reading(12).unwrap().kana, "じゅうにがつ");
    }

    #[test]
    fn every_day_has_a_reading() {
        for day in 1..=31 {
            assert!(day_reading(day).is_ok(), "day {day}");
        }
    }

    #[test]
    fn irregular_days_match_the_lexicon() {
        assert_eq!(day_reading(1).unwrap().kana, "ついたち");
        assert_eq!(day_reading(2).unwrap().kana, "ふつか");
        assert_eq!(day_reading(3).unwrap().kana, "みっか");
        assert_eq!(day_reading(10).unwrap().kana, "とおか");
        assert_eq!(day_reading(14).unwrap().kana, "じゅうよっか");
        assert_eq!(day_reading(20).unwrap().kana, "はつか");
        assert_eq!(day_reading(24).unwrap().kana, "にじゅうよっか");
    }

    #[test]
    fn day_script_keeps_arabic_numerals() {
        assert_eq!(day_reading(28).unwrap().script, "28日");
    }

    #[test]
    fn every_hour_has_a_reading() {
        for hour in 0..=23 {
            assert!(hour_reading(hour).is_ok(), "hour {hour}");
        }
    }

    #[test]
    fn irregular_hours_match_the_lexicon() {
        assert_eq!(hour_reading(4).unwrap().kana, "よじ");
        assert_eq!(hour_reading(7).unwrap().kana, "しちじ");
        assert_eq!(hour_reading(9).unwrap().kana, "くじ");
        assert_eq!(hour_reading(14).unwrap().kana, "じゅうよじ");
        assert_eq!(hour_reading(17).unwrap().kana, "じゅうしちじ");
        assert_eq!(hour_reading(19).unwrap().kana, "じゅうくじ");
    }

    #[test]
    fn hour_zero_reads_reiji() {
        assert_eq!(hour_reading(0).unwrap().kana, "れいじ");
    }

    #[test]
    fn weekday_index_is_sunday_first() {
        assert_eq!(weekday_reading(0).unwrap().kana, "にちようび");
        assert_eq!(weekday_reading(6).unwrap().kana, "どようび");
        assert!(weekday_reading(7).is_err());
    }

    #[test]
    fn minute_readings_match_the_documented_values() {
        let cases = [
            (0, "れいふん"),
            (1, "いっぷん"),
            (3, "さんぷん"),
            (6, "ろっぷん"),
            (8, "はっぷん"),
            (10, "じゅっぷん"),
            (30, "さんじゅっぷん"),
            (44, "よんじゅうよんぷん"),
        ];
        for (minute, kana) in cases {
            assert_eq!(minute_reading(minute).unwrap().kana, kana, "minute {minute}");
        }
    }

    #[test]
    fn plain_fun_digits_stay_unvoiced() {
        assert_eq!(minute_reading(2).unwrap().kana, "にふん");
        assert_eq!(minute_reading(25).unwrap().kana, "にじゅうごふん");
        assert_eq!(minute_reading(57).unwrap().kana, "ごじゅうななふん");
    }

    #[test]
    fn tens_multiples_geminate_the_tens_word() {
        assert_eq!(minute_reading(20).unwrap().kana, "にじゅっぷん");
        assert_eq!(minute_reading(50).unwrap().kana, "ごじゅっぷん");
    }

    #[test]
    fn out_of_range_lookups_fail_loudly() {
        assert!(month_reading(0).is_err());
        assert!(month_reading(13).is_err());
        assert!(day_reading(32).is_err());
        assert!(hour_reading(24).is_err());
        assert!(minute_reading(60).is_err());
    }
}

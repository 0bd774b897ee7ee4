//! Bracket-style furigana rendering (漢[かん]字[じ] form).
//!
//! The platform's display layer annotates script with its reading in
//! bracket notation. The composers here already carry aligned
//! script/kana fragment pairs, so rendering is a per-fragment pairing;
//! fragments that are entirely kana need no annotation.

use super::datetime::DateTimeReadingParts;
use super::drill::CounterPracticeCard;

fn is_kana(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309f}' | '\u{30a0}'..='\u{30ff}' | 'ー')
}

/// Annotate one script fragment with its kana reading.
///
/// All-kana fragments (ノート, りんご) come back unchanged.
pub fn bracket(script: &str, kana: &str) -> String {
    if !script.is_empty() && script.chars().all(is_kana) {
        script.to_string()
    } else {
        format!("{script}[{kana}]")
    }
}

/// Bracket-annotated rendering of a full date/time reading, fragment by
/// fragment in phrase order.
pub fn date_time_furigana(parts: &DateTimeReadingParts) -> String {
    let mut out = String::new();
    out.push_str(&bracket(&parts.year.script, &parts.year.kana));
    out.push_str(&bracket(&parts.month.script, &parts.month.kana));
    out.push_str(&bracket(&parts.day.script, &parts.day.kana));
    out.push('(');
    out.push_str(&bracket(&parts.weekday.script, &parts.weekday.kana));
    out.push(')');
    if let Some(period) = &parts.period {
        out.push_str(&bracket(&period.script, &period.kana));
    }
    out.push_str(&bracket(&parts.hour.script, &parts.hour.kana));
    out.push_str(&bracket(&parts.minute.script, &parts.minute.kana));
    out
}

/// Bracket-annotated rendering of a counting practice phrase.
pub fn counter_phrase_furigana(card: &CounterPracticeCard) -> String {
    format!(
        "{}{}{}",
        bracket(card.object.script, card.object.kana),
        card.particle,
        bracket(&card.count_script, &card.count_kana),
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::reading::counters::CounterId;
    use crate::reading::datetime::{compose_date_time, HourFormat};
    use crate::reading::drill::draw_card;

    use super::*;

    #[test]
    fn kanji_fragments_are_bracketed() {
        assert_eq!(bracket("鉛筆", "えんぴつ"), "鉛筆[えんぴつ]");
        assert_eq!(bracket("8月", "はちがつ"), "8月[はちがつ]");
    }

    #[test]
    fn kana_fragments_pass_through() {
        assert_eq!(bracket("ノート", "ノート"), "ノート");
        assert_eq!(bracket("りんご", "りんご"), "りんご");
    }

    #[test]
    fn date_time_rendering_pairs_every_fragment() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
        let parts = compose_date_time(date, 9, 30, HourFormat::Twelve).unwrap();
        assert_eq!(
            date_time_furigana(&parts),
            "2026年[にせんにじゅうろくねん]8月[はちがつ]28日[にじゅうはちにち]\
             (金曜日[きんようび])午前[ごぜん]9時[くじ]30分[さんじゅっぷん]"
        );
    }

    #[test]
    fn counter_phrase_rendering_annotates_object_and_count() {
        let mut rng = StdRng::seed_from_u64(5);
        let card = draw_card(&[CounterId::Hon], &[], &mut rng).unwrap();
        let rendered = counter_phrase_furigana(&card);
        assert!(rendered.starts_with(&bracket(card.object.script, card.object.kana)));
        assert!(rendered.ends_with(&format!("[{}]", card.count_kana)));
    }
}

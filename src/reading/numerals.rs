//! Kana readings for arbitrary non-negative integers.
//!
//! This is the only place a reading is derived computationally; the
//! date/time and counter modules use authored tables instead because their
//! readings have lexical exceptions no positional rule predicts.

/// Plain digit names. Index 0 is the standalone zero word, only emitted
/// when the whole value is zero.
pub(crate) const DIGIT_KANA: [&str; 10] = [
    "ゼロ",
    "いち",
    "に",
    "さん",
    "よん",
    "ご",
    "ろく",
    "なな",
    "はち",
    "きゅう",
];

/// Read a non-negative integer as kana.
///
/// Values are grouped in base-10,000 chunks, most significant first, with
/// the magnitude words まん (10^4) and おく (10^8). Supported range is
/// `0..10^12`; larger magnitudes have no word here.
///
/// Within each chunk the thousand, hundred and ten positions use a
/// contracted lead-in for 1 (せん, ひゃく, じゅう) and the euphonic forms
/// さんぜん/はっせん and さんびゃく/ろっぴゃく/はっぴゃく.
pub fn number_kana(value: u64) -> String {
    debug_assert!(value < 1_000_000_000_000, "no magnitude word above 9999おく");

    if value == 0 {
        return DIGIT_KANA[0].to_string();
    }

    let oku = (value / 100_000_000) as u16;
    let man = ((value / 10_000) % 10_000) as u16;
    let units = (value % 10_000) as u16;

    let mut out = String::new();
    if oku > 0 {
        out.push_str(&group_kana(oku));
        out.push_str("おく");
    }
    if man > 0 {
        out.push_str(&group_kana(man));
        out.push_str("まん");
    }
    if units > 0 {
        out.push_str(&group_kana(units));
    }
    out
}

/// Read one 1..=9999 chunk.
fn group_kana(n: u16) -> String {
    let thousands = (n / 1000) as usize;
    let hundreds = (n / 100 % 10) as usize;
    let tens = (n / 10 % 10) as usize;
    let ones = (n % 10) as usize;

    let mut out = String::new();
    match thousands {
        0 => {}
        1 => out.push_str("せん"),
        3 => out.push_str("さんぜん"),
        8 => out.push_str("はっせん"),
        d => {
            out.push_str(DIGIT_KANA[d]);
            out.push_str("せん");
        }
    }
    match hundreds {
        0 => {}
        1 => out.push_str("ひゃく"),
        3 => out.push_str("さんびゃく"),
        6 => out.push_str("ろっぴゃく"),
        8 => out.push_str("はっぴゃく"),
        d => {
            out.push_str(DIGIT_KANA[d]);
            out.push_str("ひゃく");
        }
    }
    match tens {
        0 => {}
        1 => out.push_str("じゅう"),
        d => {
            out.push_str(DIGIT_KANA[d]);
            out.push_str("じゅう");
        }
    }
    if ones > 0 {
        out.push_str(DIGIT_KANA[ones]);
    }
    out
}

//! Counter-classifier phonology.
//!
//! Each classifier owns its own authored 1-10 reading table: counting
//! words undergo classifier-specific euphonic alternation (いっぽん /
//! さんぼん / ろっぽん for 本, さんがい for 階, ひとり / ふたり for 人)
//! with lexical exceptions, so these tables are never derived from the
//! generic numeral algorithm.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::audio::paths::counter_clip_path;

use super::{check_range, NumeralReading, ReadingError};

/// Default particle linking a counted object to its count.
pub const OBJECT_PARTICLE: &str = "を";
/// Possessive particle used by floor-counting phrases (ビルの3階).
pub const POSSESSIVE_PARTICLE: &str = "の";

/// Closed enumeration of supported numeral classifiers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CounterId {
    /// 枚 — flat objects.
    Mai,
    /// 本 — long thin objects.
    Hon,
    /// 匹 — small animals.
    Hiki,
    /// 冊 — bound volumes.
    Satsu,
    /// 台 — machines and vehicles.
    Dai,
    /// 個 — small objects.
    Ko,
    /// 人 — people.
    Nin,
    /// 杯 — liquid servings.
    Hai,
    /// 着 — garments.
    Chaku,
    /// 足 — footwear pairs.
    Soku,
    /// 羽 — birds.
    Wa,
    /// 階 — building floors.
    Kai,
}

impl CounterId {
    /// Stable lowercase identifier, also the clip path segment.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// The classifier character itself.
    pub fn classifier_script(self) -> &'static str {
        match self {
            CounterId::Mai => "枚",
            CounterId::Hon => "本",
            CounterId::Hiki => "匹",
            CounterId::Satsu => "冊",
            CounterId::Dai => "台",
            CounterId::Ko => "個",
            CounterId::Nin => "人",
            CounterId::Hai => "杯",
            CounterId::Chaku => "着",
            CounterId::Soku => "足",
            CounterId::Wa => "羽",
            CounterId::Kai => "階",
        }
    }

    /// English label for the counted class, for UI captions.
    pub fn class_label(self) -> &'static str {
        match self {
            CounterId::Mai => "flat objects",
            CounterId::Hon => "long thin objects",
            CounterId::Hiki => "small animals",
            CounterId::Satsu => "bound volumes",
            CounterId::Dai => "machines",
            CounterId::Ko => "small objects",
            CounterId::Nin => "people",
            CounterId::Hai => "liquid servings",
            CounterId::Chaku => "garments",
            CounterId::Soku => "footwear pairs",
            CounterId::Wa => "birds",
            CounterId::Kai => "building floors",
        }
    }

    /// The authored 1-10 kana table for this classifier.
    fn quantity_kana(self) -> &'static [&'static str; 10] {
        match self {
            CounterId::Mai => &[
                "いちまい",
                "にまい",
                "さんまい",
                "よんまい",
                "ごまい",
                "ろくまい",
                "ななまい",
                "はちまい",
                "きゅうまい",
                "じゅうまい",
            ],
            CounterId::Hon => &[
                "いっぽん",
                "にほん",
                "さんぼん",
                "よんほん",
                "ごほん",
                "ろっぽん",
                "ななほん",
                "はっぽん",
                "きゅうほん",
                "じゅっぽん",
            ],
            CounterId::Hiki => &[
                "いっぴき",
                "にひき",
                "さんびき",
                "よんひき",
                "ごひき",
                "ろっぴき",
                "ななひき",
                "はっぴき",
                "きゅうひき",
                "じゅっぴき",
            ],
            CounterId::Satsu => &[
                "いっさつ",
                "にさつ",
                "さんさつ",
                "よんさつ",
                "ごさつ",
                "ろくさつ",
                "ななさつ",
                "はっさつ",
                "きゅうさつ",
                "じゅっさつ",
            ],
            CounterId::Dai => &[
                "いちだい",
                "にだい",
                "さんだい",
                "よんだい",
                "ごだい",
                "ろくだい",
                "ななだい",
                "はちだい",
                "きゅうだい",
                "じゅうだい",
            ],
            CounterId::Ko => &[
                "いっこ",
                "にこ",
                "さんこ",
                "よんこ",
                "ごこ",
                "ろっこ",
                "ななこ",
                "はっこ",
                "きゅうこ",
                "じゅっこ",
            ],
            CounterId::Nin => &[
                "ひとり",
                "ふたり",
                "さんにん",
                "よにん",
                "ごにん",
                "ろくにん",
                "ななにん",
                "はちにん",
                "きゅうにん",
                "じゅうにん",
            ],
            CounterId::Hai => &[
                "いっぱい",
                "にはい",
                "さんばい",
                "よんはい",
                "ごはい",
                "ろっぱい",
                "ななはい",
                "はっぱい",
                "きゅうはい",
                "じゅっぱい",
            ],
            CounterId::Chaku => &[
                "いっちゃく",
                "にちゃく",
                "さんちゃく",
                "よんちゃく",
                "ごちゃく",
                "ろくちゃく",
                "ななちゃく",
                "はっちゃく",
                "きゅうちゃく",
                "じゅっちゃく",
            ],
            CounterId::Soku => &[
                "いっそく",
                "にそく",
                "さんぞく",
                "よんそく",
                "ごそく",
                "ろくそく",
                "ななそく",
                "はっそく",
                "きゅうそく",
                "じゅっそく",
            ],
            CounterId::Wa => &[
                "いちわ",
                "にわ",
                "さんば",
                "よんわ",
                "ごわ",
                "ろくわ",
                "ななわ",
                "はちわ",
                "きゅうわ",
                "じゅうわ",
            ],
            CounterId::Kai => &[
                "いっかい",
                "にかい",
                "さんがい",
                "よんかい",
                "ごかい",
                "ろっかい",
                "ななかい",
                "はっかい",
                "きゅうかい",
                "じゅっかい",
            ],
        }
    }
}

/// Look up the counted reading for `quantity` under `counter`.
pub fn quantity_reading(counter: CounterId, quantity: u32) -> Result<NumeralReading, ReadingError> {
    let quantity = check_range("quantity", quantity, 1, 10)?;
    Ok(NumeralReading {
        value: quantity,
        script: format!("{}{}", quantity, counter.classifier_script()),
        kana: counter.quantity_kana()[(quantity - 1) as usize].to_string(),
    })
}

/// One countable vocabulary entry, belonging to exactly one classifier.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterObject {
    pub id: &'static str,
    pub counter: CounterId,
    pub script: &'static str,
    pub kana: &'static str,
    pub english: &'static str,
    pub illustration: &'static str,
    #[serde(skip)]
    particle_override: Option<&'static str>,
}

impl CounterObject {
    const fn new(
        id: &'static str,
        counter: CounterId,
        script: &'static str,
        kana: &'static str,
        english: &'static str,
    ) -> Self {
        Self {
            id,
            counter,
            script,
            kana,
            english,
            illustration: id,
            particle_override: None,
        }
    }

    const fn with_particle(mut self, particle: &'static str) -> Self {
        self.particle_override = Some(particle);
        self
    }

    /// Linking particle for phrases with this object.
    pub fn particle(&self) -> &'static str {
        self.particle_override.unwrap_or(OBJECT_PARTICLE)
    }
}

/// The full object vocabulary. Static, loaded once, never mutated.
const OBJECTS: &[CounterObject] = &[
    CounterObject::new("paper", CounterId::Mai, "紙", "かみ", "sheet of paper"),
    CounterObject::new("ticket", CounterId::Mai, "切符", "きっぷ", "ticket"),
    CounterObject::new("plate", CounterId::Mai, "皿", "さら", "plate"),
    CounterObject::new("pencil", CounterId::Hon, "鉛筆", "えんぴつ", "pencil"),
    CounterObject::new("umbrella", CounterId::Hon, "傘", "かさ", "umbrella"),
    CounterObject::new("bottle", CounterId::Hon, "瓶", "びん", "bottle"),
    CounterObject::new("cat", CounterId::Hiki, "猫", "ねこ", "cat"),
    CounterObject::new("dog", CounterId::Hiki, "犬", "いぬ", "dog"),
    CounterObject::new("frog", CounterId::Hiki, "蛙", "かえる", "frog"),
    CounterObject::new("book", CounterId::Satsu, "本", "ほん", "book"),
    CounterObject::new("notebook", CounterId::Satsu, "ノート", "ノート", "notebook"),
    CounterObject::new("magazine", CounterId::Satsu, "雑誌", "ざっし", "magazine"),
    CounterObject::new("car", CounterId::Dai, "車", "くるま", "car"),
    CounterObject::new("computer", CounterId::Dai, "パソコン", "パソコン", "computer"),
    CounterObject::new("television", CounterId::Dai, "テレビ", "テレビ", "television"),
    CounterObject::new("apple", CounterId::Ko, "りんご", "りんご", "apple"),
    CounterObject::new("egg", CounterId::Ko, "卵", "たまご", "egg"),
    CounterObject::new("ball", CounterId::Ko, "ボール", "ボール", "ball"),
    CounterObject::new("student", CounterId::Nin, "学生", "がくせい", "student"),
    CounterObject::new("child", CounterId::Nin, "子ども", "こども", "child"),
    CounterObject::new("doctor", CounterId::Nin, "医者", "いしゃ", "doctor"),
    CounterObject::new("coffee", CounterId::Hai, "コーヒー", "コーヒー", "cup of coffee"),
    CounterObject::new("tea", CounterId::Hai, "お茶", "おちゃ", "cup of tea"),
    CounterObject::new("juice", CounterId::Hai, "ジュース", "ジュース", "glass of juice"),
    CounterObject::new("shirt", CounterId::Chaku, "シャツ", "シャツ", "shirt"),
    CounterObject::new("coat", CounterId::Chaku, "コート", "コート", "coat"),
    CounterObject::new("sweater", CounterId::Chaku, "セーター", "セーター", "sweater"),
    CounterObject::new("shoes", CounterId::Soku, "靴", "くつ", "pair of shoes"),
    CounterObject::new("socks", CounterId::Soku, "靴下", "くつした", "pair of socks"),
    CounterObject::new("boots", CounterId::Soku, "ブーツ", "ブーツ", "pair of boots"),
    CounterObject::new("bird", CounterId::Wa, "鳥", "とり", "bird"),
    CounterObject::new("chicken", CounterId::Wa, "鶏", "にわとり", "chicken"),
    CounterObject::new("sparrow", CounterId::Wa, "すずめ", "すずめ", "sparrow"),
    CounterObject::new("building", CounterId::Kai, "ビル", "ビル", "building")
        .with_particle(POSSESSIVE_PARTICLE),
    CounterObject::new("hotel", CounterId::Kai, "ホテル", "ホテル", "hotel")
        .with_particle(POSSESSIVE_PARTICLE),
    CounterObject::new("department-store", CounterId::Kai, "デパート", "デパート", "department store")
        .with_particle(POSSESSIVE_PARTICLE),
];

/// All vocabulary entries across all classifiers.
pub fn all_objects() -> &'static [CounterObject] {
    OBJECTS
}

/// Vocabulary entries belonging to `counter`.
pub fn objects_for(counter: CounterId) -> impl Iterator<Item = &'static CounterObject> {
    OBJECTS.iter().filter(move |o| o.counter == counter)
}

/// Look up one vocabulary entry by classifier and id.
pub fn object_by_id(counter: CounterId, id: &str) -> Option<&'static CounterObject> {
    objects_for(counter).find(|o| o.id == id)
}

/// Render the complete countable-object phrase for `object` and `quantity`.
///
/// Script joins with no separators (鉛筆を3本); kana keeps the particle on
/// the noun and space-separates the count (えんぴつを さんぼん).
pub fn counter_phrase(
    object: &CounterObject,
    quantity: u32,
) -> Result<super::ReadingPair, ReadingError> {
    let count = quantity_reading(object.counter, quantity)?;
    Ok(super::ReadingPair {
        script: format!("{}{}{}", object.script, object.particle(), count.script),
        kana: format!("{}{} {}", object.kana, object.particle(), count.kana),
    })
}

/// One fully enumerated (counter, object, quantity) triple with its
/// rendered phrase and deterministic clip path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterPhraseCatalogEntry {
    pub counter: CounterId,
    pub object_id: &'static str,
    pub quantity: u32,
    pub script: String,
    pub kana: String,
    pub clip_path: String,
}

/// Enumerate the total cross-product of objects × quantities 1-10 for
/// every classifier, for the pre-rendered asset pipeline. Regenerated on
/// each call, never incrementally maintained.
pub fn phrase_catalog() -> Result<Vec<CounterPhraseCatalogEntry>, ReadingError> {
    let mut entries = Vec::with_capacity(OBJECTS.len() * 10);
    for counter in CounterId::iter() {
        for object in objects_for(counter) {
            for quantity in 1..=10 {
                let phrase = counter_phrase(object, quantity)?;
                entries.push(CounterPhraseCatalogEntry {
                    counter,
                    object_id: object.id,
                    quantity,
                    script: phrase.script,
                    kana: phrase.kana,
                    clip_path: counter_clip_path(counter, object.id, quantity)?,
                });
            }
        }
    }
    Ok(entries)
}

/// Multi-select of enabled counters for the drill tools.
///
/// Toggling never drops the last remaining member: a practice tool with
/// zero enabled counters has nothing to draw from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSelection {
    enabled: Vec<CounterId>,
}

impl CounterSelection {
    pub fn new(initial: CounterId) -> Self {
        Self {
            enabled: vec![initial],
        }
    }

    /// Build a selection from an explicit list, deduplicating while
    /// preserving order.
    pub fn from_counters(counters: &[CounterId]) -> Result<Self, ReadingError> {
        let mut enabled = Vec::new();
        for &c in counters {
            if !enabled.contains(&c) {
                enabled.push(c);
            }
        }
        if enabled.is_empty() {
            return Err(ReadingError::NoCountersEnabled);
        }
        Ok(Self { enabled })
    }

    /// Flip the enabled state of `counter`. Removing the sole remaining
    /// member is a no-op.
    pub fn toggle(&mut self, counter: CounterId) {
        if let Some(pos) = self.enabled.iter().position(|&c| c == counter) {
            if self.enabled.len() == 1 {
                log::debug!("refusing to disable the last enabled counter {counter}");
                return;
            }
            self.enabled.remove(pos);
        } else {
            self.enabled.push(counter);
        }
    }

    pub fn is_enabled(&self, counter: CounterId) -> bool {
        self.enabled.contains(&counter)
    }

    pub fn enabled(&self) -> &[CounterId] {
        &self.enabled
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn every_counter_has_a_complete_quantity_table() {
        for counter in CounterId::iter() {
            for quantity in 1..=10 {
                let reading = quantity_reading(counter, quantity).unwrap();
                assert!(!reading.kana.is_empty(), "{counter} {quantity}");
            }
        }
    }

    #[test]
    fn every_counter_has_vocabulary() {
        for counter in CounterId::iter() {
            assert!(
                objects_for(counter).count() >= 2,
                "{counter} needs at least two objects"
            );
        }
    }

    #[test]
    fn hon_readings_show_all_three_alternations() {
        assert_eq!(quantity_reading(CounterId::Hon, 1).unwrap().kana, "いっぽん");
        assert_eq!(quantity_reading(CounterId::Hon, 3).unwrap().kana, "さんぼん");
        assert_eq!(quantity_reading(CounterId::Hon, 4).unwrap().kana, "よんほん");
        assert_eq!(quantity_reading(CounterId::Hon, 10).unwrap().kana, "じゅっぽん");
    }

    #[test]
    fn nin_keeps_its_lexical_exceptions() {
        assert_eq!(quantity_reading(CounterId::Nin, 1).unwrap().kana, "ひとり");
        assert_eq!(quantity_reading(CounterId::Nin, 2).unwrap().kana, "ふたり");
        assert_eq!(quantity_reading(CounterId::Nin, 4).unwrap().kana, "よにん");
    }

    #[test]
    fn quantity_script_pairs_digit_with_classifier() {
        assert_eq!(quantity_reading(CounterId::Kai, 3).unwrap().script, "3階");
    }

    #[test]
    fn quantity_out_of_range_is_rejected() {
        assert!(quantity_reading(CounterId::Hon, 0).is_err());
        assert!(quantity_reading(CounterId::Hon, 11).is_err());
    }

    #[test]
    fn floor_objects_use_the_possessive_particle() {
        let building = object_by_id(CounterId::Kai, "building").unwrap();
        assert_eq!(building.particle(), POSSESSIVE_PARTICLE);

        let phrase = counter_phrase(building, 3).unwrap();
        assert_eq!(phrase.script, "ビルの3階");
        assert_eq!(phrase.kana, "ビルの さんがい");
    }

    #[test]
    fn default_particle_is_object_marking() {
        let pencil = object_by_id(CounterId::Hon, "pencil").unwrap();
        let phrase = counter_phrase(pencil, 3).unwrap();
        assert_eq!(phrase.script, "鉛筆を3本");
        assert_eq!(phrase.kana, "えんぴつを さんぼん");
    }

    #[test]
    fn catalog_covers_the_full_cross_product() {
        let catalog = phrase_catalog().unwrap();
        assert_eq!(catalog.len(), all_objects().len() * 10);

        let entry = catalog
            .iter()
            .find(|e| e.counter == CounterId::Hon && e.object_id == "pencil" && e.quantity == 6)
            .unwrap();
        assert_eq!(entry.clip_path, "phrase/hon/pencil/06.mp3");
        assert_eq!(entry.kana, "えんぴつを ろっぽん");
    }

    #[test]
    fn catalog_is_deterministic() {
        assert_eq!(phrase_catalog().unwrap(), phrase_catalog().unwrap());
    }

    #[test]
    fn counter_ids_round_trip_through_strings() {
        for counter in CounterId::iter() {
            assert_eq!(CounterId::from_str(counter.as_str()), Ok(counter));
        }
    }

    #[test]
    fn toggle_refuses_to_empty_the_selection() {
        let mut selection = CounterSelection::new(CounterId::Hon);
        selection.toggle(CounterId::Hon);
        assert_eq!(selection.enabled(), &[CounterId::Hon]);

        selection.toggle(CounterId::Mai);
        selection.toggle(CounterId::Hon);
        assert_eq!(selection.enabled(), &[CounterId::Mai]);
    }

    #[test]
    fn from_counters_deduplicates_and_rejects_empty() {
        let selection =
            CounterSelection::from_counters(&[CounterId::Hon, CounterId::Hon, CounterId::Mai])
                .unwrap();
        assert_eq!(selection.enabled(), &[CounterId::Hon, CounterId::Mai]);
        assert_eq!(
            CounterSelection::from_counters(&[]),
            Err(ReadingError::NoCountersEnabled)
        );
    }
}

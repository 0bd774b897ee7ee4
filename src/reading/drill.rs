//! Counting practice card generation.
//!
//! Card selection is the only random operation in the crate. A draw
//! avoids combinations the learner saw in the last few cards, using a
//! recent-exposure history the caller owns and persists; when every
//! combination was recently seen the constraint falls away rather than
//! ever producing zero candidates.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::counters::{objects_for, quantity_reading, CounterId, CounterObject};
use super::ReadingError;

/// Hard cap on the recency window; the effective window is further
/// bounded by one less than the pool's distinct object count.
pub const MAX_RECENCY_WINDOW: usize = 10;

/// One previously drawn combination, as persisted by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exposure {
    pub counter: CounterId,
    pub object_id: String,
    pub quantity: u32,
}

/// One drill instance. Immutable; discarded after use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterPracticeCard {
    pub id: String,
    pub counter: CounterId,
    pub quantity: u32,
    pub object: &'static CounterObject,
    pub count_script: String,
    pub count_kana: String,
    pub particle: &'static str,
}

impl CounterPracticeCard {
    /// The exposure record the caller should append to its history.
    pub fn exposure(&self) -> Exposure {
        Exposure {
            counter: self.counter,
            object_id: self.object.id.to_string(),
            quantity: self.quantity,
        }
    }
}

/// Draw one practice card from the enabled counters.
///
/// Selection runs in three uniform stages: a counter that still has an
/// unseen (object, quantity) combination, then an eligible object of that
/// counter, then an unseen quantity for that object. `recent` is consulted
/// through its trailing window only; quantity carries no recency
/// constraint of its own.
pub fn draw_card<R: Rng + ?Sized>(
    enabled: &[CounterId],
    recent: &[Exposure],
    rng: &mut R,
) -> Result<CounterPracticeCard, ReadingError> {
    if enabled.is_empty() {
        return Err(ReadingError::NoCountersEnabled);
    }

    let pool_size: usize = enabled.iter().map(|&c| objects_for(c).count()).sum();
    let window = MAX_RECENCY_WINDOW.min(pool_size.saturating_sub(1));
    let window_slice = &recent[recent.len().saturating_sub(window)..];
    let recent_set: HashSet<(CounterId, &str, u32)> = window_slice
        .iter()
        .map(|e| (e.counter, e.object_id.as_str(), e.quantity))
        .collect();

    let has_unseen = |counter: CounterId, object: &CounterObject| {
        (1..=10).any(|q| !recent_set.contains(&(counter, object.id, q)))
    };

    let fresh: Vec<CounterId> = enabled
        .iter()
        .copied()
        .filter(|&c| objects_for(c).any(|o| has_unseen(c, o)))
        .collect();
    let constrained = !fresh.is_empty();
    if !constrained {
        log::debug!("every combination was recently seen, drawing unconstrained");
    }
    let pool = if constrained { fresh.as_slice() } else { enabled };
    // Both pools are non-empty here, so choose cannot fail.
    let counter = *pool
        .choose(rng)
        .ok_or(ReadingError::NoCountersEnabled)?;

    let objects: Vec<&'static CounterObject> = objects_for(counter)
        .filter(|o| !constrained || has_unseen(counter, o))
        .collect();
    let object = *objects
        .choose(rng)
        .ok_or(ReadingError::NoCountersEnabled)?;

    let quantities: Vec<u32> = if constrained {
        (1..=10)
            .filter(|&q| !recent_set.contains(&(counter, object.id, q)))
            .collect()
    } else {
        (1..=10).collect()
    };
    let quantity = *quantities
        .choose(rng)
        .ok_or(ReadingError::NoCountersEnabled)?;

    let count = quantity_reading(counter, quantity)?;
    Ok(CounterPracticeCard {
        id: format!("{}-{}-{:02}", counter, object.id, quantity),
        counter,
        quantity,
        object,
        count_script: count.script,
        count_kana: count.kana,
        particle: object.particle(),
    })
}

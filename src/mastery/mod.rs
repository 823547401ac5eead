//! Mastery classification
//!
//! Maps a review state onto a reporting bucket. Only `repetitions` and
//! `ease_factor` are read; timestamps never influence the result.

use crate::types::{MasteryLevel, ReviewState};

const LEARNING_MAX_REPETITIONS: u32 = 3;
const REVIEWING_MAX_REPETITIONS: u32 = 6;
const FAMILIAR_MAX_REPETITIONS: u32 = 10;
const REVIEWING_EASE_CEILING: f64 = 2.0;
const MASTERED_MIN_EASE: f64 = 2.5;

/// Classify a state, first matching rule wins.
///
/// Two regions match none of the explicit rules and fall through to
/// `Familiar`: ten or more repetitions with an ease below 2.5, and six to
/// nine repetitions with an ease below 2.0. The thresholds are kept as-is
/// for compatibility with stored dashboards.
pub fn classify(state: &ReviewState) -> MasteryLevel {
    classify_parts(state.repetitions, state.ease_factor)
}

pub fn classify_parts(repetitions: u32, ease_factor: f64) -> MasteryLevel {
    if repetitions == 0 {
        MasteryLevel::New
    } else if repetitions < LEARNING_MAX_REPETITIONS {
        MasteryLevel::Learning
    } else if repetitions < REVIEWING_MAX_REPETITIONS && ease_factor < REVIEWING_EASE_CEILING {
        MasteryLevel::Reviewing
    } else if repetitions < FAMILIAR_MAX_REPETITIONS && ease_factor >= REVIEWING_EASE_CEILING {
        MasteryLevel::Familiar
    } else if repetitions >= FAMILIAR_MAX_REPETITIONS && ease_factor >= MASTERED_MIN_EASE {
        MasteryLevel::Mastered
    } else {
        MasteryLevel::Familiar
    }
}

//! Study statistics
//!
//! Single-pass reduction of a learner's items into dashboard numbers.

use chrono::{DateTime, Utc};

use crate::due::{days_until_review, is_due};
use crate::mastery::classify;
use crate::types::{MasteryBreakdown, MasteryLevel, ReviewItem, StudyStats};

/// Aggregate counts and mastery percentage for `items` at `now`.
pub fn aggregate(items: &[ReviewItem], now: DateTime<Utc>) -> StudyStats {
    let mut by_level = MasteryBreakdown::default();
    let mut due_today = 0usize;

    for item in items {
        if is_due(&item.state, now) {
            due_today += 1;
        }
        by_level.record(classify(&item.state));
    }

    let total = items.len();
    let mastered = by_level.count(MasteryLevel::Mastered);
    let learning = by_level.count(MasteryLevel::Learning) + by_level.count(MasteryLevel::New);

    StudyStats {
        total,
        due_today,
        by_level,
        mastered,
        learning,
        mastery_percentage: mastery_percentage(mastered, total),
    }
}

/// `round(100 * mastered / total)`, 0 for an empty collection.
pub fn mastery_percentage(mastered: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (100.0 * mastered as f64 / total as f64).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Review load for the next `days` days.
///
/// Slot 0 holds everything due now (overdue, due today or never reviewed);
/// slot `d` holds items scheduled exactly `d` days ahead. Items further out
/// are not counted.
pub fn due_forecast(items: &[ReviewItem], now: DateTime<Utc>, days: usize) -> Vec<usize> {
    let mut forecast = vec![0usize; days];
    if days == 0 {
        return forecast;
    }

    for item in items {
        if is_due(&item.state, now) {
            forecast[0] += 1;
            continue;
        }
        let offset = days_until_review(&item.state, now);
        if let Ok(slot) = usize::try_from(offset) {
            if slot < days {
                forecast[slot] += 1;
            }
        }
    }

    forecast
}

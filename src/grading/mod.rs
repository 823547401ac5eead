//! Grading Policy - SM-2 style review scheduling
//!
//! Core theory:
//! - Every review event carries a self-assessed grade (Again/Hard/Good/Easy)
//! - The ease factor drifts up for easy recalls and down for weak ones
//! - A weak recall (Again/Hard) discards the repetition streak and restarts spacing
//! - A passing recall (Good/Easy) grows the interval geometrically after two warm-up steps
//!
//! Mathematical formulas:
//! - Ease update: EF' = max(EF + (0.1 - (3 - g) * (0.08 + (3 - g) * 0.02)), 1.3)
//!   - g: grade value in 0..=3
//! - Interval after a pass:
//!   - 1 day for the first repetition
//!   - 6 days for the second repetition
//!   - round(I * EF') afterwards, I being the interval before this review
//!
//! All functions are pure; `now` is injected by the caller.

use chrono::{DateTime, Duration, Utc};
use rayon::prelude::*;

use crate::error::SrsError;
use crate::sanitize::validate_state;
use crate::types::{
    Grade, ReviewState, INITIAL_INTERVAL_DAYS, MIN_EASE_FACTOR, SECOND_INTERVAL_DAYS,
};

// ==================== Public API ====================

/// Ease factor after a review with grade `grade`, floored at 1.3.
pub fn next_ease_factor(ease_factor: f64, grade: Grade) -> f64 {
    let distance = (3 - grade.value()) as f64;
    let updated = ease_factor + (0.1 - distance * (0.08 + distance * 0.02));
    updated.max(MIN_EASE_FACTOR)
}

/// Apply one review event to `state`, returning the new state.
///
/// # Errors
/// `InvalidState` when `state` breaks the ease floor or has a zero interval.
pub fn grade(
    state: &ReviewState,
    grade: Grade,
    now: DateTime<Utc>,
) -> Result<ReviewState, SrsError> {
    validate_state(state)?;

    let ease_factor = next_ease_factor(state.ease_factor, grade);

    let (repetitions, interval_days) = if grade.is_pass() {
        let repetitions = state.repetitions.saturating_add(1);
        let interval = match repetitions {
            1 => INITIAL_INTERVAL_DAYS,
            2 => SECOND_INTERVAL_DAYS,
            _ => grown_interval(state.interval_days, ease_factor)?,
        };
        (repetitions, interval)
    } else {
        (0, INITIAL_INTERVAL_DAYS)
    };

    let next_review_at = Duration::try_days(i64::from(interval_days))
        .and_then(|offset| now.checked_add_signed(offset))
        .ok_or_else(|| {
            SrsError::InvalidState(format!(
                "next review date overflows when adding {interval_days} days to {now}"
            ))
        })?;

    tracing::debug!(
        grade = grade.value(),
        repetitions_before = state.repetitions,
        repetitions,
        ease_before = state.ease_factor,
        ease_factor,
        interval_days,
        "graded review"
    );

    Ok(ReviewState {
        repetitions,
        ease_factor,
        interval_days,
        next_review_at,
        last_reviewed_at: Some(now),
    })
}

/// Like [`grade`], but takes the grade as a raw integer from an untyped boundary.
///
/// # Errors
/// `InvalidGrade` for values outside `0..=3`; never clamps.
pub fn grade_raw(
    state: &ReviewState,
    raw_grade: i64,
    now: DateTime<Utc>,
) -> Result<ReviewState, SrsError> {
    let parsed = Grade::try_from(raw_grade).map_err(|err| {
        tracing::warn!(raw_grade, "rejected out-of-range grade");
        err
    })?;
    grade(state, parsed, now)
}

/// Grade many independent items in parallel.
///
/// Output order matches input order. Fails with the first error in input order.
pub fn grade_batch(
    reviews: &[(ReviewState, Grade)],
    now: DateTime<Utc>,
) -> Result<Vec<ReviewState>, SrsError> {
    let results: Vec<Result<ReviewState, SrsError>> = reviews
        .par_iter()
        .map(|(state, g)| grade(state, *g, now))
        .collect();

    results.into_iter().collect()
}

// ==================== Internal Helpers ====================

fn grown_interval(previous_days: u32, ease_factor: f64) -> Result<u32, SrsError> {
    let raw = (f64::from(previous_days) * ease_factor).round();
    if raw > f64::from(u32::MAX) {
        return Err(SrsError::InvalidState(format!(
            "interval of {previous_days} days times ease {ease_factor} overflows"
        )));
    }
    Ok((raw as u32).max(INITIAL_INTERVAL_DAYS))
}

// ==================== Tests ====================

//! Input validation for review states
//!
//! Malformed states are rejected before any computation; nothing here tries
//! to repair them.

use crate::error::SrsError;
use crate::types::{ReviewItem, ReviewState, MIN_EASE_FACTOR};

/// Check the numeric invariants of a review state.
pub fn validate_state(state: &ReviewState) -> Result<(), SrsError> {
    if state.ease_factor.is_nan() || state.ease_factor.is_infinite() {
        return Err(SrsError::InvalidState(format!(
            "ease factor must be finite, got {}",
            state.ease_factor
        )));
    }

    if state.ease_factor < MIN_EASE_FACTOR {
        return Err(SrsError::InvalidState(format!(
            "ease factor {} is below the floor of {MIN_EASE_FACTOR}",
            state.ease_factor
        )));
    }

    if state.interval_days == 0 {
        return Err(SrsError::InvalidState(
            "interval must be at least one day".to_string(),
        ));
    }

    Ok(())
}

/// Validate a whole collection, naming the offending item on failure.
pub fn validate_items(items: &[ReviewItem]) -> Result<(), SrsError> {
    for item in items {
        validate_state(&item.state).map_err(|err| match err {
            SrsError::InvalidState(msg) => {
                SrsError::InvalidState(format!("item {}: {msg}", item.item_id))
            }
            other => other,
        })?;
    }
    Ok(())
}

/// Whether `next_review_at` agrees with `last_reviewed_at + interval_days`.
///
/// New items are always consistent. Callers that reschedule items by hand
/// can use this to spot drift; the engine itself does not require it.
pub fn is_schedule_consistent(state: &ReviewState) -> bool {
    match state.scheduled_from_last_review() {
        Some(expected) => expected == state.next_review_at,
        None => true,
    }
}

//! Property-Based Tests for the scheduling engine
//!
//! Tests the following invariants:
//! - Ease floor: grading never drops the ease factor below 1.3
//! - Fail resets: Again/Hard restart the streak with a one-day interval
//! - Pass growth: Good/Easy add exactly one repetition and follow the interval tiers
//! - Classification only depends on repetitions and ease factor
//! - Due queue completeness and ordering
//! - Stats consistency: totals and bucket sums

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use danci_srs::{
    aggregate, classify, days_until_review, grade, is_due, select_due, Grade, ReviewItem,
    ReviewState, MIN_EASE_FACTOR,
};

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap()
}

fn arb_ease() -> impl Strategy<Value = f64> {
    (1300u32..=4000u32).prop_map(|v| v as f64 / 1000.0)
}

fn arb_grade() -> impl Strategy<Value = Grade> {
    prop_oneof![
        Just(Grade::Again),
        Just(Grade::Hard),
        Just(Grade::Good),
        Just(Grade::Easy),
    ]
}

fn arb_failing_grade() -> impl Strategy<Value = Grade> {
    prop_oneof![Just(Grade::Again), Just(Grade::Hard)]
}

fn arb_passing_grade() -> impl Strategy<Value = Grade> {
    prop_oneof![Just(Grade::Good), Just(Grade::Easy)]
}

fn arb_state() -> impl Strategy<Value = ReviewState> {
    (
        0u32..=40u32,                  // repetitions
        arb_ease(),
        1u32..=3650u32,                // interval_days
        -60i64 * 24..=60i64 * 24,      // next review offset (hours)
        any::<bool>(),                 // reviewed before
    )
        .prop_map(|(repetitions, ease_factor, interval_days, offset_hours, reviewed)| {
            let next_review_at = base_time() + Duration::hours(offset_hours);
            let last_reviewed_at = if reviewed {
                Some(next_review_at - Duration::days(i64::from(interval_days)))
            } else {
                None
            };
            ReviewState {
                repetitions,
                ease_factor,
                interval_days,
                next_review_at,
                last_reviewed_at,
            }
        })
}

fn arb_items() -> impl Strategy<Value = Vec<ReviewItem>> {
    prop::collection::vec(arb_state(), 0..40).prop_map(|states| {
        states
            .into_iter()
            .enumerate()
            .map(|(i, state)| ReviewItem::new(format!("item-{i:03}"), state))
            .collect()
    })
}

// ============================================================================
// Grading Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_ease_never_below_floor(state in arb_state(), g in arb_grade()) {
        let next = grade(&state, g, base_time()).unwrap();
        prop_assert!(next.ease_factor >= MIN_EASE_FACTOR);
    }

    #[test]
    fn prop_fail_resets(state in arb_state(), g in arb_failing_grade()) {
        let next = grade(&state, g, base_time()).unwrap();
        prop_assert_eq!(next.repetitions, 0);
        prop_assert_eq!(next.interval_days, 1);
    }

    #[test]
    fn prop_pass_adds_one_repetition(state in arb_state(), g in arb_passing_grade()) {
        let next = grade(&state, g, base_time()).unwrap();
        prop_assert_eq!(next.repetitions, state.repetitions + 1);
    }

    #[test]
    fn prop_pass_interval_tiers(state in arb_state(), g in arb_passing_grade()) {
        let next = grade(&state, g, base_time()).unwrap();
        let expected = match state.repetitions {
            0 => 1,
            1 => 6,
            _ => {
                let grown = (state.interval_days as f64 * next.ease_factor).round();
                (grown as u32).max(1)
            }
        };
        prop_assert_eq!(next.interval_days, expected);
    }

    #[test]
    fn prop_long_intervals_grow_uncapped(
        interval_days in 10_000u32..=1_000_000u32,
        ease_factor in arb_ease(),
        g in arb_passing_grade(),
    ) {
        let state = ReviewState {
            repetitions: 12,
            ease_factor,
            interval_days,
            next_review_at: base_time(),
            last_reviewed_at: Some(base_time() - Duration::days(i64::from(interval_days))),
        };
        let next = grade(&state, g, base_time()).unwrap();
        let expected = (interval_days as f64 * next.ease_factor).round() as u32;
        prop_assert_eq!(next.interval_days, expected);
        prop_assert!(next.interval_days > interval_days);
    }

    #[test]
    fn prop_schedule_follows_interval(state in arb_state(), g in arb_grade()) {
        let now = base_time();
        let next = grade(&state, g, now).unwrap();
        prop_assert_eq!(next.last_reviewed_at, Some(now));
        prop_assert_eq!(
            next.next_review_at,
            now + Duration::days(i64::from(next.interval_days))
        );
    }

    #[test]
    fn prop_third_pass_multiplies_six(
        g1 in arb_passing_grade(),
        g2 in arb_passing_grade(),
        g3 in arb_passing_grade(),
    ) {
        let t0 = base_time();
        let first = grade(&ReviewState::new(t0), g1, t0).unwrap();
        prop_assert_eq!(first.interval_days, 1);
        let second = grade(&first, g2, first.next_review_at).unwrap();
        prop_assert_eq!(second.interval_days, 6);
        let third = grade(&second, g3, second.next_review_at).unwrap();
        prop_assert_eq!(third.interval_days, (6.0 * third.ease_factor).round() as u32);
    }

    #[test]
    fn prop_grading_is_deterministic(state in arb_state(), g in arb_grade()) {
        let a = grade(&state, g, base_time()).unwrap();
        let b = grade(&state, g, base_time()).unwrap();
        prop_assert_eq!(a, b);
    }
}

// ============================================================================
// Classification Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_classify_ignores_timestamps(state in arb_state(), shift_hours in -5000i64..5000i64) {
        let moved = ReviewState {
            next_review_at: state.next_review_at + Duration::hours(shift_hours),
            last_reviewed_at: None,
            ..state.clone()
        };
        prop_assert_eq!(classify(&state), classify(&moved));
        prop_assert_eq!(classify(&state), classify(&state));
    }
}

// ============================================================================
// Due Queue Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_due_queue_is_complete(items in arb_items()) {
        let now = base_time();
        let queue = select_due(&items, now);
        let selected = queue.item_ids();

        for item in &items {
            let must_include =
                item.state.last_reviewed_at.is_none() || item.state.next_review_at <= now;
            prop_assert_eq!(selected.contains(&item.item_id.as_str()), must_include);
        }
    }

    #[test]
    fn prop_due_queue_is_ordered(items in arb_items()) {
        let now = base_time();
        let queue = select_due(&items, now);
        let days: Vec<i64> = queue
            .iter()
            .map(|item| days_until_review(&item.state, now))
            .collect();
        prop_assert!(days.windows(2).all(|pair| pair[0] <= pair[1]));
        for entry in queue.entries() {
            prop_assert!(is_due(&entry.item.state, now));
        }
    }

    #[test]
    fn prop_due_queue_ignores_input_order(items in arb_items()) {
        let now = base_time();
        let mut reversed = items.clone();
        reversed.reverse();
        let forward = select_due(&items, now).item_ids();
        let backward = select_due(&reversed, now).item_ids();
        prop_assert_eq!(forward, backward);
    }
}

// ============================================================================
// Stats Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_stats_consistent(items in arb_items()) {
        let now = base_time();
        let stats = aggregate(&items, now);
        prop_assert_eq!(stats.total, items.len());
        prop_assert_eq!(stats.by_level.sum(), stats.total);
        prop_assert_eq!(stats.due_today, select_due(&items, now).len());
        prop_assert_eq!(stats.learning, stats.by_level.new + stats.by_level.learning);
        prop_assert!(stats.mastery_percentage <= 100);
    }
}

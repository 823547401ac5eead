//! Due-set selection
//!
//! Picks the items a learner should review now and ranks them:
//! overdue items first (most overdue first), then the remaining due items
//! soonest first. Items with the same day offset are ordered by `item_id`
//! so the queue does not depend on the caller's input order.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::types::{ReviewItem, ReviewState, MS_PER_DAY};

// ==================== Predicates ====================

/// Whole days until the item is scheduled, rounded up.
///
/// Negative for overdue items; anything due earlier today rounds up to 0.
pub fn days_until_review(state: &ReviewState, now: DateTime<Utc>) -> i64 {
    let delta_ms = state.next_review_at.signed_duration_since(now).num_milliseconds();
    (delta_ms as f64 / MS_PER_DAY as f64).ceil() as i64
}

/// Never-reviewed items are always due; others once `now` reaches the schedule.
pub fn is_due(state: &ReviewState, now: DateTime<Utc>) -> bool {
    state.last_reviewed_at.is_none() || now >= state.next_review_at
}

// ==================== Queue ====================

/// One ranked entry of a [`DueQueue`]
#[derive(Debug, Clone, Copy)]
pub struct DueEntry<'a> {
    pub item: &'a ReviewItem,
    pub days_until_review: i64,
}

impl DueEntry<'_> {
    pub fn is_overdue(&self) -> bool {
        self.days_until_review < 0
    }
}

/// Ranked review queue borrowed from the caller's collection.
///
/// Iterating does not consume the queue; every call to [`DueQueue::iter`]
/// yields the same sequence.
#[derive(Debug, Clone, Default)]
pub struct DueQueue<'a> {
    entries: Vec<DueEntry<'a>>,
}

impl<'a> DueQueue<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a ReviewItem> + '_ {
        self.entries.iter().map(|entry| entry.item)
    }

    pub fn entries(&self) -> &[DueEntry<'a>] {
        &self.entries
    }

    pub fn item_ids(&self) -> Vec<&'a str> {
        self.entries.iter().map(|entry| entry.item.item_id.as_str()).collect()
    }

    pub fn overdue_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_overdue()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'q, 'a> IntoIterator for &'q DueQueue<'a> {
    type Item = &'a ReviewItem;
    type IntoIter =
        std::iter::Map<std::slice::Iter<'q, DueEntry<'a>>, fn(&DueEntry<'a>) -> &'a ReviewItem>;

    fn into_iter(self) -> Self::IntoIter {
        let project: fn(&DueEntry<'a>) -> &'a ReviewItem = |entry| entry.item;
        self.entries.iter().map(project)
    }
}

// ==================== Selection ====================

/// Select and rank the items due at `now`.
pub fn select_due(items: &[ReviewItem], now: DateTime<Utc>) -> DueQueue<'_> {
    let mut entries: Vec<DueEntry<'_>> = items
        .iter()
        .filter(|item| is_due(&item.state, now))
        .map(|item| DueEntry {
            item,
            days_until_review: days_until_review(&item.state, now),
        })
        .collect();

    entries.sort_by(compare_entries);

    let queue = DueQueue { entries };
    tracing::debug!(
        total = items.len(),
        due = queue.len(),
        overdue = queue.overdue_count(),
        "selected due items"
    );
    queue
}

fn compare_entries(a: &DueEntry<'_>, b: &DueEntry<'_>) -> Ordering {
    a.days_until_review
        .cmp(&b.days_until_review)
        .then_with(|| a.item.item_id.cmp(&b.item.item_id))
}

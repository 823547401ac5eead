//! # danci-srs - spaced-repetition scheduling engine
//!
//! Pure scheduling logic for vocabulary and grammar review:
//!
//! - **Grading** - SM-2 style update of ease factor, repetitions and interval
//! - **Mastery** - reporting buckets derived from a review state
//! - **Due selection** - today's review queue, most overdue first
//! - **Stats** - totals, due counts, mastery buckets and forecast
//!
//! Every operation is a synchronous function over borrowed inputs. The
//! current time is always passed in; nothing reads the clock, touches
//! storage or keeps state between calls.
//!
//! ## Modules
//!
//! - [`types`] - review state, grades, mastery levels, stats
//! - [`grading`] - review transitions
//! - [`mastery`] - mastery classification
//! - [`due`] - due predicate and queue ranking
//! - [`stats`] - aggregation and forecast
//! - [`sanitize`] - input validation
//!
//! ## Example
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use danci_srs::{grade, select_due, Grade, ReviewItem, ReviewState};
//!
//! let day0 = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
//! let state = ReviewState::new(day0);
//! let next = grade(&state, Grade::Good, day0).unwrap();
//! assert_eq!(next.interval_days, 1);
//!
//! let items = vec![ReviewItem::new("neko", next)];
//! let queue = select_due(&items, day0 + Duration::days(1));
//! assert_eq!(queue.len(), 1);
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod cli;
pub mod config;
pub mod due;
pub mod error;
pub mod grading;
pub mod logging;
pub mod mastery;
pub mod sanitize;
pub mod stats;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use types::*;

pub use error::SrsError;

pub use grading::{grade, grade_batch, grade_raw, next_ease_factor};

pub use mastery::classify;

pub use due::{days_until_review, is_due, select_due, DueEntry, DueQueue};

pub use stats::{aggregate, due_forecast};

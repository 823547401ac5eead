//! Common Types and Constants
//!
//! Shared data structures used across the scheduling modules.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SrsError;

// ==================== Constants ====================

/// Ease factor assigned to a never-reviewed item
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;

/// Hard floor for the ease factor
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Interval after a reset and after the first successful review
pub const INITIAL_INTERVAL_DAYS: u32 = 1;

/// Interval after the second consecutive successful review
pub const SECOND_INTERVAL_DAYS: u32 = 6;

/// Milliseconds in one scheduling day
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

// ==================== Review State ====================

/// Per (learner, item) scheduling record.
///
/// Values are never mutated by the engine; grading returns a fresh state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewState {
    /// Consecutive successful reviews since the last reset
    pub repetitions: u32,
    /// Interval growth multiplier, never below [`MIN_EASE_FACTOR`]
    pub ease_factor: f64,
    /// Days between the last review and the next one
    pub interval_days: u32,
    pub next_review_at: DateTime<Utc>,
    #[serde(default)]
    pub last_reviewed_at: Option<DateTime<Utc>>,
}

impl ReviewState {
    /// State for an item encountered for the first time; immediately due.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            repetitions: 0,
            ease_factor: DEFAULT_EASE_FACTOR,
            interval_days: INITIAL_INTERVAL_DAYS,
            next_review_at: now,
            last_reviewed_at: None,
        }
    }

    pub fn is_new(&self) -> bool {
        self.last_reviewed_at.is_none()
    }

    /// Expected `next_review_at` for a reviewed state, `None` for new items.
    pub fn scheduled_from_last_review(&self) -> Option<DateTime<Utc>> {
        self.last_reviewed_at
            .map(|last| last + Duration::days(i64::from(self.interval_days)))
    }
}

/// A review state tagged with the identifier of the learnable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub item_id: String,
    pub state: ReviewState,
}

impl ReviewItem {
    pub fn new(item_id: impl Into<String>, state: ReviewState) -> Self {
        Self {
            item_id: item_id.into(),
            state,
        }
    }
}

// ==================== Grade ====================

/// Learner's self-reported recall difficulty for one review event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Grade {
    Again = 0,
    Hard = 1,
    Good = 2,
    Easy = 3,
}

impl Grade {
    pub const ALL: [Grade; 4] = [Grade::Again, Grade::Hard, Grade::Good, Grade::Easy];

    /// Derive a grade from a right/wrong answer and its response latency.
    pub fn from_correct(is_correct: bool, response_time_ms: i64) -> Self {
        if !is_correct {
            return Self::Again;
        }
        if response_time_ms < 2000 {
            Self::Easy
        } else if response_time_ms < 5000 {
            Self::Good
        } else {
            Self::Hard
        }
    }

    /// Good and Easy keep the repetition streak alive.
    pub fn is_pass(self) -> bool {
        self >= Grade::Good
    }

    pub fn value(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for Grade {
    type Error = SrsError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Grade::Again),
            1 => Ok(Grade::Hard),
            2 => Ok(Grade::Good),
            3 => Ok(Grade::Easy),
            other => Err(SrsError::InvalidGrade(other)),
        }
    }
}

impl From<Grade> for i64 {
    fn from(grade: Grade) -> Self {
        grade.value()
    }
}

// ==================== Mastery ====================

/// Coarse reporting bucket derived from a review state. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MasteryLevel {
    New,
    Learning,
    Reviewing,
    Familiar,
    Mastered,
}

impl MasteryLevel {
    pub const ALL: [MasteryLevel; 5] = [
        MasteryLevel::New,
        MasteryLevel::Learning,
        MasteryLevel::Reviewing,
        MasteryLevel::Familiar,
        MasteryLevel::Mastered,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MasteryLevel::New => "new",
            MasteryLevel::Learning => "learning",
            MasteryLevel::Reviewing => "reviewing",
            MasteryLevel::Familiar => "familiar",
            MasteryLevel::Mastered => "mastered",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "new" => Some(MasteryLevel::New),
            "learning" => Some(MasteryLevel::Learning),
            "reviewing" => Some(MasteryLevel::Reviewing),
            "familiar" => Some(MasteryLevel::Familiar),
            "mastered" => Some(MasteryLevel::Mastered),
            _ => None,
        }
    }
}

// ==================== Stats ====================

/// Item count per mastery level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryBreakdown {
    pub new: usize,
    pub learning: usize,
    pub reviewing: usize,
    pub familiar: usize,
    pub mastered: usize,
}

impl MasteryBreakdown {
    pub fn count(&self, level: MasteryLevel) -> usize {
        match level {
            MasteryLevel::New => self.new,
            MasteryLevel::Learning => self.learning,
            MasteryLevel::Reviewing => self.reviewing,
            MasteryLevel::Familiar => self.familiar,
            MasteryLevel::Mastered => self.mastered,
        }
    }

    pub fn record(&mut self, level: MasteryLevel) {
        match level {
            MasteryLevel::New => self.new += 1,
            MasteryLevel::Learning => self.learning += 1,
            MasteryLevel::Reviewing => self.reviewing += 1,
            MasteryLevel::Familiar => self.familiar += 1,
            MasteryLevel::Mastered => self.mastered += 1,
        }
    }

    pub fn sum(&self) -> usize {
        self.new + self.learning + self.reviewing + self.familiar + self.mastered
    }
}

/// Dashboard snapshot of a learner's item collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyStats {
    pub total: usize,
    pub due_today: usize,
    pub by_level: MasteryBreakdown,
    pub mastered: usize,
    /// New and Learning items together
    pub learning: usize,
    /// 0-100
    pub mastery_percentage: u8,
}

//! Command-line driver over a JSON snapshot of review items.
//!
//! The snapshot is read, one engine operation runs, and the result is
//! returned as JSON. Nothing is written back.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::due::select_due;
use crate::error::SrsError;
use crate::grading::grade_raw;
use crate::sanitize::validate_items;
use crate::stats::{aggregate, due_forecast};
use crate::types::ReviewItem;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown item: {0}")]
    UnknownItem(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Srs(#[from] SrsError),
}

/// danci-srs - spaced-repetition scheduling reports
#[derive(Debug, Parser)]
#[command(name = "danci-srs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Review queue, study stats and grading over a JSON snapshot of review items")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List the items due now, most overdue first
    Due {
        /// Path to the snapshot JSON file
        snapshot: PathBuf,
    },

    /// Show totals, due count and mastery buckets
    Stats {
        /// Path to the snapshot JSON file
        snapshot: PathBuf,
    },

    /// Show how many reviews fall on each of the next days
    Forecast {
        /// Path to the snapshot JSON file
        snapshot: PathBuf,
        /// Number of days to forecast (defaults to SRS_FORECAST_DAYS)
        #[arg(long)]
        days: Option<usize>,
    },

    /// Grade one item and print its next state (the snapshot is not modified)
    Grade {
        /// Path to the snapshot JSON file
        snapshot: PathBuf,
        /// Identifier of the item to grade
        item_id: String,
        /// 0 = again, 1 = hard, 2 = good, 3 = easy
        #[arg(allow_negative_numbers = true)]
        grade: i64,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Due { .. } => "due",
            Command::Stats { .. } => "stats",
            Command::Forecast { .. } => "forecast",
            Command::Grade { .. } => "grade",
        }
    }

    fn snapshot(&self) -> &Path {
        match self {
            Command::Due { snapshot }
            | Command::Stats { snapshot }
            | Command::Forecast { snapshot, .. }
            | Command::Grade { snapshot, .. } => snapshot,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DueRow<'a> {
    item_id: &'a str,
    days_until_review: i64,
    overdue: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ForecastReport {
    start: DateTime<Utc>,
    days: Vec<usize>,
}

/// Read and validate a snapshot file.
pub fn load_items(path: &Path) -> Result<Vec<ReviewItem>, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let items: Vec<ReviewItem> = serde_json::from_str(&raw)?;
    validate_items(&items)?;
    tracing::debug!(path = %path.display(), count = items.len(), "loaded snapshot");
    Ok(items)
}

/// Run a command against its snapshot at `now`.
pub fn run(command: &Command, config: &Config, now: DateTime<Utc>) -> Result<Value, CliError> {
    let items = load_items(command.snapshot())?;
    tracing::info!(command = command.name(), items = items.len(), %now, "running command");

    match command {
        Command::Due { .. } => {
            let queue = select_due(&items, now);
            let rows: Vec<DueRow<'_>> = queue
                .entries()
                .iter()
                .map(|entry| DueRow {
                    item_id: &entry.item.item_id,
                    days_until_review: entry.days_until_review,
                    overdue: entry.is_overdue(),
                })
                .collect();
            Ok(serde_json::to_value(rows)?)
        }
        Command::Stats { .. } => Ok(serde_json::to_value(aggregate(&items, now))?),
        Command::Forecast { days, .. } => {
            let horizon = days.unwrap_or(config.forecast_days);
            let report = ForecastReport {
                start: now,
                days: due_forecast(&items, now, horizon),
            };
            Ok(serde_json::to_value(report)?)
        }
        Command::Grade { item_id, grade, .. } => {
            let item = items
                .iter()
                .find(|item| &item.item_id == item_id)
                .ok_or_else(|| CliError::UnknownItem(item_id.clone()))?;
            let state = grade_raw(&item.state, *grade, now)?;
            Ok(serde_json::to_value(ReviewItem::new(item_id.clone(), state))?)
        }
    }
}

use thiserror::Error;

/// Contract violations reported by the scheduling engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SrsError {
    #[error("invalid grade: {0} (expected 0-3)")]
    InvalidGrade(i64),
    #[error("invalid review state: {0}")]
    InvalidState(String),
}

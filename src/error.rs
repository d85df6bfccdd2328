//! Error types
//!
//! None of these cross the store boundary as failures: a [`Rejection`] means
//! "not applied, board unchanged", and a [`StorageError`] is logged and
//! swallowed by the store.

use thiserror::Error;

use crate::board::{ColumnId, TaskId};

/// Why a transition was not applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The intent's source position no longer holds the item it names
    #[error("stale reference: {list}[{index}] does not hold {expected}")]
    StaleReference {
        list: String,
        index: usize,
        expected: String,
    },

    /// The intent names a column that is not on the board
    #[error("unknown column: {0}")]
    UnknownTarget(ColumnId),

    /// User-supplied text was blank after trimming
    #[error("{field} must not be blank")]
    InvalidInput { field: &'static str },

    /// Dropped on its own position or outside any target
    #[error("nothing to move")]
    NoMovement,

    /// The id source returned an id that is already taken
    #[error("id source produced an existing id: {0}")]
    IdCollision(String),
}

impl Rejection {
    /// Whether the user can fix this by changing their input
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Rejection::InvalidInput { .. })
    }
}

/// A board that breaks referential integrity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("task stored under key {key} has id {id}")]
    TaskKeyMismatch { key: TaskId, id: TaskId },

    #[error("column stored under key {key} has id {id}")]
    ColumnKeyMismatch { key: ColumnId, id: ColumnId },

    #[error("column {column} references missing task {task}")]
    DanglingTask { column: ColumnId, task: TaskId },

    #[error("task {task} is listed in both {first} and {second}")]
    DuplicateTask {
        task: TaskId,
        first: ColumnId,
        second: ColumnId,
    },

    #[error("task {0} is not in any column")]
    OrphanTask(TaskId),

    #[error("column order references missing column {0}")]
    UnknownColumnInOrder(ColumnId),

    #[error("column {0} appears more than once in the column order")]
    DuplicateColumnInOrder(ColumnId),

    #[error("column {0} is missing from the column order")]
    ColumnMissingFromOrder(ColumnId),
}

/// Key-value storage failures
#[derive(Debug, Error)]
pub enum StorageError {
    /// No storage backend (e.g. LocalStorage disabled in private browsing)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The backend refused a read or write (quota exceeded, security error)
    #[error("storage access failed: {0}")]
    Access(String),

    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    /// Stored value is not a board snapshot
    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] serde_json::Error),

    /// Stored snapshot parsed but is not a consistent board
    #[error("invalid snapshot: {0}")]
    Invalid(#[from] InvariantViolation),
}

/// A user intent payload that could not be parsed
#[derive(Debug, Error)]
#[error("malformed intent: {0}")]
pub struct IntentError(#[from] pub serde_json::Error);

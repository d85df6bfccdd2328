//! Kanban Board - drag-and-drop task board for the browser
//!
//! Core modules:
//! - `board`: Pure board state and transitions (tasks, columns, ordering)
//! - `store`: Board store applying intents and saving after each change
//! - `persistence`: Snapshot save/load over key-value storage (LocalStorage on web)
//! - `settings`: Storage key, column title policy, seed layout
//! - `web`: JavaScript bindings for the page

pub mod board;
pub mod error;
pub mod persistence;
pub mod settings;
pub mod store;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use board::{Board, Column, ColumnId, Intent, Task, TaskId};
pub use error::{IntentError, InvariantViolation, Rejection, StorageError};
pub use settings::{EmptyTitlePolicy, Settings};
pub use store::BoardStore;

/// Board configuration constants
pub mod consts {
    /// LocalStorage key for the board snapshot
    pub const STORAGE_KEY: &str = "kanban-data";
    /// Title for columns added without one
    pub const PLACEHOLDER_COLUMN_TITLE: &str = "New Column";
}

//! Snapshot persistence over a key-value store
//!
//! Features:
//! - Whole-board JSON snapshot under a single key
//! - Structural and referential validation on load
//! - LocalStorage backend on web, in-memory backend elsewhere
//!
//! There is no versioning: a stored value of any other shape is treated as
//! absent by the caller.

#[cfg(target_arch = "wasm32")]
pub mod local;
pub mod memory;

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;
pub use memory::MemoryStore;

use crate::board::Board;
use crate::error::StorageError;

/// String key-value storage (the shape of `window.localStorage`)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub fn encode_snapshot(board: &Board) -> Result<String, StorageError> {
    serde_json::to_string(board).map_err(StorageError::Encode)
}

/// Parse and validate a stored snapshot
pub fn decode_snapshot(json: &str) -> Result<Board, StorageError> {
    let board: Board = serde_json::from_str(json).map_err(StorageError::Decode)?;
    board.validate()?;
    Ok(board)
}

/// Read the snapshot under `key`, `Ok(None)` when nothing is stored
pub fn load_snapshot(store: &impl KeyValueStore, key: &str) -> Result<Option<Board>, StorageError> {
    match store.get(key)? {
        Some(json) if !json.is_empty() => decode_snapshot(&json).map(Some),
        _ => Ok(None),
    }
}

pub fn save_snapshot(store: &mut impl KeyValueStore, key: &str, board: &Board) -> Result<(), StorageError> {
    let json = encode_snapshot(board)?;
    store.set(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Column, Task};
    use crate::error::InvariantViolation;

    const KEY: &str = "kanban-data";

    fn sample() -> Board {
        Board::from_parts(
            vec![Task::new("t1", "Plan"), Task::new("t2", "Build")],
            vec![
                Column::new("todo", "To Do", vec!["t2".into(), "t1".into()]),
                Column::new("done", "Done", vec![]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::default();
        save_snapshot(&mut store, KEY, &sample()).unwrap();
        assert_eq!(load_snapshot(&store, KEY).unwrap(), Some(sample()));
    }

    #[test]
    fn test_missing_or_empty_is_absent() {
        let mut store = MemoryStore::default();
        assert_eq!(load_snapshot(&store, KEY).unwrap(), None);
        store.set(KEY, "").unwrap();
        assert_eq!(load_snapshot(&store, KEY).unwrap(), None);
    }

    #[test]
    fn test_inline_task_shape_rejected() {
        // Columns embedding their tasks instead of referencing them by id
        let inline = r#"{
            "columns": {"c1": {"id": "c1", "title": "To Do",
                               "tasks": [{"id": "t1", "content": "Task 1"}]}},
            "columnOrder": ["c1"]
        }"#;
        assert!(matches!(decode_snapshot(inline), Err(StorageError::Decode(_))));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(decode_snapshot("{not json"), Err(StorageError::Decode(_))));
        assert!(matches!(decode_snapshot("[]"), Err(StorageError::Decode(_))));
    }

    #[test]
    fn test_inconsistent_snapshot_rejected() {
        let orphan = r#"{
            "tasks": {"t1": {"id": "t1", "content": "lost"}},
            "columns": {"todo": {"id": "todo", "title": "To Do", "taskIds": []}},
            "columnOrder": ["todo"]
        }"#;
        assert!(matches!(
            decode_snapshot(orphan),
            Err(StorageError::Invalid(InvariantViolation::OrphanTask(_)))
        ));
    }
}

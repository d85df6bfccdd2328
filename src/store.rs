//! Board store
//!
//! Owns the current board and applies intents to it. Every committed
//! transition is saved straight away; storage failures are logged and
//! otherwise ignored so the board keeps working without persistence.

use crate::board::{
    self, Board, DropResult, IdSource, Intent, MoveColumn, MoveTask, RandomIds,
};
use crate::error::Rejection;
use crate::persistence::{KeyValueStore, load_snapshot, save_snapshot};
use crate::settings::Settings;

pub struct BoardStore<S: KeyValueStore, I: IdSource = RandomIds> {
    board: Board,
    settings: Settings,
    storage: S,
    ids: I,
}

impl<S: KeyValueStore, I: IdSource> BoardStore<S, I> {
    /// Load the stored board, or seed and save a new one
    pub fn open(storage: S, ids: I, settings: Settings) -> Self {
        let snapshot = match load_snapshot(&storage, &settings.storage_key) {
            Ok(Some(board)) => {
                log::info!(
                    "Loaded board ({} columns, {} tasks)",
                    board.column_count(),
                    board.task_count()
                );
                Some(board)
            }
            Ok(None) => {
                log::info!("No saved board, starting from seed");
                None
            }
            Err(e) => {
                log::warn!("Ignoring saved board: {}", e);
                None
            }
        };

        let mut store = Self {
            board: Board::default(),
            settings,
            storage,
            ids,
        };
        let loaded = snapshot.is_some();
        store.board = board::initialize(snapshot, &store.settings, &mut store.ids);
        if !loaded {
            store.persist();
        }
        store
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cheap copy of the current board; later transitions don't affect it
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn move_task(&mut self, mv: &MoveTask) -> Result<(), Rejection> {
        let next = board::move_task(&self.board, mv);
        self.commit(next)
    }

    pub fn move_column(&mut self, mv: &MoveColumn) -> Result<(), Rejection> {
        let next = board::move_column(&self.board, mv);
        self.commit(next)
    }

    pub fn add_task(&mut self, column_id: &str, content: &str) -> Result<(), Rejection> {
        let next = board::add_task(&self.board, &mut self.ids, column_id, content);
        self.commit(next)
    }

    pub fn add_column(&mut self, title: Option<&str>) -> Result<(), Rejection> {
        let next = board::add_column(&self.board, &mut self.ids, title, &self.settings);
        self.commit(next)
    }

    pub fn apply(&mut self, intent: &Intent) -> Result<(), Rejection> {
        match intent {
            Intent::MoveTask(mv) => self.move_task(mv),
            Intent::MoveColumn(mv) => self.move_column(mv),
            Intent::AddTask(add) => self.add_task(add.column_id.as_str(), &add.content),
            Intent::AddColumn(add) => self.add_column(add.title.as_deref()),
        }
    }

    /// Apply a finished drag; a drop outside every list changes nothing
    pub fn on_drag_end(&mut self, drop: DropResult) -> Result<(), Rejection> {
        match drop.into_intent() {
            Some(intent) => self.apply(&intent),
            None => {
                log::debug!("Drag cancelled");
                Err(Rejection::NoMovement)
            }
        }
    }

    /// Replace the board with a fresh seed
    pub fn reset(&mut self) {
        self.board = board::build_seed(&self.settings, &mut self.ids);
        log::info!("Board reset to seed");
        self.persist();
    }

    fn commit(&mut self, next: Result<Board, Rejection>) -> Result<(), Rejection> {
        match next {
            Ok(board) => {
                self.board = board;
                self.persist();
                Ok(())
            }
            Err(reason) => {
                log::debug!("Intent not applied: {}", reason);
                Err(reason)
            }
        }
    }

    fn persist(&mut self) {
        if let Err(e) = save_snapshot(&mut self.storage, &self.settings.storage_key, &self.board) {
            log::warn!("Failed to save board: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{AddTask, Column, Task};
    use crate::error::StorageError;
    use crate::persistence::{MemoryStore, decode_snapshot, encode_snapshot};

    const KEY: &str = "kanban-data";

    fn stored_board(store: &MemoryStore) -> Board {
        let json = store.get(KEY).unwrap().expect("board saved");
        decode_snapshot(&json).unwrap()
    }

    fn sample() -> Board {
        Board::from_parts(
            vec![Task::new("t1", "One"), Task::new("t2", "Two")],
            vec![
                Column::new("todo", "To Do", vec!["t1".into(), "t2".into()]),
                Column::new("done", "Done", vec![]),
            ],
        )
        .unwrap()
    }

    fn open_with(board: &Board) -> BoardStore<MemoryStore> {
        let storage = MemoryStore::with_entry(KEY, encode_snapshot(board).unwrap());
        BoardStore::open(storage, RandomIds::from_seed(1), Settings::default())
    }

    #[test]
    fn test_open_empty_storage_seeds_and_saves() {
        let store = BoardStore::open(MemoryStore::new(), RandomIds::from_seed(1), Settings::default());
        assert_eq!(store.board().column_count(), 3);
        assert_eq!(store.board().task_count(), 3);
        assert_eq!(&stored_board(store.storage()), store.board());
    }

    #[test]
    fn test_open_restores_saved_board_verbatim() {
        let store = open_with(&sample());
        assert_eq!(store.board(), &sample());
    }

    #[test]
    fn test_open_corrupt_storage_falls_back_to_seed() {
        let storage = MemoryStore::with_entry(KEY, r#"{"columns":{},"columnOrder":[]"#);
        let store = BoardStore::open(storage, RandomIds::from_seed(1), Settings::default());
        assert_eq!(store.board().column_count(), 3);
        // The seed replaced the unreadable value
        assert_eq!(&stored_board(store.storage()), store.board());
    }

    #[test]
    fn test_custom_storage_key() {
        let settings = Settings::default().with_storage_key("my-board");
        let store = BoardStore::open(MemoryStore::new(), RandomIds::from_seed(1), settings);
        assert!(store.storage().get("my-board").unwrap().is_some());
        assert!(store.storage().get(KEY).unwrap().is_none());
    }

    #[test]
    fn test_committed_transitions_are_saved() {
        let mut store = open_with(&sample());
        store
            .move_task(&MoveTask {
                source_column_id: "todo".into(),
                source_index: 0,
                dest_column_id: "done".into(),
                dest_index: 0,
                task_id: "t1".into(),
            })
            .unwrap();
        store.add_task("done", "Three").unwrap();
        store.add_column(Some("Review")).unwrap();

        let saved = stored_board(store.storage());
        assert_eq!(&saved, store.board());
        assert_eq!(saved.column("done").unwrap().task_ids.len(), 2);
        assert_eq!(saved.column_count(), 3);
    }

    #[test]
    fn test_rejected_intent_leaves_board_and_storage_alone() {
        let mut store = open_with(&sample());
        let before = store.snapshot();

        assert!(matches!(
            store.add_task("todo", "   "),
            Err(Rejection::InvalidInput { .. })
        ));
        assert_eq!(
            store.apply(&Intent::AddTask(AddTask {
                column_id: "nope".into(),
                content: "x".into(),
            })),
            Err(Rejection::UnknownTarget("nope".into()))
        );

        assert_eq!(store.board(), &before);
        assert_eq!(stored_board(store.storage()), before);
    }

    #[test]
    fn test_snapshot_unaffected_by_later_transitions() {
        let mut store = open_with(&sample());
        let before = store.snapshot();
        store.add_column(None).unwrap();
        assert_eq!(before, sample());
        assert_eq!(store.board().column_count(), 3);
    }

    #[test]
    fn test_drag_end() {
        let mut store = open_with(&sample());

        let cancelled = DropResult::from_json(
            r#"{"draggableId":"t1","source":{"droppableId":"todo","index":0},"destination":null}"#,
        )
        .unwrap();
        assert_eq!(store.on_drag_end(cancelled), Err(Rejection::NoMovement));
        assert_eq!(store.board(), &sample());

        let drop = DropResult::from_json(
            r#"{"draggableId":"t2","type":"task","source":{"droppableId":"todo","index":1},
                "destination":{"droppableId":"done","index":0}}"#,
        )
        .unwrap();
        store.on_drag_end(drop).unwrap();
        assert_eq!(store.board().column_of("t2").map(|c| c.as_str()), Some("done"));

        let column_drop = DropResult::from_json(
            r#"{"draggableId":"done","type":"column","source":{"droppableId":"board","index":1},
                "destination":{"droppableId":"board","index":0}}"#,
        )
        .unwrap();
        store.on_drag_end(column_drop).unwrap();
        assert_eq!(store.board().column_order()[0].as_str(), "done");
    }

    #[test]
    fn test_reset_reseeds() {
        let mut store = open_with(&sample());
        store.reset();
        assert!(store.board().column("todo").is_none());
        assert_eq!(store.board().task_count(), 3);
        assert_eq!(&stored_board(store.storage()), store.board());
    }

    /// Storage that refuses every read and write
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("test".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Access("QuotaExceededError".into()))
        }
    }

    #[test]
    fn test_storage_failures_are_swallowed() {
        let mut store = BoardStore::open(BrokenStore, RandomIds::from_seed(9), Settings::default());
        assert_eq!(store.board().column_count(), 3);

        let todo = store.board().column_order()[0].clone();
        store.add_task(todo.as_str(), "Still works").unwrap();
        assert_eq!(store.board().task_count(), 4);
    }
}

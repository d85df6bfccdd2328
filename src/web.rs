//! JavaScript bindings (WASM only)
//!
//! The page renders from `board()` and reports user actions back through the
//! methods below. Each action returns `true` when the board changed; the
//! page re-renders on `true` and may show feedback otherwise.

use wasm_bindgen::prelude::*;

use crate::board::{DropResult, Intent, MoveColumn, MoveTask, RandomIds};
use crate::error::Rejection;
use crate::persistence::{LocalStorage, encode_snapshot};
use crate::settings::Settings;
use crate::store::BoardStore;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Kanban board module loaded");
}

/// Board bound to the page's LocalStorage
#[wasm_bindgen]
pub struct KanbanBoard {
    store: BoardStore<LocalStorage, RandomIds>,
}

#[wasm_bindgen]
impl KanbanBoard {
    /// Open the saved board; `settings` is optional settings JSON
    #[wasm_bindgen(constructor)]
    pub fn new(settings: Option<String>) -> KanbanBoard {
        let settings = match settings.as_deref().map(Settings::from_json) {
            Some(Ok(settings)) => settings,
            Some(Err(e)) => {
                log::warn!("Invalid settings, using defaults: {}", e);
                Settings::default()
            }
            None => Settings::default(),
        };
        KanbanBoard {
            store: BoardStore::open(LocalStorage::open(), RandomIds::from_entropy(), settings),
        }
    }

    /// Current board as snapshot JSON
    pub fn board(&self) -> Result<String, JsError> {
        encode_snapshot(self.store.board()).map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(js_name = moveTask)]
    pub fn move_task(
        &mut self,
        source_column_id: String,
        source_index: usize,
        dest_column_id: String,
        dest_index: usize,
        task_id: String,
    ) -> bool {
        applied(self.store.move_task(&MoveTask {
            source_column_id: source_column_id.into(),
            source_index,
            dest_column_id: dest_column_id.into(),
            dest_index,
            task_id: task_id.into(),
        }))
    }

    #[wasm_bindgen(js_name = moveColumn)]
    pub fn move_column(&mut self, source_index: usize, dest_index: usize, column_id: String) -> bool {
        applied(self.store.move_column(&MoveColumn {
            source_index,
            dest_index,
            column_id: column_id.into(),
        }))
    }

    #[wasm_bindgen(js_name = addTask)]
    pub fn add_task(&mut self, column_id: &str, content: &str) -> bool {
        applied(self.store.add_task(column_id, content))
    }

    #[wasm_bindgen(js_name = addColumn)]
    pub fn add_column(&mut self, title: Option<String>) -> bool {
        applied(self.store.add_column(title.as_deref()))
    }

    /// Apply a drag-and-drop result (JSON as reported by the drag library)
    #[wasm_bindgen(js_name = onDragEnd)]
    pub fn on_drag_end(&mut self, result: &str) -> bool {
        match DropResult::from_json(result) {
            Ok(drop) => applied(self.store.on_drag_end(drop)),
            Err(e) => {
                log::warn!("Ignoring drop: {}", e);
                false
            }
        }
    }

    /// Apply a tagged intent (`{"type": "addTask", ...}`)
    pub fn apply(&mut self, intent: &str) -> bool {
        match Intent::from_json(intent) {
            Ok(intent) => applied(self.store.apply(&intent)),
            Err(e) => {
                log::warn!("Ignoring intent: {}", e);
                false
            }
        }
    }

    pub fn reset(&mut self) {
        self.store.reset();
    }
}

fn applied(result: Result<(), Rejection>) -> bool {
    result.is_ok()
}

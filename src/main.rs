//! Kanban Board entry point
//!
//! On the web the page drives the board through `web::KanbanBoard`. The
//! native binary seeds an in-memory board and prints its snapshot.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use kanban_board::board::RandomIds;
    use kanban_board::persistence::{MemoryStore, encode_snapshot};
    use kanban_board::{BoardStore, Settings};

    env_logger::init();
    log::info!("Kanban Board (native) starting...");
    log::info!("Native mode keeps the board in memory - run with `trunk serve` for the web version");

    let store = BoardStore::open(MemoryStore::new(), RandomIds::from_entropy(), Settings::default());
    for column in store.board().columns_in_order() {
        log::info!("{} ({} tasks)", column.title, column.task_ids.len());
    }
    match encode_snapshot(store.board()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to encode board: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::start, this is just to satisfy the compiler
}

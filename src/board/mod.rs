//! Board state and transitions
//!
//! Everything the board does lives here. This module must be pure and
//! deterministic:
//! - Transitions take a board and return a new one, never mutating the input
//! - Ids come from an injected `IdSource` only
//! - Stable iteration order (ordered maps keyed by id)
//! - No rendering, storage or platform dependencies

pub mod ids;
pub mod intent;
pub mod seed;
pub mod state;
pub mod transition;

pub use ids::{ColumnId, IdSource, RandomIds, TaskId};
pub use intent::{
    AddColumn, AddTask, DragKind, DraggableLocation, DropResult, Intent, MoveColumn, MoveTask,
};
pub use seed::{SeedColumn, build_seed, initialize};
pub use state::{Board, Column, Task};
pub use transition::{add_column, add_task, move_column, move_task};

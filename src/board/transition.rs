//! Board transitions
//!
//! Each function takes the current board and returns the next one, or a
//! [`Rejection`] when a precondition fails. The input board is never
//! modified; only the containers a transition touches are rebuilt.

use super::ids::IdSource;
use super::intent::{MoveColumn, MoveTask};
use super::state::{Board, Column, Task};
use crate::error::Rejection;
use crate::settings::Settings;

/// Move a task within its column or into another column
///
/// The destination index is clamped to the destination list after the task
/// has been removed from its source.
pub fn move_task(board: &Board, mv: &MoveTask) -> Result<Board, Rejection> {
    let source = board
        .column(mv.source_column_id.as_str())
        .ok_or_else(|| Rejection::UnknownTarget(mv.source_column_id.clone()))?;
    let dest = board
        .column(mv.dest_column_id.as_str())
        .ok_or_else(|| Rejection::UnknownTarget(mv.dest_column_id.clone()))?;

    if source.task_ids.get(mv.source_index) != Some(&mv.task_id) {
        return Err(Rejection::StaleReference {
            list: source.id.to_string(),
            index: mv.source_index,
            expected: mv.task_id.to_string(),
        });
    }
    if source.id == dest.id && mv.source_index == mv.dest_index {
        return Err(Rejection::NoMovement);
    }

    let mut source_ids = source.task_ids.clone();
    let moved = source_ids.remove(mv.source_index);

    if source.id == dest.id {
        let at = mv.dest_index.min(source_ids.len());
        source_ids.insert(at, moved);
        return Ok(board.with_columns([source.with_task_ids(source_ids)]));
    }

    let mut dest_ids = dest.task_ids.clone();
    let at = mv.dest_index.min(dest_ids.len());
    dest_ids.insert(at, moved);
    Ok(board.with_columns([
        source.with_task_ids(source_ids),
        dest.with_task_ids(dest_ids),
    ]))
}

/// Move a column to another position in the column order
pub fn move_column(board: &Board, mv: &MoveColumn) -> Result<Board, Rejection> {
    if board.column_order().get(mv.source_index) != Some(&mv.column_id) {
        return Err(Rejection::StaleReference {
            list: "columnOrder".to_owned(),
            index: mv.source_index,
            expected: mv.column_id.to_string(),
        });
    }
    if mv.source_index == mv.dest_index {
        return Err(Rejection::NoMovement);
    }

    let mut order = board.column_order().to_vec();
    let moved = order.remove(mv.source_index);
    let at = mv.dest_index.min(order.len());
    order.insert(at, moved);
    Ok(board.with_column_order(order))
}

/// Append a new task with trimmed `content` to a column
pub fn add_task(
    board: &Board,
    ids: &mut impl IdSource,
    column_id: &str,
    content: &str,
) -> Result<Board, Rejection> {
    let column = board
        .column(column_id)
        .ok_or_else(|| Rejection::UnknownTarget(column_id.into()))?;
    let content = content.trim();
    if content.is_empty() {
        return Err(Rejection::InvalidInput {
            field: "task content",
        });
    }

    let id = ids.next_task_id(board);
    if board.task(id.as_str()).is_some() {
        return Err(Rejection::IdCollision(id.to_string()));
    }

    let mut task_ids = column.task_ids.clone();
    task_ids.push(id.clone());
    Ok(board.with_task(Task::new(id, content), column.with_task_ids(task_ids)))
}

/// Append a new, empty column to the end of the board
///
/// A blank or missing title follows [`Settings::empty_title`].
pub fn add_column(
    board: &Board,
    ids: &mut impl IdSource,
    title: Option<&str>,
    settings: &Settings,
) -> Result<Board, Rejection> {
    let title = settings
        .resolve_column_title(title)
        .ok_or(Rejection::InvalidInput {
            field: "column title",
        })?;

    let id = ids.next_column_id(board);
    if board.column(id.as_str()).is_some() {
        return Err(Rejection::IdCollision(id.to_string()));
    }

    Ok(board.with_appended_column(Column::new(id, title, Vec::new())))
}

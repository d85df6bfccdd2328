//! User intents
//!
//! Plain records emitted by the presentation layer. Payloads arriving as JSON
//! are parsed into these types at the boundary; anything that does not fit
//! the shape (negative index, missing id) is rejected before it reaches the
//! board.

use serde::{Deserialize, Serialize};

use super::ids::{ColumnId, TaskId};
use crate::error::IntentError;

/// Move a task to a position in the same or another column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveTask {
    pub source_column_id: ColumnId,
    pub source_index: usize,
    pub dest_column_id: ColumnId,
    pub dest_index: usize,
    /// Expected at `source_index`; guards against stale drags
    pub task_id: TaskId,
}

/// Move a column to another position in the column order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveColumn {
    pub source_index: usize,
    pub dest_index: usize,
    pub column_id: ColumnId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTask {
    pub column_id: ColumnId,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddColumn {
    #[serde(default)]
    pub title: Option<String>,
}

/// Any intent the store accepts, tagged by `type` in JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Intent {
    MoveTask(MoveTask),
    MoveColumn(MoveColumn),
    AddTask(AddTask),
    AddColumn(AddColumn),
}

impl Intent {
    pub fn from_json(json: &str) -> Result<Self, IntentError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// What was dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DragKind {
    #[default]
    Task,
    Column,
}

/// A list and a position in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraggableLocation {
    pub droppable_id: String,
    pub index: usize,
}

/// Result of a drag gesture, as reported by the drag-and-drop layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropResult {
    pub draggable_id: String,
    #[serde(rename = "type", default)]
    pub kind: DragKind,
    pub source: DraggableLocation,
    /// `None` when dropped outside every list
    #[serde(default)]
    pub destination: Option<DraggableLocation>,
}

impl DropResult {
    pub fn from_json(json: &str) -> Result<Self, IntentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The move this drop asks for, `None` for a cancelled drag
    pub fn into_intent(self) -> Option<Intent> {
        let destination = self.destination?;
        let intent = match self.kind {
            DragKind::Task => Intent::MoveTask(MoveTask {
                source_column_id: self.source.droppable_id.into(),
                source_index: self.source.index,
                dest_column_id: destination.droppable_id.into(),
                dest_index: destination.index,
                task_id: self.draggable_id.into(),
            }),
            // Columns are dragged within the board's single horizontal list
            DragKind::Column => Intent::MoveColumn(MoveColumn {
                source_index: self.source.index,
                dest_index: destination.index,
                column_id: self.draggable_id.into(),
            }),
        };
        Some(intent)
    }
}

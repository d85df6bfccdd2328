//! Board state: tasks, columns and column order
//!
//! Tasks and columns live in separate maps and are joined by id. Every
//! container sits behind an `Arc` so a transition can rebuild the parts it
//! changes and share the rest with the previous board.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::ids::{ColumnId, TaskId};
use crate::error::InvariantViolation;

/// A unit of work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Task {
    pub id: TaskId,
    pub content: String,
}

impl Task {
    pub fn new(id: impl Into<TaskId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// A named, ordered bucket of task references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    /// Top to bottom
    pub task_ids: Vec<TaskId>,
}

impl Column {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>, task_ids: Vec<TaskId>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            task_ids,
        }
    }

    /// Same column with a different task order
    pub(crate) fn with_task_ids(&self, task_ids: Vec<TaskId>) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            task_ids,
        }
    }
}

/// Complete kanban state (serializable snapshot)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Board {
    pub(crate) tasks: Arc<BTreeMap<TaskId, Arc<Task>>>,
    pub(crate) columns: Arc<BTreeMap<ColumnId, Arc<Column>>>,
    /// Left to right
    pub(crate) column_order: Arc<Vec<ColumnId>>,
}

impl Board {
    /// Build a board from its entities, columns in display order
    pub fn from_parts(tasks: Vec<Task>, columns: Vec<Column>) -> Result<Self, InvariantViolation> {
        let column_order = columns.iter().map(|c| c.id.clone()).collect();
        let board = Self {
            tasks: Arc::new(tasks.into_iter().map(|t| (t.id.clone(), Arc::new(t))).collect()),
            columns: Arc::new(columns.into_iter().map(|c| (c.id.clone(), Arc::new(c))).collect()),
            column_order: Arc::new(column_order),
        };
        board.validate()?;
        Ok(board)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id).map(Arc::as_ref)
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.get(id).map(Arc::as_ref)
    }

    pub fn column_order(&self) -> &[ColumnId] {
        &self.column_order
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Columns left to right
    pub fn columns_in_order(&self) -> impl Iterator<Item = &Column> {
        self.column_order.iter().filter_map(|id| self.column(id.as_str()))
    }

    /// Tasks of one column, top to bottom (empty for an unknown column)
    pub fn tasks_in(&self, column: &str) -> impl Iterator<Item = &Task> {
        self.column(column)
            .map(|c| c.task_ids.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|id| self.task(id.as_str()))
    }

    /// The task id at a position, if the position exists
    pub fn task_at(&self, column: &str, index: usize) -> Option<&TaskId> {
        self.column(column)?.task_ids.get(index)
    }

    /// The column a task currently belongs to
    pub fn column_of(&self, task: &str) -> Option<&ColumnId> {
        self.columns_in_order()
            .find(|c| c.task_ids.iter().any(|id| id.as_str() == task))
            .map(|c| &c.id)
    }

    /// Check referential integrity between tasks, columns and column order
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        for (key, task) in self.tasks.iter() {
            if *key != task.id {
                return Err(InvariantViolation::TaskKeyMismatch {
                    key: key.clone(),
                    id: task.id.clone(),
                });
            }
        }

        let mut owners: BTreeMap<&TaskId, &ColumnId> = BTreeMap::new();
        for (key, column) in self.columns.iter() {
            if *key != column.id {
                return Err(InvariantViolation::ColumnKeyMismatch {
                    key: key.clone(),
                    id: column.id.clone(),
                });
            }
            for task in &column.task_ids {
                if !self.tasks.contains_key(task) {
                    return Err(InvariantViolation::DanglingTask {
                        column: column.id.clone(),
                        task: task.clone(),
                    });
                }
                if let Some(first) = owners.insert(task, &column.id) {
                    return Err(InvariantViolation::DuplicateTask {
                        task: task.clone(),
                        first: first.clone(),
                        second: column.id.clone(),
                    });
                }
            }
        }
        if let Some(orphan) = self.tasks.keys().find(|id| !owners.contains_key(id)) {
            return Err(InvariantViolation::OrphanTask(orphan.clone()));
        }

        let mut seen = BTreeSet::new();
        for id in self.column_order.iter() {
            if !self.columns.contains_key(id) {
                return Err(InvariantViolation::UnknownColumnInOrder(id.clone()));
            }
            if !seen.insert(id) {
                return Err(InvariantViolation::DuplicateColumnInOrder(id.clone()));
            }
        }
        if let Some(missing) = self.columns.keys().find(|id| !seen.contains(id)) {
            return Err(InvariantViolation::ColumnMissingFromOrder(missing.clone()));
        }

        Ok(())
    }

    /// New board with `changed` columns replaced, tasks and order shared
    pub(crate) fn with_columns(&self, changed: impl IntoIterator<Item = Column>) -> Self {
        let mut columns = (*self.columns).clone();
        for column in changed {
            columns.insert(column.id.clone(), Arc::new(column));
        }
        Self {
            tasks: Arc::clone(&self.tasks),
            columns: Arc::new(columns),
            column_order: Arc::clone(&self.column_order),
        }
    }

    /// New board with a different column order, tasks and columns shared
    pub(crate) fn with_column_order(&self, column_order: Vec<ColumnId>) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            columns: Arc::clone(&self.columns),
            column_order: Arc::new(column_order),
        }
    }

    /// New board with `task` added and its column replaced, order shared
    pub(crate) fn with_task(&self, task: Task, column: Column) -> Self {
        let mut tasks = (*self.tasks).clone();
        tasks.insert(task.id.clone(), Arc::new(task));
        let mut next = self.with_columns([column]);
        next.tasks = Arc::new(tasks);
        next
    }

    /// New board with `column` appended, tasks shared
    pub(crate) fn with_appended_column(&self, column: Column) -> Self {
        let mut order = (*self.column_order).clone();
        order.push(column.id.clone());
        let mut next = self.with_columns([column]);
        next.column_order = Arc::new(order);
        next
    }
}

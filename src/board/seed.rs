//! Default board and startup initialization

use serde::{Deserialize, Serialize};

use super::ids::IdSource;
use super::state::Board;
use super::transition::{add_column, add_task};
use crate::settings::Settings;

/// One column of the seed layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedColumn {
    pub title: String,
    /// Task contents, top to bottom
    #[serde(default)]
    pub tasks: Vec<String>,
}

impl SeedColumn {
    pub fn new(title: impl Into<String>, tasks: &[&str]) -> Self {
        Self {
            title: title.into(),
            tasks: tasks.iter().map(|t| (*t).to_owned()).collect(),
        }
    }

    /// To Do / In Progress / Done with three sample tasks
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("To Do", &["Task 1", "Task 2"]),
            Self::new("In Progress", &["Task 3"]),
            Self::new("Done", &[]),
        ]
    }
}

/// Build the seed board from `settings.seed` with fresh ids
///
/// Entries the transitions refuse (blank task text, blank title under the
/// reject policy) are skipped.
pub fn build_seed(settings: &Settings, ids: &mut impl IdSource) -> Board {
    let mut board = Board::default();
    for seed in &settings.seed {
        match add_column(&board, ids, Some(seed.title.as_str()), settings) {
            Ok(next) => board = next,
            Err(reason) => {
                log::debug!("Skipping seed column {:?}: {}", seed.title, reason);
                continue;
            }
        }
        let Some(column_id) = board.column_order().last().cloned() else {
            continue;
        };
        for content in &seed.tasks {
            match add_task(&board, ids, column_id.as_str(), content) {
                Ok(next) => board = next,
                Err(reason) => log::debug!("Skipping seed task {:?}: {}", content, reason),
            }
        }
    }
    board
}

/// Starting board: a consistent snapshot verbatim, otherwise the seed
pub fn initialize(snapshot: Option<Board>, settings: &Settings, ids: &mut impl IdSource) -> Board {
    match snapshot {
        Some(board) => match board.validate() {
            Ok(()) => board,
            Err(violation) => {
                log::warn!("Discarding inconsistent snapshot: {}", violation);
                build_seed(settings, ids)
            }
        },
        None => build_seed(settings, ids),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ids::RandomIds;
    use crate::board::{Column, Task};
    use crate::settings::EmptyTitlePolicy;

    #[test]
    fn test_default_seed_layout() {
        let board = build_seed(&Settings::default(), &mut RandomIds::from_seed(1));
        assert!(board.validate().is_ok());

        let layout: Vec<(String, Vec<String>)> = board
            .columns_in_order()
            .map(|c| {
                let tasks = board.tasks_in(c.id.as_str()).map(|t| t.content.clone()).collect();
                (c.title.clone(), tasks)
            })
            .collect();
        assert_eq!(
            layout,
            vec![
                ("To Do".to_owned(), vec!["Task 1".to_owned(), "Task 2".to_owned()]),
                ("In Progress".to_owned(), vec!["Task 3".to_owned()]),
                ("Done".to_owned(), vec![]),
            ]
        );
    }

    #[test]
    fn test_seed_is_reproducible_for_a_fixed_id_seed() {
        let settings = Settings::default();
        let a = build_seed(&settings, &mut RandomIds::from_seed(11));
        let b = build_seed(&settings, &mut RandomIds::from_seed(11));
        let c = build_seed(&settings, &mut RandomIds::from_seed(12));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_seed_skips_refused_entries() {
        let settings = Settings::default()
            .with_empty_title(EmptyTitlePolicy::Reject)
            .with_seed(vec![
                SeedColumn::new("", &["lost"]),
                SeedColumn::new("Backlog", &["  ", "Real"]),
            ]);
        let board = build_seed(&settings, &mut RandomIds::from_seed(2));
        assert_eq!(board.column_count(), 1);
        assert_eq!(board.task_count(), 1);
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_initialize_keeps_valid_snapshot() {
        let snapshot = Board::from_parts(
            vec![Task::new("t1", "Keep me")],
            vec![Column::new("todo", "To Do", vec!["t1".into()])],
        )
        .unwrap();
        let board = initialize(Some(snapshot.clone()), &Settings::default(), &mut RandomIds::from_seed(3));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_initialize_replaces_corrupt_snapshot() {
        let corrupt: Board = serde_json::from_str(
            r#"{"tasks":{},"columns":{"todo":{"id":"todo","title":"To Do","taskIds":["ghost"]}},
                "columnOrder":["todo"]}"#,
        )
        .unwrap();
        let board = initialize(Some(corrupt), &Settings::default(), &mut RandomIds::from_seed(3));
        assert!(board.validate().is_ok());
        assert_eq!(board.column_count(), 3);
        assert!(board.column("todo").is_none());
    }

    #[test]
    fn test_initialize_without_snapshot_seeds() {
        let board = initialize(None, &Settings::default(), &mut RandomIds::from_seed(4));
        assert_eq!(board.task_count(), 3);
    }
}

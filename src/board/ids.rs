//! Task and column identifiers, and the id source used to mint new ones
//!
//! Ids are opaque strings. The only contract an [`IdSource`] must honour is
//! that a freshly minted id is not already present in its namespace.

use std::borrow::Borrow;
use std::fmt;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::Board;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a task, unique among the board's tasks
    TaskId
);

string_id!(
    /// Identifier of a column, unique among the board's columns
    ColumnId
);

/// Source of fresh ids for new tasks and columns
pub trait IdSource {
    /// Mint a task id not present in `board`
    fn next_task_id(&mut self, board: &Board) -> TaskId;

    /// Mint a column id not present in `board`
    fn next_column_id(&mut self, board: &Board) -> ColumnId;
}

/// Random ids backed by a PCG generator
///
/// Seeded from entropy in the browser, from a fixed seed in tests so that
/// seeded boards are reproducible.
#[derive(Debug, Clone)]
pub struct RandomIds {
    rng: Pcg32,
}

impl RandomIds {
    /// Deterministic ids for a given seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Ids seeded from the platform RNG (`crypto.getRandomValues` on web)
    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg32::from_rng(&mut rand::rng()),
        }
    }

    fn fresh(&mut self, prefix: &str, taken: impl Fn(&str) -> bool) -> String {
        loop {
            let candidate = format!("{prefix}-{:016x}", self.rng.random::<u64>());
            if !taken(&candidate) {
                return candidate;
            }
        }
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl IdSource for RandomIds {
    fn next_task_id(&mut self, board: &Board) -> TaskId {
        TaskId(self.fresh("task", |id| board.task(id).is_some()))
    }

    fn next_column_id(&mut self, board: &Board) -> ColumnId {
        ColumnId(self.fresh("column", |id| board.column(id).is_some()))
    }
}

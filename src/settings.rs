//! Board settings
//!
//! Supplied by the host page as JSON when the board is created. Every field
//! has a default, so `{}` is a valid settings document.

use serde::{Deserialize, Serialize};

use crate::board::SeedColumn;
use crate::consts::{PLACEHOLDER_COLUMN_TITLE, STORAGE_KEY};

/// What add-column does with a blank title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum EmptyTitlePolicy {
    /// Create the column with the placeholder title
    #[default]
    UsePlaceholder,
    /// Refuse to create the column
    Reject,
}

impl EmptyTitlePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmptyTitlePolicy::UsePlaceholder => "usePlaceholder",
            EmptyTitlePolicy::Reject => "reject",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// LocalStorage key the board snapshot is stored under
    pub storage_key: String,
    pub empty_title: EmptyTitlePolicy,
    /// Title given to columns created without one
    pub placeholder_title: String,
    /// Layout of the board built when nothing usable is stored
    pub seed: Vec<SeedColumn>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            empty_title: EmptyTitlePolicy::UsePlaceholder,
            placeholder_title: PLACEHOLDER_COLUMN_TITLE.to_owned(),
            seed: SeedColumn::defaults(),
        }
    }
}

impl Settings {
    /// Parse settings JSON, filling in defaults for missing fields
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_empty_title(mut self, policy: EmptyTitlePolicy) -> Self {
        self.empty_title = policy;
        self
    }

    pub fn with_seed(mut self, seed: Vec<SeedColumn>) -> Self {
        self.seed = seed;
        self
    }

    /// Title a new column gets, or `None` if the policy refuses it
    pub fn resolve_column_title(&self, title: Option<&str>) -> Option<String> {
        match title.map(str::trim).filter(|t| !t.is_empty()) {
            Some(title) => Some(title.to_owned()),
            None => match self.empty_title {
                EmptyTitlePolicy::UsePlaceholder => Some(self.placeholder_title.clone()),
                EmptyTitlePolicy::Reject => None,
            },
        }
    }
}

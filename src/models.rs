//! Frontend Models
//!
//! Data structures shared by the store, the list and the components.

use serde::{Deserialize, Serialize};

/// A single todo entry, as persisted in local storage
///
/// Field order matches the stored JSON layout: `{id, completed, title}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub completed: bool,
    pub title: String,
}

impl Item {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            completed: false,
            title: title.into(),
        }
    }
}

/// Session-local row identity, never persisted
pub type RowKey = u64;

/// A displayed row: the persisted item plus its row key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: RowKey,
    pub item: Item,
}

/// Which rows the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Filter::All => "#/",
            Filter::Active => "#/active",
            Filter::Completed => "#/completed",
        }
    }

    /// Parse a filter link label, case-insensitively. Unknown labels yield None.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "all" => Some(Filter::All),
            "active" => Some(Filter::Active),
            "completed" => Some(Filter::Completed),
            _ => None,
        }
    }

    /// Parse a location hash such as `#/active`
    pub fn from_hash(hash: &str) -> Option<Self> {
        let route = hash.trim_start_matches('#').trim_start_matches('/');
        if route.is_empty() {
            return Some(Filter::All);
        }
        Self::from_label(route)
    }

    pub fn shows(&self, item: &Item) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }
}

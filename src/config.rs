//! Widget Configuration
//!
//! Built from defaults at startup and passed to the root component.

use serde::{Deserialize, Serialize};

/// Local storage key used by earlier builds of the widget
pub const DEFAULT_STORAGE_KEY: &str = "todo-[pureJavaScript]";

/// How a newly appended item gets its id
///
/// `TopRow` is how earlier builds numbered items; `HighestIssued` avoids the
/// duplicate ids that scheme produces. Both read lists saved by either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// Id of the current first row + 1. Can repeat ids after deletions.
    TopRow,
    /// One past the highest id issued so far or present in the list.
    #[default]
    HighestIssued,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage_key: String,
    pub id_policy: IdPolicy,
    /// One of the `log` level names: error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            id_policy: IdPolicy::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

//! User settings for slotdesk
//!
//! Manages display preferences for the audit timeline and exports.

use serde::{Deserialize, Serialize};

/// User settings for slotdesk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Time format preference (strftime format)
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// How many timeline entries a single page shows before "load more"
    #[serde(default = "default_timeline_page_size")]
    pub timeline_page_size: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_time_format() -> String {
    "%H:%M:%S".to_string()
}

fn default_timeline_page_size() -> usize {
    6
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            time_format: default_time_format(),
            timeline_page_size: default_timeline_page_size(),
        }
    }
}

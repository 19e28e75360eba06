//! Slot model
//!
//! A slot is a schedulable time block within a project, with a capacity,
//! a published flag, and the sales representatives assigned to it.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::ids::SlotId;

/// A schedulable time block within a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Unique identifier
    pub id: SlotId,

    /// The project this slot belongs to
    pub project_name: String,

    /// Display name (e.g. "Early Bird Special A")
    pub name: String,

    /// Scheduled date
    pub date: NaiveDate,

    /// Start of the time block
    pub start_time: NaiveTime,

    /// End of the time block
    pub end_time: NaiveTime,

    /// Whether the slot is visible to customers
    #[serde(default)]
    pub published: bool,

    /// Sales representatives assigned to this slot
    #[serde(default)]
    pub assigned_reps: Vec<String>,

    /// Manually overridden capacity; when absent, capacity derives from
    /// the assigned representative count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_override: Option<u32>,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

impl Slot {
    /// Create a new unpublished slot with no representatives
    pub fn new(
        id: SlotId,
        project_name: impl Into<String>,
        name: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            id,
            project_name: project_name.into(),
            name: name.into(),
            date,
            start_time,
            end_time,
            published: false,
            assigned_reps: Vec::new(),
            capacity_override: None,
            notes: String::new(),
        }
    }

    /// Effective capacity: the manual override when present, otherwise the
    /// assigned representative count
    pub fn capacity(&self) -> u32 {
        self.capacity_override
            .unwrap_or(self.assigned_reps.len() as u32)
    }

    /// Start time formatted as HH:MM
    pub fn start_hhmm(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    /// End time formatted as HH:MM
    pub fn end_hhmm(&self) -> String {
        self.end_time.format("%H:%M").to_string()
    }
}

//! Filtering and display ordering for the audit log
//!
//! Pure functions over a store snapshot: the same entries and filters always
//! produce the same result, and nothing here touches stored order.
//!
//! All active filters combine with AND semantics, including the free-text
//! search. The filters are typed, so malformed input (an unparseable date,
//! an unknown action token) is rejected at the CLI boundary and can never
//! reach the engine.

use std::sync::Arc;

use chrono::NaiveDate;

use super::entry::{AuditAction, AuditEntry, EntityType};

/// Filter criteria for the audit log; `None` fields match everything
#[derive(Debug, Clone, Default)]
pub struct AuditFilters {
    /// Exact action match
    pub action: Option<AuditAction>,
    /// Case-insensitive substring match on the performer name
    pub performed_by: Option<String>,
    /// Exact project match
    pub project_name: Option<String>,
    /// Exact entity type match
    pub entity_type: Option<EntityType>,
    /// Inclusive lower bound on the entry's date
    pub from_date: Option<NaiveDate>,
    /// Inclusive upper bound on the entry's date
    pub to_date: Option<NaiveDate>,
    /// Case-insensitive substring match over details, slot name, project
    /// name and performer
    pub search: Option<String>,
}

impl AuditFilters {
    /// Check whether an entry satisfies every active filter
    pub fn matches(&self, entry: &AuditEntry) -> bool {
        if let Some(action) = self.action {
            if entry.action() != action {
                return false;
            }
        }

        if let Some(performer) = &self.performed_by {
            if !contains_ignore_case(entry.performed_by(), performer) {
                return false;
            }
        }

        if let Some(project) = &self.project_name {
            if entry.project_name() != Some(project.as_str()) {
                return false;
            }
        }

        if let Some(entity_type) = self.entity_type {
            if entry.entity_type() != entity_type {
                return false;
            }
        }

        let entry_date = entry.timestamp().date_naive();
        if let Some(from) = self.from_date {
            if entry_date < from {
                return false;
            }
        }
        if let Some(to) = self.to_date {
            if entry_date > to {
                return false;
            }
        }

        if let Some(query) = &self.search {
            let hit = contains_ignore_case(entry.details(), query)
                || entry
                    .slot_name()
                    .is_some_and(|name| contains_ignore_case(name, query))
                || entry
                    .project_name()
                    .is_some_and(|name| contains_ignore_case(name, query))
                || contains_ignore_case(entry.performed_by(), query);
            if !hit {
                return false;
            }
        }

        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Keep the entries satisfying every active filter, in input order
pub fn apply_filters(
    entries: &[Arc<AuditEntry>],
    filters: &AuditFilters,
) -> Vec<Arc<AuditEntry>> {
    entries
        .iter()
        .filter(|entry| filters.matches(entry))
        .cloned()
        .collect()
}

/// Order entries for display: newest first, descending id as tie-break
pub fn sort_for_display(entries: &mut [Arc<AuditEntry>]) {
    entries.sort_by(|a, b| {
        b.timestamp()
            .cmp(&a.timestamp())
            .then(b.id().cmp(&a.id()))
    });
}

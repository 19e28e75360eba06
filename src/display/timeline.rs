//! Audit timeline rendering
//!
//! Renders audit entries as a newest-first terminal timeline: action label,
//! performer, narration, project/slot context and the before/after
//! payloads when present.

use std::sync::Arc;

use crate::audit::AuditEntry;

/// Format a single timeline card
pub fn format_entry(entry: &AuditEntry) -> String {
    let mut output = format!(
        "{}  {}\n  [{}] {} ({})\n  {}\n",
        entry.timestamp().format("%Y-%m-%d"),
        entry.timestamp().format("%H:%M:%S UTC"),
        entry.action().label(),
        entry.performed_by(),
        entry.performed_by_role(),
        entry.details(),
    );

    let mut context = Vec::new();
    if let Some(project) = entry.project_name() {
        context.push(format!("project: {}", project));
    }
    if let Some(slot) = entry.slot_name() {
        context.push(format!("slot: {}", slot));
    }
    context.push(format!(
        "{} {}",
        entry.entity_type(),
        entry.entity().id_string()
    ));
    output.push_str(&format!("  {}\n", context.join("  |  ")));

    if let Some(before) = entry.before() {
        output.push_str(&format!("  before: {}\n", before));
    }
    if let Some(after) = entry.after() {
        output.push_str(&format!("  after:  {}\n", after));
    }

    output.push_str(&format!("  immutable #{}\n", entry.id()));
    output
}

/// Format a list of entries as a timeline
pub fn format_timeline(entries: &[Arc<AuditEntry>]) -> String {
    if entries.is_empty() {
        return "No activities found.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format_entry(entry));
        output.push('\n');
    }
    output
}

/// Format a growing prefix of the timeline
///
/// Shows the first `visible` entries and, when more remain, a trailer with
/// the hidden count. The engine never paginates; this is the caller-side
/// prefix slice.
pub fn format_timeline_page(entries: &[Arc<AuditEntry>], visible: usize) -> String {
    let shown = entries.len().min(visible);
    let mut output = format_timeline(&entries[..shown]);

    if entries.len() > shown {
        output.push_str(&format!(
            "Showing {} of {} activities ({} more)\n",
            shown,
            entries.len(),
            entries.len() - shown
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{narrate, AuditFilters, AuditStore};
    use crate::config::RunMode;
    use crate::models::{Actor, Role, Slot, SlotId};
    use chrono::{NaiveDate, NaiveTime};

    fn sample_entries() -> Vec<Arc<AuditEntry>> {
        let mut store = AuditStore::new(RunMode::Production);
        let actor = Actor::new("Priya Nair", Role::ProjectAdmin);
        let mut slot = Slot::new(
            SlotId::new(101),
            "GreenX",
            "Early Bird Special A",
            NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
            NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        );
        slot.capacity_override = Some(40);

        narrate::log_slot_create(&mut store, &actor, &slot);
        narrate::log_slot_publish(&mut store, &actor, &slot, true);
        store.filtered(&AuditFilters::default())
    }

    #[test]
    fn test_entry_card_contains_context() {
        let entries = sample_entries();
        let card = format_entry(&entries[0]);

        assert!(card.contains("Slot Published"));
        assert!(card.contains("Priya Nair"));
        assert!(card.contains("project: GreenX"));
        assert!(card.contains("slot 101"));
        assert!(card.contains("immutable #2"));
    }

    #[test]
    fn test_empty_timeline() {
        assert_eq!(format_timeline(&[]), "No activities found.\n");
    }

    #[test]
    fn test_page_trailer_reports_hidden_entries() {
        let entries = sample_entries();
        let page = format_timeline_page(&entries, 1);
        assert!(page.contains("Showing 1 of 2 activities (1 more)"));

        let full = format_timeline_page(&entries, 10);
        assert!(!full.contains("Showing"));
    }
}

//! CSV export functionality
//!
//! Exports audit entries to a flat tabular format with a fixed column set:
//! timestamp, action label, performer, role, project, slot name, entity
//! type, entity id and narration.

use std::io::Write;
use std::sync::Arc;

use crate::audit::AuditEntry;
use crate::error::SlotdeskResult;

const HEADERS: [&str; 9] = [
    "Timestamp",
    "Action",
    "Performed By",
    "Role",
    "Project",
    "Slot Name",
    "Entity Type",
    "Entity ID",
    "Details",
];

/// Export audit entries to CSV, in the order given
pub fn export_audit_csv<W: Write>(
    entries: &[Arc<AuditEntry>],
    writer: &mut W,
) -> SlotdeskResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(HEADERS)?;

    for entry in entries {
        csv_writer.write_record([
            entry.timestamp().to_rfc3339().as_str(),
            entry.action().label(),
            entry.performed_by(),
            entry.performed_by_role(),
            entry.project_name().unwrap_or(""),
            entry.slot_name().unwrap_or(""),
            entry.entity_type().as_str(),
            entry.entity().id_string().as_str(),
            entry.details(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

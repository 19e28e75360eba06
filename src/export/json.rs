//! JSON export functionality
//!
//! Exports the audit sequence as a schema-versioned JSON envelope.

use std::io::Write;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::audit::AuditEntry;
use crate::error::SlotdeskResult;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Audit export envelope
#[derive(Debug, Serialize)]
pub struct AuditExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of entries in this export
    pub entry_count: usize,

    /// The exported entries, in the order given by the caller
    pub entries: Vec<Arc<AuditEntry>>,
}

impl AuditExport {
    /// Build an envelope around the given entries
    pub fn new(entries: Vec<Arc<AuditEntry>>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            entry_count: entries.len(),
            entries,
        }
    }
}

/// Export audit entries as pretty-printed JSON
pub fn export_audit_json<W: Write>(
    entries: Vec<Arc<AuditEntry>>,
    writer: &mut W,
) -> SlotdeskResult<()> {
    let export = AuditExport::new(entries);
    serde_json::to_writer_pretty(&mut *writer, &export)?;
    writeln!(writer)?;
    Ok(())
}

//! Append-only audit store
//!
//! Owns the process-wide audit sequence. The store is constructed once at
//! application start and passed by mutable reference into every mutation
//! flow, which keeps tests free of hidden shared state. Entries are handed
//! out behind `Arc` so readers share the stored values without any way to
//! touch the live sequence.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::config::RunMode;
use crate::error::{SlotdeskError, SlotdeskResult};

use super::entry::{AuditEntry, NewAuditEntry};
use super::query::{apply_filters, sort_for_display, AuditFilters};

/// Append-only sequence of audit entries with monotonic id assignment
#[derive(Debug)]
pub struct AuditStore {
    mode: RunMode,
    next_id: u64,
    entries: Vec<Arc<AuditEntry>>,
}

impl AuditStore {
    /// Create an empty store with the id counter at 1
    pub fn new(mode: RunMode) -> Self {
        Self {
            mode,
            next_id: 1,
            entries: Vec::new(),
        }
    }

    /// Record a new entry
    ///
    /// Assigns the next sequence id, stamps the current time, appends the
    /// assembled entry to the end of the sequence and returns a shared
    /// handle to it. This is the only write path into the store; ordering
    /// between two calls is call order, and the id is the ordering
    /// tie-breaker when timestamps coincide.
    pub fn record(&mut self, params: NewAuditEntry) -> Arc<AuditEntry> {
        let id = self.next_id;
        self.next_id += 1;

        let entry = Arc::new(AuditEntry::assemble(id, Utc::now(), params));
        info!(
            target: "audit",
            id = entry.id(),
            action = %entry.action(),
            details = entry.details(),
            "recorded audit entry"
        );
        self.entries.push(Arc::clone(&entry));
        entry
    }

    /// Snapshot of every entry in insertion order
    ///
    /// The returned vector is the caller's own; pushing to or reordering it
    /// cannot affect the live store, and the entries themselves expose no
    /// mutating surface.
    pub fn all(&self) -> Vec<Arc<AuditEntry>> {
        self.entries.clone()
    }

    /// Filtered, display-ordered view (newest first, id as tie-break)
    pub fn filtered(&self, filters: &AuditFilters) -> Vec<Arc<AuditEntry>> {
        let mut matched = apply_filters(&self.entries, filters);
        sort_for_display(&mut matched);
        matched
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The runtime mode this store was constructed with
    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// Clear the store and reset the id counter to 1
    ///
    /// Only available in development mode. Anywhere else the audit log is
    /// strictly append-only and this returns an error, leaving the store
    /// untouched.
    pub fn reset(&mut self) -> SlotdeskResult<()> {
        if !self.mode.is_development() {
            return Err(SlotdeskError::AuditImmutability(format!(
                "cannot reset the audit log in {} mode",
                self.mode
            )));
        }

        warn!(target: "audit", "audit log cleared (development mode only)");
        self.entries.clear();
        self.next_id = 1;
        Ok(())
    }
}

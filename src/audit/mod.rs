//! Audit logging system for slotdesk
//!
//! Records every slot, booking and assignment mutation with before/after
//! values in an append-only audit log.
//!
//! # Architecture
//!
//! The audit system consists of four components:
//!
//! - `AuditEntry`: An immutable log entry with sequence id, timestamp,
//!   action, actor identity, entity reference and optional before/after
//!   payloads. Entries expose accessors only.
//! - `AuditStore`: The append-only in-memory sequence with monotonic id
//!   assignment and a development-only reset guard.
//! - `query`: Pure filtering and display ordering over store snapshots.
//! - `narrate`: Per-action helpers that derive the narration and the
//!   before/after payloads from entity snapshots, then record the entry.
//!
//! # Example
//!
//! ```rust,ignore
//! use slotdesk::audit::{narrate, AuditFilters, AuditStore};
//! use slotdesk::config::RunMode;
//!
//! let mut store = AuditStore::new(RunMode::from_env());
//!
//! // A mutation flow commits its state, then narrates the change
//! narrate::log_slot_create(&mut store, &actor, &slot);
//!
//! // Presentation reads a filtered, newest-first projection
//! let entries = store.filtered(&AuditFilters {
//!     project_name: Some("GreenX".into()),
//!     ..Default::default()
//! });
//! ```

mod entry;
pub mod narrate;
mod query;
mod store;

pub use entry::{AuditAction, AuditEntry, EntityRef, EntityType, NewAuditEntry, ALL_ACTIONS};
pub use query::{apply_filters, sort_for_display, AuditFilters};
pub use store::AuditStore;

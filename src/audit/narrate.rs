//! Change narration helpers
//!
//! One helper per audited action family. Each computes the one-line
//! narration and the before/after payloads from already-committed entity
//! snapshots, then delegates to [`AuditStore::record`]. Callers mutate
//! their own state first; nothing here fetches or validates entity state.
//!
//! The payloads are free-form JSON objects; the keys each helper emits are
//! the convention documented on the helper itself, enforced here rather
//! than by the store.

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::models::{Actor, Booking, BookingStatus, Slot};

use super::entry::{AuditAction, AuditEntry, EntityRef, NewAuditEntry};
use super::store::AuditStore;

fn base_entry(
    actor: &Actor,
    action: AuditAction,
    entity: EntityRef,
    slot_name: Option<String>,
    project_name: Option<String>,
    details: String,
) -> NewAuditEntry {
    NewAuditEntry {
        action,
        performed_by: actor.name.clone(),
        performed_by_role: actor.role.as_str().to_string(),
        entity,
        project_name,
        slot_name,
        details,
        before: None,
        after: None,
        metadata: None,
    }
}

/// The tracked slot fieldset: `date`, `start_time`, `end_time`, `capacity`,
/// `notes`
fn slot_fields(slot: &Slot) -> Value {
    json!({
        "date": slot.date.to_string(),
        "start_time": slot.start_hhmm(),
        "end_time": slot.end_hhmm(),
        "capacity": slot.capacity(),
        "notes": slot.notes,
    })
}

/// Record a `slot_create` entry
///
/// No `before`; `after` carries the full slot fieldset plus the published
/// flag.
pub fn log_slot_create(store: &mut AuditStore, actor: &Actor, slot: &Slot) -> Arc<AuditEntry> {
    let mut after = slot_fields(slot);
    after["published"] = json!(slot.published);

    let mut params = base_entry(
        actor,
        AuditAction::SlotCreate,
        EntityRef::Slot(slot.id),
        Some(slot.name.clone()),
        Some(slot.project_name.clone()),
        format!("Created new slot \"{}\" for {}", slot.name, slot.date),
    );
    params.after = Some(after);
    store.record(params)
}

/// Record a `slot_edit` entry
///
/// Compares the tracked fieldset (`date`, `start_time`, `end_time`,
/// `capacity`, `notes`) and narrates only the fields that differ. Callers
/// are responsible for not logging no-op edits; an empty change list is
/// still recorded as given.
pub fn log_slot_edit(
    store: &mut AuditStore,
    actor: &Actor,
    before: &Slot,
    after: &Slot,
) -> Arc<AuditEntry> {
    let mut changes = Vec::new();

    if before.date != after.date {
        changes.push(format!("date from {} to {}", before.date, after.date));
    }
    if before.start_time != after.start_time {
        changes.push(format!(
            "start time from {} to {}",
            before.start_hhmm(),
            after.start_hhmm()
        ));
    }
    if before.end_time != after.end_time {
        changes.push(format!(
            "end time from {} to {}",
            before.end_hhmm(),
            after.end_hhmm()
        ));
    }
    if before.capacity() != after.capacity() {
        changes.push(format!(
            "capacity from {} to {}",
            before.capacity(),
            after.capacity()
        ));
    }
    if before.notes != after.notes {
        changes.push("notes".to_string());
    }

    let mut params = base_entry(
        actor,
        AuditAction::SlotEdit,
        EntityRef::Slot(after.id),
        Some(after.name.clone()),
        Some(after.project_name.clone()),
        format!("Updated slot: {}", changes.join(", ")),
    );
    params.before = Some(slot_fields(before));
    params.after = Some(slot_fields(after));
    store.record(params)
}

/// Record a `slot_publish` or `slot_unpublish` entry, chosen by the target
/// flag; payloads hold just `{published}` with the opposite/target value
pub fn log_slot_publish(
    store: &mut AuditStore,
    actor: &Actor,
    slot: &Slot,
    published: bool,
) -> Arc<AuditEntry> {
    let (action, details) = if published {
        (
            AuditAction::SlotPublish,
            format!("Published slot \"{}\"", slot.name),
        )
    } else {
        (
            AuditAction::SlotUnpublish,
            format!("Unpublished slot \"{}\"", slot.name),
        )
    };

    let mut params = base_entry(
        actor,
        action,
        EntityRef::Slot(slot.id),
        Some(slot.name.clone()),
        Some(slot.project_name.clone()),
        details,
    );
    params.before = Some(json!({ "published": !published }));
    params.after = Some(json!({ "published": published }));
    store.record(params)
}

/// Record a `rep_assign` or `rep_unassign` entry
///
/// `rep_assign` when a representative name is being assigned,
/// `rep_unassign` when the new value is `None`. The entity is always an
/// assignment, even though it decorates a slot; payload key is
/// `assigned_rep`.
pub fn log_rep_assignment(
    store: &mut AuditStore,
    actor: &Actor,
    slot: &Slot,
    new_rep: Option<&str>,
    previous_rep: Option<&str>,
) -> Arc<AuditEntry> {
    let (action, details) = match new_rep {
        Some(rep) => (
            AuditAction::RepAssign,
            format!("Assigned sales representative \"{}\" to slot", rep),
        ),
        None => (
            AuditAction::RepUnassign,
            format!(
                "Unassigned sales representative \"{}\" from slot",
                previous_rep.unwrap_or_default()
            ),
        ),
    };

    let mut params = base_entry(
        actor,
        action,
        EntityRef::Assignment(slot.id),
        Some(slot.name.clone()),
        Some(slot.project_name.clone()),
        details,
    );
    params.before = Some(json!({ "assigned_rep": previous_rep }));
    params.after = Some(json!({ "assigned_rep": new_rep }));
    store.record(params)
}

/// Record a `capacity_override` entry
///
/// Recorded for every capacity change, whether it came from an explicit
/// manual override or an automatic recompute from the representative
/// count. The optional reason lands in the details and in `after.reason`.
pub fn log_capacity_override(
    store: &mut AuditStore,
    actor: &Actor,
    slot: &Slot,
    old_capacity: u32,
    new_capacity: u32,
    reason: Option<&str>,
) -> Arc<AuditEntry> {
    let mut details = format!("Capacity overridden from {} to {}", old_capacity, new_capacity);
    if let Some(reason) = reason {
        details.push_str(&format!(" - {}", reason));
    }

    let mut params = base_entry(
        actor,
        AuditAction::CapacityOverride,
        EntityRef::Slot(slot.id),
        Some(slot.name.clone()),
        Some(slot.project_name.clone()),
        details,
    );
    params.before = Some(json!({ "capacity": old_capacity }));
    params.after = match reason {
        Some(reason) => Some(json!({ "capacity": new_capacity, "reason": reason })),
        None => Some(json!({ "capacity": new_capacity })),
    };
    store.record(params)
}

/// Record a `booking_confirm` entry; `after` carries customer name, email
/// and status
pub fn log_booking_confirm(
    store: &mut AuditStore,
    actor: &Actor,
    booking: &Booking,
) -> Arc<AuditEntry> {
    let mut params = base_entry(
        actor,
        AuditAction::BookingConfirm,
        EntityRef::Booking(booking.id.clone()),
        Some(booking.slot_name.clone()),
        Some(booking.project_name.clone()),
        format!("Booking confirmed for customer {}", booking.customer_name),
    );
    params.after = Some(json!({
        "customer_name": booking.customer_name,
        "customer_email": booking.customer_email,
        "status": booking.status,
    }));
    store.record(params)
}

/// Record a `booking_reschedule` entry
///
/// The booking already carries its new slot and date; the old ones come in
/// as arguments. Payloads hold `{date, slot_name}` on both sides.
pub fn log_booking_reschedule(
    store: &mut AuditStore,
    actor: &Actor,
    booking: &Booking,
    old_slot_name: &str,
    old_date: NaiveDate,
) -> Arc<AuditEntry> {
    let mut params = base_entry(
        actor,
        AuditAction::BookingReschedule,
        EntityRef::Booking(booking.id.clone()),
        Some(booking.slot_name.clone()),
        Some(booking.project_name.clone()),
        format!(
            "Booking rescheduled from {} ({}) to {} ({})",
            old_date, old_slot_name, booking.date, booking.slot_name
        ),
    );
    params.before = Some(json!({ "date": old_date.to_string(), "slot_name": old_slot_name }));
    params.after = Some(json!({
        "date": booking.date.to_string(),
        "slot_name": booking.slot_name,
    }));
    store.record(params)
}

/// Record a `booking_cancel` entry
///
/// The booking has already been cancelled; `after` stamps the cancellation
/// timestamp (`cancelled_at`) and the optional reason.
pub fn log_booking_cancel(
    store: &mut AuditStore,
    actor: &Actor,
    booking: &Booking,
    previous_status: BookingStatus,
    reason: Option<&str>,
) -> Arc<AuditEntry> {
    let mut details = "Booking cancelled".to_string();
    if let Some(reason) = reason {
        details.push_str(&format!(" - {}", reason));
    }

    let mut after = json!({
        "status": BookingStatus::Cancelled,
        "cancelled_at": booking.cancelled_at,
    });
    if let Some(reason) = reason {
        after["reason"] = json!(reason);
    }

    let mut params = base_entry(
        actor,
        AuditAction::BookingCancel,
        EntityRef::Booking(booking.id.clone()),
        Some(booking.slot_name.clone()),
        Some(booking.project_name.clone()),
        details,
    );
    params.before = Some(json!({ "status": previous_status }));
    params.after = Some(after);
    store.record(params)
}

/// Record a `status_change` entry; payloads hold just `{status}`
pub fn log_status_change(
    store: &mut AuditStore,
    actor: &Actor,
    booking: &Booking,
    old_status: BookingStatus,
) -> Arc<AuditEntry> {
    let mut params = base_entry(
        actor,
        AuditAction::StatusChange,
        EntityRef::Booking(booking.id.clone()),
        Some(booking.slot_name.clone()),
        Some(booking.project_name.clone()),
        format!(
            "Booking status changed from {} to {}",
            old_status, booking.status
        ),
    );
    params.before = Some(json!({ "status": old_status }));
    params.after = Some(json!({ "status": booking.status }));
    store.record(params)
}

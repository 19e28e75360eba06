//! Audit entry data structures
//!
//! Defines the audit action vocabulary, the entity reference union, and the
//! immutable entry type itself. Entries expose their fields through
//! accessors only; the single construction path lives in the store, so once
//! an entry exists nothing in the process can alter it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::models::{BookingId, SlotId};

/// Kinds of actions that get recorded in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    SlotCreate,
    SlotEdit,
    SlotPublish,
    SlotUnpublish,
    RepAssign,
    RepUnassign,
    CapacityOverride,
    BookingConfirm,
    BookingReschedule,
    BookingCancel,
    StatusChange,
}

/// All action kinds, in declaration order
pub const ALL_ACTIONS: [AuditAction; 11] = [
    AuditAction::SlotCreate,
    AuditAction::SlotEdit,
    AuditAction::SlotPublish,
    AuditAction::SlotUnpublish,
    AuditAction::RepAssign,
    AuditAction::RepUnassign,
    AuditAction::CapacityOverride,
    AuditAction::BookingConfirm,
    AuditAction::BookingReschedule,
    AuditAction::BookingCancel,
    AuditAction::StatusChange,
];

impl AuditAction {
    /// The snake_case token used in filters and serialized entries
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SlotCreate => "slot_create",
            Self::SlotEdit => "slot_edit",
            Self::SlotPublish => "slot_publish",
            Self::SlotUnpublish => "slot_unpublish",
            Self::RepAssign => "rep_assign",
            Self::RepUnassign => "rep_unassign",
            Self::CapacityOverride => "capacity_override",
            Self::BookingConfirm => "booking_confirm",
            Self::BookingReschedule => "booking_reschedule",
            Self::BookingCancel => "booking_cancel",
            Self::StatusChange => "status_change",
        }
    }

    /// Fixed display label, used by the timeline and CSV export
    pub fn label(&self) -> &'static str {
        match self {
            Self::SlotCreate => "Slot Created",
            Self::SlotEdit => "Slot Edited",
            Self::SlotPublish => "Slot Published",
            Self::SlotUnpublish => "Slot Unpublished",
            Self::RepAssign => "Rep Assigned",
            Self::RepUnassign => "Rep Unassigned",
            Self::CapacityOverride => "Capacity Override",
            Self::BookingConfirm => "Booking Confirmed",
            Self::BookingReschedule => "Booking Rescheduled",
            Self::BookingCancel => "Booking Cancelled",
            Self::StatusChange => "Status Changed",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ACTIONS
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| format!("unknown audit action: '{}'", s))
    }
}

/// Kinds of entities an audit entry can refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Slot,
    Booking,
    Assignment,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slot => "slot",
            Self::Booking => "booking",
            Self::Assignment => "assignment",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slot" => Ok(Self::Slot),
            "booking" => Ok(Self::Booking),
            "assignment" => Ok(Self::Assignment),
            other => Err(format!("unknown entity type: '{}'", other)),
        }
    }
}

/// Reference to the entity an audit entry is about
///
/// Slots are numbered and bookings carry string references; the union keeps
/// the identifier type tied to the entity kind so consumers pattern-match
/// instead of guessing. Assignments decorate a slot and reuse its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "entity_type", content = "entity_id", rename_all = "lowercase")]
pub enum EntityRef {
    Slot(SlotId),
    Booking(BookingId),
    Assignment(SlotId),
}

impl EntityRef {
    /// The entity kind this reference belongs to
    pub fn entity_type(&self) -> EntityType {
        match self {
            Self::Slot(_) => EntityType::Slot,
            Self::Booking(_) => EntityType::Booking,
            Self::Assignment(_) => EntityType::Assignment,
        }
    }

    /// The identifier rendered as a string, for display and export
    pub fn id_string(&self) -> String {
        match self {
            Self::Slot(id) | Self::Assignment(id) => id.to_string(),
            Self::Booking(id) => id.to_string(),
        }
    }
}

/// Input for recording a new audit entry
///
/// Everything except the sequence id and timestamp, which the store assigns
/// at the moment of recording.
#[derive(Debug, Clone)]
pub struct NewAuditEntry {
    pub action: AuditAction,
    pub performed_by: String,
    pub performed_by_role: String,
    pub entity: EntityRef,
    pub project_name: Option<String>,
    pub slot_name: Option<String>,
    pub details: String,
    pub before: Option<Value>,
    pub after: Option<Value>,
    pub metadata: Option<Value>,
}

/// A single audit log entry
///
/// Immutable once constructed: fields are private, there are no mutating
/// methods, and the store hands entries out behind shared references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditEntry {
    id: u64,
    timestamp: DateTime<Utc>,
    action: AuditAction,
    performed_by: String,
    performed_by_role: String,
    #[serde(flatten)]
    entity: EntityRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    slot_name: Option<String>,
    details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    before: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    after: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Value>,
}

impl AuditEntry {
    /// Assemble an entry from store-assigned identity and caller input.
    /// Only the store calls this; it is the single construction path.
    pub(crate) fn assemble(id: u64, timestamp: DateTime<Utc>, params: NewAuditEntry) -> Self {
        Self {
            id,
            timestamp,
            action: params.action,
            performed_by: params.performed_by,
            performed_by_role: params.performed_by_role,
            entity: params.entity,
            project_name: params.project_name,
            slot_name: params.slot_name,
            details: params.details,
            before: params.before,
            after: params.after,
            metadata: params.metadata,
        }
    }

    /// Sequence id, unique and strictly increasing per store
    pub fn id(&self) -> u64 {
        self.id
    }

    /// When the action was recorded (UTC)
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn action(&self) -> AuditAction {
        self.action
    }

    /// Display name of the acting principal
    pub fn performed_by(&self) -> &str {
        &self.performed_by
    }

    /// Role identifier of the acting principal at the time of the action
    pub fn performed_by_role(&self) -> &str {
        &self.performed_by_role
    }

    pub fn entity(&self) -> &EntityRef {
        &self.entity
    }

    pub fn entity_type(&self) -> EntityType {
        self.entity.entity_type()
    }

    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    pub fn slot_name(&self) -> Option<&str> {
        self.slot_name.as_deref()
    }

    /// One-line narration, computed when the entry was recorded
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Entity snapshot immediately preceding the action, when applicable
    pub fn before(&self) -> Option<&Value> {
        self.before.as_ref()
    }

    /// Entity snapshot immediately following the action, when applicable
    pub fn after(&self) -> Option<&Value> {
        self.after.as_ref()
    }

    pub fn metadata(&self) -> Option<&Value> {
        self.metadata.as_ref()
    }

    /// Format the entry as a compact single line
    pub fn format_compact(&self) -> String {
        let mut output = format!(
            "#{:<4} [{}] {:<20} {} ({})",
            self.id,
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.action.label(),
            self.performed_by,
            self.performed_by_role,
        );

        output.push_str(&format!("\n      {}", self.details));

        if let Some(project) = &self.project_name {
            output.push_str(&format!("  [project: {}]", project));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_params() -> NewAuditEntry {
        NewAuditEntry {
            action: AuditAction::SlotCreate,
            performed_by: "Priya Nair".into(),
            performed_by_role: "project-admin".into(),
            entity: EntityRef::Slot(SlotId::new(101)),
            project_name: Some("GreenX".into()),
            slot_name: Some("Early Bird Special A".into()),
            details: "Created new slot \"Early Bird Special A\" for 2025-12-15".into(),
            before: None,
            after: Some(json!({"capacity": 40})),
            metadata: None,
        }
    }

    #[test]
    fn test_action_tokens_and_labels() {
        assert_eq!(AuditAction::SlotCreate.as_str(), "slot_create");
        assert_eq!(AuditAction::SlotCreate.label(), "Slot Created");
        assert_eq!(AuditAction::CapacityOverride.as_str(), "capacity_override");
        assert_eq!(AuditAction::CapacityOverride.label(), "Capacity Override");
        assert_eq!(AuditAction::StatusChange.label(), "Status Changed");
    }

    #[test]
    fn test_action_parse_round_trip() {
        for action in ALL_ACTIONS {
            let parsed: AuditAction = action.as_str().parse().unwrap();
            assert_eq!(parsed, action);
        }
        assert!("slot_delete".parse::<AuditAction>().is_err());
    }

    #[test]
    fn test_label_table_covers_all_eleven_actions() {
        let labels: std::collections::HashSet<&str> =
            ALL_ACTIONS.iter().map(|a| a.label()).collect();
        assert_eq!(labels.len(), 11);
    }

    #[test]
    fn test_entity_ref_types() {
        let slot = EntityRef::Slot(SlotId::new(101));
        let booking = EntityRef::Booking(BookingId::new("BK-2001"));
        let assignment = EntityRef::Assignment(SlotId::new(102));

        assert_eq!(slot.entity_type(), EntityType::Slot);
        assert_eq!(booking.entity_type(), EntityType::Booking);
        assert_eq!(assignment.entity_type(), EntityType::Assignment);

        assert_eq!(slot.id_string(), "101");
        assert_eq!(booking.id_string(), "BK-2001");
        assert_eq!(assignment.id_string(), "102");
    }

    #[test]
    fn test_entry_accessors() {
        let timestamp = Utc::now();
        let entry = AuditEntry::assemble(1, timestamp, sample_params());

        assert_eq!(entry.id(), 1);
        assert_eq!(entry.timestamp(), timestamp);
        assert_eq!(entry.action(), AuditAction::SlotCreate);
        assert_eq!(entry.performed_by(), "Priya Nair");
        assert_eq!(entry.performed_by_role(), "project-admin");
        assert_eq!(entry.project_name(), Some("GreenX"));
        assert_eq!(entry.slot_name(), Some("Early Bird Special A"));
        assert!(entry.before().is_none());
        assert_eq!(entry.after().unwrap()["capacity"], 40);
    }

    #[test]
    fn test_entry_serialization_flattens_entity() {
        let entry = AuditEntry::assemble(7, Utc::now(), sample_params());
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["action"], "slot_create");
        assert_eq!(value["entity_type"], "slot");
        assert_eq!(value["entity_id"], 101);
        // absent optionals are omitted entirely
        assert!(value.get("metadata").is_none());
        assert!(value.get("before").is_none());
    }

    #[test]
    fn test_booking_entity_id_serializes_as_string() {
        let mut params = sample_params();
        params.entity = EntityRef::Booking(BookingId::new("BK-2001"));
        let value = serde_json::to_value(AuditEntry::assemble(2, Utc::now(), params)).unwrap();

        assert_eq!(value["entity_type"], "booking");
        assert_eq!(value["entity_id"], "BK-2001");
    }

    #[test]
    fn test_compact_format() {
        let entry = AuditEntry::assemble(1, Utc::now(), sample_params());
        let formatted = entry.format_compact();
        assert!(formatted.contains("Slot Created"));
        assert!(formatted.contains("Priya Nair"));
        assert!(formatted.contains("project-admin"));
        assert!(formatted.contains("Early Bird Special A"));
    }
}

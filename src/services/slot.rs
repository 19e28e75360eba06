//! Slot service
//!
//! Business logic for slot management: creation, the tracked-fieldset edit
//! flow, publishing, representative assignment and capacity overrides.
//! Every committed mutation is narrated into the audit store.

use chrono::{NaiveDate, NaiveTime};

use crate::audit::{narrate, AuditStore};
use crate::error::{SlotdeskError, SlotdeskResult};
use crate::models::{Actor, Slot, SlotId};

/// Requested changes for a slot edit; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct SlotEdit {
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub capacity: Option<u32>,
    pub notes: Option<String>,
}

/// Service for slot management
#[derive(Debug)]
pub struct SlotService {
    slots: Vec<Slot>,
    next_id: u32,
}

impl Default for SlotService {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotService {
    /// Create an empty service
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            next_id: 101,
        }
    }

    /// Create a new slot
    ///
    /// The slot starts unpublished with no representatives; capacity is the
    /// manual value when given, otherwise it derives from the (empty)
    /// representative list.
    #[allow(clippy::too_many_arguments)]
    pub fn create_slot(
        &mut self,
        store: &mut AuditStore,
        actor: &Actor,
        project_name: &str,
        name: &str,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        capacity: Option<u32>,
    ) -> SlotdeskResult<Slot> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SlotdeskError::Validation("Slot name cannot be empty".into()));
        }
        if end_time <= start_time {
            return Err(SlotdeskError::Validation(format!(
                "Slot must end after it starts ({} to {})",
                start_time.format("%H:%M"),
                end_time.format("%H:%M"),
            )));
        }
        if self
            .slots
            .iter()
            .any(|s| s.project_name == project_name && s.name == name)
        {
            return Err(SlotdeskError::Duplicate {
                entity_type: "Slot",
                identifier: format!("{}/{}", project_name, name),
            });
        }

        let id = SlotId::new(self.next_id);
        self.next_id += 1;

        let mut slot = Slot::new(id, project_name, name, date, start_time, end_time);
        slot.capacity_override = capacity;

        self.slots.push(slot.clone());
        narrate::log_slot_create(store, actor, &slot);

        Ok(slot)
    }

    /// Get a slot by id
    pub fn get(&self, id: SlotId) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// All slots in creation order
    pub fn list(&self) -> &[Slot] {
        &self.slots
    }

    fn get_mut(&mut self, id: SlotId) -> SlotdeskResult<&mut Slot> {
        self.slots
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| SlotdeskError::slot_not_found(id.to_string()))
    }

    /// Apply a tracked-fieldset edit
    ///
    /// Narrates a `slot_edit` entry listing only the fields that changed;
    /// when the edit changed the capacity, a separate `capacity_override`
    /// entry is recorded as well. A no-op edit commits nothing and logs
    /// nothing.
    pub fn edit_slot(
        &mut self,
        store: &mut AuditStore,
        actor: &Actor,
        id: SlotId,
        edit: SlotEdit,
    ) -> SlotdeskResult<Slot> {
        let slot = self.get_mut(id)?;
        let before = slot.clone();

        if let Some(date) = edit.date {
            slot.date = date;
        }
        if let Some(start_time) = edit.start_time {
            slot.start_time = start_time;
        }
        if let Some(end_time) = edit.end_time {
            slot.end_time = end_time;
        }
        if let Some(capacity) = edit.capacity {
            slot.capacity_override = Some(capacity);
        }
        if let Some(notes) = edit.notes {
            slot.notes = notes;
        }

        if slot.end_time <= slot.start_time {
            let message = format!(
                "Slot must end after it starts ({} to {})",
                slot.start_hhmm(),
                slot.end_hhmm(),
            );
            *slot = before;
            return Err(SlotdeskError::Validation(message));
        }

        let after = slot.clone();
        if after == before {
            return Ok(after);
        }

        narrate::log_slot_edit(store, actor, &before, &after);
        if after.capacity() != before.capacity() {
            narrate::log_capacity_override(
                store,
                actor,
                &after,
                before.capacity(),
                after.capacity(),
                None,
            );
        }

        Ok(after)
    }

    /// Publish or unpublish a slot; publishing an already-published slot is
    /// a no-op and logs nothing
    pub fn set_published(
        &mut self,
        store: &mut AuditStore,
        actor: &Actor,
        id: SlotId,
        published: bool,
    ) -> SlotdeskResult<Slot> {
        let slot = self.get_mut(id)?;
        if slot.published == published {
            return Ok(slot.clone());
        }

        slot.published = published;
        let committed = slot.clone();
        narrate::log_slot_publish(store, actor, &committed, published);
        Ok(committed)
    }

    /// Replace the assigned representative list
    ///
    /// Narrates one `rep_assign` entry per added representative and one
    /// `rep_unassign` per removed one. When the slot's capacity derives
    /// from the representative count and the recompute changed it, a
    /// separate `capacity_override` entry is recorded too: assignment and
    /// capacity are distinct audited facts.
    pub fn set_representatives(
        &mut self,
        store: &mut AuditStore,
        actor: &Actor,
        id: SlotId,
        reps: Vec<String>,
    ) -> SlotdeskResult<Slot> {
        let slot = self.get_mut(id)?;
        let old_capacity = slot.capacity();
        let previous = std::mem::replace(&mut slot.assigned_reps, reps);
        let committed = slot.clone();

        for rep in committed
            .assigned_reps
            .iter()
            .filter(|rep| !previous.contains(rep))
        {
            narrate::log_rep_assignment(store, actor, &committed, Some(rep), None);
        }
        for rep in previous
            .iter()
            .filter(|rep| !committed.assigned_reps.contains(rep))
        {
            narrate::log_rep_assignment(store, actor, &committed, None, Some(rep));
        }

        let new_capacity = committed.capacity();
        if new_capacity != old_capacity {
            narrate::log_capacity_override(
                store,
                actor,
                &committed,
                old_capacity,
                new_capacity,
                Some("recomputed from assigned representative count"),
            );
        }

        Ok(committed)
    }

    /// Manually override a slot's capacity
    pub fn override_capacity(
        &mut self,
        store: &mut AuditStore,
        actor: &Actor,
        id: SlotId,
        capacity: u32,
        reason: Option<&str>,
    ) -> SlotdeskResult<Slot> {
        let slot = self.get_mut(id)?;
        let old_capacity = slot.capacity();
        slot.capacity_override = Some(capacity);
        let committed = slot.clone();

        narrate::log_capacity_override(store, actor, &committed, old_capacity, capacity, reason);
        Ok(committed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{AuditAction, AuditFilters};
    use crate::config::RunMode;
    use crate::models::Role;

    fn admin() -> Actor {
        Actor::new("Priya Nair", Role::ProjectAdmin)
    }

    fn setup() -> (SlotService, AuditStore) {
        (SlotService::new(), AuditStore::new(RunMode::Production))
    }

    fn create_sample(service: &mut SlotService, store: &mut AuditStore) -> Slot {
        service
            .create_slot(
                store,
                &admin(),
                "GreenX",
                "Early Bird Special A",
                NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
                NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                Some(40),
            )
            .unwrap()
    }

    #[test]
    fn test_create_slot_logs_creation() {
        let (mut service, mut store) = setup();
        let slot = create_sample(&mut service, &mut store);

        assert_eq!(slot.capacity(), 40);
        assert!(!slot.published);
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].action(), AuditAction::SlotCreate);
    }

    #[test]
    fn test_create_rejects_duplicate_name_in_project() {
        let (mut service, mut store) = setup();
        create_sample(&mut service, &mut store);

        let result = service.create_slot(
            &mut store,
            &admin(),
            "GreenX",
            "Early Bird Special A",
            NaiveDate::from_ymd_opt(2025, 12, 16).unwrap(),
            NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            None,
        );

        assert!(matches!(result, Err(SlotdeskError::Duplicate { .. })));
        // the failed create logged nothing
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_rejects_inverted_times() {
        let (mut service, mut store) = setup();
        let result = service.create_slot(
            &mut store,
            &admin(),
            "GreenX",
            "Backwards",
            NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            None,
        );
        assert!(matches!(result, Err(SlotdeskError::Validation(_))));
    }

    #[test]
    fn test_edit_narrates_changed_fields_and_capacity_change() {
        let (mut service, mut store) = setup();
        let slot = create_sample(&mut service, &mut store);

        service
            .edit_slot(
                &mut store,
                &admin(),
                slot.id,
                SlotEdit {
                    capacity: Some(50),
                    ..Default::default()
                },
            )
            .unwrap();

        let edits = store.filtered(&AuditFilters {
            action: Some(AuditAction::SlotEdit),
            ..Default::default()
        });
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].details(), "Updated slot: capacity from 40 to 50");

        let overrides = store.filtered(&AuditFilters {
            action: Some(AuditAction::CapacityOverride),
            ..Default::default()
        });
        assert_eq!(overrides.len(), 1);
    }

    #[test]
    fn test_noop_edit_logs_nothing() {
        let (mut service, mut store) = setup();
        let slot = create_sample(&mut service, &mut store);
        let logged_before = store.len();

        service
            .edit_slot(&mut store, &admin(), slot.id, SlotEdit::default())
            .unwrap();

        assert_eq!(store.len(), logged_before);
    }

    #[test]
    fn test_edit_unknown_slot_fails() {
        let (mut service, mut store) = setup();
        let result = service.edit_slot(&mut store, &admin(), SlotId::new(999), SlotEdit::default());
        assert!(matches!(result, Err(SlotdeskError::NotFound { .. })));
    }

    #[test]
    fn test_publish_toggle_logs_once() {
        let (mut service, mut store) = setup();
        let slot = create_sample(&mut service, &mut store);

        let published = service
            .set_published(&mut store, &admin(), slot.id, true)
            .unwrap();
        assert!(published.published);

        // repeat is a no-op
        service
            .set_published(&mut store, &admin(), slot.id, true)
            .unwrap();

        let entries = store.filtered(&AuditFilters {
            action: Some(AuditAction::SlotPublish),
            ..Default::default()
        });
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_rep_change_also_narrates_auto_capacity() {
        let (mut service, mut store) = setup();
        // no manual capacity: capacity derives from the rep count
        let slot = service
            .create_slot(
                &mut store,
                &admin(),
                "GreenX",
                "Afternoon Peak D",
                NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
                NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
                None,
            )
            .unwrap();

        service
            .set_representatives(
                &mut store,
                &admin(),
                slot.id,
                vec!["John Smith".into(), "Sara Lee".into()],
            )
            .unwrap();

        let updated = service
            .set_representatives(
                &mut store,
                &admin(),
                slot.id,
                vec!["John Smith".into(), "Sara Lee".into(), "Omar Haddad".into()],
            )
            .unwrap();
        assert_eq!(updated.capacity(), 3);

        // one user action, two audited facts: the assignment and the
        // capacity recompute are independently retrievable
        let assigns = store.filtered(&AuditFilters {
            action: Some(AuditAction::RepAssign),
            ..Default::default()
        });
        assert_eq!(assigns.len(), 3);
        assert_eq!(
            assigns[0].details(),
            "Assigned sales representative \"Omar Haddad\" to slot"
        );

        let overrides = store.filtered(&AuditFilters {
            action: Some(AuditAction::CapacityOverride),
            ..Default::default()
        });
        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides[0].before().unwrap()["capacity"], 2);
        assert_eq!(overrides[0].after().unwrap()["capacity"], 3);
    }

    #[test]
    fn test_rep_removal_narrates_unassignment() {
        let (mut service, mut store) = setup();
        let slot = create_sample(&mut service, &mut store);

        service
            .set_representatives(&mut store, &admin(), slot.id, vec!["John Smith".into()])
            .unwrap();
        service
            .set_representatives(&mut store, &admin(), slot.id, Vec::new())
            .unwrap();

        let unassigns = store.filtered(&AuditFilters {
            action: Some(AuditAction::RepUnassign),
            ..Default::default()
        });
        assert_eq!(unassigns.len(), 1);
        assert_eq!(
            unassigns[0].details(),
            "Unassigned sales representative \"John Smith\" from slot"
        );
    }

    #[test]
    fn test_manual_override_logs_reason() {
        let (mut service, mut store) = setup();
        let slot = create_sample(&mut service, &mut store);

        service
            .override_capacity(
                &mut store,
                &admin(),
                slot.id,
                50,
                Some("extra staff on site"),
            )
            .unwrap();

        let overrides = store.filtered(&AuditFilters {
            action: Some(AuditAction::CapacityOverride),
            ..Default::default()
        });
        assert_eq!(overrides.len(), 1);
        assert_eq!(
            overrides[0].details(),
            "Capacity overridden from 40 to 50 - extra staff on site"
        );
    }
}

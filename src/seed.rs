//! Synthetic demo dataset
//!
//! The application has no persistence; like the original dashboard it runs
//! against synthetically generated data. The seed drives the real service
//! mutation flows end-to-end, so the resulting audit trail is produced by
//! the actual integration contract rather than hand-built entries, and
//! every one of the eleven action kinds appears at least once.

use chrono::{NaiveDate, NaiveTime};

use crate::audit::AuditStore;
use crate::error::SlotdeskResult;
use crate::models::{Actor, BookingStatus, Role};
use crate::services::{BookingService, SlotEdit, SlotService};

/// The seeded services, with their audit trail recorded into the store
#[derive(Debug)]
pub struct SeedData {
    pub slots: SlotService,
    pub bookings: BookingService,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid seed time")
}

/// Seed the demo dataset, recording the audit trail into `store`
pub fn seed_demo_data(store: &mut AuditStore) -> SlotdeskResult<SeedData> {
    let admin = Actor::new("Priya Nair", Role::ProjectAdmin);
    let sales = Actor::new("Sofia Reyes", Role::SalesUser);

    let mut slots = SlotService::new();
    let mut bookings = BookingService::new();

    // GreenX slots
    let early_bird = slots.create_slot(
        store,
        &admin,
        "GreenX",
        "Early Bird Special A",
        date(2025, 12, 15),
        time(7, 0),
        time(10, 0),
        Some(40),
    )?;
    let afternoon = slots.create_slot(
        store,
        &admin,
        "GreenX",
        "Afternoon Peak D",
        date(2025, 12, 15),
        time(13, 0),
        time(16, 0),
        None,
    )?;

    // Timber slot
    let dawn = slots.create_slot(
        store,
        &admin,
        "Timber",
        "Dawn Sunrise Slot B",
        date(2025, 12, 16),
        time(6, 0),
        time(9, 0),
        Some(30),
    )?;

    // Representative assignments; the afternoon slot has no manual
    // capacity, so its capacity tracks the rep count
    slots.set_representatives(store, &admin, early_bird.id, vec!["John Smith".into()])?;
    slots.set_representatives(
        store,
        &admin,
        afternoon.id,
        vec!["John Smith".into(), "Sara Lee".into()],
    )?;
    slots.set_representatives(
        store,
        &admin,
        afternoon.id,
        vec![
            "John Smith".into(),
            "Sara Lee".into(),
            "Omar Haddad".into(),
        ],
    )?;

    // Shift the Timber slot half an hour later
    slots.edit_slot(
        store,
        &admin,
        dawn.id,
        SlotEdit {
            start_time: Some(time(6, 30)),
            end_time: Some(time(9, 30)),
            ..Default::default()
        },
    )?;

    // Manual capacity override with a reason
    slots.override_capacity(store, &admin, early_bird.id, 50, Some("extra staff on site"))?;

    // Publish everything
    let early_bird = slots.set_published(store, &admin, early_bird.id, true)?;
    let afternoon = slots.set_published(store, &admin, afternoon.id, true)?;
    let dawn = slots.set_published(store, &admin, dawn.id, true)?;

    // Bookings
    let john = bookings.confirm_booking(
        store,
        &sales,
        &early_bird,
        "John Doe",
        "john@example.com",
    )?;
    let jane =
        bookings.confirm_booking(store, &sales, &dawn, "Jane Roe", "jane@example.com")?;
    let amir =
        bookings.confirm_booking(store, &sales, &afternoon, "Amir Patel", "amir@example.com")?;

    bookings.reschedule_booking(store, &sales, &jane.id, &early_bird)?;
    bookings.set_status(store, &sales, &john.id, BookingStatus::Arrived)?;
    bookings.cancel_booking(store, &sales, &amir.id, Some("customer request"))?;

    // Sara rotates off the afternoon slot; its auto capacity follows
    slots.set_representatives(
        store,
        &admin,
        afternoon.id,
        vec!["John Smith".into(), "Omar Haddad".into()],
    )?;

    // The Timber slot goes back into draft
    slots.set_published(store, &admin, dawn.id, false)?;

    Ok(SeedData { slots, bookings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{AuditFilters, ALL_ACTIONS};
    use crate::config::RunMode;

    #[test]
    fn test_seed_covers_every_action_kind() {
        let mut store = AuditStore::new(RunMode::Production);
        seed_demo_data(&mut store).unwrap();

        for action in ALL_ACTIONS {
            let entries = store.filtered(&AuditFilters {
                action: Some(action),
                ..Default::default()
            });
            assert!(!entries.is_empty(), "no {} entry seeded", action);
        }
    }

    #[test]
    fn test_seed_is_deterministic_in_shape() {
        let mut first = AuditStore::new(RunMode::Production);
        let mut second = AuditStore::new(RunMode::Production);
        let data_a = seed_demo_data(&mut first).unwrap();
        let data_b = seed_demo_data(&mut second).unwrap();

        assert_eq!(first.len(), second.len());
        assert_eq!(data_a.slots.list().len(), data_b.slots.list().len());
        assert_eq!(data_a.bookings.list().len(), data_b.bookings.list().len());

        let details_a: Vec<String> =
            first.all().iter().map(|e| e.details().to_string()).collect();
        let details_b: Vec<String> =
            second.all().iter().map(|e| e.details().to_string()).collect();
        assert_eq!(details_a, details_b);
    }

    #[test]
    fn test_seeded_projects() {
        let mut store = AuditStore::new(RunMode::Production);
        let data = seed_demo_data(&mut store).unwrap();

        assert_eq!(data.slots.list().len(), 3);
        assert_eq!(data.bookings.list().len(), 3);

        let greenx = store.filtered(&AuditFilters {
            project_name: Some("GreenX".into()),
            ..Default::default()
        });
        let timber = store.filtered(&AuditFilters {
            project_name: Some("Timber".into()),
            ..Default::default()
        });
        assert!(!greenx.is_empty());
        assert!(!timber.is_empty());
        assert_eq!(greenx.len() + timber.len(), store.len());
    }
}

//! Booking service
//!
//! Business logic for the booking lifecycle: confirmation against a slot,
//! rescheduling, cancellation and status changes. Every committed mutation
//! is narrated into the audit store.

use chrono::Utc;

use crate::audit::{narrate, AuditStore};
use crate::error::{SlotdeskError, SlotdeskResult};
use crate::models::{Actor, Booking, BookingId, BookingStatus, Slot};

/// Service for booking management
#[derive(Debug)]
pub struct BookingService {
    bookings: Vec<Booking>,
    next_ref: u32,
}

impl Default for BookingService {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingService {
    /// Create an empty service
    pub fn new() -> Self {
        Self {
            bookings: Vec::new(),
            next_ref: 2001,
        }
    }

    /// Confirm a new booking against a slot
    ///
    /// The slot must be published and have remaining capacity; the booking
    /// starts in the `Booked` state and a `booking_confirm` entry is
    /// recorded.
    pub fn confirm_booking(
        &mut self,
        store: &mut AuditStore,
        actor: &Actor,
        slot: &Slot,
        customer_name: &str,
        customer_email: &str,
    ) -> SlotdeskResult<Booking> {
        let customer_name = customer_name.trim();
        if customer_name.is_empty() {
            return Err(SlotdeskError::Validation(
                "Customer name cannot be empty".into(),
            ));
        }
        if !slot.published {
            return Err(SlotdeskError::Booking(format!(
                "slot \"{}\" is not published",
                slot.name
            )));
        }

        let active = self
            .bookings
            .iter()
            .filter(|b| b.slot_id == slot.id && b.status != BookingStatus::Cancelled)
            .count() as u32;
        if active >= slot.capacity() {
            return Err(SlotdeskError::Booking(format!(
                "slot \"{}\" is fully booked ({} of {})",
                slot.name,
                active,
                slot.capacity()
            )));
        }

        let id = BookingId::from_number(self.next_ref);
        self.next_ref += 1;

        let booking = Booking::new(
            id,
            slot.id,
            slot.project_name.clone(),
            slot.name.clone(),
            slot.date,
            customer_name,
            customer_email,
        );

        self.bookings.push(booking.clone());
        narrate::log_booking_confirm(store, actor, &booking);

        Ok(booking)
    }

    /// Get a booking by reference
    pub fn get(&self, id: &BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| &b.id == id)
    }

    /// All bookings in confirmation order
    pub fn list(&self) -> &[Booking] {
        &self.bookings
    }

    fn get_mut(&mut self, id: &BookingId) -> SlotdeskResult<&mut Booking> {
        self.bookings
            .iter_mut()
            .find(|b| &b.id == id)
            .ok_or_else(|| SlotdeskError::booking_not_found(id.to_string()))
    }

    /// Move a booking to another slot
    pub fn reschedule_booking(
        &mut self,
        store: &mut AuditStore,
        actor: &Actor,
        id: &BookingId,
        new_slot: &Slot,
    ) -> SlotdeskResult<Booking> {
        let booking = self.get_mut(id)?;
        if booking.status == BookingStatus::Cancelled {
            return Err(SlotdeskError::Booking(format!(
                "booking {} is cancelled and cannot be rescheduled",
                booking.id
            )));
        }

        let old_slot_name = std::mem::replace(&mut booking.slot_name, new_slot.name.clone());
        let old_date = std::mem::replace(&mut booking.date, new_slot.date);
        booking.slot_id = new_slot.id;
        booking.project_name = new_slot.project_name.clone();

        let committed = booking.clone();
        narrate::log_booking_reschedule(store, actor, &committed, &old_slot_name, old_date);
        Ok(committed)
    }

    /// Cancel a booking
    ///
    /// Stamps the cancellation timestamp and records a `booking_cancel`
    /// entry carrying it; cancelling twice is an error.
    pub fn cancel_booking(
        &mut self,
        store: &mut AuditStore,
        actor: &Actor,
        id: &BookingId,
        reason: Option<&str>,
    ) -> SlotdeskResult<Booking> {
        let booking = self.get_mut(id)?;
        if booking.status == BookingStatus::Cancelled {
            return Err(SlotdeskError::Booking(format!(
                "booking {} is already cancelled",
                booking.id
            )));
        }

        let previous_status = booking.status;
        booking.status = BookingStatus::Cancelled;
        booking.cancelled_at = Some(Utc::now());

        let committed = booking.clone();
        narrate::log_booking_cancel(store, actor, &committed, previous_status, reason);
        Ok(committed)
    }

    /// Change a booking's lifecycle status
    ///
    /// Records a `status_change` entry; setting the current status again is
    /// a no-op and logs nothing. Moving to `cancelled` through this flow
    /// still stamps the cancellation timestamp.
    pub fn set_status(
        &mut self,
        store: &mut AuditStore,
        actor: &Actor,
        id: &BookingId,
        status: BookingStatus,
    ) -> SlotdeskResult<Booking> {
        let booking = self.get_mut(id)?;
        if booking.status == status {
            return Ok(booking.clone());
        }

        let old_status = booking.status;
        booking.status = status;
        if status == BookingStatus::Cancelled {
            booking.cancelled_at = Some(Utc::now());
        }

        let committed = booking.clone();
        narrate::log_status_change(store, actor, &committed, old_status);
        Ok(committed)
    }
}

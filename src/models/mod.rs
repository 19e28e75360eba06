//! Core data models for slotdesk
//!
//! This module contains the data structures that represent the booking
//! domain: slots, bookings, actors and their roles.

pub mod actor;
pub mod booking;
pub mod ids;
pub mod slot;

pub use actor::{Actor, Role};
pub use booking::{Booking, BookingStatus};
pub use ids::{BookingId, SlotId};
pub use slot::Slot;

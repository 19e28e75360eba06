//! Service layer for slotdesk
//!
//! The services own the in-memory slot and booking state and are the only
//! writers of it. Every committed mutation is narrated into the audit
//! store handed into the call, which keeps the audit trail a faithful
//! record of the flows that actually ran.

pub mod booking;
pub mod slot;

pub use booking::BookingService;
pub use slot::{SlotEdit, SlotService};

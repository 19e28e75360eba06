//! Booking model
//!
//! A booking is a customer's reservation against a slot, carrying a
//! lifecycle status from booked through arrival to completion, no-show
//! or cancellation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{BookingId, SlotId};

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    /// Reservation made, customer not yet arrived
    #[default]
    Booked,
    /// Customer arrived at the slot
    Arrived,
    /// Visit completed
    Done,
    /// Customer did not show up
    NoShow,
    /// Reservation cancelled
    Cancelled,
}

impl BookingStatus {
    /// Whether this status terminates the booking lifecycle
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::NoShow | Self::Cancelled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Booked => "booked",
            Self::Arrived => "arrived",
            Self::Done => "done",
            Self::NoShow => "no-show",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "booked" => Ok(Self::Booked),
            "arrived" => Ok(Self::Arrived),
            "done" => Ok(Self::Done),
            "no-show" => Ok(Self::NoShow),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!("unknown booking status: '{}'", other)),
        }
    }
}

/// A customer's reservation against a slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique reference (e.g. "BK-2001")
    pub id: BookingId,

    /// The slot this booking reserves
    pub slot_id: SlotId,

    /// Project context, denormalized for display and audit
    pub project_name: String,

    /// Slot name, denormalized for display and audit
    pub slot_name: String,

    /// Visit date (follows the slot's date)
    pub date: NaiveDate,

    /// Customer display name
    pub customer_name: String,

    /// Customer contact email
    pub customer_email: String,

    /// Lifecycle status
    #[serde(default)]
    pub status: BookingStatus,

    /// Set when the booking is cancelled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl Booking {
    /// Create a new booking in the `Booked` state
    pub fn new(
        id: BookingId,
        slot_id: SlotId,
        project_name: impl Into<String>,
        slot_name: impl Into<String>,
        date: NaiveDate,
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            slot_id,
            project_name: project_name.into(),
            slot_name: slot_name.into(),
            date,
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            status: BookingStatus::Booked,
            cancelled_at: None,
        }
    }
}

//! Strongly-typed ID wrappers for the booking domain
//!
//! Slots are numbered, bookings carry string references (e.g. "BK-2001").
//! The two identifier spaces are deliberately distinct types so they cannot
//! be mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Numeric identifier for a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(u32);

impl SlotId {
    /// Wrap a raw slot number
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying number
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SlotId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl FromStr for SlotId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// String reference for a booking (e.g. "BK-2001")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
    /// Wrap an existing booking reference
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build a reference in the conventional "BK-<n>" form
    pub fn from_number(n: u32) -> Self {
        Self(format!("BK-{}", n))
    }

    /// Get the reference as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BookingId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl FromStr for BookingId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_id_display() {
        assert_eq!(SlotId::new(101).to_string(), "101");
    }

    #[test]
    fn test_slot_id_parse() {
        let id: SlotId = "101".parse().unwrap();
        assert_eq!(id, SlotId::new(101));
        assert!("abc".parse::<SlotId>().is_err());
    }

    #[test]
    fn test_booking_id_from_number() {
        let id = BookingId::from_number(2001);
        assert_eq!(id.as_str(), "BK-2001");
    }

    #[test]
    fn test_booking_id_display() {
        assert_eq!(BookingId::new("BK-2002").to_string(), "BK-2002");
    }

    #[test]
    fn test_id_serialization_is_transparent() {
        let slot_json = serde_json::to_string(&SlotId::new(7)).unwrap();
        assert_eq!(slot_json, "7");

        let booking_json = serde_json::to_string(&BookingId::new("BK-1")).unwrap();
        assert_eq!(booking_json, "\"BK-1\"");
    }
}

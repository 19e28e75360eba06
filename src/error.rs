//! Custom error types for slotdesk
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for slotdesk operations
#[derive(Error, Debug)]
pub enum SlotdeskError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Attempted to modify the append-only audit log
    #[error("Audit log is immutable: {0}")]
    AuditImmutability(String),

    /// Booking lifecycle errors (e.g., rescheduling a cancelled booking)
    #[error("Booking error: {0}")]
    Booking(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SlotdeskError {
    /// Create a "not found" error for slots
    pub fn slot_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Slot",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for bookings
    pub fn booking_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Booking",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an audit immutability violation
    pub fn is_audit_immutability(&self) -> bool {
        matches!(self, Self::AuditImmutability(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SlotdeskError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SlotdeskError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for SlotdeskError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for slotdesk operations
pub type SlotdeskResult<T> = Result<T, SlotdeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SlotdeskError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = SlotdeskError::slot_not_found("101");
        assert_eq!(err.to_string(), "Slot not found: 101");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_audit_immutability_error() {
        let err = SlotdeskError::AuditImmutability("reset outside development".into());
        assert!(err.is_audit_immutability());
        assert_eq!(
            err.to_string(),
            "Audit log is immutable: reset outside development"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let slotdesk_err: SlotdeskError = io_err.into();
        assert!(matches!(slotdesk_err, SlotdeskError::Io(_)));
    }
}

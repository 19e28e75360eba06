//! Export module for slotdesk
//!
//! Serializes the filtered, display-ordered audit sequence:
//! - CSV: flat tabular format for spreadsheets
//! - JSON: schema-versioned envelope for machine-readable export

pub mod csv;
pub mod json;

pub use csv::export_audit_csv;
pub use json::{export_audit_json, AuditExport, EXPORT_SCHEMA_VERSION};

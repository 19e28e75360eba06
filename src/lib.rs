//! slotdesk - Slot-booking administration core
//!
//! This library provides the core functionality for the slotdesk
//! administration tool: projects contain schedulable time slots, customers
//! hold bookings against slots, and every mutation is recorded in an
//! append-only audit log with before/after snapshots.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Runtime mode and display preferences
//! - `error`: Custom error types
//! - `models`: Core data models (slots, bookings, actors)
//! - `audit`: Append-only audit logging system
//! - `services`: Business logic layer (the audited mutation flows)
//! - `display`: Timeline formatting for terminal output
//! - `export`: CSV and JSON export of the audit trail
//! - `seed`: Synthetic demo dataset
//!
//! # Example
//!
//! ```rust,ignore
//! use slotdesk::audit::{AuditFilters, AuditStore};
//! use slotdesk::config::RunMode;
//! use slotdesk::seed::seed_demo_data;
//!
//! let mut store = AuditStore::new(RunMode::from_env());
//! let data = seed_demo_data(&mut store)?;
//! let trail = store.filtered(&AuditFilters::default());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod seed;
pub mod services;

pub use error::SlotdeskError;

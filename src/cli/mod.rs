//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the audit query engine.

pub mod audit;

pub use audit::{handle_audit_command, print_full_timeline, AuditCommands};

//! Configuration module for slotdesk
//!
//! This module provides configuration management including:
//! - Runtime mode resolution (development vs production)
//! - Application preferences

pub mod mode;
pub mod settings;

pub use mode::RunMode;
pub use settings::Settings;

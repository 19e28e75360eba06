//! Display formatting for terminal output
//!
//! Formats audit query output for the terminal. Everything here consumes
//! the filtered, display-ordered sequence; nothing reads the store
//! directly.

pub mod timeline;

pub use timeline::{format_timeline, format_timeline_page};

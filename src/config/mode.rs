//! Runtime mode resolution
//!
//! The audit log reset guard and other development-only affordances key off
//! the runtime mode. The mode is resolved once at startup from the
//! `SLOTDESK_ENV` environment variable and defaults to production, so a
//! missing or misspelled value can never unlock development behavior.

use std::fmt;

/// Environment variable consulted by [`RunMode::from_env`]
pub const ENV_VAR: &str = "SLOTDESK_ENV";

/// Runtime mode of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Local development: destructive conveniences (audit reset) allowed
    Development,
    /// Everything else: the audit log is strictly append-only
    #[default]
    Production,
}

impl RunMode {
    /// Resolve the runtime mode from `SLOTDESK_ENV`
    ///
    /// Accepts `development` or `dev` (case-insensitive); any other value,
    /// or an unset variable, resolves to production.
    pub fn from_env() -> Self {
        match std::env::var(ENV_VAR) {
            Ok(value) => Self::parse(&value),
            Err(_) => Self::Production,
        }
    }

    /// Parse a mode string, defaulting to production
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "development" | "dev" => Self::Development,
            _ => Self::Production,
        }
    }

    /// Check whether development-only operations are allowed
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_development() {
        assert_eq!(RunMode::parse("development"), RunMode::Development);
        assert_eq!(RunMode::parse("dev"), RunMode::Development);
        assert_eq!(RunMode::parse("  DEV  "), RunMode::Development);
    }

    #[test]
    fn test_parse_defaults_to_production() {
        assert_eq!(RunMode::parse("production"), RunMode::Production);
        assert_eq!(RunMode::parse("staging"), RunMode::Production);
        assert_eq!(RunMode::parse(""), RunMode::Production);
        assert_eq!(RunMode::parse("devel0pment"), RunMode::Production);
    }

    #[test]
    fn test_default_is_production() {
        assert_eq!(RunMode::default(), RunMode::Production);
        assert!(!RunMode::default().is_development());
    }

    #[test]
    fn test_display() {
        assert_eq!(RunMode::Development.to_string(), "development");
        assert_eq!(RunMode::Production.to_string(), "production");
    }
}

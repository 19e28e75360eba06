//! Acting principals
//!
//! Every audited mutation is credited to an actor: a display name plus the
//! role held at the time of the action. The audit core records both as
//! plain strings and never validates them against a user registry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles recognized by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    SuperAdmin,
    ProjectAdmin,
    SalesUser,
    Viewer,
    Customer,
}

impl Role {
    /// The role identifier string used in audit entries
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super-admin",
            Self::ProjectAdmin => "project-admin",
            Self::SalesUser => "sales-user",
            Self::Viewer => "viewer",
            Self::Customer => "customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super-admin" => Ok(Self::SuperAdmin),
            "project-admin" => Ok(Self::ProjectAdmin),
            "sales-user" => Ok(Self::SalesUser),
            "viewer" => Ok(Self::Viewer),
            "customer" => Ok(Self::Customer),
            other => Err(format!("unknown role: '{}'", other)),
        }
    }
}

/// The principal credited with performing an audited action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Display name
    pub name: String,
    /// Role held at the time of the action
    pub role: Role,
}

impl Actor {
    /// Create a new actor
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

//! User model definition.

use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of user roles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular account
    #[default]
    User,

    /// Administrative account with catalog write access
    Admin,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: {s}")),
        }
    }
}

impl Role {
    /// String representation as stored in the document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// A registered account.
///
/// Users are keyed by a generated numeric-string id and unique by their
/// normalized (lower-cased, trimmed) email. The password digest is opaque to
/// the store; hashing happens at the transport boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Numeric-string identifier assigned from the store's user counter
    pub id: String,

    /// Display name
    pub name: String,

    /// Normalized email address, unique across the store
    pub email: String,

    /// Opaque password digest; never returned to end users by callers
    pub password_hash: String,

    /// Account role
    #[serde(default)]
    pub role: Role,

    /// Optional avatar reference
    #[serde(default)]
    pub avatar: Option<String>,

    /// Timestamp when the account was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp of the last profile update, if any (UTC)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

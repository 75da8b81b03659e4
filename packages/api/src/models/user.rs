//! # User model
//!
//! Two representations of a studio account:
//!
//! - [`User`] (server only) — the full `users` row, including the Argon2
//!   `password_hash`. Loaded directly from queries via [`sqlx::FromRow`].
//! - [`UserInfo`] — the client-safe projection produced by
//!   [`User::to_info`]: the `Uuid` becomes a `String` so it works in WASM,
//!   the join timestamp becomes RFC 3339, and the hash is omitted.
//!
//! Roles are assigned once, at registration, from the admin allow-list
//! (see `auth::role_for_email`); the status field carries the ban state
//! that `login` and `get_current_user` enforce.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Account role. `Admin` unlocks the staff dashboard and the admin-only
/// server functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "server", derive(sqlx::Type))]
#[cfg_attr(
    feature = "server",
    sqlx(type_name = "user_role", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum UserRole {
    User,
    Admin,
}

/// Account standing. A `Banned` account can never hold a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "server", derive(sqlx::Type))]
#[cfg_attr(
    feature = "server",
    sqlx(type_name = "user_status", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum UserStatus {
    Active,
    Banned,
}

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub joined_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to [`UserInfo`] for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            status: self.status,
            joined_at: self.joined_at.to_rfc3339(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub joined_at: String,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_banned(&self) -> bool {
        self.status == UserStatus::Banned
    }

    /// First letter of the name, for the avatar disc.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str) -> UserInfo {
        UserInfo {
            id: "1".into(),
            name: name.into(),
            email: "sara@x.com".into(),
            role: UserRole::User,
            status: UserStatus::Active,
            joined_at: "2026-01-01T00:00:00+00:00".into(),
        }
    }

    #[test]
    fn initial_is_uppercased_first_char() {
        assert_eq!(info("sara").initial(), "S");
    }

    #[test]
    fn initial_falls_back_on_empty_name() {
        assert_eq!(info("").initial(), "?");
    }
}

//! Contact-form messages. Write-once from the public contact view; staff
//! read them in the admin dashboard. There is no update path beyond the
//! read flag.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full message record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read: bool,
}

#[cfg(feature = "server")]
impl ContactMessage {
    pub fn to_info(&self) -> MessageInfo {
        MessageInfo {
            id: self.id.to_string(),
            name: self.name.clone(),
            phone: self.phone.clone(),
            body: self.body.clone(),
            sent_at: self.sent_at.to_rfc3339(),
            read: self.read,
        }
    }
}

/// Message record safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageInfo {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub body: String,
    pub sent_at: String,
    pub read: bool,
}

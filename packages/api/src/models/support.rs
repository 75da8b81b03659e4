//! Live-support chat. Each user has at most one OPEN session; messages are
//! appended and polled, never edited.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Whether a support conversation is still accepting messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "server", derive(sqlx::Type))]
#[cfg_attr(
    feature = "server",
    sqlx(type_name = "support_status", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum SupportStatus {
    Open,
    Closed,
}

#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct SupportSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: SupportStatus,
    pub created_at: DateTime<Utc>,
    pub last_message_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct SupportMessage {
    pub id: Uuid,
    pub session_id: Uuid,
    pub sender_id: String,
    pub sender_name: String,
    pub is_admin: bool,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl SupportMessage {
    pub fn to_info(&self) -> SupportMessageInfo {
        SupportMessageInfo {
            id: self.id.to_string(),
            sender_id: self.sender_id.clone(),
            sender_name: self.sender_name.clone(),
            is_admin: self.is_admin,
            body: self.body.clone(),
            sent_at: self.sent_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupportMessageInfo {
    pub id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub is_admin: bool,
    pub body: String,
    pub sent_at: String,
}

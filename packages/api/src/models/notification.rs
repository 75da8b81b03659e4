//! Per-user notifications, written when staff move one of the user's
//! requests to a new status.

use serde::{Deserialize, Serialize};

use super::request::RequestStatus;

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Visual flavor of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "server", derive(sqlx::Type))]
#[cfg_attr(
    feature = "server",
    sqlx(type_name = "notification_kind", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// Flavor used when announcing a request status change.
    pub fn for_status(status: RequestStatus) -> NotificationKind {
        match status {
            RequestStatus::Pending | RequestStatus::InProgress => NotificationKind::Info,
            RequestStatus::Completed => NotificationKind::Success,
            RequestStatus::Rejected => NotificationKind::Error,
        }
    }
}

/// Full notification record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub body: String,
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Notification {
    pub fn to_info(&self) -> NotificationInfo {
        NotificationInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            body: self.body.clone(),
            kind: self.kind,
            is_read: self.is_read,
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

/// Notification record safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationInfo {
    pub id: String,
    pub title: String,
    pub body: String,
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_changes_map_to_expected_flavors() {
        assert_eq!(
            NotificationKind::for_status(RequestStatus::Pending),
            NotificationKind::Info
        );
        assert_eq!(
            NotificationKind::for_status(RequestStatus::InProgress),
            NotificationKind::Info
        );
        assert_eq!(
            NotificationKind::for_status(RequestStatus::Completed),
            NotificationKind::Success
        );
        assert_eq!(
            NotificationKind::for_status(RequestStatus::Rejected),
            NotificationKind::Error
        );
    }
}

//! # Design request model
//!
//! A [`DesignRequest`] is one intake-form submission. The server stamps
//! `status = PENDING` and `created_at = now` on creation; afterwards only
//! staff move the status, and nothing ever reverts it automatically.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// The studio's fixed service categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "server", derive(sqlx::Type))]
#[cfg_attr(
    feature = "server",
    sqlx(type_name = "project_type", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum ProjectType {
    VoiceAgencies,
    Logo,
    Branding,
    WebDesign,
    SocialMedia,
    VideoEditing,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 7] = [
        ProjectType::VoiceAgencies,
        ProjectType::Logo,
        ProjectType::Branding,
        ProjectType::WebDesign,
        ProjectType::SocialMedia,
        ProjectType::VideoEditing,
        ProjectType::Other,
    ];

    /// Stable wire/DB name, also used as the `<option>` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::VoiceAgencies => "VOICE_AGENCIES",
            ProjectType::Logo => "LOGO",
            ProjectType::Branding => "BRANDING",
            ProjectType::WebDesign => "WEB_DESIGN",
            ProjectType::SocialMedia => "SOCIAL_MEDIA",
            ProjectType::VideoEditing => "VIDEO_EDITING",
            ProjectType::Other => "OTHER",
        }
    }

    pub fn from_str(value: &str) -> Option<ProjectType> {
        ProjectType::ALL.into_iter().find(|t| t.as_str() == value)
    }

    /// Arabic category label, as presented to clients and to the
    /// brief-refinement assistant.
    pub fn label_ar(&self) -> &'static str {
        match self {
            ProjectType::VoiceAgencies => "تصاميم وكالات وإدارات صوتية",
            ProjectType::Logo => "تصميم شعار",
            ProjectType::Branding => "هوية بصرية",
            ProjectType::WebDesign => "تصميم مواقع UI/UX",
            ProjectType::SocialMedia => "تصاميم سوشيال ميديا",
            ProjectType::VideoEditing => "مونتاج فيديو",
            ProjectType::Other => "أخرى",
        }
    }
}

/// Triage state of a request. Any status may follow any status: staff must
/// be able to correct a mis-click, so no state is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "server", derive(sqlx::Type))]
#[cfg_attr(
    feature = "server",
    sqlx(type_name = "request_status", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum RequestStatus {
    Pending,
    InProgress,
    Completed,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::InProgress => "IN_PROGRESS",
            RequestStatus::Completed => "COMPLETED",
            RequestStatus::Rejected => "REJECTED",
        }
    }

    pub fn label_ar(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "قيد المراجعة",
            RequestStatus::InProgress => "جاري العمل",
            RequestStatus::Completed => "مكتمل",
            RequestStatus::Rejected => "مرفوض",
        }
    }
}

/// Full request record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct DesignRequest {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub client_name: String,
    pub email: String,
    pub project_type: ProjectType,
    pub description: String,
    pub budget: Option<String>,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl DesignRequest {
    pub fn to_info(&self) -> RequestInfo {
        RequestInfo {
            id: self.id.to_string(),
            user_id: self.user_id.map(|id| id.to_string()),
            client_name: self.client_name.clone(),
            email: self.email.clone(),
            project_type: self.project_type,
            description: self.description.clone(),
            budget: self.budget.clone(),
            status: self.status,
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

/// Sort a freshly fetched batch newest-first. The per-user listing is
/// ordered here rather than by the database, matching the facade contract.
#[cfg(feature = "server")]
pub fn sort_newest_first(requests: &mut [DesignRequest]) {
    requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Request record safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestInfo {
    pub id: String,
    pub user_id: Option<String>,
    pub client_name: String,
    pub email: String,
    pub project_type: ProjectType,
    pub description: String,
    pub budget: Option<String>,
    pub status: RequestStatus,
    pub created_at: String,
}

impl RequestInfo {
    /// Short id fragment shown in listings.
    pub fn short_id(&self) -> &str {
        &self.id[..self.id.len().min(8)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_type_round_trips_through_wire_name() {
        for t in ProjectType::ALL {
            assert_eq!(ProjectType::from_str(t.as_str()), Some(t));
        }
        assert_eq!(ProjectType::from_str("POSTERS"), None);
    }

    #[test]
    fn every_category_has_a_label() {
        for t in ProjectType::ALL {
            assert!(!t.label_ar().is_empty());
        }
    }

    #[test]
    fn short_id_handles_tiny_ids() {
        let info = RequestInfo {
            id: "abc".into(),
            user_id: None,
            client_name: String::new(),
            email: String::new(),
            project_type: ProjectType::Logo,
            description: String::new(),
            budget: None,
            status: RequestStatus::Pending,
            created_at: String::new(),
        };
        assert_eq!(info.short_id(), "abc");
    }
}

#[cfg(all(test, feature = "server"))]
mod server_tests {
    use super::*;
    use chrono::TimeZone;

    fn request_at(ts: i64) -> DesignRequest {
        DesignRequest {
            id: Uuid::new_v4(),
            user_id: None,
            client_name: "x".into(),
            email: "x@x.com".into(),
            project_type: ProjectType::Logo,
            description: "d".into(),
            budget: None,
            status: RequestStatus::Pending,
            created_at: Utc.timestamp_opt(ts, 0).unwrap(),
        }
    }

    #[test]
    fn sort_newest_first_orders_descending() {
        let mut requests = vec![request_at(100), request_at(300), request_at(200)];
        sort_newest_first(&mut requests);
        let stamps: Vec<i64> = requests.iter().map(|r| r.created_at.timestamp()).collect();
        assert_eq!(stamps, vec![300, 200, 100]);
    }
}

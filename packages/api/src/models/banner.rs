//! Promotional banners shown in the landing carousel. Staff soft-hide a
//! banner by toggling `is_active`, or remove it outright.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full banner record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Banner {
    pub id: Uuid,
    pub image_url: String,
    pub title: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Banner {
    pub fn to_info(&self) -> BannerInfo {
        BannerInfo {
            id: self.id.to_string(),
            image_url: self.image_url.clone(),
            title: self.title.clone(),
            is_active: self.is_active,
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

/// Banner record safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BannerInfo {
    pub id: String,
    pub image_url: String,
    pub title: String,
    pub is_active: bool,
    pub created_at: String,
}

//! Database models and their client-safe projections.
//!
//! Each collection has a server-only row struct (derives [`sqlx::FromRow`],
//! available behind the `server` feature) and an `*Info` struct that is
//! `Serialize + Deserialize + PartialEq` and crosses the server/client
//! boundary through the server functions. Row structs never leave the
//! server; in particular the password hash stays in [`user::User`].

pub mod banner;
pub mod message;
pub mod notification;
pub mod request;
pub mod support;
pub mod user;

pub use banner::BannerInfo;
pub use message::MessageInfo;
pub use notification::{NotificationInfo, NotificationKind};
pub use request::{ProjectType, RequestInfo, RequestStatus};
pub use support::{SupportMessageInfo, SupportStatus};
pub use user::{UserInfo, UserRole, UserStatus};

#[cfg(feature = "server")]
pub use banner::Banner;
#[cfg(feature = "server")]
pub use message::ContactMessage;
#[cfg(feature = "server")]
pub use notification::Notification;
#[cfg(feature = "server")]
pub use request::DesignRequest;
#[cfg(feature = "server")]
pub use support::{SupportMessage, SupportSession};
#[cfg(feature = "server")]
pub use user::User;

//! # API crate — shared fullstack server functions for the studio app
//!
//! This crate is the backbone of the fullstack architecture. It defines
//! every Dioxus server function the web frontend calls, along with the
//! supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Admin allow-list role assignment, Argon2 password hashing, session key |
//! | [`brief`] | — | Brief refinement through the Gemini text API |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Database models and their client-safe `*Info` projections |
//! | [`storage`] | — | Banner image validation and filesystem persistence |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function,
//! annotated with `#[get(...)]` or `#[post(...)]` and compiled twice: once
//! with full server logic (behind `#[cfg(feature = "server")]`) and once as
//! a thin client stub that simply forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `register`, `login`, `logout`,
//!   `update_profile`
//! - **User administration**: `get_all_users`, `delete_user`,
//!   `toggle_user_ban`
//! - **Design requests**: `create_request`, `get_my_requests`,
//!   `get_all_requests`, `update_request_status`
//! - **Contact messages**: `send_message`, `get_messages`
//! - **Banners**: `upload_banner_image`, `add_banner`, `get_banners`,
//!   `delete_banner`, `toggle_banner_status`
//! - **Brief assistant**: `refine_design_brief`
//! - **Notifications**: `get_notifications`, `mark_notifications_read`
//! - **Live support**: `get_support_messages`, `send_support_message`
//!
//! A banned account is cut off at every delivery point: `login` refuses it,
//! and `get_current_user` flushes the session as soon as the poll sees the
//! BANNED status.

use dioxus::prelude::*;

pub mod auth;
pub mod brief;
pub mod db;
pub mod models;
pub mod storage;

pub use models::{
    BannerInfo, MessageInfo, NotificationInfo, NotificationKind, ProjectType, RequestInfo,
    RequestStatus, SupportMessageInfo, SupportStatus, UserInfo, UserRole, UserStatus,
};
pub use storage::UploadPayload;

/// Error shown when a signed-in account has been disabled.
pub const ACCOUNT_DISABLED: &str = "عذراً، تم تعطيل هذا الحساب. يرجى الاتصال بالدعم.";

/// Error shown when the brief assistant is unreachable.
pub const ASSISTANT_FAILED: &str = "حدث خطأ أثناء الاتصال بالمساعد الذكي.";

// ---------------------------------------------------------------------------
// Server-side helpers
// ---------------------------------------------------------------------------

#[cfg(feature = "server")]
fn parse_id(id: &str) -> Result<uuid::Uuid, ServerFnError> {
    uuid::Uuid::parse_str(id).map_err(|e| ServerFnError::new(e.to_string()))
}

/// Load the session's user row, if any. Does not enforce the ban state;
/// callers that hand out data must go through [`require_user`].
#[cfg(feature = "server")]
async fn session_user(
    session: &tower_sessions::Session,
) -> Result<Option<models::User>, ServerFnError> {
    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(parse_id(&user_id)?)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user)
}

/// The signed-in, non-banned user behind the session. A banned account is
/// signed out on the spot.
#[cfg(feature = "server")]
async fn require_user(session: &tower_sessions::Session) -> Result<models::User, ServerFnError> {
    match session_user(session).await? {
        Some(user) if user.status == UserStatus::Banned => {
            session
                .flush()
                .await
                .map_err(|e| ServerFnError::new(e.to_string()))?;
            Err(ServerFnError::new(ACCOUNT_DISABLED))
        }
        Some(user) => Ok(user),
        None => Err(ServerFnError::new("Not authenticated")),
    }
}

#[cfg(feature = "server")]
async fn require_admin(session: &tower_sessions::Session) -> Result<models::User, ServerFnError> {
    let user = require_user(session).await?;
    if user.role != UserRole::Admin {
        return Err(ServerFnError::new("Administrator access required"));
    }
    Ok(user)
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

/// Get the current authenticated user from the session, enforcing the ban
/// check on every delivery.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    let Some(user) = session_user(&session).await? else {
        return Ok(None);
    };

    if user.status == UserStatus::Banned {
        tracing::info!(user = %user.id, "banned account signed out");
        session
            .flush()
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        return Ok(None);
    }

    Ok(Some(user.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Register a new account. The role comes from the admin allow-list; the
/// status always starts ACTIVE.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(
    name: String,
    email: String,
    password: String,
) -> Result<UserInfo, ServerFnError> {
    let name = name.trim().to_string();
    let email = email.trim().to_lowercase();

    if name.is_empty() {
        return Err(ServerFnError::new("Name is required"));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.len() < 6 {
        return Err(ServerFnError::new("Password must be at least 6 characters"));
    }

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT 1 as n FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new("An account with this email already exists"));
    }

    let role = auth::role_for_email(&email);
    let password_hash = auth::hash_password(&password).map_err(ServerFnError::new)?;

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (name, email, password_hash, role) VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(&name)
    .bind(&email)
    .bind(&password_hash)
    .bind(role)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(user = %user.id, role = ?user.role, "account registered");
    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    name: String,
    email: String,
    password: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password. A BANNED account never receives a
/// session: the attempt is refused and any session state flushed.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    let email = email.trim().to_lowercase();

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid = auth::verify_password(&password, &user.password_hash).map_err(ServerFnError::new)?;
    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    if user.status == UserStatus::Banned {
        session
            .flush()
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        return Err(ServerFnError::new(ACCOUNT_DISABLED));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Update the caller's own name and email.
#[cfg(feature = "server")]
#[post("/api/auth/profile", session: tower_sessions::Session)]
pub async fn update_profile(name: String, email: String) -> Result<UserInfo, ServerFnError> {
    let user = require_user(&session).await?;

    let name = name.trim().to_string();
    let email = email.trim().to_lowercase();

    if name.is_empty() {
        return Err(ServerFnError::new("Name is required"));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let updated: models::User =
        sqlx::query_as("UPDATE users SET name = $1, email = $2 WHERE id = $3 RETURNING *")
            .bind(&name)
            .bind(&email)
            .bind(user.id)
            .fetch_one(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(updated.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/profile")]
pub async fn update_profile(name: String, email: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// User administration
// ---------------------------------------------------------------------------

/// All registered users. Staff only.
#[cfg(feature = "server")]
#[get("/api/admin/users", session: tower_sessions::Session)]
pub async fn get_all_users() -> Result<Vec<UserInfo>, ServerFnError> {
    require_admin(&session).await?;

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let users: Vec<models::User> = sqlx::query_as("SELECT * FROM users")
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(users.iter().map(models::User::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/admin/users")]
pub async fn get_all_users() -> Result<Vec<UserInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Remove a user record entirely. Staff only.
#[cfg(feature = "server")]
#[post("/api/admin/users/delete", session: tower_sessions::Session)]
pub async fn delete_user(user_id: String) -> Result<(), ServerFnError> {
    require_admin(&session).await?;

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(parse_id(&user_id)?)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(user = %user_id, "user deleted");
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/users/delete")]
pub async fn delete_user(user_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Flip a user between ACTIVE and BANNED. The inversion happens in a single
/// statement, so two calls always restore the original state.
#[cfg(feature = "server")]
#[post("/api/admin/users/toggle-ban", session: tower_sessions::Session)]
pub async fn toggle_user_ban(user_id: String) -> Result<(), ServerFnError> {
    require_admin(&session).await?;

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "UPDATE users SET status = CASE WHEN status = 'BANNED' THEN 'ACTIVE'::user_status \
         ELSE 'BANNED'::user_status END WHERE id = $1",
    )
    .bind(parse_id(&user_id)?)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/users/toggle-ban")]
pub async fn toggle_user_ban(user_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// Design requests
// ---------------------------------------------------------------------------

/// Submit a design request. The server stamps status = PENDING and the
/// creation time regardless of input; the owner is taken from the session
/// when one is present (anonymous submissions are allowed).
#[cfg(feature = "server")]
#[post("/api/requests", session: tower_sessions::Session)]
pub async fn create_request(
    client_name: String,
    email: String,
    project_type: ProjectType,
    description: String,
    budget: Option<String>,
) -> Result<RequestInfo, ServerFnError> {
    let client_name = client_name.trim().to_string();
    let email = email.trim().to_string();
    let description = description.trim().to_string();

    if client_name.is_empty() || email.is_empty() || description.is_empty() {
        return Err(ServerFnError::new("Name, email and description are required"));
    }

    let owner = session_user(&session).await?;
    let budget = budget.map(|b| b.trim().to_string()).filter(|b| !b.is_empty());

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let request: models::DesignRequest = sqlx::query_as(
        "INSERT INTO design_requests (user_id, client_name, email, project_type, description, budget) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(owner.map(|u| u.id))
    .bind(&client_name)
    .bind(&email)
    .bind(project_type)
    .bind(&description)
    .bind(&budget)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(request = %request.id, category = ?project_type, "design request created");
    Ok(request.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/requests")]
pub async fn create_request(
    client_name: String,
    email: String,
    project_type: ProjectType,
    description: String,
    budget: Option<String>,
) -> Result<RequestInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// The caller's own requests, newest first.
#[cfg(feature = "server")]
#[get("/api/requests/mine", session: tower_sessions::Session)]
pub async fn get_my_requests() -> Result<Vec<RequestInfo>, ServerFnError> {
    let user = require_user(&session).await?;

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let mut requests: Vec<models::DesignRequest> =
        sqlx::query_as("SELECT * FROM design_requests WHERE user_id = $1")
            .bind(user.id)
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    models::request::sort_newest_first(&mut requests);
    Ok(requests.iter().map(models::DesignRequest::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/requests/mine")]
pub async fn get_my_requests() -> Result<Vec<RequestInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Every request in the system, newest first. Staff only.
#[cfg(feature = "server")]
#[get("/api/admin/requests", session: tower_sessions::Session)]
pub async fn get_all_requests() -> Result<Vec<RequestInfo>, ServerFnError> {
    require_admin(&session).await?;

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let requests: Vec<models::DesignRequest> =
        sqlx::query_as("SELECT * FROM design_requests ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(requests.iter().map(models::DesignRequest::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/admin/requests")]
pub async fn get_all_requests() -> Result<Vec<RequestInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Overwrite exactly the status field of a request. Staff only. When the
/// request has an owner, a notification is written for them as well.
#[cfg(feature = "server")]
#[post("/api/admin/requests/status", session: tower_sessions::Session)]
pub async fn update_request_status(
    request_id: String,
    status: RequestStatus,
) -> Result<(), ServerFnError> {
    require_admin(&session).await?;

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let updated: models::DesignRequest =
        sqlx::query_as("UPDATE design_requests SET status = $1 WHERE id = $2 RETURNING *")
            .bind(status)
            .bind(parse_id(&request_id)?)
            .fetch_one(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    if let Some(owner) = updated.user_id {
        let body = format!(
            "تم تحديث حالة طلبك \"{}\" إلى: {}",
            updated.project_type.label_ar(),
            status.label_ar()
        );
        sqlx::query(
            "INSERT INTO notifications (user_id, title, body, kind) VALUES ($1, $2, $3, $4)",
        )
        .bind(owner)
        .bind("تحديث حالة الطلب")
        .bind(&body)
        .bind(NotificationKind::for_status(status))
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    }

    tracing::info!(request = %request_id, status = ?status, "request status updated");
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/requests/status")]
pub async fn update_request_status(
    request_id: String,
    status: RequestStatus,
) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// Contact messages
// ---------------------------------------------------------------------------

/// Store a contact-form message. Public; write-once.
#[cfg(feature = "server")]
#[post("/api/messages")]
pub async fn send_message(name: String, phone: String, body: String) -> Result<(), ServerFnError> {
    let name = name.trim().to_string();
    let phone = phone.trim().to_string();
    let body = body.trim().to_string();

    if name.is_empty() || phone.is_empty() || body.is_empty() {
        return Err(ServerFnError::new("All fields are required"));
    }

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("INSERT INTO contact_messages (name, phone, body) VALUES ($1, $2, $3)")
        .bind(&name)
        .bind(&phone)
        .bind(&body)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/messages")]
pub async fn send_message(name: String, phone: String, body: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// All contact messages, newest first. Staff only.
#[cfg(feature = "server")]
#[get("/api/admin/messages", session: tower_sessions::Session)]
pub async fn get_messages() -> Result<Vec<MessageInfo>, ServerFnError> {
    require_admin(&session).await?;

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let messages: Vec<models::ContactMessage> =
        sqlx::query_as("SELECT * FROM contact_messages ORDER BY sent_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(messages.iter().map(models::ContactMessage::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/admin/messages")]
pub async fn get_messages() -> Result<Vec<MessageInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// Banners
// ---------------------------------------------------------------------------

/// Store an uploaded banner image and return its public URL. Staff only.
#[cfg(feature = "server")]
#[post("/api/admin/banners/upload", session: tower_sessions::Session)]
pub async fn upload_banner_image(payload: UploadPayload) -> Result<String, ServerFnError> {
    require_admin(&session).await?;

    storage::store_banner_image(&payload.file_name, &payload.content_type, &payload.data)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "banner upload failed");
            ServerFnError::new(e.to_string())
        })
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/banners/upload")]
pub async fn upload_banner_image(payload: UploadPayload) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Publish a new banner; it starts active. Staff only.
#[cfg(feature = "server")]
#[post("/api/admin/banners", session: tower_sessions::Session)]
pub async fn add_banner(image_url: String, title: String) -> Result<(), ServerFnError> {
    require_admin(&session).await?;

    let title = title.trim().to_string();
    if title.is_empty() || image_url.trim().is_empty() {
        return Err(ServerFnError::new("A title and an image are required"));
    }

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("INSERT INTO banners (image_url, title) VALUES ($1, $2)")
        .bind(image_url.trim())
        .bind(&title)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/banners")]
pub async fn add_banner(image_url: String, title: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Banners for display. With `active_only` the public carousel set is
/// returned; the full list (newest first) is staff only.
#[cfg(feature = "server")]
#[get("/api/banners", session: tower_sessions::Session)]
pub async fn get_banners(active_only: bool) -> Result<Vec<BannerInfo>, ServerFnError> {
    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let banners: Vec<models::Banner> = if active_only {
        sqlx::query_as("SELECT * FROM banners WHERE is_active = TRUE")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?
    } else {
        require_admin(&session).await?;
        sqlx::query_as("SELECT * FROM banners ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?
    };

    Ok(banners.iter().map(models::Banner::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/banners")]
pub async fn get_banners(active_only: bool) -> Result<Vec<BannerInfo>, ServerFnError> {
    Ok(Vec::new())
}

/// Remove a banner outright. Staff only.
#[cfg(feature = "server")]
#[post("/api/admin/banners/delete", session: tower_sessions::Session)]
pub async fn delete_banner(banner_id: String) -> Result<(), ServerFnError> {
    require_admin(&session).await?;

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM banners WHERE id = $1")
        .bind(parse_id(&banner_id)?)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/banners/delete")]
pub async fn delete_banner(banner_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Invert a banner's visibility exactly once per call. Staff only.
#[cfg(feature = "server")]
#[post("/api/admin/banners/toggle", session: tower_sessions::Session)]
pub async fn toggle_banner_status(banner_id: String) -> Result<(), ServerFnError> {
    require_admin(&session).await?;

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("UPDATE banners SET is_active = NOT is_active WHERE id = $1")
        .bind(parse_id(&banner_id)?)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/banners/toggle")]
pub async fn toggle_banner_status(banner_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// Brief assistant
// ---------------------------------------------------------------------------

/// Rewrite a raw project description into a structured design brief.
/// Public — the intake form offers this before an account exists.
#[cfg(feature = "server")]
#[post("/api/brief/refine")]
pub async fn refine_design_brief(
    raw_description: String,
    project_type: ProjectType,
) -> Result<String, ServerFnError> {
    brief::refine(&raw_description, project_type)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "brief refinement failed");
            ServerFnError::new(ASSISTANT_FAILED)
        })
}

#[cfg(not(feature = "server"))]
#[post("/api/brief/refine")]
pub async fn refine_design_brief(
    raw_description: String,
    project_type: ProjectType,
) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// The caller's notifications, newest first.
#[cfg(feature = "server")]
#[get("/api/notifications", session: tower_sessions::Session)]
pub async fn get_notifications() -> Result<Vec<NotificationInfo>, ServerFnError> {
    let user = require_user(&session).await?;

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let notifications: Vec<models::Notification> =
        sqlx::query_as("SELECT * FROM notifications WHERE user_id = $1 ORDER BY created_at DESC")
            .bind(user.id)
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(notifications.iter().map(models::Notification::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/notifications")]
pub async fn get_notifications() -> Result<Vec<NotificationInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Mark all of the caller's notifications as read.
#[cfg(feature = "server")]
#[post("/api/notifications/read", session: tower_sessions::Session)]
pub async fn mark_notifications_read() -> Result<(), ServerFnError> {
    let user = require_user(&session).await?;

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("UPDATE notifications SET is_read = TRUE WHERE user_id = $1 AND is_read = FALSE")
        .bind(user.id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/notifications/read")]
pub async fn mark_notifications_read() -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// Live support
// ---------------------------------------------------------------------------

/// Find or create the caller's OPEN support session.
#[cfg(feature = "server")]
async fn open_session(
    pool: &sqlx::PgPool,
    user: &models::User,
) -> Result<models::SupportSession, ServerFnError> {
    let existing: Option<models::SupportSession> =
        sqlx::query_as("SELECT * FROM support_sessions WHERE user_id = $1 AND status = 'OPEN'")
            .bind(user.id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    if let Some(session) = existing {
        return Ok(session);
    }

    sqlx::query_as("INSERT INTO support_sessions (user_id) VALUES ($1) RETURNING *")
        .bind(user.id)
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Messages of the caller's OPEN support session, oldest first. An empty
/// list means no conversation has started yet.
#[cfg(feature = "server")]
#[get("/api/support/messages", session: tower_sessions::Session)]
pub async fn get_support_messages() -> Result<Vec<SupportMessageInfo>, ServerFnError> {
    let user = require_user(&session).await?;

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let open: Option<models::SupportSession> =
        sqlx::query_as("SELECT * FROM support_sessions WHERE user_id = $1 AND status = 'OPEN'")
            .bind(user.id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(open) = open else {
        return Ok(Vec::new());
    };

    let messages: Vec<models::SupportMessage> =
        sqlx::query_as("SELECT * FROM support_messages WHERE session_id = $1 ORDER BY sent_at")
            .bind(open.id)
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(messages.iter().map(models::SupportMessage::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/support/messages")]
pub async fn get_support_messages() -> Result<Vec<SupportMessageInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Append a message to the caller's support session, creating the session
/// on first use. The studio's canned greeting is written after the first
/// user message.
#[cfg(feature = "server")]
#[post("/api/support/messages", session: tower_sessions::Session)]
pub async fn send_support_message(body: String) -> Result<(), ServerFnError> {
    let user = require_user(&session).await?;

    let body = body.trim().to_string();
    if body.is_empty() {
        return Err(ServerFnError::new("Message is empty"));
    }

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let support = open_session(pool, &user).await?;

    let (prior,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM support_messages WHERE session_id = $1")
            .bind(support.id)
            .fetch_one(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "INSERT INTO support_messages (session_id, sender_id, sender_name, is_admin, body) \
         VALUES ($1, $2, $3, FALSE, $4)",
    )
    .bind(support.id)
    .bind(user.id.to_string())
    .bind(&user.name)
    .bind(&body)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    if prior == 0 {
        sqlx::query(
            "INSERT INTO support_messages (session_id, sender_id, sender_name, is_admin, body) \
             VALUES ($1, 'studio', $2, TRUE, $3)",
        )
        .bind(support.id)
        .bind("فريق فليكس")
        .bind("أهلاً بك! وصلتنا رسالتك وسيرد عليك أحد أعضاء الفريق في أقرب وقت.")
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    }

    sqlx::query("UPDATE support_sessions SET last_message_at = NOW() WHERE id = $1")
        .bind(support.id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/support/messages")]
pub async fn send_support_message(body: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

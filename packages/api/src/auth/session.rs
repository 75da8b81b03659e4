//! Session constants shared between the server functions and the web
//! launcher.

/// Key under which the signed-in user's id is stored in the session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

//! Authentication helpers: role assignment, password hashing, and the
//! session key shared with the web launcher.

#[cfg(feature = "server")]
mod password;
mod session;

#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};
pub use session::SESSION_USER_ID_KEY;

use crate::models::UserRole;

/// The exclusive admin allow-list. Only these addresses are ever granted
/// the ADMIN role, and only at registration time.
pub const ADMIN_ALLOWLIST: &[&str] = &[
    "farida@flexdesign.com",
    "admin1@flexdesign.com",
    "admin2@flexdesign.com",
    "supervisor@flexdesign.com",
];

/// Role for a fresh registration. The comparison is case-insensitive; the
/// stored email is lowercased before this is called, but callers are not
/// required to have done so.
pub fn role_for_email(email: &str) -> UserRole {
    let email = email.trim().to_lowercase();
    if ADMIN_ALLOWLIST.contains(&email.as_str()) {
        UserRole::Admin
    } else {
        UserRole::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_allowlisted_email_becomes_admin() {
        for email in ADMIN_ALLOWLIST {
            assert_eq!(role_for_email(email), UserRole::Admin);
        }
    }

    #[test]
    fn allowlist_check_is_case_insensitive() {
        assert_eq!(role_for_email("FARIDA@FlexDesign.com"), UserRole::Admin);
        assert_eq!(role_for_email("  supervisor@flexdesign.com "), UserRole::Admin);
    }

    #[test]
    fn everyone_else_is_a_regular_user() {
        assert_eq!(role_for_email("sara@x.com"), UserRole::User);
        // Same mailbox on another domain does not count.
        assert_eq!(role_for_email("farida@gmail.com"), UserRole::User);
        assert_eq!(role_for_email(""), UserRole::User);
    }
}

//! One module per application view, plus the small helpers they share.

mod admin;
mod contact;
mod dashboard;
mod home;
mod login;
mod messages;
mod register;
mod request_form;
mod success;
mod support;

pub use admin::Admin;
pub use contact::Contact;
pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
pub use messages::Messages;
pub use register::Register;
pub use request_form::RequestForm;
pub use success::Success;
pub use support::Support;

/// Date part of an RFC 3339 timestamp, for listings.
pub(crate) fn format_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// Blocking confirmation dialog. Always true off the web target so the
/// desktop dev shell stays usable.
pub(crate) fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|w| w.confirm_with_message(message).unwrap_or(false))
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::format_date;

    #[test]
    fn format_date_takes_the_date_part() {
        assert_eq!(format_date("2026-08-07T10:30:00+00:00"), "2026-08-07");
        assert_eq!(format_date("not-a-timestamp"), "not-a-timestamp");
    }
}

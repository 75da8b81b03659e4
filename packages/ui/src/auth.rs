//! Authentication context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Clear the session and the local auth state.
pub async fn sign_out(mut auth: Signal<AuthState>) {
    if api::logout().await.is_ok() {
        auth.set(AuthState {
            user: None,
            loading: false,
        });
    }
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
///
/// The session is re-checked on a fixed 30 s interval; because the server
/// flushes banned sessions on every delivery, a ban takes effect here on
/// the next poll at the latest. The poll task belongs to this component
/// and dies with it.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Fetch the current user on mount
    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(user) => {
                auth_state.set(AuthState {
                    user,
                    loading: false,
                });
            }
            Err(_) => {
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                });
            }
        }
    });

    // Periodic session check (every 30s)
    use_effect(move || {
        spawn(async move {
            loop {
                crate::task::sleep_secs(30).await;

                // Don't check while initial load is still in progress
                if auth_state().loading {
                    continue;
                }
                match api::get_current_user().await {
                    Ok(user) => {
                        if auth_state().user != user {
                            auth_state.set(AuthState {
                                user,
                                loading: false,
                            });
                        }
                    }
                    Err(e) => {
                        tracing::debug!("session check failed: {e}");
                    }
                }
            }
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

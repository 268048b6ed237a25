//! Session context and hooks for the UI.

use api::HttpAuthApi;
use dioxus::prelude::*;
use store::Identity;

/// Session state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<Identity>,
    /// Whether the initial session check is still in flight.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that resolves the session once on mount.
///
/// The check strictly precedes everything below it: views keep rendering
/// nothing while `loading` is true, so a valid session never flashes the
/// sign-in form and no note data loads for an unresolved identity.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut state = use_signal(SessionState::default);

    let _ = use_resource(move || async move {
        let api = HttpAuthApi::default();
        let vault = crate::make_vault();
        let user = auth::resolve_session(&api, &vault).await;
        state.set(SessionState {
            user,
            loading: false,
        });
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Button that ends the session and returns to sign-in.
#[component]
pub fn SignOutButton(
    #[props(default = "Sign Out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut state = use_session();

    let onclick = move |_| async move {
        let api = HttpAuthApi::default();
        let vault = crate::make_vault();
        auth::sign_out(&api, &vault).await;
        state.set(SessionState {
            user: None,
            loading: false,
        });
        redirect("/signin");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

/// Replace the current location (web only; a no-op elsewhere).
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
    }
}

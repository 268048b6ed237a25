//! # Web Storage tiers — browser-side persistence
//!
//! [`LocalStore`] and [`SessionStore`] are the [`KeyValueStore`]
//! implementations used on the **web platform**, backed by the origin-scoped
//! `window.localStorage` and `window.sessionStorage` objects via [`web_sys`].
//!
//! | Store | Backing object | Survives |
//! |-------|----------------|----------|
//! | [`LocalStore`] | `localStorage` | browser restarts |
//! | [`SessionStore`] | `sessionStorage` | the current tab/session only |
//!
//! Both are zero-size handles that look the storage object up on every
//! operation; the browser owns the actual state, so there is nothing to hold
//! between calls.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). A blocked or full storage area degrades to
//! "no local data" rather than crashing the UI.

use web_sys::Storage;

use crate::notebook::KeyValueStore;

/// `localStorage`-backed store: the durable tier.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

/// `sessionStorage`-backed store: the tab-scoped tier.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn session_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(s) = local_storage() {
            let _ = s.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(s) = local_storage() {
            let _ = s.remove_item(key);
        }
    }
}

impl KeyValueStore for SessionStore {
    fn get(&self, key: &str) -> Option<String> {
        session_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(s) = session_storage() {
            let _ = s.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(s) = session_storage() {
            let _ = s.remove_item(key);
        }
    }
}

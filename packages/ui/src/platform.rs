//! Platform-appropriate storage constructors.
//!
//! Returns stores backed by the right [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): origin-scoped Web Storage
//! - **Native** (tooling, tests): in-memory fallback

use store::{CredentialVault, KeyValueStore, Notebook};

/// Attach the note collection for `email` on its durable tier.
///
/// Call only with an email resolved by the session controller; an attached
/// notebook always belongs to exactly one identity.
pub fn make_notebook(email: &str) -> Notebook<impl KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Notebook::attach(store::LocalStore::new(), email)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Notebook::attach(store::MemoryStore::new(), email)
    }
}

/// The two-tier credential vault (durable + tab-scoped).
pub fn make_vault() -> CredentialVault<impl KeyValueStore, impl KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        CredentialVault::new(store::LocalStore::new(), store::SessionStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        CredentialVault::new(store::MemoryStore::new(), store::MemoryStore::new())
    }
}

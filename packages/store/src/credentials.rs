//! # Credential records and the two-tier vault
//!
//! A signed-in session is mirrored into browser storage as a single
//! [`CredentialRecord`]: the opaque session token together with the
//! [`Identity`] it belongs to. Persisting the pair as one JSON value under
//! one key means the record is either wholly present or wholly absent; a
//! token can never survive without its identity or vice versa.
//!
//! The record lives in exactly one of two tiers, chosen at sign-in time by
//! the "keep me logged in" checkbox:
//!
//! | Tier | Backing scope | Survives |
//! |------|---------------|----------|
//! | [`StorageTier::Durable`] | `localStorage` | browser restarts |
//! | [`StorageTier::Session`] | `sessionStorage` | the current tab only |
//!
//! [`CredentialVault`] wraps both tiers behind one interface. Writes land in
//! the chosen tier only; [`clear`](CredentialVault::clear) always sweeps
//! both, so logout cannot leave a stale record behind in the tier that was
//! not in use.

use serde::{Deserialize, Serialize};

use crate::models::Identity;
use crate::notebook::KeyValueStore;

/// Storage key holding the serialized credential record in either tier.
pub const CREDENTIALS_KEY: &str = "hd_credentials";

/// Which storage tier a credential record is written to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageTier {
    /// Survives browser restarts (`localStorage`).
    Durable,
    /// Scoped to the current tab (`sessionStorage`).
    Session,
}

/// The persisted pairing of a session token and the identity it authenticates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub token: String,
    pub identity: Identity,
}

/// Two-tier credential storage: one durable, one tab-scoped.
pub struct CredentialVault<D: KeyValueStore, E: KeyValueStore> {
    durable: D,
    ephemeral: E,
}

impl<D: KeyValueStore, E: KeyValueStore> CredentialVault<D, E> {
    pub fn new(durable: D, ephemeral: E) -> Self {
        Self { durable, ephemeral }
    }

    /// Load whichever tier holds a record, preferring the durable one.
    ///
    /// A value that no longer parses is treated as absent.
    pub fn load(&self) -> Option<CredentialRecord> {
        read(&self.durable).or_else(|| read(&self.ephemeral))
    }

    /// Persist the record to the chosen tier, clearing the other.
    pub fn store(&self, record: &CredentialRecord, tier: StorageTier) {
        let Ok(raw) = serde_json::to_string(record) else {
            return;
        };
        self.clear();
        match tier {
            StorageTier::Durable => self.durable.set(CREDENTIALS_KEY, &raw),
            StorageTier::Session => self.ephemeral.set(CREDENTIALS_KEY, &raw),
        }
    }

    /// Remove the record from both tiers.
    pub fn clear(&self) {
        self.durable.remove(CREDENTIALS_KEY);
        self.ephemeral.remove(CREDENTIALS_KEY);
    }
}

fn read(store: &impl KeyValueStore) -> Option<CredentialRecord> {
    store
        .get(CREDENTIALS_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
}

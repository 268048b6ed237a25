//! Session resolution and teardown.
//!
//! Resolution runs once when the app mounts, before any note data is loaded
//! or any auth form becomes interactable. It prefers the live session-check
//! answer and only trusts the locally persisted credential record when the
//! service cannot be reached at all.

use api::{ApiError, AuthApi};
use store::{CredentialRecord, CredentialVault, Identity, KeyValueStore, StorageTier};

/// Resolve the identity for this browser session, if any.
///
/// - The service confirms a session → that identity, fresh from the server.
/// - The service answers "no session" (including rejecting the presented
///   token) → the stale local record is cleared and there is no identity.
/// - The service is unreachable → the persisted record, as a last resort.
pub async fn resolve_session<A, D, E>(api: &A, vault: &CredentialVault<D, E>) -> Option<Identity>
where
    A: AuthApi,
    D: KeyValueStore,
    E: KeyValueStore,
{
    let record = vault.load();
    let token = record.as_ref().map(|r| r.token.as_str());
    match api.check_session(token).await {
        Ok(Some(identity)) => Some(identity),
        Ok(None) => {
            vault.clear();
            None
        }
        Err(ApiError::Rejected { .. }) => {
            vault.clear();
            None
        }
        Err(error) => {
            tracing::warn!("session check unreachable: {error}");
            record.map(|r| r.identity)
        }
    }
}

/// Persist a fresh credential record to the tier the user chose.
pub fn remember<D, E>(
    vault: &CredentialVault<D, E>,
    record: &CredentialRecord,
    keep_logged_in: bool,
) where
    D: KeyValueStore,
    E: KeyValueStore,
{
    let tier = if keep_logged_in {
        StorageTier::Durable
    } else {
        StorageTier::Session
    };
    vault.store(record, tier);
}

/// End the session: notify the service, then clear both credential tiers.
///
/// The remote call is fire-and-forget: a failed logout must never leave
/// credentials behind locally.
pub async fn sign_out<A, D, E>(api: &A, vault: &CredentialVault<D, E>)
where
    A: AuthApi,
    D: KeyValueStore,
    E: KeyValueStore,
{
    if let Err(error) = api.logout().await {
        tracing::warn!("logout call failed: {error}");
    }
    vault.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{SendOtpRequest, SendOtpResponse, VerifyOtpRequest, VerifyOtpResponse};
    use std::sync::Mutex;
    use store::MemoryStore;

    /// What the stubbed session check should do.
    enum Check {
        Live(Identity),
        NoSession,
        TokenRejected,
        Unreachable,
    }

    struct StubApi {
        check: Check,
        fail_logout: bool,
        presented_token: Mutex<Option<Option<String>>>,
    }

    impl StubApi {
        fn new(check: Check) -> Self {
            Self {
                check,
                fail_logout: false,
                presented_token: Mutex::new(None),
            }
        }
    }

    /// A genuine transport-class error, built without touching the network.
    fn transport_error() -> ApiError {
        let error = reqwest::Client::new()
            .get("not a url")
            .build()
            .expect_err("malformed URL must not build");
        ApiError::Transport(error)
    }

    impl AuthApi for StubApi {
        async fn check_session(&self, token: Option<&str>) -> Result<Option<Identity>, ApiError> {
            *self.presented_token.lock().unwrap() = Some(token.map(str::to_string));
            match &self.check {
                Check::Live(identity) => Ok(Some(identity.clone())),
                Check::NoSession => Ok(None),
                Check::TokenRejected => Err(ApiError::Rejected {
                    message: "Invalid or expired session".to_string(),
                }),
                Check::Unreachable => Err(transport_error()),
            }
        }

        async fn send_otp(&self, _request: &SendOtpRequest) -> Result<SendOtpResponse, ApiError> {
            unimplemented!("not exercised here")
        }

        async fn verify_otp(
            &self,
            _request: &VerifyOtpRequest,
        ) -> Result<VerifyOtpResponse, ApiError> {
            unimplemented!("not exercised here")
        }

        async fn logout(&self) -> Result<(), ApiError> {
            if self.fail_logout {
                Err(ApiError::Rejected {
                    message: "Session already gone".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn identity(email: &str) -> Identity {
        Identity {
            name: "Jonas Kahnwald".to_string(),
            email: email.to_string(),
        }
    }

    fn record(email: &str) -> CredentialRecord {
        CredentialRecord {
            token: "stored-token".to_string(),
            identity: identity(email),
        }
    }

    fn vault() -> CredentialVault<MemoryStore, MemoryStore> {
        CredentialVault::new(MemoryStore::new(), MemoryStore::new())
    }

    #[tokio::test]
    async fn test_live_check_wins_over_local_record() {
        let api = StubApi::new(Check::Live(identity("fresh@b.com")));
        let vault = vault();
        vault.store(&record("stale@b.com"), StorageTier::Durable);

        let resolved = resolve_session(&api, &vault).await;

        assert_eq!(resolved, Some(identity("fresh@b.com")));
        // The stored token was presented as the bearer credential.
        assert_eq!(
            *api.presented_token.lock().unwrap(),
            Some(Some("stored-token".to_string()))
        );
    }

    #[tokio::test]
    async fn test_definitive_no_session_clears_the_vault() {
        let api = StubApi::new(Check::NoSession);
        let vault = vault();
        vault.store(&record("a@b.com"), StorageTier::Session);

        assert_eq!(resolve_session(&api, &vault).await, None);
        assert_eq!(vault.load(), None);
    }

    #[tokio::test]
    async fn test_rejected_token_clears_the_vault() {
        let api = StubApi::new(Check::TokenRejected);
        let vault = vault();
        vault.store(&record("a@b.com"), StorageTier::Durable);

        assert_eq!(resolve_session(&api, &vault).await, None);
        assert_eq!(vault.load(), None);
    }

    #[tokio::test]
    async fn test_no_session_and_no_record_is_unauthenticated() {
        let api = StubApi::new(Check::NoSession);
        assert_eq!(resolve_session(&api, &vault()).await, None);
    }

    #[tokio::test]
    async fn test_unreachable_check_falls_back_to_stored_record() {
        let api = StubApi::new(Check::Unreachable);
        let vault = vault();
        vault.store(&record("offline@b.com"), StorageTier::Durable);

        let resolved = resolve_session(&api, &vault).await;

        assert_eq!(resolved, Some(identity("offline@b.com")));
        // The record stays put for the next attempt.
        assert!(vault.load().is_some());
    }

    #[tokio::test]
    async fn test_unreachable_check_without_record_is_unauthenticated() {
        let api = StubApi::new(Check::Unreachable);
        assert_eq!(resolve_session(&api, &vault()).await, None);
    }

    #[tokio::test]
    async fn test_remember_routes_to_the_chosen_tier() {
        let durable = MemoryStore::new();
        let ephemeral = MemoryStore::new();
        let vault = CredentialVault::new(durable.clone(), ephemeral.clone());

        remember(&vault, &record("a@b.com"), true);
        assert!(durable.get(store::credentials::CREDENTIALS_KEY).is_some());
        assert!(ephemeral.get(store::credentials::CREDENTIALS_KEY).is_none());

        remember(&vault, &record("a@b.com"), false);
        assert!(durable.get(store::credentials::CREDENTIALS_KEY).is_none());
        assert!(ephemeral.get(store::credentials::CREDENTIALS_KEY).is_some());
    }

    #[tokio::test]
    async fn test_sign_out_clears_both_tiers() {
        for keep in [true, false] {
            let api = StubApi::new(Check::NoSession);
            let vault = vault();
            remember(&vault, &record("a@b.com"), keep);

            sign_out(&api, &vault).await;
            assert_eq!(vault.load(), None);
        }
    }

    #[tokio::test]
    async fn test_sign_out_clears_credentials_even_when_remote_logout_fails() {
        let mut api = StubApi::new(Check::NoSession);
        api.fail_logout = true;
        let vault = vault();
        remember(&vault, &record("a@b.com"), true);

        sign_out(&api, &vault).await;
        assert_eq!(vault.load(), None);
    }
}

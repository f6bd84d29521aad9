//! Auth session gate
//!
//! Resolves credentials through an [`Authenticator`] (the backend auth
//! service, or a stub in tests) and persists the session client-side. The
//! backend issues no token, so the stored user record IS the session.

use async_trait::async_trait;
use shared::AppResult;
use shared::models::User;

use crate::storage::KeyValueStorage;

/// Storage key for the persisted session user
pub const SESSION_STORAGE_KEY: &str = "gourmetgo-currentUser";

/// Legacy key holding only the role string; still written and cleared for
/// compatibility with sessions created by older clients
pub const LEGACY_ROLE_STORAGE_KEY: &str = "gourmetgo-user-role";

/// Credential resolver
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<User>;
}

/// Role lookup plus client-side session persistence
pub struct AuthGate<A> {
    authenticator: A,
    storage: Box<dyn KeyValueStorage>,
}

impl<A: Authenticator> AuthGate<A> {
    pub fn new(authenticator: A, storage: Box<dyn KeyValueStorage>) -> Self {
        Self {
            authenticator,
            storage,
        }
    }

    /// Sign in and persist the session. Nothing is stored when the
    /// credentials are rejected.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> AppResult<User> {
        let user = self.authenticator.sign_in(email, password).await?;

        match serde_json::to_string(&user) {
            Ok(raw) => {
                if let Err(e) = self.storage.set(SESSION_STORAGE_KEY, &raw) {
                    tracing::warn!(error = %e, "Failed to persist session");
                }
                if let Err(e) = self
                    .storage
                    .set(LEGACY_ROLE_STORAGE_KEY, &user.role.to_string())
                {
                    tracing::warn!(error = %e, "Failed to persist legacy role key");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Failed to serialize session user"),
        }

        Ok(user)
    }

    /// Clear the persisted session (both the user record and the legacy key)
    pub fn sign_out(&mut self) {
        for key in [SESSION_STORAGE_KEY, LEGACY_ROLE_STORAGE_KEY] {
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!(error = %e, key, "Failed to clear session key");
            }
        }
    }

    /// Restore the persisted user, if any. Corrupt or missing data reads as
    /// signed out, never as an error.
    pub fn current_user(&self) -> Option<User> {
        let raw = self.storage.get(SESSION_STORAGE_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
}

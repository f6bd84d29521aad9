//! Authentication service
//!
//! Resolves an email/password pair against the static staff table. This is
//! a development stand-in, not a credential store: every account shares one
//! fixed literal password, and no token or server-side session is issued.
//! The client persists the resolved user record itself.

use std::sync::Arc;

use shared::models::User;
use shared::{AppError, AppResult};

use super::Latency;
use crate::db::MemoryStore;
use crate::db::repository::UserRepository;

/// Fixed development password shared by the staff accounts
const MOCK_PASSWORD: &str = "1234";

pub struct AuthService {
    users: UserRepository,
    latency: Latency,
}

impl AuthService {
    pub fn new(store: Arc<MemoryStore>, latency: Latency) -> Self {
        Self {
            users: UserRepository::new(store),
            latency,
        }
    }

    /// Sign in with email and password
    ///
    /// Succeeds only when the email is present in the user table and the
    /// password equals the fixed literal; any other combination fails with
    /// the unified invalid-credentials error.
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<User> {
        self.latency.simulate().await;

        match self.users.find_by_email(email) {
            Some(user) if password == MOCK_PASSWORD => {
                tracing::info!(user_id = %user.id, role = %user.role, "User signed in");
                Ok(user)
            }
            _ => Err(AppError::invalid_credentials()),
        }
    }
}

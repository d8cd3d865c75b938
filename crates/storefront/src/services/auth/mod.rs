//! Authentication service.
//!
//! Verifies credentials against the external [`UserDirectory`] and manages
//! session lifecycle. Passwords never touch this crate beyond being passed
//! through to the directory.

mod error;

pub use error::AuthError;

use crate::records::UserDirectory;
use crate::sessions::{SessionStore, SessionToken};

/// Authentication service: login creates a session, logout ends one.
pub struct AuthService<'a, D> {
    directory: &'a D,
    sessions: &'a SessionStore,
}

impl<'a, D: UserDirectory> AuthService<'a, D> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(directory: &'a D, sessions: &'a SessionStore) -> Self {
        Self {
            directory,
            sessions,
        }
    }

    /// Log a user in: verify credentials, then register a fresh session
    /// with a brand-new empty basket.
    ///
    /// Logging in twice yields two independent sessions.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] if the username/password
    /// pair does not verify, or [`AuthError::Directory`] if the directory
    /// itself fails.
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionToken, AuthError> {
        if !self.directory.authenticate(username, password).await? {
            tracing::debug!(username, "login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        // authenticate() said yes, so a missing record means the account was
        // deleted in between; treat it the same as a bad password.
        let user = self
            .directory
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        Ok(self.sessions.create(user))
    }

    /// Log out: end the session if it exists. Idempotent.
    pub fn logout(&self, token: &SessionToken) {
        self.sessions.end(token);
    }
}

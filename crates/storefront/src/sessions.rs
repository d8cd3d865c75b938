//! Session registry: token → logged-in identity + basket.
//!
//! One [`Session`] is created per login event and lives until logout (or
//! process exit — sessions are deliberately not persisted). Two logins by
//! the same user yield two independent sessions with two independent
//! baskets.
//!
//! # Locking discipline
//!
//! The token → session map is a [`DashMap`], safe for login/logout
//! insert/remove races against lookups from every worker task.
//!
//! Each session's basket sits behind its own `tokio::sync::Mutex`. All
//! basket mutation goes through that lock, and checkout holds it across the
//! whole read-total → submit-order → clear sequence, so concurrent requests
//! for the same session (double-click, multiple tabs) can never lose an
//! update or clear a line that was added after the checkout total was read.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use dashmap::DashMap;
use rand::Rng as _;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use hearthside_core::{Role, UserId};

use crate::basket::Basket;
use crate::models::User;

/// Opaque, unguessable session token.
///
/// 256 random bits, base64url-encoded. Handed to the HTTP layer at login
/// (typically set as a cookie) and presented back on every request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generate a fresh random token.
    #[must_use]
    pub fn generate() -> Self {
        let bytes: [u8; 32] = rand::rng().random();
        Self(URL_SAFE_NO_PAD.encode(bytes))
    }

    /// The token's string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for SessionToken {
    fn from(token: &str) -> Self {
        Self(token.to_owned())
    }
}

/// One authenticated browsing context: identity plus its own basket.
///
/// A session's basket is exclusively owned — it is never shared with
/// another session, even for the same user.
#[derive(Debug)]
pub struct Session {
    token: SessionToken,
    user: User,
    basket: Mutex<Basket>,
}

impl Session {
    fn new(token: SessionToken, user: User) -> Self {
        Self {
            token,
            user,
            basket: Mutex::new(Basket::new()),
        }
    }

    /// The token this session is registered under.
    #[must_use]
    pub const fn token(&self) -> &SessionToken {
        &self.token
    }

    /// The logged-in identity.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// The logged-in user's id.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user.id
    }

    /// The logged-in user's name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.user.username
    }

    /// The logged-in user's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.user.role
    }

    /// The session's basket, behind its per-basket lock.
    pub const fn basket(&self) -> &Mutex<Basket> {
        &self.basket
    }
}

/// Process-wide registry of active sessions.
///
/// Constructed once at startup and injected into request handlers (no
/// ambient global). All operations tolerate ordinary misuse: an unknown
/// token reads as "absent", ending a session twice is a no-op.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<SessionToken, Arc<Session>>,
}

impl SessionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for an authenticated user and return its token.
    ///
    /// Always succeeds. Does not check for existing sessions — concurrent
    /// sessions for one user are permitted and independent.
    pub fn create(&self, user: User) -> SessionToken {
        let token = SessionToken::generate();
        let session = Arc::new(Session::new(token.clone(), user));
        tracing::info!(user_id = %session.user_id(), username = session.username(), "session created");
        self.sessions.insert(token.clone(), session);
        token
    }

    /// Look up a session by token. Unknown tokens yield `None`, which
    /// callers treat as "not authenticated", never as an error.
    #[must_use]
    pub fn get(&self, token: &SessionToken) -> Option<Arc<Session>> {
        self.sessions
            .get(token)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// End a session, removing it from the registry. Idempotent: ending an
    /// unknown or already-ended session is a no-op.
    pub fn end(&self, token: &SessionToken) {
        if let Some((_, session)) = self.sessions.remove(token) {
            tracing::info!(user_id = %session.user_id(), "session ended");
        }
    }

    /// Number of active sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

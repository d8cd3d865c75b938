//! Authentication error types.

use thiserror::Error;

use crate::records::RecordError;

/// Errors that can occur during login.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid credentials (wrong password or unknown username).
    ///
    /// Deliberately covers both cases so login responses don't reveal which
    /// usernames exist.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// User directory error.
    #[error("user directory error: {0}")]
    Directory(#[from] RecordError),
}

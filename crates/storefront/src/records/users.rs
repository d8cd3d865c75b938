//! User directory seam: credential verification and account lookup.

use core::future::Future;

use super::RecordError;
use crate::models::User;

/// The external user store, as seen by login.
///
/// Password storage and verification policy belong to the implementation;
/// this core only learns "yes or no" plus the account record.
pub trait UserDirectory: Send + Sync {
    /// Verify a username/password pair.
    fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<bool, RecordError>> + Send;

    /// Fetch the account record for a username.
    fn find_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<User>, RecordError>> + Send;
}

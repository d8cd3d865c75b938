//! User identity types.
//!
//! Minimal data carried by a session to identify the logged-in user.

use serde::{Deserialize, Serialize};

use hearthside_core::{Role, UserId};

/// Session-stored user identity.
///
/// The full account record lives in the external user directory; a session
/// only needs enough to attribute orders and gate admin pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User's database ID.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Role granted at signup or by an admin.
    pub role: Role,
}

//! User roles.

use serde::{Deserialize, Serialize};

/// Role of an authenticated user.
///
/// Admins manage the catalog and user accounts; customers browse and buy.
/// The session/basket core treats both the same, but the role travels with
/// the session so the HTTP layer can gate admin pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    #[default]
    Customer,
}

impl Role {
    /// String form, as stored by the user directory.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Customer => "customer",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Trait seams for the external record stores.
//!
//! Products, users and orders live in a durable store owned by another part
//! of the system. This core only ever needs three narrow views of it:
//! catalog lookup ([`CatalogStore`]), order submission ([`OrderStore`]) and
//! credential/user lookup ([`UserDirectory`]). Each is a trait so the HTTP
//! layer can inject the real database-backed implementation and tests can
//! inject in-memory fakes.

pub mod catalog;
pub mod orders;
pub mod users;

pub use catalog::CatalogStore;
pub use orders::{NewOrder, Order, OrderStore};
pub use users::UserDirectory;

use thiserror::Error;

/// Errors surfaced by a record store implementation.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The store could not be reached or the operation failed outright.
    #[error("record store unavailable: {0}")]
    Unavailable(String),

    /// Constraint violation (e.g., a duplicate key on insert).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// Data in the store is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

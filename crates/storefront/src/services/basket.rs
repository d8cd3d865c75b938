//! Basket intents: add item, remove item, view basket.
//!
//! These are the per-request entry points the HTTP layer calls after
//! extracting a session token and an item id from the request.

use thiserror::Error;

use hearthside_core::{ItemId, Price};

use crate::basket::BasketLine;
use crate::records::{CatalogStore, RecordError};
use crate::sessions::{SessionStore, SessionToken};

/// Errors from basket intents.
#[derive(Debug, Error)]
pub enum BasketError {
    /// Token missing, unknown or already logged out. The caller redirects
    /// to login.
    #[error("not authenticated")]
    Unauthenticated,

    /// The requested item id is not in the catalog.
    #[error("unknown catalog item: {0}")]
    UnknownItem(ItemId),

    /// Catalog lookup failed.
    #[error("catalog error: {0}")]
    Catalog(#[from] RecordError),
}

/// Read-only snapshot of a basket, taken under one lock acquisition so the
/// lines and the total always agree.
#[derive(Debug, Clone)]
pub struct BasketView {
    /// Current lines, in no particular order.
    pub lines: Vec<BasketLine>,
    /// Σ(unit price × quantity) over the lines.
    pub total: Price,
}

/// Basket service: resolves tokens and item ids, then mutates or reads the
/// session's basket under its lock.
pub struct BasketService<'a, C> {
    catalog: &'a C,
    sessions: &'a SessionStore,
}

impl<'a, C: CatalogStore> BasketService<'a, C> {
    /// Create a new basket service.
    #[must_use]
    pub const fn new(catalog: &'a C, sessions: &'a SessionStore) -> Self {
        Self { catalog, sessions }
    }

    /// Add one unit of a catalog item to the session's basket.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::Unauthenticated`] for an unknown token,
    /// [`BasketError::UnknownItem`] if the catalog does not know the id, or
    /// [`BasketError::Catalog`] if the lookup itself fails.
    pub async fn add_item(
        &self,
        token: &SessionToken,
        item_id: ItemId,
    ) -> Result<(), BasketError> {
        let session = self
            .sessions
            .get(token)
            .ok_or(BasketError::Unauthenticated)?;

        let item = self
            .catalog
            .find_item(item_id)
            .await?
            .ok_or(BasketError::UnknownItem(item_id))?;

        session.basket().lock().await.add_item(item);
        Ok(())
    }

    /// Remove one unit of an item from the session's basket.
    ///
    /// An id that is not in the basket is a harmless no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::Unauthenticated`] for an unknown token.
    pub async fn remove_item(
        &self,
        token: &SessionToken,
        item_id: ItemId,
    ) -> Result<(), BasketError> {
        let session = self
            .sessions
            .get(token)
            .ok_or(BasketError::Unauthenticated)?;

        session.basket().lock().await.remove_item(item_id);
        Ok(())
    }

    /// Snapshot the session's basket lines and total.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::Unauthenticated`] for an unknown token.
    pub async fn view(&self, token: &SessionToken) -> Result<BasketView, BasketError> {
        let session = self
            .sessions
            .get(token)
            .ok_or(BasketError::Unauthenticated)?;

        let basket = session.basket().lock().await;
        Ok(BasketView {
            lines: basket.lines(),
            total: basket.total_price(),
        })
    }
}

//! Checkout: convert a basket into a persisted order and clear it.
//!
//! The protocol is read total → submit order → clear basket, as one logical
//! operation. The basket lock is held for the whole sequence, including the
//! order-submission await, so an add or remove racing checkout either lands
//! entirely before the total is read or entirely after the clear. Order
//! submission is the only step that can fail; on failure the basket is left
//! exactly as it was so the user can retry without re-adding items.

use thiserror::Error;

use hearthside_core::OrderId;

use crate::records::{NewOrder, OrderStore, RecordError};
use crate::sessions::{SessionStore, SessionToken};

/// Errors from checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Token missing, unknown or already logged out.
    #[error("not authenticated")]
    Unauthenticated,

    /// The order store could not persist the order. The basket is
    /// untouched; the caller surfaces a retryable failure.
    #[error("order submission failed: {0}")]
    Submission(#[from] RecordError),
}

/// Checkout service.
pub struct CheckoutService<'a, O> {
    orders: &'a O,
    sessions: &'a SessionStore,
}

impl<'a, O: OrderStore> CheckoutService<'a, O> {
    /// Create a new checkout service.
    #[must_use]
    pub const fn new(orders: &'a O, sessions: &'a SessionStore) -> Self {
        Self { orders, sessions }
    }

    /// Check out the session's basket.
    ///
    /// An empty basket still checks out and produces a zero-value order;
    /// whether that is desirable is a product question, but it is the
    /// storefront's established behavior and callers rely on checkout not
    /// second-guessing the basket.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Unauthenticated`] for an unknown token, or
    /// [`CheckoutError::Submission`] if the order store fails — in which
    /// case the basket still holds every line it held before the call.
    pub async fn checkout(&self, token: &SessionToken) -> Result<OrderId, CheckoutError> {
        let session = self
            .sessions
            .get(token)
            .ok_or(CheckoutError::Unauthenticated)?;

        // Held across the submission await: nothing added after this point
        // can be cleared by this checkout, and the submitted total always
        // matches the lines that get cleared.
        let mut basket = session.basket().lock().await;

        let total = basket.total_price();
        let order = NewOrder {
            user_id: session.user_id(),
            total,
        };

        match self.orders.submit(order).await {
            Ok(order_id) => {
                basket.clear();
                tracing::info!(%order_id, user_id = %session.user_id(), %total, "order placed");
                Ok(order_id)
            }
            Err(err) => {
                tracing::warn!(user_id = %session.user_id(), %total, error = %err, "order submission failed");
                Err(CheckoutError::Submission(err))
            }
        }
    }
}

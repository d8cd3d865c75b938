//! Order submission seam.

use core::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hearthside_core::{OrderId, Price, UserId};

use super::RecordError;

/// An order request as produced by checkout: who is buying and the total
/// computed from their basket. The store assigns the id and timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    /// The buying user.
    pub user_id: UserId,
    /// Total price at checkout time: Σ(unit price × quantity).
    pub total: Price,
}

/// A persisted order record. Never mutated by this core after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Identifier assigned by the store on success.
    pub id: OrderId,
    /// The buying user.
    pub user_id: UserId,
    /// Total price as submitted.
    pub total: Price,
    /// When the store recorded the order.
    pub created_at: DateTime<Utc>,
}

/// Durable order persistence.
pub trait OrderStore: Send + Sync {
    /// Persist an order and return its generated id.
    ///
    /// This is the only fallible step of checkout; on `Err` the caller's
    /// basket is left untouched so the user can retry.
    fn submit(&self, order: NewOrder) -> impl Future<Output = Result<OrderId, RecordError>> + Send;
}

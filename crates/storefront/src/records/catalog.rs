//! Catalog lookup seam.

use core::future::Future;

use hearthside_core::ItemId;

use super::RecordError;
use crate::models::CatalogItem;

/// Read-only view of the product catalog.
pub trait CatalogStore: Send + Sync {
    /// Look up a purchasable item by id.
    ///
    /// Returns `Ok(None)` for an id the catalog does not know; that is a
    /// caller condition (stale page, hand-edited form), not a store error.
    fn find_item(
        &self,
        id: ItemId,
    ) -> impl Future<Output = Result<Option<CatalogItem>, RecordError>> + Send;
}

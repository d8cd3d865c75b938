//! Catalog item types.

use serde::{Deserialize, Serialize};

use hearthside_core::{ItemId, Price};

/// A purchasable unit from the catalog: an appliance configuration
/// (brand/model) with its unit price.
///
/// Immutable once loaded into a basket line. Basket multiset identity is by
/// [`id`](Self::id), so two lookups of the same id merge onto one line even
/// if descriptive fields were edited between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Stable identifier assigned by the catalog.
    pub id: ItemId,
    /// Manufacturer brand.
    pub brand: String,
    /// Model name.
    pub model: String,
    /// Price per unit, in whole currency units.
    pub unit_price: Price,
}

//! Shopping basket: a multiset of catalog items with per-item quantities.
//!
//! A [`Basket`] is plain data with synchronous methods. Concurrency control
//! lives one level up: each session wraps its basket in a `tokio::sync::Mutex`
//! (see [`crate::sessions::Session`]), so every caller already holds the
//! per-basket lock when calling in here.

use std::collections::HashMap;

use hearthside_core::{ItemId, Price};

use crate::models::CatalogItem;

/// One basket line: an item and how many of it are in the basket.
///
/// Invariant: `quantity >= 1`. A line that would reach zero is removed from
/// the basket instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketLine {
    /// The purchasable item, as resolved from the catalog at add time.
    pub item: CatalogItem,
    /// Units of the item, always at least 1.
    pub quantity: u32,
}

impl BasketLine {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub const fn line_total(&self) -> Price {
        self.item.unit_price.line_total(self.quantity)
    }
}

/// In-memory basket, keyed by item id. No ordering guarantee.
#[derive(Debug, Default)]
pub struct Basket {
    lines: HashMap<ItemId, BasketLine>,
}

impl Basket {
    /// Create an empty basket.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of an item.
    ///
    /// If a line for the item's id already exists its quantity is
    /// incremented; otherwise a new line with quantity 1 is inserted.
    /// Duplicate adds never create duplicate lines.
    pub fn add_item(&mut self, item: CatalogItem) {
        self.lines
            .entry(item.id)
            .and_modify(|line| line.quantity += 1)
            .or_insert(BasketLine { item, quantity: 1 });
    }

    /// Remove one unit of the item with the given id.
    ///
    /// Decrements the line's quantity, removing the line entirely when it
    /// would reach zero. Removing an id that is not in the basket is a
    /// harmless no-op (the UI may double-submit a remove action).
    pub fn remove_item(&mut self, item_id: ItemId) {
        match self.lines.get_mut(&item_id) {
            Some(line) if line.quantity > 1 => {
                line.quantity -= 1;
            }
            Some(_) => {
                self.lines.remove(&item_id);
            }
            None => {
                tracing::debug!(%item_id, "remove ignored: item not in basket");
            }
        }
    }

    /// Snapshot of the current lines.
    #[must_use]
    pub fn lines(&self) -> Vec<BasketLine> {
        self.lines.values().cloned().collect()
    }

    /// Quantity currently held for an item id; 0 when absent.
    #[must_use]
    pub fn quantity_of(&self, item_id: ItemId) -> u32 {
        self.lines.get(&item_id).map_or(0, |line| line.quantity)
    }

    /// Total price of the basket: Σ(unit price × quantity).
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.lines.values().map(BasketLine::line_total).sum()
    }

    /// Whether the basket has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Remove all lines, leaving an empty basket.
    ///
    /// Called by checkout after the order has actually been recorded, and by
    /// an explicit "empty basket" action.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

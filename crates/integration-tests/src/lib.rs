//! Integration test support for Hearthside.
//!
//! In-memory implementations of the record-store seams, so the tests in
//! `tests/` can exercise the session/basket/checkout core end to end
//! without a database.
//!
//! # Test Categories
//!
//! - `auth` - Login/logout against the fake user directory
//! - `basket_intents` - Add/remove/view through `BasketService`
//! - `checkout` - The checkout protocol against the fake order store
//! - `concurrency` - Lost-update and checkout-atomicity properties

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use chrono::Utc;

use hearthside_core::{ItemId, OrderId, Price, Role, UserId};
use hearthside_storefront::models::{CatalogItem, User};
use hearthside_storefront::records::{
    CatalogStore, NewOrder, Order, OrderStore, RecordError, UserDirectory,
};

/// Fixed catalog backed by a `HashMap`.
#[derive(Default)]
pub struct InMemoryCatalog {
    items: HashMap<ItemId, CatalogItem>,
}

impl InMemoryCatalog {
    /// Build a catalog from a list of items.
    #[must_use]
    pub fn with_items(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        Self {
            items: items.into_iter().map(|item| (item.id, item)).collect(),
        }
    }
}

impl CatalogStore for InMemoryCatalog {
    async fn find_item(&self, id: ItemId) -> Result<Option<CatalogItem>, RecordError> {
        Ok(self.items.get(&id).cloned())
    }
}

/// Order store that records submissions in memory and can be switched into
/// a failing mode to exercise the checkout failure path.
#[derive(Default)]
pub struct InMemoryOrders {
    orders: Mutex<Vec<Order>>,
    next_id: AtomicI32,
    fail: AtomicBool,
}

impl InMemoryOrders {
    /// Create an empty order store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `submit` fail (or succeed again).
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of the orders persisted so far.
    ///
    /// # Panics
    ///
    /// Panics if a previous test thread panicked while holding the lock.
    #[must_use]
    pub fn submitted(&self) -> Vec<Order> {
        self.orders.lock().expect("orders lock poisoned").clone()
    }
}

impl OrderStore for InMemoryOrders {
    async fn submit(&self, order: NewOrder) -> Result<OrderId, RecordError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(RecordError::Unavailable("order store offline".into()));
        }

        let id = OrderId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.orders
            .lock()
            .expect("orders lock poisoned")
            .push(Order {
                id,
                user_id: order.user_id,
                total: order.total,
                created_at: Utc::now(),
            });
        Ok(id)
    }
}

/// User directory with a fixed set of accounts and plaintext passwords
/// (these are tests; real verification lives outside the core).
#[derive(Default)]
pub struct InMemoryDirectory {
    accounts: HashMap<String, (String, User)>,
}

impl InMemoryDirectory {
    /// Add an account.
    #[must_use]
    pub fn with_account(mut self, user: User, password: &str) -> Self {
        self.accounts
            .insert(user.username.clone(), (password.to_owned(), user));
        self
    }
}

impl UserDirectory for InMemoryDirectory {
    async fn authenticate(&self, username: &str, password: &str) -> Result<bool, RecordError> {
        Ok(self
            .accounts
            .get(username)
            .is_some_and(|(stored, _)| stored == password))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RecordError> {
        Ok(self.accounts.get(username).map(|(_, user)| user.clone()))
    }
}

/// A customer account for tests.
#[must_use]
pub fn customer(id: i32, username: &str) -> User {
    User {
        id: UserId::new(id),
        username: username.to_owned(),
        role: Role::Customer,
    }
}

/// A catalog item for tests.
#[must_use]
pub fn item(id: i32, brand: &str, model: &str, unit_price: i64) -> CatalogItem {
    CatalogItem {
        id: ItemId::new(id),
        brand: brand.to_owned(),
        model: model.to_owned(),
        unit_price: Price::new(unit_price),
    }
}

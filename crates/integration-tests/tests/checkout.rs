//! The checkout protocol end to end: basket → order → cleared basket.

use hearthside_core::{ItemId, OrderId, Price, UserId};
use hearthside_integration_tests::{InMemoryCatalog, InMemoryOrders, customer, item};
use hearthside_storefront::services::{BasketService, CheckoutError, CheckoutService};
use hearthside_storefront::sessions::SessionStore;

#[tokio::test]
async fn successful_checkout_persists_order_and_clears_basket() {
    let catalog = InMemoryCatalog::with_items([item(3, "Neff", "B57CR22N0B", 750)]);
    let orders = InMemoryOrders::new();
    let sessions = SessionStore::new();
    let token = sessions.create(customer(9, "amrit"));

    let baskets = BasketService::new(&catalog, &sessions);
    baskets.add_item(&token, ItemId::new(3)).await.expect("add");
    baskets.add_item(&token, ItemId::new(3)).await.expect("add");

    let order_id = CheckoutService::new(&orders, &sessions)
        .checkout(&token)
        .await
        .expect("checkout");

    let submitted = orders.submitted();
    assert_eq!(submitted.len(), 1);
    let order = submitted.first().expect("one order");
    assert_eq!(order.id, order_id);
    assert_eq!(order.user_id, UserId::new(9));
    assert_eq!(order.total, Price::new(1500));

    let view = baskets.view(&token).await.expect("view");
    assert!(view.lines.is_empty());
    assert_eq!(view.total, Price::ZERO);
}

#[tokio::test]
async fn failed_submission_leaves_basket_for_retry() {
    let catalog = InMemoryCatalog::with_items([item(3, "Neff", "B57CR22N0B", 750)]);
    let orders = InMemoryOrders::new();
    let sessions = SessionStore::new();
    let token = sessions.create(customer(9, "amrit"));

    let baskets = BasketService::new(&catalog, &sessions);
    baskets.add_item(&token, ItemId::new(3)).await.expect("add");

    orders.set_fail(true);
    let checkout = CheckoutService::new(&orders, &sessions);
    let result = checkout.checkout(&token).await;
    assert!(matches!(result, Err(CheckoutError::Submission(_))));
    assert!(orders.submitted().is_empty());

    // Basket untouched, so the retry succeeds with the same total.
    let view = baskets.view(&token).await.expect("view");
    assert_eq!(view.total, Price::new(750));

    orders.set_fail(false);
    checkout.checkout(&token).await.expect("retry succeeds");
    assert_eq!(
        orders.submitted().first().expect("order").total,
        Price::new(750)
    );
    assert!(baskets.view(&token).await.expect("view").lines.is_empty());
}

#[tokio::test]
async fn empty_basket_checkout_produces_zero_value_order() {
    let orders = InMemoryOrders::new();
    let sessions = SessionStore::new();
    let token = sessions.create(customer(9, "amrit"));

    let order_id = CheckoutService::new(&orders, &sessions)
        .checkout(&token)
        .await
        .expect("zero-total checkout is permitted");

    assert_eq!(order_id, OrderId::new(1));
    assert_eq!(orders.submitted().first().expect("order").total, Price::ZERO);
}

#[tokio::test]
async fn consecutive_checkouts_get_distinct_order_ids() {
    let catalog = InMemoryCatalog::with_items([item(1, "Breville", "VKT092", 35)]);
    let orders = InMemoryOrders::new();
    let sessions = SessionStore::new();
    let token = sessions.create(customer(9, "amrit"));
    let baskets = BasketService::new(&catalog, &sessions);
    let checkout = CheckoutService::new(&orders, &sessions);

    baskets.add_item(&token, ItemId::new(1)).await.expect("add");
    let first = checkout.checkout(&token).await.expect("checkout");

    baskets.add_item(&token, ItemId::new(1)).await.expect("add");
    let second = checkout.checkout(&token).await.expect("checkout");

    assert_ne!(first, second);
    assert_eq!(orders.submitted().len(), 2);
}

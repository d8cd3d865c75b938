//! Add/remove/view intents through `BasketService`.

use hearthside_core::{ItemId, Price};
use hearthside_integration_tests::{InMemoryCatalog, customer, item};
use hearthside_storefront::services::{BasketError, BasketService};
use hearthside_storefront::sessions::{SessionStore, SessionToken};

fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::with_items([
        item(1, "Breville", "VKT092", 35),
        item(2, "Bosch", "KGN34", 450),
    ])
}

#[tokio::test]
async fn add_and_view() {
    let catalog = catalog();
    let sessions = SessionStore::new();
    let token = sessions.create(customer(1, "amrit"));
    let baskets = BasketService::new(&catalog, &sessions);

    baskets.add_item(&token, ItemId::new(1)).await.expect("add");
    baskets.add_item(&token, ItemId::new(1)).await.expect("add");
    baskets.add_item(&token, ItemId::new(2)).await.expect("add");

    let view = baskets.view(&token).await.expect("view");
    assert_eq!(view.lines.len(), 2);
    assert_eq!(view.total, Price::new(35 * 2 + 450));

    let kettle_line = view
        .lines
        .iter()
        .find(|line| line.item.id == ItemId::new(1))
        .expect("kettle line");
    assert_eq!(kettle_line.quantity, 2);
}

#[tokio::test]
async fn remove_decrements_then_drops_line() {
    let catalog = catalog();
    let sessions = SessionStore::new();
    let token = sessions.create(customer(1, "amrit"));
    let baskets = BasketService::new(&catalog, &sessions);

    baskets.add_item(&token, ItemId::new(1)).await.expect("add");
    baskets.add_item(&token, ItemId::new(1)).await.expect("add");

    baskets
        .remove_item(&token, ItemId::new(1))
        .await
        .expect("remove");
    let view = baskets.view(&token).await.expect("view");
    assert_eq!(view.total, Price::new(35));

    baskets
        .remove_item(&token, ItemId::new(1))
        .await
        .expect("remove");
    let view = baskets.view(&token).await.expect("view");
    assert!(view.lines.is_empty());
    assert_eq!(view.total, Price::ZERO);
}

#[tokio::test]
async fn remove_absent_id_is_noop() {
    let catalog = catalog();
    let sessions = SessionStore::new();
    let token = sessions.create(customer(1, "amrit"));
    let baskets = BasketService::new(&catalog, &sessions);

    baskets.add_item(&token, ItemId::new(2)).await.expect("add");
    baskets
        .remove_item(&token, ItemId::new(99))
        .await
        .expect("absent remove is a no-op");

    let view = baskets.view(&token).await.expect("view");
    assert_eq!(view.total, Price::new(450));
}

#[tokio::test]
async fn unknown_item_id_is_an_error_not_a_panic() {
    let catalog = catalog();
    let sessions = SessionStore::new();
    let token = sessions.create(customer(1, "amrit"));
    let baskets = BasketService::new(&catalog, &sessions);

    let result = baskets.add_item(&token, ItemId::new(404)).await;
    assert!(matches!(result, Err(BasketError::UnknownItem(id)) if id == ItemId::new(404)));

    let view = baskets.view(&token).await.expect("view");
    assert!(view.lines.is_empty());
}

#[tokio::test]
async fn intents_without_session_are_unauthenticated() {
    let catalog = catalog();
    let sessions = SessionStore::new();
    let baskets = BasketService::new(&catalog, &sessions);
    let stale = SessionToken::from("stale");

    assert!(matches!(
        baskets.add_item(&stale, ItemId::new(1)).await,
        Err(BasketError::Unauthenticated)
    ));
    assert!(matches!(
        baskets.remove_item(&stale, ItemId::new(1)).await,
        Err(BasketError::Unauthenticated)
    ));
    assert!(matches!(
        baskets.view(&stale).await,
        Err(BasketError::Unauthenticated)
    ));
}

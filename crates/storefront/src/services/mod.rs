//! Service layer: the intents the HTTP handlers invoke.
//!
//! Each service borrows the process-wide [`SessionStore`](crate::sessions::SessionStore)
//! plus the record-store seam it needs, and exposes one request intent per
//! method. Handlers construct services per request; they are cheap wrappers
//! around shared state.

pub mod auth;
pub mod basket;
pub mod checkout;

pub use auth::{AuthError, AuthService};
pub use basket::{BasketError, BasketService, BasketView};
pub use checkout::{CheckoutError, CheckoutService};

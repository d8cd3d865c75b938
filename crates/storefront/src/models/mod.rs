//! Domain model types.

pub mod catalog;
pub mod user;

pub use catalog::CatalogItem;
pub use user::User;

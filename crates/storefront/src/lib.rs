//! Hearthside Storefront - session, basket and checkout core.
//!
//! This crate is the concurrency-sensitive heart of the storefront: the
//! process-wide [`sessions::SessionStore`] that maps opaque session tokens
//! to logged-in identities and their live shopping [`basket::Basket`]s, and
//! the [`services::checkout::CheckoutService`] that converts a basket into a
//! persisted order.
//!
//! # Architecture
//!
//! - HTTP transport, HTML rendering and routing live outside this crate.
//!   Handlers resolve a session token and call into [`services`].
//! - Durable storage (catalog, users, orders) is reached through the trait
//!   seams in [`records`]; this crate performs no I/O of its own besides
//!   those calls.
//! - Sessions and baskets are process-lifetime, in-memory state. Every
//!   basket mutation and the whole checkout sequence are serialized per
//!   basket; see [`sessions`] for the locking discipline.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod basket;
pub mod models;
pub mod records;
pub mod services;
pub mod sessions;

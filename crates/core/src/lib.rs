//! Hearthside Core - Shared types library.
//!
//! This crate provides common types used across all Hearthside components:
//! - `storefront` - The session/basket/checkout core
//! - `integration-tests` - Cross-crate tests with in-memory collaborators
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

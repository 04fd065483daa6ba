//! Bazarek Core - Shared types library.
//!
//! This crate provides common types used across all Bazarek components:
//! - `storefront` - The marketplace state layer (stores, catalog, filtering)
//! - `integration-tests` - Cross-store scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, emails, catalog entities, and settings enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

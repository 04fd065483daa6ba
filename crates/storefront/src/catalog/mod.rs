//! Read-only product catalog access.
//!
//! Two sources feed the UI with listings:
//!
//! - [`CatalogClient`] - the remote tabular store (a PostgREST-style API with
//!   a `products` collection joined to `categories`), mapped into the display
//!   [`bazarek_core::Product`] shape with placeholder seller data.
//! - [`sample_products`] - the locally seeded fixture used before any remote
//!   integration, with deterministic per-product review generation.
//!
//! Catalog reads are the only asynchronous operations in the crate. A failed
//! read surfaces as a [`CatalogError`] for the calling page to render; there
//! is no retry, backoff, or caching layer.

mod client;
mod sample;

pub use client::CatalogClient;
pub use sample::{generate_reviews, sample_products};

use bazarek_core::ProductId;
use thiserror::Error;

/// Errors that can occur when reading the remote catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed or the response body could not be decoded.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A row was structurally valid JSON but carried an unusable value.
    #[error("malformed catalog row: {0}")]
    Malformed(String),

    /// The single-row query matched nothing.
    #[error("product {0} not found in catalog")]
    NotFound(ProductId),
}

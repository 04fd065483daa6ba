//! Catalog entities: products, sellers, and reviews.
//!
//! These are display shapes - the catalog owns the records and the UI only
//! reads them. Optional sections (`specs`, `delivery`, `reviews`) default to
//! empty so rows from older catalog schemas still deserialize.

use serde::{Deserialize, Serialize};

use crate::types::id::{ProductId, ReviewId};
use crate::types::price::Price;

/// A marketplace listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,
    /// Listing title.
    pub title: String,
    /// Asking price.
    pub price: Price,
    /// Free-text city the item is offered from.
    pub location: String,
    /// Primary image reference.
    pub image: String,
    /// All image references (primary first).
    pub images: Vec<String>,
    /// Category label, drawn from a fixed small set for filtering.
    pub category: String,
    /// Whether the listing is promoted on the home page.
    #[serde(default)]
    pub featured: bool,
    /// Free-text description.
    pub description: String,
    /// Free-text condition label (e.g., "Jak nowy").
    pub condition: String,
    /// Seller summary shown on the listing.
    pub seller: Seller,
    /// Optional label/value spec pairs.
    #[serde(default)]
    pub specs: Vec<SpecPair>,
    /// Offered delivery-method labels.
    #[serde(default)]
    pub delivery: Vec<String>,
    /// Buyer reviews, if any.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Seller summary attached to a listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seller {
    /// Display name.
    pub name: String,
    /// Avatar image reference.
    pub avatar: String,
    /// Aggregate rating, 0.0-5.0.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub reviews: u32,
}

/// A label/value pair in a listing's spec table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpecPair {
    pub label: String,
    pub value: String,
}

/// A buyer review on a listing. Immutable once generated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Review identifier.
    pub id: ReviewId,
    /// Reviewer display name.
    pub author: String,
    /// Reviewer avatar reference.
    pub avatar: String,
    /// Star rating, 1-5.
    pub rating: u8,
    /// Display date (dd.mm.yyyy).
    pub date: String,
    /// Review text.
    pub comment: String,
}

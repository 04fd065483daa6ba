//! Cart line items and their storage envelope.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bazarek_core::{Price, Product, ProductId};

/// Current version of the persisted cart schema.
pub const CART_SCHEMA_VERSION: u32 = 1;

/// A single cart entry.
///
/// Invariants: the product id is unique across the cart, and `quantity` is
/// never persisted as zero (a zero quantity removes the entry instead).
/// The price is a snapshot taken at add-to-cart time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product the entry refers to.
    pub id: ProductId,
    /// Title snapshot.
    pub title: String,
    /// Price snapshot.
    pub price: Price,
    /// Primary image reference snapshot.
    pub image: String,
    /// Units of this product in the cart, always >= 1.
    pub quantity: u32,
}

impl CartItem {
    /// Build a quantity-1 entry from a catalog listing.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Price × quantity for this entry.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.line_total(self.quantity)
    }
}

/// Versioned storage envelope for the cart blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredCart {
    /// Schema version.
    pub version: u32,
    /// The cart entries.
    pub items: Vec<CartItem>,
}

impl StoredCart {
    /// Wrap cart entries for persistence at the current schema version.
    #[must_use]
    pub const fn wrap(items: Vec<CartItem>) -> Self {
        Self {
            version: CART_SCHEMA_VERSION,
            items,
        }
    }

    /// Parse a persisted cart blob.
    ///
    /// Accepts both the versioned envelope and the legacy shape, a bare JSON
    /// list of entries.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the blob is neither shape.
    pub fn parse(raw: &str) -> Result<Vec<CartItem>, serde_json::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Compat {
            Versioned(StoredCart),
            Legacy(Vec<CartItem>),
        }

        match serde_json::from_str(raw)? {
            Compat::Versioned(stored) => Ok(stored.items),
            Compat::Legacy(items) => Ok(items),
        }
    }
}

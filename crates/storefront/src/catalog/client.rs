//! Remote catalog client implementation.
//!
//! Speaks a PostgREST-style REST dialect: `GET /rest/v1/products` with an
//! embedded `categories(name)` join, filtered by `id=eq.{id}` for the
//! single-row variant. One in-flight request per page mount, no caching.

use std::time::Duration;

use rust_decimal::Decimal;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, instrument};

use bazarek_core::{CurrencyCode, Price, Product, ProductId, Seller};

use crate::catalog::CatalogError;
use crate::config::CatalogConfig;

/// Select clause joining each product row to its category name.
const SELECT_WITH_CATEGORY: &str = "*,categories(name)";

/// Client for the remote product catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    products_endpoint: String,
    api_key: SecretString,
}

impl CatalogClient {
    /// Create a new catalog client from configuration.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created. This should never happen
    /// under normal circumstances as we use standard TLS configuration.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            products_endpoint: format!("{}/rest/v1/products", config.base_url),
            api_key: config.api_key.clone(),
        }
    }

    /// Fetch every product in the catalog, joined to its category.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Http` on transport or decode failure and
    /// `CatalogError::Malformed` when a row carries an unusable value.
    #[instrument(skip(self))]
    pub async fn fetch_all_products(&self) -> Result<Vec<Product>, CatalogError> {
        let rows: Vec<ProductRow> = self
            .client
            .get(&self.products_endpoint)
            .query(&[("select", SELECT_WITH_CATEGORY)])
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(self.api_key.expose_secret())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(rows = rows.len(), "fetched product rows");
        rows.into_iter().map(ProductRow::into_product).collect()
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` when no row matches, in addition to
    /// the failure modes of [`Self::fetch_all_products`].
    #[instrument(skip(self))]
    pub async fn fetch_product_by_id(&self, id: ProductId) -> Result<Product, CatalogError> {
        let rows: Vec<ProductRow> = self
            .client
            .get(&self.products_endpoint)
            .query(&[
                ("select", SELECT_WITH_CATEGORY),
                ("id", &format!("eq.{id}")),
            ])
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(self.api_key.expose_secret())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        rows.into_iter()
            .next()
            .ok_or(CatalogError::NotFound(id))?
            .into_product()
    }
}

// =============================================================================
// Row Mapping
// =============================================================================

/// Raw product row as returned by the remote store.
#[derive(Debug, Deserialize)]
struct ProductRow {
    id: i32,
    name: String,
    price: f64,
    location: Option<String>,
    image_url: Option<String>,
    description: Option<String>,
    condition: Option<String>,
    #[serde(default)]
    delivery: Vec<String>,
    categories: Option<CategoryRef>,
}

/// Embedded category join.
#[derive(Debug, Deserialize)]
struct CategoryRef {
    name: Option<String>,
}

impl ProductRow {
    /// Map a raw row into the display shape.
    ///
    /// The remote store does not yet carry seller or review detail, so the
    /// seller is a fixed placeholder and the review list is empty.
    fn into_product(self) -> Result<Product, CatalogError> {
        let amount = Decimal::try_from(self.price)
            .map_err(|e| CatalogError::Malformed(format!("price of row {}: {e}", self.id)))?;
        let image = self.image_url.unwrap_or_default();

        Ok(Product {
            id: ProductId::new(self.id),
            title: self.name,
            price: Price::new(amount, CurrencyCode::PLN),
            location: self.location.unwrap_or_else(|| "Polska".to_owned()),
            images: vec![image.clone()],
            image,
            category: self
                .categories
                .and_then(|c| c.name)
                .unwrap_or_else(|| "Inne".to_owned()),
            featured: false,
            description: self.description.unwrap_or_default(),
            condition: self.condition.unwrap_or_else(|| "Nowy".to_owned()),
            seller: placeholder_seller(),
            specs: Vec::new(),
            delivery: self.delivery,
            reviews: Vec::new(),
        })
    }
}

/// Fixed seller shown for remote rows until the store carries seller detail.
fn placeholder_seller() -> Seller {
    Seller {
        name: "Sprzedawca".to_owned(),
        avatar: "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=100".to_owned(),
        rating: 5.0,
        reviews: 0,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_row_maps_with_defaults() {
        let row: ProductRow = serde_json::from_value(serde_json::json!({
            "id": 11,
            "name": "Hulajnoga elektryczna",
            "price": 950.0
        }))
        .unwrap();

        let product = row.into_product().unwrap();
        assert_eq!(product.id, ProductId::new(11));
        assert_eq!(product.location, "Polska");
        assert_eq!(product.category, "Inne");
        assert_eq!(product.condition, "Nowy");
        assert_eq!(product.seller.name, "Sprzedawca");
        assert!(product.reviews.is_empty());
    }

    #[test]
    fn test_row_maps_joined_category() {
        let row: ProductRow = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Rower górski Trek",
            "price": 1800.0,
            "location": "Gdańsk",
            "image_url": "https://example.com/rower.jpg",
            "condition": "Bardzo dobry",
            "delivery": ["Odbiór osobisty"],
            "categories": { "name": "Sport" }
        }))
        .unwrap();

        let product = row.into_product().unwrap();
        assert_eq!(product.category, "Sport");
        assert_eq!(product.price.amount, Decimal::from(1800));
        assert_eq!(product.images, vec!["https://example.com/rower.jpg"]);
        assert_eq!(product.delivery, vec!["Odbiór osobisty"]);
    }

    #[test]
    fn test_row_rejects_unusable_price() {
        let row = ProductRow {
            id: 4,
            name: "Fotel".to_owned(),
            price: f64::NAN,
            location: None,
            image_url: None,
            description: None,
            condition: None,
            delivery: Vec::new(),
            categories: None,
        };

        assert!(matches!(
            row.into_product(),
            Err(CatalogError::Malformed(_))
        ));
    }
}

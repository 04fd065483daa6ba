//! Client-side listing filters.
//!
//! A single linear pass over the in-memory product list, recomputed on every
//! keystroke or selection change. All predicates are ANDed; an empty
//! dimension (empty accepted set, empty substring, unrestricted range) is a
//! no-op on that dimension. At a few dozen listings there is nothing to
//! index or cache.

use rust_decimal::Decimal;

use bazarek_core::Product;

/// Conjunction of the filter dimensions offered by the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    /// Category selection; `None` means all categories.
    pub category: Option<String>,
    /// Free-text query matched case-insensitively against the title.
    pub query: String,
    /// Inclusive lower price bound.
    pub price_min: Decimal,
    /// Inclusive upper price bound.
    pub price_max: Decimal,
    /// Accepted condition labels; empty means no condition filter.
    pub conditions: Vec<String>,
    /// Location substring matched case-insensitively; empty means no filter.
    pub location: String,
    /// Accepted delivery-method labels; empty means no delivery filter.
    pub delivery: Vec<String>,
}

impl Default for ProductFilter {
    /// The unrestricted filter: every listing matches.
    fn default() -> Self {
        Self {
            category: None,
            query: String::new(),
            price_min: Decimal::ZERO,
            price_max: Decimal::MAX,
            conditions: Vec::new(),
            location: String::new(),
            delivery: Vec::new(),
        }
    }
}

impl ProductFilter {
    /// Whether a single listing passes every active dimension.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let matches_category = self
            .category
            .as_ref()
            .is_none_or(|category| &product.category == category);

        let matches_query = product
            .title
            .to_lowercase()
            .contains(&self.query.to_lowercase());

        let matches_price =
            product.price.amount >= self.price_min && product.price.amount <= self.price_max;

        let matches_condition =
            self.conditions.is_empty() || self.conditions.contains(&product.condition);

        let matches_location = self.location.is_empty()
            || product
                .location
                .to_lowercase()
                .contains(&self.location.to_lowercase());

        let matches_delivery = self.delivery.is_empty()
            || product.delivery.iter().any(|d| self.delivery.contains(d));

        matches_category
            && matches_query
            && matches_price
            && matches_condition
            && matches_location
            && matches_delivery
    }

    /// Filter a listing slice in one linear pass, preserving order.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

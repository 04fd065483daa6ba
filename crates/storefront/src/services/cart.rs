//! Cart state.
//!
//! A list of price-snapshot entries keyed by product id, persisted wholesale
//! under `cartItems` on every mutation. Totals are recomputed on every read;
//! at this item count there is nothing worth caching.

use std::sync::{Arc, RwLock};

use rust_decimal::Decimal;
use tracing::debug;

use bazarek_core::{CurrencyCode, Price, Product, ProductId};

use crate::models::cart::{CartItem, StoredCart};
use crate::storage::{KeyValueStore, StorageError, keys};

/// Cart state store.
pub struct CartStore {
    storage: Arc<dyn KeyValueStore>,
    items: RwLock<Vec<CartItem>>,
}

impl CartStore {
    /// Seed the store from the persisted blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read or the blob is
    /// corrupt.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Result<Self, StorageError> {
        let items = match storage.get(keys::CART_ITEMS)? {
            Some(raw) => {
                StoredCart::parse(&raw).map_err(|e| StorageError::corrupt(keys::CART_ITEMS, e))?
            }
            None => Vec::new(),
        };

        Ok(Self {
            storage,
            items: RwLock::new(items),
        })
    }

    /// Snapshot of the current entries.
    #[must_use]
    pub fn items(&self) -> Vec<CartItem> {
        self.read().clone()
    }

    /// Add a listing to the cart: increments the quantity when an entry with
    /// the same product id exists, otherwise appends a quantity-1 entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob cannot be persisted.
    pub fn add(&self, product: &Product) -> Result<(), StorageError> {
        let mut items = self.write();
        match items.iter_mut().find(|item| item.id == product.id) {
            Some(existing) => existing.quantity += 1,
            None => items.push(CartItem::from_product(product)),
        }
        debug!(id = %product.id, "added to cart");
        self.persist(&items)
    }

    /// Remove the entry for `id`; no-op when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob cannot be persisted.
    pub fn remove(&self, id: ProductId) -> Result<(), StorageError> {
        let mut items = self.write();
        items.retain(|item| item.id != id);
        self.persist(&items)
    }

    /// Set the quantity for `id`. A quantity of zero removes the entry, so a
    /// zero quantity is never persisted; there is no upper bound.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob cannot be persisted.
    pub fn set_quantity(&self, id: ProductId, quantity: u32) -> Result<(), StorageError> {
        let mut items = self.write();
        if quantity == 0 {
            items.retain(|item| item.id != id);
        } else if let Some(existing) = items.iter_mut().find(|item| item.id == id) {
            existing.quantity = quantity;
        }
        self.persist(&items)
    }

    /// Empty the cart and its persisted blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob cannot be persisted.
    pub fn clear(&self) -> Result<(), StorageError> {
        let mut items = self.write();
        items.clear();
        debug!("cart cleared");
        self.persist(&items)
    }

    /// Sum of quantities across entries.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.read().iter().map(|item| item.quantity).sum()
    }

    /// Sum of price × quantity across entries.
    #[must_use]
    pub fn total_price(&self) -> Price {
        let items = self.read();
        let amount: Decimal = items.iter().map(CartItem::line_total).sum();
        let currency = items
            .first()
            .map_or_else(CurrencyCode::default, |item| item.price.currency_code);
        Price::new(amount, currency)
    }

    fn persist(&self, items: &[CartItem]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&StoredCart::wrap(items.to_vec()))
            .map_err(|e| StorageError::corrupt(keys::CART_ITEMS, e))?;
        self.storage.set(keys::CART_ITEMS, &raw)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<CartItem>> {
        self.items
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<CartItem>> {
        self.items
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::sample_products;
    use crate::storage::MemoryStore;

    fn cart_with_storage() -> (CartStore, Arc<MemoryStore>) {
        let storage = Arc::new(MemoryStore::new());
        let cart = CartStore::load(Arc::clone(&storage) as Arc<dyn KeyValueStore>).unwrap();
        (cart, storage)
    }

    fn product(id: i32) -> Product {
        sample_products()
            .into_iter()
            .find(|p| p.id.as_i32() == id)
            .unwrap()
    }

    #[test]
    fn test_add_increments_existing_entry() {
        let (cart, _) = cart_with_storage();
        let laptop = product(1);

        cart.add(&laptop).unwrap();
        cart.add(&laptop).unwrap();

        let items = cart.items();
        assert_eq!(items.len(), 1);
        let entry = items.first().unwrap();
        assert_eq!(entry.quantity, 2);
        assert_eq!(cart.total_price().amount, Decimal::from(9000));
    }

    #[test]
    fn test_totals_track_quantities() {
        let (cart, _) = cart_with_storage();
        cart.add(&product(1)).unwrap();
        cart.add(&product(6)).unwrap();
        cart.set_quantity(ProductId::new(6), 3).unwrap();

        assert_eq!(cart.total_items(), 4);
        // 4500 + 3 × 120
        assert_eq!(cart.total_price().amount, Decimal::from(4860));
    }

    #[test]
    fn test_zero_quantity_removes_entry() {
        let (cart, _) = cart_with_storage();
        cart.add(&product(2)).unwrap();
        cart.set_quantity(ProductId::new(2), 0).unwrap();

        assert!(cart.items().is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn test_quantities_never_below_one() {
        let (cart, _) = cart_with_storage();
        cart.add(&product(1)).unwrap();
        cart.add(&product(2)).unwrap();
        cart.set_quantity(ProductId::new(1), 5).unwrap();
        cart.remove(ProductId::new(2)).unwrap();
        cart.add(&product(8)).unwrap();

        assert!(cart.items().iter().all(|item| item.quantity >= 1));
        assert_eq!(
            cart.total_items(),
            cart.items().iter().map(|i| i.quantity).sum::<u32>()
        );
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let (cart, _) = cart_with_storage();
        cart.add(&product(3)).unwrap();
        cart.remove(ProductId::new(99)).unwrap();
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_mutations_persist_and_reload() {
        let storage = Arc::new(MemoryStore::new());
        {
            let cart = CartStore::load(Arc::clone(&storage) as Arc<dyn KeyValueStore>).unwrap();
            cart.add(&product(1)).unwrap();
            cart.add(&product(1)).unwrap();
            cart.add(&product(6)).unwrap();
        }

        let reloaded = CartStore::load(storage).unwrap();
        assert_eq!(reloaded.total_items(), 3);
        assert_eq!(reloaded.items().len(), 2);
    }

    #[test]
    fn test_corrupt_blob_surfaces_as_error() {
        let storage = Arc::new(MemoryStore::new());
        storage.set(keys::CART_ITEMS, "{not json").unwrap();

        let result = CartStore::load(storage);
        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
    }

    #[test]
    fn test_loads_legacy_bare_list_blob() {
        let storage = Arc::new(MemoryStore::new());
        let legacy = serde_json::to_string(&vec![CartItem::from_product(&product(8))]).unwrap();
        storage.set(keys::CART_ITEMS, &legacy).unwrap();

        let cart = CartStore::load(storage).unwrap();
        assert_eq!(cart.total_items(), 1);
    }
}

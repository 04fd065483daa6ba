//! Application state shared by every view.

use std::sync::Arc;

use tracing::debug;

use crate::checkout::CheckoutFlow;
use crate::error::AppError;
use crate::services::{AttributeSink, AuthStore, CartStore, ProfileStore, SettingsStore};
use crate::storage::KeyValueStore;

/// Shared application state.
///
/// Cheap to clone; hand one to every view. All four stores are seeded from
/// the same key-value backend at construction.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    auth: Arc<AuthStore>,
    profile: Arc<ProfileStore>,
    cart: Arc<CartStore>,
    settings: Arc<SettingsStore>,
}

impl AppState {
    /// Seed every store from `storage` and mirror the persisted settings
    /// through `attributes`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be read or a persisted blob
    /// is corrupt.
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        attributes: Arc<dyn AttributeSink>,
    ) -> Result<Self, AppError> {
        let auth = Arc::new(AuthStore::load(Arc::clone(&storage))?);
        let profile = Arc::new(ProfileStore::load(Arc::clone(&storage))?);
        let cart = Arc::new(CartStore::load(Arc::clone(&storage))?);
        let settings = Arc::new(SettingsStore::load(storage, attributes)?);
        debug!("application state seeded");

        Ok(Self {
            inner: Arc::new(AppStateInner {
                auth,
                profile,
                cart,
                settings,
            }),
        })
    }

    /// Authentication store.
    #[must_use]
    pub fn auth(&self) -> &AuthStore {
        &self.inner.auth
    }

    /// User profile store.
    #[must_use]
    pub fn profile(&self) -> &ProfileStore {
        &self.inner.profile
    }

    /// Cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Accessibility settings store.
    #[must_use]
    pub fn settings(&self) -> &SettingsStore {
        &self.inner.settings
    }

    /// Start a checkout flow over the shared cart and session.
    #[must_use]
    pub fn begin_checkout(&self) -> CheckoutFlow {
        CheckoutFlow::new(Arc::clone(&self.inner.auth), Arc::clone(&self.inner.cart))
    }

    /// Sign out: clear the session, restore the default profile, and empty
    /// the cart.
    ///
    /// # Errors
    ///
    /// Returns an error when one of the persisted blobs cannot be written;
    /// earlier steps are not rolled back.
    pub fn sign_out(&self) -> Result<(), AppError> {
        self.inner.auth.logout(None, None)?;
        self.inner.profile.reset()?;
        self.inner.cart.clear()?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::sample_products;
    use crate::models::ProfileUpdate;
    use crate::services::NoopAttributes;
    use crate::storage::{MemoryStore, keys};

    fn state_with_storage() -> (AppState, Arc<MemoryStore>) {
        let storage = Arc::new(MemoryStore::new());
        let state = AppState::new(
            Arc::clone(&storage) as Arc<dyn KeyValueStore>,
            Arc::new(NoopAttributes),
        )
        .unwrap();
        (state, storage)
    }

    #[test]
    fn test_stores_share_one_backend() {
        let (state, storage) = state_with_storage();
        state.auth().login("jan@example.com", "sekret123").unwrap();

        assert_eq!(
            storage.get(keys::IS_AUTHENTICATED).unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn test_sign_out_resets_everything() {
        let (state, storage) = state_with_storage();
        let laptop = sample_products().into_iter().next().unwrap();

        state.auth().login("jan@example.com", "sekret123").unwrap();
        state.cart().add(&laptop).unwrap();
        state
            .profile()
            .update(ProfileUpdate {
                name: Some("Adam Mickiewicz".to_owned()),
                ..ProfileUpdate::default()
            })
            .unwrap();

        state.sign_out().unwrap();

        assert!(!state.auth().is_authenticated());
        assert_eq!(state.cart().total_items(), 0);
        assert_eq!(state.profile().user().name, "Jan Kowalski");
        assert_eq!(storage.get(keys::IS_AUTHENTICATED).unwrap(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let (state, _) = state_with_storage();
        let clone = state.clone();
        clone
            .cart()
            .add(&sample_products().into_iter().next().unwrap())
            .unwrap();

        assert_eq!(state.cart().total_items(), 1);
    }

    #[test]
    fn test_checkout_shares_cart_and_session() {
        let (state, _) = state_with_storage();
        state.auth().login("jan@example.com", "sekret123").unwrap();
        state
            .cart()
            .add(&sample_products().into_iter().next().unwrap())
            .unwrap();

        let checkout = state.begin_checkout();
        assert_eq!(
            checkout.proceed_to_payment(),
            crate::checkout::CheckoutAdvance::Advanced
        );
        checkout.place_order().unwrap();
        assert_eq!(state.cart().total_items(), 0);
    }
}

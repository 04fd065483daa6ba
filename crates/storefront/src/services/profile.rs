//! User profile state.
//!
//! The whole profile is persisted as one blob under `userData` on every
//! update. Field-level validation lives in the presentation layer
//! ([`crate::forms`]); the store only merges and persists.

use std::sync::{Arc, RwLock};

use tracing::debug;

use bazarek_core::ProductId;

use crate::models::profile::{PROFILE_SCHEMA_VERSION, ProfileUpdate, StoredProfile, UserProfile};
use crate::storage::{KeyValueStore, StorageError, keys};

/// User profile state store.
pub struct ProfileStore {
    storage: Arc<dyn KeyValueStore>,
    profile: RwLock<UserProfile>,
}

impl ProfileStore {
    /// Seed the store from the persisted blob, or the demo defaults when
    /// nothing is persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read or the blob is
    /// corrupt.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Result<Self, StorageError> {
        let profile = match storage.get(keys::USER_DATA)? {
            Some(raw) => {
                let stored: StoredProfile = serde_json::from_str(&raw)
                    .map_err(|e| StorageError::corrupt(keys::USER_DATA, e))?;
                if stored.version < PROFILE_SCHEMA_VERSION {
                    debug!(
                        from = stored.version,
                        to = PROFILE_SCHEMA_VERSION,
                        "upgraded profile blob by default-filling"
                    );
                }
                stored.profile
            }
            None => UserProfile::demo_default(),
        };

        Ok(Self {
            storage,
            profile: RwLock::new(profile),
        })
    }

    /// Snapshot of the current profile.
    #[must_use]
    pub fn user(&self) -> UserProfile {
        self.profile
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Shallow-merge `update` into the profile and persist the merged blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob cannot be persisted.
    pub fn update(&self, update: ProfileUpdate) -> Result<(), StorageError> {
        let mut profile = self
            .profile
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        profile.apply(update);
        self.persist(&profile)
    }

    /// Replace the profile with the demo defaults and drop the persisted
    /// blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted blob cannot be removed.
    pub fn reset(&self) -> Result<(), StorageError> {
        let mut profile = self
            .profile
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *profile = UserProfile::demo_default();
        debug!("profile reset to defaults");
        self.storage.remove(keys::USER_DATA)
    }

    /// Whether `id` is in the favorites list.
    #[must_use]
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.profile
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .favorites
            .contains(&id)
    }

    /// Add or remove `id` from the favorites list; returns whether it is a
    /// favorite afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob cannot be persisted.
    pub fn toggle_favorite(&self, id: ProductId) -> Result<bool, StorageError> {
        let mut profile = self
            .profile
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let now_favorite = if profile.favorites.contains(&id) {
            profile.favorites.retain(|fav| *fav != id);
            false
        } else {
            profile.favorites.push(id);
            true
        };
        self.persist(&profile)?;
        Ok(now_favorite)
    }

    fn persist(&self, profile: &UserProfile) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&StoredProfile::wrap(profile.clone()))
            .map_err(|e| StorageError::corrupt(keys::USER_DATA, e))?;
        self.storage.set(keys::USER_DATA, &raw)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn profile_with_storage() -> (ProfileStore, Arc<MemoryStore>) {
        let storage = Arc::new(MemoryStore::new());
        let profile = ProfileStore::load(Arc::clone(&storage) as Arc<dyn KeyValueStore>).unwrap();
        (profile, storage)
    }

    #[test]
    fn test_defaults_before_first_persist() {
        let (store, storage) = profile_with_storage();
        assert_eq!(store.user(), UserProfile::demo_default());
        assert_eq!(storage.get(keys::USER_DATA).unwrap(), None);
    }

    #[test]
    fn test_update_merges_and_survives_reload() {
        let storage = Arc::new(MemoryStore::new());
        {
            let store =
                ProfileStore::load(Arc::clone(&storage) as Arc<dyn KeyValueStore>).unwrap();
            store
                .update(ProfileUpdate {
                    name: Some("Anna Nowak".to_owned()),
                    phone: Some("+48 600 700 800".to_owned()),
                    ..ProfileUpdate::default()
                })
                .unwrap();
        }

        let reloaded = ProfileStore::load(storage).unwrap();
        let user = reloaded.user();
        assert_eq!(user.name, "Anna Nowak");
        assert_eq!(user.phone, "+48 600 700 800");
        // Untouched fields keep their prior values.
        assert_eq!(user.email, UserProfile::demo_default().email);
    }

    #[test]
    fn test_reset_restores_defaults_and_drops_blob() {
        let (store, storage) = profile_with_storage();
        store
            .update(ProfileUpdate {
                location: Some("Gdynia".to_owned()),
                ..ProfileUpdate::default()
            })
            .unwrap();

        store.reset().unwrap();
        assert_eq!(store.user(), UserProfile::demo_default());
        assert_eq!(storage.get(keys::USER_DATA).unwrap(), None);
    }

    #[test]
    fn test_toggle_favorite_roundtrip() {
        let (store, _) = profile_with_storage();
        let id = ProductId::new(3);

        assert!(!store.is_favorite(id));
        assert!(store.toggle_favorite(id).unwrap());
        assert!(store.is_favorite(id));
        assert!(!store.toggle_favorite(id).unwrap());
        assert!(!store.is_favorite(id));
    }

    #[test]
    fn test_pre_versioning_blob_loads_with_defaults() {
        let storage = Arc::new(MemoryStore::new());
        let legacy = serde_json::json!({
            "name": "Jan Kowalski",
            "email": "jan.kowalski@example.com",
            "phone": "+48 123 456 789",
            "location": "Warszawa",
            "avatar": "https://example.com/a.jpg"
        });
        storage
            .set(keys::USER_DATA, &legacy.to_string())
            .unwrap();

        let store = ProfileStore::load(storage).unwrap();
        assert!(store.user().favorites.is_empty());
        assert!(store.user().listings.is_empty());
    }

    #[test]
    fn test_corrupt_blob_surfaces_as_error() {
        let storage = Arc::new(MemoryStore::new());
        storage.set(keys::USER_DATA, "][").unwrap();
        assert!(matches!(
            ProfileStore::load(storage),
            Err(StorageError::Corrupt { .. })
        ));
    }
}

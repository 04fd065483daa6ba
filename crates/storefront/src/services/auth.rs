//! Authentication state.
//!
//! A single persisted boolean flag. The login policy is a placeholder - any
//! non-empty email with a password of at least six characters succeeds; there
//! is no credential store, token lifecycle, or session model.

use std::sync::{Arc, Mutex, RwLock};

use tracing::debug;

use crate::forms::MIN_PASSWORD_LENGTH;
use crate::routes::Route;
use crate::storage::{KeyValueStore, StorageError, keys};

/// An action deferred until the session is authenticated.
type PendingAction = Box<dyn FnOnce() + Send>;

/// Outcome of [`AuthStore::require_auth`].
#[derive(Debug, PartialEq, Eq)]
pub enum AuthGate {
    /// The session was authenticated and the action ran synchronously.
    Performed,
    /// The session was not authenticated; the caller should navigate to the
    /// returned route. The action is parked and resumes on the next
    /// successful login.
    RedirectedTo(Route),
}

/// Authentication state store.
pub struct AuthStore {
    storage: Arc<dyn KeyValueStore>,
    authenticated: RwLock<bool>,
    /// Single-slot continuation for an action dropped by an auth redirect.
    pending: Mutex<Option<PendingAction>>,
}

impl AuthStore {
    /// Seed the store from persisted state.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Result<Self, StorageError> {
        let authenticated =
            matches!(storage.get(keys::IS_AUTHENTICATED)?.as_deref(), Some("true"));

        Ok(Self {
            storage,
            authenticated: RwLock::new(authenticated),
            pending: Mutex::new(None),
        })
    }

    /// Whether the session is currently authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        *self
            .authenticated
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Attempt to log in.
    ///
    /// Succeeds iff `email` is non-empty and `password` has at least six
    /// characters; on success the flag is persisted and any parked action
    /// from an earlier [`Self::require_auth`] redirect is resumed. On
    /// rejection state is unchanged and `false` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the flag cannot be persisted.
    pub fn login(&self, email: &str, password: &str) -> Result<bool, StorageError> {
        if email.is_empty() || password.len() < MIN_PASSWORD_LENGTH {
            debug!("login rejected by placeholder policy");
            return Ok(false);
        }

        *self
            .authenticated
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = true;
        self.storage.set(keys::IS_AUTHENTICATED, "true")?;
        debug!("session authenticated");

        let parked = self
            .pending
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .take();
        if let Some(action) = parked {
            debug!("resuming action parked before login");
            action();
        }

        Ok(true)
    }

    /// Clear the authenticated flag and its persisted key, then invoke the
    /// optional reset callbacks. Side effects on the profile and cart are
    /// delegated to the caller, not owned here.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted flag cannot be removed; callbacks
    /// do not run in that case.
    pub fn logout(
        &self,
        on_reset_profile: Option<Box<dyn FnOnce() + '_>>,
        on_clear_cart: Option<Box<dyn FnOnce() + '_>>,
    ) -> Result<(), StorageError> {
        *self
            .authenticated
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = false;
        self.storage.remove(keys::IS_AUTHENTICATED)?;
        // A parked action must not leak into the next session.
        self.pending
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .take();
        debug!("session cleared");

        if let Some(reset) = on_reset_profile {
            reset();
        }
        if let Some(clear) = on_clear_cart {
            clear();
        }
        Ok(())
    }

    /// Run `action` now if authenticated; otherwise park it and redirect to
    /// the login view. The parked action runs when the next login succeeds.
    pub fn require_auth<F>(&self, action: F) -> AuthGate
    where
        F: FnOnce() + Send + 'static,
    {
        if self.is_authenticated() {
            action();
            return AuthGate::Performed;
        }

        *self
            .pending
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(Box::new(action));
        AuthGate::RedirectedTo(Route::Login)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn store() -> AuthStore {
        AuthStore::load(Arc::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn test_login_policy() {
        let auth = store();
        assert!(!auth.login("", "sekret123").unwrap());
        assert!(!auth.login("jan@example.com", "abc").unwrap());
        assert!(!auth.is_authenticated());

        assert!(auth.login("jan@example.com", "sekret123").unwrap());
        assert!(auth.is_authenticated());
    }

    #[test]
    fn test_flag_is_persisted_and_reseeded() {
        let storage = Arc::new(MemoryStore::new());
        {
            let auth = AuthStore::load(Arc::clone(&storage) as Arc<dyn KeyValueStore>).unwrap();
            auth.login("jan@example.com", "sekret123").unwrap();
        }
        assert_eq!(
            storage.get(keys::IS_AUTHENTICATED).unwrap().as_deref(),
            Some("true")
        );

        let reloaded = AuthStore::load(storage).unwrap();
        assert!(reloaded.is_authenticated());
    }

    #[test]
    fn test_require_auth_runs_action_when_authenticated() {
        let auth = store();
        auth.login("jan@example.com", "sekret123").unwrap();

        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);
        let gate = auth.require_auth(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(gate, AuthGate::Performed);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_require_auth_parks_action_and_resumes_on_login() {
        let auth = store();
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);

        let gate = auth.require_auth(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(gate, AuthGate::RedirectedTo(Route::Login));
        // Never invoked while unauthenticated.
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        auth.login("jan@example.com", "sekret123").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // The slot is single-shot.
        auth.logout(None, None).unwrap();
        auth.login("jan@example.com", "sekret123").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_logout_drops_parked_action() {
        let auth = store();
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);
        auth.require_auth(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        auth.logout(None, None).unwrap();
        auth.login("jan@example.com", "sekret123").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_logout_invokes_callbacks() {
        let auth = store();
        auth.login("jan@example.com", "sekret123").unwrap();

        let profile_reset = AtomicU32::new(0);
        let cart_cleared = AtomicU32::new(0);
        auth.logout(
            Some(Box::new(|| {
                profile_reset.fetch_add(1, Ordering::SeqCst);
            })),
            Some(Box::new(|| {
                cart_cleared.fetch_add(1, Ordering::SeqCst);
            })),
        )
        .unwrap();

        assert!(!auth.is_authenticated());
        assert_eq!(profile_reset.load(Ordering::SeqCst), 1);
        assert_eq!(cart_cleared.load(Ordering::SeqCst), 1);
    }
}

//! Authentication gating across stores.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use bazarek_storefront::catalog::sample_products;
use bazarek_storefront::models::ProfileUpdate;
use bazarek_storefront::routes::Route;
use bazarek_storefront::services::{AuthGate, NoopAttributes};
use bazarek_storefront::state::AppState;
use bazarek_storefront::storage::{KeyValueStore, MemoryStore, keys};

use bazarek_integration_tests::init_tracing;

fn fresh_state() -> (AppState, Arc<MemoryStore>) {
    let storage = Arc::new(MemoryStore::new());
    let state = AppState::new(
        Arc::clone(&storage) as Arc<dyn KeyValueStore>,
        Arc::new(NoopAttributes),
    )
    .unwrap();
    (state, storage)
}

#[test]
fn gated_action_resumes_after_login() {
    init_tracing();
    let (state, _) = fresh_state();

    let favorited = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&favorited);
    let gate = state.auth().require_auth(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(gate, AuthGate::RedirectedTo(Route::Login));
    assert_eq!(favorited.load(Ordering::SeqCst), 0);

    // Rejected attempt leaves the parked action untouched.
    assert!(!state.auth().login("jan@example.com", "abc").unwrap());
    assert_eq!(favorited.load(Ordering::SeqCst), 0);

    assert!(state.auth().login("jan@example.com", "sekret123").unwrap());
    assert_eq!(favorited.load(Ordering::SeqCst), 1);
}

#[test]
fn sign_out_clears_session_profile_and_cart() {
    init_tracing();
    let (state, storage) = fresh_state();
    let phone = sample_products().into_iter().nth(1).unwrap();

    state.auth().login("jan@example.com", "sekret123").unwrap();
    state.cart().add(&phone).unwrap();
    state
        .profile()
        .update(ProfileUpdate {
            name: Some("Zofia Nałkowska".to_owned()),
            ..ProfileUpdate::default()
        })
        .unwrap();

    state.sign_out().unwrap();

    assert!(!state.auth().is_authenticated());
    assert_eq!(state.cart().total_items(), 0);
    assert_eq!(state.profile().user().name, "Jan Kowalski");
    assert_eq!(storage.get(keys::IS_AUTHENTICATED).unwrap(), None);
    assert_eq!(storage.get(keys::USER_DATA).unwrap(), None);
}

//! State survives a full restart when backed by the durable file store.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use bazarek_core::{Contrast, FontSize};
use bazarek_storefront::catalog::sample_products;
use bazarek_storefront::models::ProfileUpdate;
use bazarek_storefront::services::NoopAttributes;
use bazarek_storefront::state::AppState;
use bazarek_storefront::storage::{FileStore, KeyValueStore};

use bazarek_integration_tests::{cleanup, init_tracing, temp_store_path};

fn open_state(path: &std::path::PathBuf) -> AppState {
    let storage = Arc::new(FileStore::open(path).unwrap()) as Arc<dyn KeyValueStore>;
    AppState::new(storage, Arc::new(NoopAttributes)).unwrap()
}

#[test]
fn cart_survives_restart() {
    init_tracing();
    let path = temp_store_path();

    let laptop = sample_products().into_iter().next().unwrap();
    {
        let state = open_state(&path);
        state.cart().add(&laptop).unwrap();
        state.cart().add(&laptop).unwrap();
    }

    let restarted = open_state(&path);
    assert_eq!(restarted.cart().total_items(), 2);
    assert_eq!(
        restarted.cart().total_price().amount,
        laptop.price.amount * rust_decimal::Decimal::from(2)
    );

    // The on-disk shape is a flat key→value map holding a versioned blob.
    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let cart_blob: serde_json::Value =
        serde_json::from_str(on_disk["cartItems"].as_str().unwrap()).unwrap();
    assert_eq!(cart_blob["version"], 1);

    cleanup(&path);
}

#[test]
fn profile_edits_merge_and_survive_restart() {
    init_tracing();
    let path = temp_store_path();

    {
        let state = open_state(&path);
        state
            .profile()
            .update(ProfileUpdate {
                phone: Some("+48 600 700 800".to_owned()),
                location: Some("Kraków".to_owned()),
                ..ProfileUpdate::default()
            })
            .unwrap();
    }

    let profile = open_state(&path).profile().user();
    // Untouched fields keep their defaults; edited ones stick.
    assert_eq!(profile.name, "Jan Kowalski");
    assert_eq!(profile.phone, "+48 600 700 800");
    assert_eq!(profile.location, "Kraków");

    cleanup(&path);
}

#[test]
fn settings_and_session_flag_survive_restart() {
    init_tracing();
    let path = temp_store_path();

    {
        let state = open_state(&path);
        assert!(state.auth().login("jan@example.com", "sekret123").unwrap());
        state.settings().set_font_size(FontSize::Large).unwrap();
        state.settings().set_contrast(Contrast::High).unwrap();
    }

    let restarted = open_state(&path);
    assert!(restarted.auth().is_authenticated());
    assert_eq!(restarted.settings().font_size(), FontSize::Large);
    assert_eq!(restarted.settings().contrast(), Contrast::High);

    cleanup(&path);
}

#[test]
fn favorites_toggle_survives_restart() {
    init_tracing();
    let path = temp_store_path();

    let rower = sample_products().into_iter().nth(2).unwrap();
    {
        let state = open_state(&path);
        assert!(state.profile().toggle_favorite(rower.id).unwrap());
        assert!(state.profile().is_favorite(rower.id));
    }

    let restarted = open_state(&path);
    assert!(restarted.profile().is_favorite(rower.id));
    // Second toggle removes it again.
    assert!(!restarted.profile().toggle_favorite(rower.id).unwrap());
    assert!(!restarted.profile().is_favorite(rower.id));

    cleanup(&path);
}

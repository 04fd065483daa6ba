//! Shared harness for cross-store scenario tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize tracing once for the whole test binary. Honors `RUST_LOG`.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// A unique temp path for a file-backed store; the file does not exist yet.
#[must_use]
pub fn temp_store_path() -> PathBuf {
    std::env::temp_dir().join(format!("bazarek-it-{}.json", uuid::Uuid::new_v4()))
}

/// Remove a temp store file, ignoring a missing one.
pub fn cleanup(path: &PathBuf) {
    std::fs::remove_file(path).ok();
}

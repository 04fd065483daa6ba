//! Persistent key-value storage adapter.
//!
//! The stores persist their state as JSON blobs under fixed string keys, the
//! way a browser keeps origin-scoped local storage. The adapter is a plain
//! trait so the same stores run against an in-memory map in tests and a
//! durable single-file backend in a desktop shell.
//!
//! Writes are last-write-wins at the granularity of a single key. There is no
//! cross-session synchronization.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Fixed keys used by the state stores.
pub mod keys {
    /// `"true"` when a session is authenticated; absent otherwise.
    pub const IS_AUTHENTICATED: &str = "isAuthenticated";
    /// Serialized user profile blob.
    pub const USER_DATA: &str = "userData";
    /// Serialized cart blob.
    pub const CART_ITEMS: &str = "cartItems";
    /// Font-size enum string.
    pub const FONT_SIZE: &str = "fontSize";
    /// Contrast enum string.
    pub const CONTRAST: &str = "contrast";
}

/// Errors that can occur when reading or writing the backing store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store could not be read or written.
    #[error("I/O error accessing backing store: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted blob failed to parse.
    #[error("corrupt value under key {key:?}: {source}")]
    Corrupt {
        /// Storage key holding the bad value.
        key: String,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    /// Wrap a JSON parse failure with the key it occurred under.
    #[must_use]
    pub fn corrupt(key: &str, source: serde_json::Error) -> Self {
        Self::Corrupt {
            key: key.to_owned(),
            source,
        }
    }
}

/// Key-value storage with string keys and string values.
///
/// Implementations must tolerate concurrent calls from handlers, but no
/// cross-key transaction is provided or needed.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`; no-op when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

//! The four state stores backing the UI.
//!
//! Each store owns one persisted blob: it seeds itself from storage when the
//! session starts and writes the whole blob back on every mutation. Stores
//! are injected from the composition root ([`crate::state::AppState`]); there
//! are no globals.

pub mod auth;
pub mod cart;
pub mod profile;
pub mod settings;

pub use auth::{AuthGate, AuthStore};
pub use cart::CartStore;
pub use profile::ProfileStore;
pub use settings::{AttributeSink, NoopAttributes, SettingsStore};

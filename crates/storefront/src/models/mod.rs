//! Domain models for the storefront state layer.
//!
//! These are the shapes the stores persist: the user profile and the cart
//! line items, together with their versioned storage envelopes.

pub mod cart;
pub mod profile;

pub use cart::{CartItem, StoredCart};
pub use profile::{ProfileUpdate, StoredProfile, UserProfile};

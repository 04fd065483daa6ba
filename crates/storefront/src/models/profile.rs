//! User profile model and its storage envelope.

use serde::{Deserialize, Serialize};

use bazarek_core::{Product, ProductId};

/// Current version of the persisted profile schema.
pub const PROFILE_SCHEMA_VERSION: u32 = 1;

/// The signed-in user's profile.
///
/// `favorites` and `listings` carry `#[serde(default)]` so blobs persisted by
/// a schema predating their introduction still load, with the missing lists
/// defaulting to empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Free-text city.
    pub location: String,
    /// Avatar image reference.
    pub avatar: String,
    /// Product ids the user tracks.
    #[serde(default)]
    pub favorites: Vec<ProductId>,
    /// Listings the user is presented as the seller of.
    #[serde(default)]
    pub listings: Vec<Product>,
}

impl UserProfile {
    /// The hardcoded demo profile, with listings drawn from the sample
    /// catalog by matching the seller name.
    #[must_use]
    pub fn demo_default() -> Self {
        let name = "Jan Kowalski".to_owned();
        let listings = crate::catalog::sample_products()
            .into_iter()
            .filter(|p| p.seller.name == name)
            .collect();

        Self {
            name,
            email: "jan.kowalski@example.com".to_owned(),
            phone: "+48 123 456 789".to_owned(),
            location: "Warszawa".to_owned(),
            avatar: "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=200".to_owned(),
            favorites: Vec::new(),
            listings,
        }
    }

    /// Shallow-merge `update` over this profile: only fields present in the
    /// update are replaced.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(avatar) = update.avatar {
            self.avatar = avatar;
        }
        if let Some(favorites) = update.favorites {
            self.favorites = favorites;
        }
        if let Some(listings) = update.listings {
            self.listings = listings;
        }
    }
}

/// A partial profile update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub avatar: Option<String>,
    pub favorites: Option<Vec<ProductId>>,
    pub listings: Option<Vec<Product>>,
}

/// Versioned storage envelope for the profile blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredProfile {
    /// Schema version; blobs written before versioning parse as version 0.
    #[serde(default)]
    pub version: u32,
    /// The profile itself, flattened into the same object.
    #[serde(flatten)]
    pub profile: UserProfile,
}

impl StoredProfile {
    /// Wrap a profile for persistence at the current schema version.
    #[must_use]
    pub fn wrap(profile: UserProfile) -> Self {
        Self {
            version: PROFILE_SCHEMA_VERSION,
            profile,
        }
    }
}

//! Client-side routes.
//!
//! Navigation is purely client-side; no server round-trip. Unmatched paths
//! resolve to the catalog home.

use bazarek_core::ProductId;

/// A navigable view in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Catalog home with filters.
    #[default]
    Home,
    /// Login form.
    Login,
    /// Registration form.
    Register,
    /// Product detail by id.
    Product(ProductId),
    /// Account page (tabbed: profile, listings, favorites, orders).
    Account,
    /// Checkout flow (cart → payment → confirmation).
    Checkout,
    /// Accessibility settings.
    Settings,
    /// Favorites list.
    Favorites,
}

impl Route {
    /// Resolve a path to a route. Unmatched paths redirect to [`Route::Home`].
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_start_matches('/').trim_end_matches('/');
        match trimmed {
            "" => Self::Home,
            "login" => Self::Login,
            "register" => Self::Register,
            "account" => Self::Account,
            "checkout" => Self::Checkout,
            "settings" => Self::Settings,
            "favorites" => Self::Favorites,
            other => other
                .strip_prefix("product/")
                .and_then(|raw| raw.parse::<i32>().ok())
                .map_or(Self::Home, |id| Self::Product(ProductId::new(id))),
        }
    }

    /// The path this route lives at.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Login => "/login".to_owned(),
            Self::Register => "/register".to_owned(),
            Self::Product(id) => format!("/product/{id}"),
            Self::Account => "/account".to_owned(),
            Self::Checkout => "/checkout".to_owned(),
            Self::Settings => "/settings".to_owned(),
            Self::Favorites => "/favorites".to_owned(),
        }
    }
}

//! Accessibility settings state.
//!
//! Font size and contrast are persisted individually under their own keys,
//! and every change is mirrored onto a document-level attribute so global
//! style rules can select on it. The document is abstracted behind
//! [`AttributeSink`] so the store stays testable outside a browser shell.

use std::sync::{Arc, RwLock};

use tracing::debug;

use bazarek_core::{Contrast, FontSize};

use crate::storage::{KeyValueStore, StorageError, keys};

/// Document attribute mirroring the font-size setting.
pub const FONT_SIZE_ATTRIBUTE: &str = "data-font-size";
/// Document attribute mirroring the contrast setting.
pub const CONTRAST_ATTRIBUTE: &str = "data-contrast";

/// Receiver for document-level attribute writes.
pub trait AttributeSink: Send + Sync {
    /// Set `name` to `value` on the document root.
    fn set_attribute(&self, name: &str, value: &str);
}

/// Sink that discards attribute writes; for headless use and tests that
/// don't inspect them.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAttributes;

impl AttributeSink for NoopAttributes {
    fn set_attribute(&self, _name: &str, _value: &str) {}
}

/// Accessibility settings store.
pub struct SettingsStore {
    storage: Arc<dyn KeyValueStore>,
    sink: Arc<dyn AttributeSink>,
    font_size: RwLock<FontSize>,
    contrast: RwLock<Contrast>,
}

impl SettingsStore {
    /// Seed the store from persisted values (unknown values fall back to the
    /// defaults) and mirror both attributes immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    pub fn load(
        storage: Arc<dyn KeyValueStore>,
        sink: Arc<dyn AttributeSink>,
    ) -> Result<Self, StorageError> {
        let font_size = storage
            .get(keys::FONT_SIZE)?
            .map_or_else(FontSize::default, |raw| FontSize::from_stored(&raw));
        let contrast = storage
            .get(keys::CONTRAST)?
            .map_or_else(Contrast::default, |raw| Contrast::from_stored(&raw));

        sink.set_attribute(FONT_SIZE_ATTRIBUTE, font_size.as_str());
        sink.set_attribute(CONTRAST_ATTRIBUTE, contrast.as_str());

        Ok(Self {
            storage,
            sink,
            font_size: RwLock::new(font_size),
            contrast: RwLock::new(contrast),
        })
    }

    /// Current font size.
    #[must_use]
    pub fn font_size(&self) -> FontSize {
        *self
            .font_size
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Current contrast.
    #[must_use]
    pub fn contrast(&self) -> Contrast {
        *self
            .contrast
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Set and persist the font size, mirroring the document attribute.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted.
    pub fn set_font_size(&self, value: FontSize) -> Result<(), StorageError> {
        *self
            .font_size
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = value;
        self.storage.set(keys::FONT_SIZE, value.as_str())?;
        self.sink.set_attribute(FONT_SIZE_ATTRIBUTE, value.as_str());
        debug!(value = value.as_str(), "font size changed");
        Ok(())
    }

    /// Set and persist the contrast, mirroring the document attribute.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted.
    pub fn set_contrast(&self, value: Contrast) -> Result<(), StorageError> {
        *self
            .contrast
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = value;
        self.storage.set(keys::CONTRAST, value.as_str())?;
        self.sink.set_attribute(CONTRAST_ATTRIBUTE, value.as_str());
        debug!(value = value.as_str(), "contrast changed");
        Ok(())
    }
}

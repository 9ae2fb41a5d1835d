//! Translation store: the selected locale plus table lookup.
//!
//! The store is an owned object, shared by `Arc` with every component that
//! renders text. `set_locale` is the single write path.

use crate::i18n::{Locale, LookupMetrics, TranslationKey};
use std::sync::{PoisonError, RwLock};
use tracing::{debug, info};

#[derive(Debug)]
pub struct TranslationStore {
    locale: RwLock<Locale>,
    metrics: LookupMetrics,
}

impl TranslationStore {
    /// Create a store with an explicit initial locale.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale: RwLock::new(locale),
            metrics: LookupMetrics::new(),
        }
    }

    /// Create a store whose initial locale is detected from a language tag.
    pub fn detect(tag: Option<&str>) -> Self {
        let locale = Locale::detect(tag);
        info!("Initial locale {} (from tag {:?})", locale, tag);
        Self::new(locale)
    }

    /// Get the currently selected locale.
    pub fn locale(&self) -> Locale {
        *self.locale.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Overwrite the selected locale.
    pub fn set_locale(&self, locale: Locale) {
        let mut current = self.locale.write().unwrap_or_else(PoisonError::into_inner);
        if *current != locale {
            info!("Locale changed: {} -> {}", *current, locale);
        }
        *current = locale;
    }

    /// Look up a key in the current locale.
    ///
    /// A partial entry (empty string for the current locale) returns the
    /// key's wire name instead.
    pub fn translate(&self, key: TranslationKey) -> &'static str {
        self.metrics.record_lookup();
        self.text_for(key, self.locale())
    }

    /// Look up a key by wire name in the current locale.
    ///
    /// Unknown names are returned verbatim. This never fails.
    pub fn translate_raw(&self, name: &str) -> String {
        self.metrics.record_raw_lookup();
        match TranslationKey::from_name(name) {
            Some(key) => self.text_for(key, self.locale()).to_string(),
            None => {
                debug!("No translation for '{}', using key", name);
                self.metrics.record_fallback();
                name.to_string()
            }
        }
    }

    /// Look up a key in a specific locale without touching the selection.
    pub fn translate_in(&self, key: TranslationKey, locale: Locale) -> &'static str {
        self.metrics.record_lookup();
        self.text_for(key, locale)
    }

    pub fn metrics(&self) -> &LookupMetrics {
        &self.metrics
    }

    fn text_for(&self, key: TranslationKey, locale: Locale) -> &'static str {
        let text = key.text().get(locale);
        if text.is_empty() {
            debug!("Translation '{}' has no {} text, using key", key.name(), locale);
            self.metrics.record_fallback();
            return key.name();
        }
        text
    }
}

impl Default for TranslationStore {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

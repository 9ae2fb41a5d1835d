//! Locale registry: metadata for the supported locales.
//!
//! The registry is static data initialized once through `OnceLock`. It holds
//! descriptive metadata only; the currently selected locale lives in the
//! owned [`TranslationStore`](crate::i18n::TranslationStore).

use crate::i18n::Locale;
use std::sync::OnceLock;

/// Metadata for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    pub locale: Locale,

    /// English name of the language (e.g., "Korean")
    pub name: &'static str,

    /// Name shown in the language switcher (e.g., "한국어")
    pub native_name: &'static str,

    /// Whether this is the fallback locale when detection finds no match
    pub is_default: bool,
}

/// Registry of supported locales.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get the configuration for a locale.
    ///
    /// Every `Locale` variant has an entry; the fallback only guards against
    /// an edit that removes one.
    pub fn config(&self, locale: Locale) -> &LocaleConfig {
        self.locales
            .iter()
            .find(|config| config.locale == locale)
            .unwrap_or_else(|| self.default_config())
    }

    /// Get all locales in switcher order.
    pub fn list(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// Get the locale used when detection finds no match.
    pub fn default_locale(&self) -> Locale {
        self.default_config().locale
    }

    fn default_config(&self) -> &LocaleConfig {
        // default_locales() always marks exactly one entry
        self.locales
            .iter()
            .find(|config| config.is_default)
            .unwrap_or(&self.locales[0])
    }
}

fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            locale: Locale::Ko,
            name: "Korean",
            native_name: "한국어",
            is_default: false,
        },
        LocaleConfig {
            locale: Locale::En,
            name: "English",
            native_name: "English",
            is_default: true,
        },
        LocaleConfig {
            locale: Locale::Ja,
            name: "Japanese",
            native_name: "日本語",
            is_default: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_every_locale_has_config() {
        let registry = LocaleRegistry::get();
        for locale in Locale::ALL {
            assert_eq!(registry.config(locale).locale, locale);
        }
    }

    #[test]
    fn test_exactly_one_default() {
        let registry = LocaleRegistry::get();
        let defaults: Vec<_> = registry.list().iter().filter(|c| c.is_default).collect();
        assert_eq!(defaults.len(), 1);
        assert_eq!(registry.default_locale(), Locale::En);
    }

    #[test]
    fn test_list_order_matches_switcher() {
        let codes: Vec<_> = LocaleRegistry::get()
            .list()
            .iter()
            .map(|c| c.locale.code())
            .collect();
        assert_eq!(codes, vec!["ko", "en", "ja"]);
    }

    #[test]
    fn test_english_names() {
        let registry = LocaleRegistry::get();
        assert_eq!(registry.config(Locale::Ko).name, "Korean");
        assert_eq!(registry.config(Locale::Ja).name, "Japanese");
    }
}

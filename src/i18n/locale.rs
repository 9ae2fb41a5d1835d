//! Locale type: the three display languages of the site.
//!
//! This module provides the `Locale` enum, parsing from switcher codes, and the
//! prefix-based detection used to pick the initial locale from the
//! environment's reported language tag.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ko,
    En,
    Ja,
}

/// Error returned when a language switcher code is not one of the supported locales.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("Unknown locale code: '{0}'")]
    Unknown(String),
}

impl Locale {
    /// All locales in switcher order.
    pub const ALL: [Locale; 3] = [Locale::Ko, Locale::En, Locale::Ja];

    /// Create a Locale from a switcher code ("ko", "en", "ja").
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. Region
    /// suffixes are not accepted here; use [`Locale::detect`] for raw tags.
    pub fn from_code(code: &str) -> Result<Locale, LocaleError> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ko" => Ok(Locale::Ko),
            "en" => Ok(Locale::En),
            "ja" => Ok(Locale::Ja),
            _ => Err(LocaleError::Unknown(code.to_string())),
        }
    }

    /// Pick the initial locale from an environment language tag.
    ///
    /// The tag is lower-cased and tested for a `ko` prefix, then a `ja`
    /// prefix. Anything else, including a missing tag, yields English.
    ///
    /// ```ignore
    /// assert_eq!(Locale::detect(Some("ko_KR.UTF-8")), Locale::Ko);
    /// assert_eq!(Locale::detect(Some("fr-FR")), Locale::En);
    /// ```
    pub fn detect(tag: Option<&str>) -> Locale {
        let Some(tag) = tag else {
            return LocaleRegistry::get().default_locale();
        };

        let normalized = tag.trim().to_lowercase();
        if normalized.starts_with("ko") {
            Locale::Ko
        } else if normalized.starts_with("ja") {
            Locale::Ja
        } else {
            LocaleRegistry::get().default_locale()
        }
    }

    /// Get the ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }

    /// Get the registry metadata for this locale.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get().config(*self)
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name shown in the language switcher (e.g., "한국어").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }
}

impl Default for Locale {
    fn default() -> Self {
        LocaleRegistry::get().default_locale()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s)
    }
}

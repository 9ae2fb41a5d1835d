//! Translation table validation.
//!
//! Checks that every entry is populated in all three locales and flags
//! entries that look untranslated (e.g. a Korean string with no Hangul).

use crate::i18n::{Locale, LocalizedText, TranslationKey};
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Entries that break the table invariant (missing locale strings)
    pub errors: Vec<String>,

    /// Entries that are populated but look untranslated
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the translation table.
pub struct TableValidator;

static HANGUL_REGEX: OnceLock<Regex> = OnceLock::new();
static JAPANESE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Keys whose text is a proper name and is meant to be identical everywhere.
const SHARED_KEYS: &[&str] = &["gameTitle"];

impl TableValidator {
    /// Validate the built-in table.
    pub fn validate_table() -> ValidationReport {
        let entries: Vec<(&str, LocalizedText)> = TranslationKey::ALL
            .iter()
            .map(|key| (key.name(), key.text()))
            .collect();
        Self::validate_entries(&entries)
    }

    /// Validate arbitrary `(name, text)` entries.
    ///
    /// Errors: any locale string is empty or whitespace.
    /// Warnings: the Korean string has no Hangul, the Japanese string has no
    /// kana or kanji, or all three strings are identical (unless the key is a
    /// known proper name).
    pub fn validate_entries(entries: &[(&str, LocalizedText)]) -> ValidationReport {
        let mut report = ValidationReport::new();

        for (name, text) in entries {
            let missing: Vec<&str> = Locale::ALL
                .iter()
                .filter(|locale| text.get(**locale).trim().is_empty())
                .map(|locale| locale.code())
                .collect();
            if !missing.is_empty() {
                report.errors.push(format!(
                    "Entry '{}' is missing locales: {:?}",
                    name, missing
                ));
                continue;
            }

            if SHARED_KEYS.contains(name) {
                continue;
            }

            if text.ko == text.en && text.en == text.ja {
                report
                    .warnings
                    .push(format!("Entry '{}' is identical in every locale", name));
                continue;
            }

            if !Self::contains_hangul(text.ko) {
                report.warnings.push(format!(
                    "Entry '{}' has no Hangul in its Korean text: {:?}",
                    name, text.ko
                ));
            }

            if !Self::contains_japanese(text.ja) {
                report.warnings.push(format!(
                    "Entry '{}' has no kana or kanji in its Japanese text: {:?}",
                    name, text.ja
                ));
            }
        }

        report
    }

    fn contains_hangul(text: &str) -> bool {
        let regex = HANGUL_REGEX.get_or_init(|| Regex::new(r"\p{Hangul}").unwrap());
        regex.is_match(text)
    }

    fn contains_japanese(text: &str) -> bool {
        let regex = JAPANESE_REGEX
            .get_or_init(|| Regex::new(r"[\p{Hiragana}\p{Katakana}\p{Han}]").unwrap());
        regex.is_match(text)
    }
}

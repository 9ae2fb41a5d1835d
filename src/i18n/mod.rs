//! Internationalization (i18n) module for the three site locales.
//!
//! # Architecture
//!
//! - `locale`: The `Locale` enum and initial-locale detection
//! - `registry`: Static metadata for each locale (names, default)
//! - `strings`: The translation table, keyed by `TranslationKey`
//! - `store`: `TranslationStore`, the owned selected-locale + lookup object
//! - `validator`: Table completeness and quality checks
//! - `metrics`: Lookup and fallback counters
//!
//! # Example
//!
//! ```rust,ignore
//! use realm_of_shadows::i18n::{TranslationKey, TranslationStore};
//!
//! let store = TranslationStore::detect(Some("ko-KR"));
//! assert_eq!(store.translate(TranslationKey::Home), "홈");
//! assert_eq!(store.translate_raw("nonexistent-key"), "nonexistent-key");
//! ```

mod locale;
mod metrics;
mod registry;
mod store;
mod strings;
mod validator;

pub use locale::{Locale, LocaleError};
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use store::TranslationStore;
pub use strings::{LocalizedText, TranslationKey};
pub use validator::{TableValidator, ValidationReport};

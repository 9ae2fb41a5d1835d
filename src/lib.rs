//! Realm of Shadows pre-registration site.
//!
//! Library crate behind the marketing and pre-registration page: the
//! three-locale translation store, the registration form state machine,
//! the reward milestone tracker, and a terminal front end.

pub mod config;
pub mod console;
pub mod i18n;
pub mod notify;
pub mod registration;
pub mod retry;
pub mod rewards;
pub mod scheduler;

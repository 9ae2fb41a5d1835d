use anyhow::{Context, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Locale
    /// Explicit language tag; falls back to the POSIX locale variables
    pub language_tag: Option<String>,

    // Registration
    pub submit_latency: Duration,
    pub success_display: Duration,
    pub submit_max_attempts: u32,

    // Rewards
    pub initial_registrations: u64,
    pub registration_tick: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Locale
            language_tag: language_tag_from_env(),

            // Registration
            submit_latency: Duration::from_millis(parse_var("SUBMIT_LATENCY_MS", 2000)?),
            success_display: Duration::from_millis(parse_var("SUCCESS_DISPLAY_MS", 3000)?),
            submit_max_attempts: parse_var("SUBMIT_MAX_ATTEMPTS", 3)?,

            // Rewards
            initial_registrations: parse_var("INITIAL_REGISTRATIONS", 127_500)?,
            registration_tick: Duration::from_secs(parse_var("REGISTRATION_TICK_SECS", 5)?),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language_tag: None,
            submit_latency: Duration::from_millis(2000),
            success_display: Duration::from_millis(3000),
            submit_max_attempts: 3,
            initial_registrations: 127_500,
            registration_tick: Duration::from_secs(5),
        }
    }
}

/// First non-empty of `SITE_LANGUAGE`, `LC_ALL`, `LC_MESSAGES`, `LANG`.
fn language_tag_from_env() -> Option<String> {
    ["SITE_LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}

/// Parse an optional variable, using `default` when unset.
///
/// A variable that is set but malformed is an error rather than a silent default.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} is not valid: {:?}", name, value)),
        Err(_) => Ok(default),
    }
}

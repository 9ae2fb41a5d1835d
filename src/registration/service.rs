//! Registration backend collaborator.
//!
//! The form talks to the backend only through [`RegistrationService`], so the
//! simulated backend can be swapped for a real client without touching the
//! state machine.

use crate::i18n::Locale;
use crate::registration::{validate, Character, FieldErrors, RegistrationDraft};
use crate::retry::{retry_transient, RetryConfig};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

/// Why a registration attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// Backend could not be reached or is overloaded
    #[error("registration service unavailable: {0}")]
    Unavailable(String),

    /// Backend refused this registration (e.g., duplicate email)
    #[error("registration rejected: {0}")]
    Rejected(String),

    #[error("registration timed out after {0:?}")]
    TimedOut(Duration),
}

impl SubmissionError {
    /// Whether repeating the same request could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            SubmissionError::Unavailable(_) | SubmissionError::TimedOut(_)
        )
    }
}

/// A validated registration, as sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub email: String,
    pub nickname: String,
    pub preferred_character: Character,
    /// Locale selected when the form was submitted, for follow-up emails
    pub locale: Locale,
}

impl RegistrationRequest {
    /// Build a request from a draft, or return the draft's field errors.
    pub fn from_draft(draft: &RegistrationDraft, locale: Locale) -> Result<Self, FieldErrors> {
        let errors = validate(draft);
        match (errors.is_empty(), draft.preferred_character) {
            (true, Some(preferred_character)) => Ok(Self {
                email: draft.email.clone(),
                nickname: draft.nickname.clone(),
                preferred_character,
                locale,
            }),
            _ => Err(errors),
        }
    }
}

/// Confirmation returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationReceipt {
    pub nickname: String,
    pub preferred_character: Character,
    pub registered_at: DateTime<Utc>,
}

#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Register a validated request. Never panics; failures are typed.
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationReceipt, SubmissionError>;
}

pub type SharedRegistrationService = Arc<dyn RegistrationService>;

/// Backend stand-in: waits for a fixed latency, then succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedRegistrationService {
    latency: Duration,
}

impl SimulatedRegistrationService {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl RegistrationService for SimulatedRegistrationService {
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationReceipt, SubmissionError> {
        debug!(
            "Simulating registration for {} ({:?})",
            request.nickname, self.latency
        );
        sleep(self.latency).await;

        Ok(RegistrationReceipt {
            nickname: request.nickname.clone(),
            preferred_character: request.preferred_character,
            registered_at: Utc::now(),
        })
    }
}

/// Wraps a service and retries transient failures with backoff.
pub struct RetryingRegistrationService<S> {
    inner: S,
    config: RetryConfig,
}

impl<S: RegistrationService> RetryingRegistrationService<S> {
    pub fn new(inner: S, config: RetryConfig) -> Self {
        Self { inner, config }
    }
}

#[async_trait]
impl<S: RegistrationService> RegistrationService for RetryingRegistrationService<S> {
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationReceipt, SubmissionError> {
        let receipt =
            retry_transient(&self.config, "Registration", || self.inner.register(request)).await?;

        info!("Registration accepted for {}", receipt.nickname);
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Fails with the given errors in order, then succeeds.
    struct FlakyService {
        failures: Vec<SubmissionError>,
        calls: AtomicU32,
    }

    #[async_trait]
    impl RegistrationService for FlakyService {
        async fn register(
            &self,
            request: &RegistrationRequest,
        ) -> Result<RegistrationReceipt, SubmissionError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) as usize;
            if let Some(error) = self.failures.get(call) {
                return Err(error.clone());
            }
            Ok(RegistrationReceipt {
                nickname: request.nickname.clone(),
                preferred_character: request.preferred_character,
                registered_at: Utc::now(),
            })
        }
    }

    fn request() -> RegistrationRequest {
        RegistrationRequest::from_draft(
            &RegistrationDraft::new("a@b.c", "Al", "blood-mage"),
            Locale::Ko,
        )
        .unwrap()
    }

    #[test]
    fn test_from_draft_valid() {
        let request = request();
        assert_eq!(request.email, "a@b.c");
        assert_eq!(request.preferred_character, Character::BloodMage);
        assert_eq!(request.locale, Locale::Ko);
    }

    #[test]
    fn test_from_draft_invalid_returns_errors() {
        let errors =
            RegistrationRequest::from_draft(&RegistrationDraft::default(), Locale::En).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let json = serde_json::to_value(request()).unwrap();
        assert_eq!(json["preferredCharacter"], "blood-mage");
        assert_eq!(json["locale"], "ko");
    }

    #[test]
    fn test_transient_classification() {
        assert!(SubmissionError::Unavailable("503".into()).is_transient());
        assert!(SubmissionError::TimedOut(Duration::from_secs(1)).is_transient());
        assert!(!SubmissionError::Rejected("duplicate".into()).is_transient());
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_service_waits_then_succeeds() {
        let service = SimulatedRegistrationService::new(Duration::from_secs(2));
        let start = tokio::time::Instant::now();

        let receipt = service.register(&request()).await.unwrap();

        assert!(start.elapsed() >= Duration::from_secs(2));
        assert_eq!(receipt.nickname, "Al");
        assert_eq!(receipt.preferred_character, Character::BloodMage);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retrying_service_retries_transient() {
        let inner = FlakyService {
            failures: vec![SubmissionError::Unavailable("503".into())],
            calls: AtomicU32::new(0),
        };
        let service = RetryingRegistrationService::new(inner, RetryConfig::registration());

        let receipt = service.register(&request()).await;

        assert!(receipt.is_ok());
        assert_eq!(service.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retrying_service_stops_on_rejection() {
        let inner = FlakyService {
            failures: vec![SubmissionError::Rejected("duplicate email".into())],
            calls: AtomicU32::new(0),
        };
        let service = RetryingRegistrationService::new(inner, RetryConfig::registration());

        let result = service.register(&request()).await;

        assert_eq!(
            result.unwrap_err(),
            SubmissionError::Rejected("duplicate email".into())
        );
        assert_eq!(service.inner.calls.load(Ordering::SeqCst), 1);
    }
}

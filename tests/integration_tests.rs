//! Integration tests for the pre-registration site
//!
//! These tests drive the translation store, the form state machine and the
//! collaborators together through the public API, with tokio's clock paused
//! so timer-driven transitions are deterministic.

use async_trait::async_trait;
use realm_of_shadows::i18n::{Locale, TableValidator, TranslationKey, TranslationStore};
use realm_of_shadows::notify::{Notice, NoticeLevel, RecordingNotifier};
use realm_of_shadows::registration::{
    validate, Field, FieldError, PreRegistrationForm, RegistrationDraft, RegistrationReceipt,
    RegistrationRequest, RegistrationService, RetryingRegistrationService,
    SimulatedRegistrationService, SubmissionError, SubmissionState, SubmitOutcome,
};
use realm_of_shadows::retry::RetryConfig;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tokio_test::{assert_err, assert_ok};

// ==================== Test Helpers ====================

const LATENCY: Duration = Duration::from_secs(2);
const DISPLAY: Duration = Duration::from_secs(3);

/// Wraps the simulated backend and counts calls.
struct CountingBackend {
    inner: SimulatedRegistrationService,
    calls: AtomicU32,
}

#[async_trait]
impl RegistrationService for CountingBackend {
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationReceipt, SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.register(request).await
    }
}

/// Always unavailable.
struct DownBackend {
    calls: AtomicU32,
}

#[async_trait]
impl RegistrationService for DownBackend {
    async fn register(
        &self,
        _request: &RegistrationRequest,
    ) -> Result<RegistrationReceipt, SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(SubmissionError::Unavailable("connection refused".to_string()))
    }
}

fn counting_backend() -> Arc<CountingBackend> {
    Arc::new(CountingBackend {
        inner: SimulatedRegistrationService::new(LATENCY),
        calls: AtomicU32::new(0),
    })
}

fn fill(form: &PreRegistrationForm, email: &str, nickname: &str, character: &str) {
    form.set_field(Field::Email, email);
    form.set_field(Field::Nickname, nickname);
    form.set_field(Field::PreferredCharacter, character);
}

// ==================== Translation Store Tests ====================

#[test]
fn test_table_is_complete_and_clean() {
    let report = TableValidator::validate_table();
    assert!(!report.has_errors(), "{:?}", report.errors);
    assert!(!report.has_warnings(), "{:?}", report.warnings);
}

#[test]
fn test_unknown_key_returns_key_in_every_locale() {
    let store = TranslationStore::default();
    for locale in Locale::ALL {
        store.set_locale(locale);
        assert_eq!(store.translate_raw("nonexistent-key"), "nonexistent-key");
    }
}

#[test]
fn test_raw_and_typed_lookups_agree() {
    let store = TranslationStore::new(Locale::Ko);
    for key in TranslationKey::ALL {
        assert_eq!(store.translate_raw(key.name()), store.translate(*key));
    }
}

#[test]
fn test_detection_and_switching() {
    let store = TranslationStore::detect(Some("ja-JP"));
    assert_eq!(store.translate(TranslationKey::SubmitRegistration), "事前登録完了");

    store.set_locale(Locale::En);
    assert_eq!(
        store.translate(TranslationKey::SubmitRegistration),
        "Complete Registration"
    );
}

// ==================== Validation Tests ====================

#[test]
fn test_validation_properties() {
    let empty = validate(&RegistrationDraft::new("", "", ""));
    assert_eq!(empty.len(), 3);
    assert!(empty.iter().all(|(_, e)| e == FieldError::Required));

    assert!(validate(&RegistrationDraft::new("a@b.c", "Al", "dark-knight")).is_empty());

    let bad_email = validate(&RegistrationDraft::new("bad-email", "Al", "dark-knight"));
    assert_eq!(bad_email.len(), 1);
    assert_eq!(bad_email.email, Some(FieldError::InvalidFormat));

    for (nickname, ok) in [
        ("x".to_string(), false),
        ("x".repeat(21), false),
        ("xx".to_string(), true),
        ("x".repeat(20), true),
    ] {
        let errors = validate(&RegistrationDraft::new("a@b.c", &nickname, "dark-knight"));
        assert_eq!(errors.nickname.is_none(), ok, "nickname of {} chars", nickname.len());
        if !ok {
            assert!(matches!(
                errors.nickname,
                Some(FieldError::LengthOutOfRange { min: 2, max: 20 })
            ));
        }
    }
}

// ==================== Form Flow Tests ====================

#[tokio::test(start_paused = true)]
async fn test_valid_submission_cycle() {
    let backend = counting_backend();
    let notifier = Arc::new(RecordingNotifier::new());
    let form = PreRegistrationForm::new(
        Arc::new(TranslationStore::new(Locale::Ko)),
        backend.clone(),
        notifier.clone(),
        DISPLAY,
    );
    fill(&form, "a@b.c", "Al", "dark-knight");

    let (outcome, during) = tokio::join!(form.submit(), async {
        sleep(LATENCY / 2).await;
        form.state()
    });

    assert_eq!(during, SubmissionState::Submitting);
    assert!(matches!(outcome, Ok(SubmitOutcome::Submitted(_))));
    assert_eq!(form.state(), SubmissionState::Submitted);
    assert_eq!(
        notifier.notices(),
        vec![Notice::success("사전예약이 완료되었습니다!")]
    );

    sleep(DISPLAY + Duration::from_millis(1)).await;
    let snapshot = form.snapshot();
    assert_eq!(snapshot.state, SubmissionState::Editing);
    assert!(snapshot.draft.is_empty());
    assert!(snapshot.errors.is_empty());
    assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_double_submit_calls_backend_once() {
    let backend = counting_backend();
    let form = PreRegistrationForm::new(
        Arc::new(TranslationStore::default()),
        backend.clone(),
        Arc::new(RecordingNotifier::new()),
        DISPLAY,
    );
    fill(&form, "a@b.c", "Al", "blood-mage");

    let (first, second) = tokio::join!(form.submit(), async {
        sleep(Duration::from_millis(10)).await;
        let state = form.state();
        (state, form.submit().await)
    });

    assert_ok!(first);
    assert_eq!(second, (SubmissionState::Submitting, Ok(SubmitOutcome::Ignored)));
    assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_draft_never_reaches_backend() {
    let backend = counting_backend();
    let form = PreRegistrationForm::new(
        Arc::new(TranslationStore::default()),
        backend.clone(),
        Arc::new(RecordingNotifier::new()),
        DISPLAY,
    );
    fill(&form, "bad-email", "Al", "shadow-archer");

    let outcome = assert_ok!(form.submit().await);

    match outcome {
        SubmitOutcome::Rejected(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.email, Some(FieldError::InvalidFormat));
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
    assert_eq!(form.state(), SubmissionState::Editing);
    assert_eq!(
        form.field_message(Field::Email),
        Some("Please enter a valid email address.")
    );
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_unavailable_backend_is_retried_then_reported() {
    let backend = Arc::new(DownBackend {
        calls: AtomicU32::new(0),
    });

    struct Shared(Arc<DownBackend>);

    #[async_trait]
    impl RegistrationService for Shared {
        async fn register(
            &self,
            request: &RegistrationRequest,
        ) -> Result<RegistrationReceipt, SubmissionError> {
            self.0.register(request).await
        }
    }

    let notifier = Arc::new(RecordingNotifier::new());
    let form = PreRegistrationForm::new(
        Arc::new(TranslationStore::new(Locale::En)),
        Arc::new(RetryingRegistrationService::new(
            Shared(backend.clone()),
            RetryConfig::registration(),
        )),
        notifier.clone(),
        DISPLAY,
    );
    fill(&form, "a@b.c", "Al", "dark-knight");

    let error = assert_err!(form.submit().await);

    assert!(error.is_transient());
    assert_eq!(backend.calls.load(Ordering::SeqCst), 3);

    let snapshot = form.snapshot();
    assert_eq!(snapshot.state, SubmissionState::Editing);
    assert_eq!(snapshot.draft.nickname, "Al");

    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert_eq!(notices[0].message, "An error occurred. Please try again.");
}

#[tokio::test(start_paused = true)]
async fn test_notice_follows_locale_at_completion() {
    let store = Arc::new(TranslationStore::new(Locale::En));
    let notifier = Arc::new(RecordingNotifier::new());
    let form = PreRegistrationForm::new(
        store.clone(),
        counting_backend(),
        notifier.clone(),
        DISPLAY,
    );
    fill(&form, "a@b.c", "Al", "dark-knight");

    let (outcome, _) = tokio::join!(form.submit(), async {
        sleep(LATENCY / 2).await;
        store.set_locale(Locale::Ja);
    });

    assert_ok!(outcome);
    assert_eq!(notifier.notices()[0].message, "事前登録が完了しました！");
}

#[tokio::test(start_paused = true)]
async fn test_abandoned_submit_can_be_retried() {
    let backend = counting_backend();
    let notifier = Arc::new(RecordingNotifier::new());
    let form = PreRegistrationForm::new(
        Arc::new(TranslationStore::new(Locale::En)),
        backend.clone(),
        notifier.clone(),
        DISPLAY,
    );
    fill(&form, "a@b.c", "Al", "dark-knight");

    assert!(tokio::time::timeout(Duration::from_millis(500), form.submit())
        .await
        .is_err());
    sleep(Duration::from_secs(60)).await;

    assert_eq!(form.state(), SubmissionState::Editing);
    assert!(notifier.notices().is_empty());

    let outcome = assert_ok!(form.submit().await);
    assert!(matches!(outcome, SubmitOutcome::Submitted(_)));
    assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
}

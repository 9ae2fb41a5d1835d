//! The pre-registration form state machine.
//!
//! ```text
//! editing --(validate ok, submit)--> submitting --(backend ok)--> submitted --(timeout)--> editing
//! editing --(validate fails)--> editing (errors attached)
//! submitting --(backend error)--> editing (draft intact)
//! ```

use crate::i18n::{TranslationKey, TranslationStore};
use crate::notify::{Notice, SharedNotifier};
use crate::registration::{
    Field, FieldErrors, RegistrationDraft, RegistrationReceipt, RegistrationRequest,
    SharedRegistrationService, SubmissionError,
};
use crate::scheduler::{ScheduledTask, Scheduler};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Where the form is in its submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Editing,
    Submitting,
    Submitted,
}

/// Result of a submit action that did not fail at the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Backend accepted; the success view is showing
    Submitted(RegistrationReceipt),
    /// Validation failed; errors are attached to the form
    Rejected(FieldErrors),
    /// A submission is already in flight or showing success
    Ignored,
}

/// Read-only view of the form for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub state: SubmissionState,
    pub draft: RegistrationDraft,
    pub errors: FieldErrors,
}

#[derive(Debug)]
struct FormInner {
    state: SubmissionState,
    draft: RegistrationDraft,
    errors: FieldErrors,
    /// Bumped on every successful submission so a stale revert is a no-op
    generation: u64,
    revert: Option<ScheduledTask>,
}

impl FormInner {
    fn new() -> Self {
        Self {
            state: SubmissionState::Editing,
            draft: RegistrationDraft::default(),
            errors: FieldErrors::default(),
            generation: 0,
            revert: None,
        }
    }
}

fn lock(inner: &Mutex<FormInner>) -> MutexGuard<'_, FormInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Held while the backend call is in flight.
///
/// If the submit future is dropped before completing, the form goes back to
/// `Editing` with the draft intact.
struct InFlight<'a> {
    inner: &'a Mutex<FormInner>,
    armed: bool,
}

impl<'a> InFlight<'a> {
    fn new(inner: &'a Mutex<FormInner>) -> Self {
        Self { inner, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut inner = lock(self.inner);
        if inner.state == SubmissionState::Submitting {
            inner.state = SubmissionState::Editing;
            warn!("Submission abandoned before the backend answered; form editable again");
        }
    }
}

pub struct PreRegistrationForm {
    inner: Arc<Mutex<FormInner>>,
    store: Arc<TranslationStore>,
    service: SharedRegistrationService,
    notifier: SharedNotifier,
    scheduler: Scheduler,
    success_display: Duration,
}

impl PreRegistrationForm {
    pub fn new(
        store: Arc<TranslationStore>,
        service: SharedRegistrationService,
        notifier: SharedNotifier,
        success_display: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FormInner::new())),
            store,
            service,
            notifier,
            scheduler: Scheduler::new(),
            success_display,
        }
    }

    pub fn state(&self) -> SubmissionState {
        lock(&self.inner).state
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let inner = lock(&self.inner);
        FormSnapshot {
            state: inner.state,
            draft: inner.draft.clone(),
            errors: inner.errors.clone(),
        }
    }

    /// Apply user input to one field and clear that field's error.
    ///
    /// Returns `false` (and changes nothing) while the success view is showing.
    pub fn set_field(&self, field: Field, value: &str) -> bool {
        let mut inner = lock(&self.inner);
        if inner.state == SubmissionState::Submitted {
            debug!("Ignoring {:?} input while success view is showing", field);
            return false;
        }
        inner.draft.set(field, value);
        inner.errors.clear(field);
        true
    }

    /// Localized inline message for a field's current error, if any.
    pub fn field_message(&self, field: Field) -> Option<&'static str> {
        let error = lock(&self.inner).errors.get(field)?;
        Some(self.store.translate(error.message_key(field)))
    }

    /// Validate and submit the current draft.
    ///
    /// Only one submission runs at a time: while `Submitting` or `Submitted`
    /// this returns `Ignored` without calling the backend. On backend failure
    /// the form returns to `Editing` with the draft intact, an error notice is
    /// pushed, and the error is returned.
    pub async fn submit(&self) -> Result<SubmitOutcome, SubmissionError> {
        let request = {
            let mut inner = lock(&self.inner);
            if inner.state != SubmissionState::Editing {
                debug!("Submit ignored in state {:?}", inner.state);
                return Ok(SubmitOutcome::Ignored);
            }

            match RegistrationRequest::from_draft(&inner.draft, self.store.locale()) {
                Ok(request) => {
                    inner.errors = FieldErrors::default();
                    inner.state = SubmissionState::Submitting;
                    request
                }
                Err(errors) => {
                    info!("Submit rejected with {} field error(s)", errors.len());
                    inner.errors = errors.clone();
                    return Ok(SubmitOutcome::Rejected(errors));
                }
            }
        };

        info!(
            "Submitting registration for {} ({})",
            request.nickname, request.preferred_character
        );
        let in_flight = InFlight::new(&self.inner);
        let result = self.service.register(&request).await;
        in_flight.disarm();

        match result {
            Ok(receipt) => {
                self.enter_submitted();
                match serde_json::to_string(&receipt) {
                    Ok(json) => info!("Registration complete: {}", json),
                    Err(e) => warn!(
                        "Registration complete for {}; receipt not serializable: {}",
                        receipt.nickname, e
                    ),
                }
                self.notifier.notify(Notice::success(
                    self.store.translate(TranslationKey::RegistrationSuccess),
                ));
                Ok(SubmitOutcome::Submitted(receipt))
            }
            Err(e) => {
                lock(&self.inner).state = SubmissionState::Editing;
                warn!("Registration failed: {}", e);
                self.notifier.notify(Notice::error(
                    self.store.translate(TranslationKey::RegistrationError),
                ));
                Err(e)
            }
        }
    }

    /// Move to `Submitted` and schedule the revert to an empty `Editing` form.
    fn enter_submitted(&self) {
        let mut inner = lock(&self.inner);
        inner.state = SubmissionState::Submitted;
        inner.generation += 1;

        let generation = inner.generation;
        let weak: Weak<Mutex<FormInner>> = Arc::downgrade(&self.inner);
        let task = self
            .scheduler
            .schedule_once("form-reset", self.success_display, move || async move {
                if let Some(inner) = weak.upgrade() {
                    revert_to_editing(&inner, generation);
                }
            });

        if let Some(previous) = inner.revert.replace(task) {
            previous.cancel();
        }
    }
}

fn revert_to_editing(inner: &Mutex<FormInner>, generation: u64) {
    let mut inner = lock(inner);
    if inner.state != SubmissionState::Submitted || inner.generation != generation {
        debug!("Stale form reset skipped");
        return;
    }
    inner.state = SubmissionState::Editing;
    inner.draft = RegistrationDraft::default();
    inner.errors = FieldErrors::default();
    inner.revert = None;
    info!("Form reset after success display");
}

//! Pre-registration: draft data, validation, the backend collaborator and
//! the form state machine.

mod draft;
mod form;
mod service;
mod validation;

pub use draft::{
    Character, CharacterError, Field, FieldError, FieldErrors, RegistrationDraft,
};
pub use form::{FormSnapshot, PreRegistrationForm, SubmissionState, SubmitOutcome};
pub use service::{
    RegistrationReceipt, RegistrationRequest, RegistrationService, RetryingRegistrationService,
    SharedRegistrationService, SimulatedRegistrationService, SubmissionError,
};
pub use validation::{validate, NICKNAME_MAX_CHARS, NICKNAME_MIN_CHARS};

//! Field validation for registration drafts.

use crate::registration::{Field, FieldError, FieldErrors, RegistrationDraft};
use regex::Regex;
use std::sync::OnceLock;

/// Inclusive nickname length bounds, in characters.
pub const NICKNAME_MIN_CHARS: usize = 2;
pub const NICKNAME_MAX_CHARS: usize = 20;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Validate every field of a draft.
///
/// Rules are evaluated independently, so an all-empty draft reports all
/// three fields.
pub fn validate(draft: &RegistrationDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if let Some(error) = validate_email(&draft.email) {
        errors.set(Field::Email, error);
    }
    if let Some(error) = validate_nickname(&draft.nickname) {
        errors.set(Field::Nickname, error);
    }
    if draft.preferred_character.is_none() {
        errors.set(Field::PreferredCharacter, FieldError::Required);
    }

    errors
}

/// Minimal structural check: `local@domain.tld` with no whitespace or extra `@`.
fn validate_email(email: &str) -> Option<FieldError> {
    if email.is_empty() {
        return Some(FieldError::Required);
    }

    let regex = EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
    if regex.is_match(email) {
        None
    } else {
        Some(FieldError::InvalidFormat)
    }
}

fn validate_nickname(nickname: &str) -> Option<FieldError> {
    if nickname.is_empty() {
        return Some(FieldError::Required);
    }

    let chars = nickname.chars().count();
    if (NICKNAME_MIN_CHARS..=NICKNAME_MAX_CHARS).contains(&chars) {
        None
    } else {
        Some(FieldError::LengthOutOfRange {
            min: NICKNAME_MIN_CHARS,
            max: NICKNAME_MAX_CHARS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn valid_draft() -> RegistrationDraft {
        RegistrationDraft::new("a@b.c", "Al", "dark-knight")
    }

    const OUT_OF_RANGE: FieldError = FieldError::LengthOutOfRange {
        min: NICKNAME_MIN_CHARS,
        max: NICKNAME_MAX_CHARS,
    };

    #[test]
    fn test_empty_draft_reports_every_field() {
        let errors = validate(&RegistrationDraft::new("", "", ""));
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.email, Some(FieldError::Required));
        assert_eq!(errors.nickname, Some(FieldError::Required));
        assert_eq!(errors.preferred_character, Some(FieldError::Required));
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn test_bad_email_only_error() {
        let draft = RegistrationDraft {
            email: "bad-email".to_string(),
            ..valid_draft()
        };
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.email, Some(FieldError::InvalidFormat));
    }

    #[test]
    fn test_email_shapes() {
        for bad in ["a@b", "a b@c.d", "a@@b.c", "@b.c", "a@.c", "a@b.", " a@b.c"] {
            assert_eq!(
                validate_email(bad),
                Some(FieldError::InvalidFormat),
                "{:?} should be rejected",
                bad
            );
        }
        for good in ["a@b.c", "first.last@example.co.kr", "유저@예시.한국"] {
            assert_eq!(validate_email(good), None, "{:?} should pass", good);
        }
    }

    #[test]
    fn test_nickname_boundaries() {
        assert_eq!(validate_nickname("x"), Some(OUT_OF_RANGE));
        assert_eq!(validate_nickname(&"x".repeat(21)), Some(OUT_OF_RANGE));
        assert_eq!(validate_nickname("xx"), None);
        assert_eq!(validate_nickname(&"x".repeat(20)), None);
    }

    #[test]
    fn test_nickname_counts_characters_not_bytes() {
        // 20 Hangul syllables are 60 bytes
        assert_eq!(validate_nickname(&"가".repeat(20)), None);
        assert_eq!(validate_nickname(&"闇".repeat(21)), Some(OUT_OF_RANGE));
        assert_eq!(validate_nickname("闇"), Some(OUT_OF_RANGE));
    }

    #[test]
    fn test_unknown_character_is_required() {
        let draft = RegistrationDraft::new("a@b.c", "Al", "necromancer");
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.preferred_character, Some(FieldError::Required));
    }

    proptest! {
        #[test]
        fn prop_nickname_in_range_is_accepted(name in "[a-zA-Z0-9가-힣]{2,20}") {
            prop_assert_eq!(validate_nickname(&name), None);
        }

        #[test]
        fn prop_nickname_too_long_is_rejected(name in "[a-zA-Z0-9가-힣]{21,40}") {
            prop_assert_eq!(validate_nickname(&name), Some(OUT_OF_RANGE));
        }

        #[test]
        fn prop_email_with_whitespace_is_rejected(local in "[a-z]{1,8}", domain in "[a-z]{1,8}") {
            let email = format!("{} {}@{}.com", local, local, domain);
            prop_assert_eq!(validate_email(&email), Some(FieldError::InvalidFormat));
        }

        #[test]
        fn prop_validate_never_panics(email in ".*", nickname in ".*", character in ".*") {
            let errors = validate(&RegistrationDraft::new(&email, &nickname, &character));
            prop_assert!(errors.len() <= 3);
        }
    }
}

//! Draft data for the pre-registration form.

use crate::i18n::TranslationKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A playable character offered in the showcase and the form's selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Character {
    DarkKnight,
    BloodMage,
    ShadowArcher,
}

impl Character {
    /// All characters in showcase order.
    pub const ALL: [Character; 3] = [
        Character::DarkKnight,
        Character::BloodMage,
        Character::ShadowArcher,
    ];

    /// Identifier used by the selector (e.g., "dark-knight").
    pub fn id(&self) -> &'static str {
        match self {
            Character::DarkKnight => "dark-knight",
            Character::BloodMage => "blood-mage",
            Character::ShadowArcher => "shadow-archer",
        }
    }

    /// Parse a selector identifier. Unknown identifiers yield `None`.
    pub fn from_id(id: &str) -> Option<Character> {
        Character::ALL.into_iter().find(|c| c.id() == id.trim())
    }

    pub fn name_key(&self) -> TranslationKey {
        match self {
            Character::DarkKnight => TranslationKey::DarkKnight,
            Character::BloodMage => TranslationKey::BloodMage,
            Character::ShadowArcher => TranslationKey::ShadowArcher,
        }
    }

    pub fn description_key(&self) -> TranslationKey {
        match self {
            Character::DarkKnight => TranslationKey::DarkKnightDesc,
            Character::BloodMage => TranslationKey::BloodMageDesc,
            Character::ShadowArcher => TranslationKey::ShadowArcherDesc,
        }
    }

    pub fn role_key(&self) -> TranslationKey {
        match self {
            Character::DarkKnight => TranslationKey::RoleTank,
            Character::BloodMage => TranslationKey::RoleDps,
            Character::ShadowArcher => TranslationKey::RoleRangedDps,
        }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CharacterError {
    #[error("Unknown character: '{0}'")]
    Unknown(String),
}

impl FromStr for Character {
    type Err = CharacterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Character::from_id(s).ok_or_else(|| CharacterError::Unknown(s.to_string()))
    }
}

/// A form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Nickname,
    PreferredCharacter,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Email, Field::Nickname, Field::PreferredCharacter];

    /// Label shown next to the input.
    pub fn label_key(&self) -> TranslationKey {
        match self {
            Field::Email => TranslationKey::Email,
            Field::Nickname => TranslationKey::Nickname,
            Field::PreferredCharacter => TranslationKey::PreferredCharacter,
        }
    }

    /// Placeholder shown in an empty input.
    pub fn placeholder_key(&self) -> TranslationKey {
        match self {
            Field::Email => TranslationKey::EmailPlaceholder,
            Field::Nickname => TranslationKey::NicknamePlaceholder,
            Field::PreferredCharacter => TranslationKey::SelectCharacter,
        }
    }
}

/// In-progress form data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationDraft {
    pub email: String,
    pub nickname: String,
    pub preferred_character: Option<Character>,
}

impl RegistrationDraft {
    /// Build a draft from raw input values, as a form submit would see them.
    pub fn new(email: &str, nickname: &str, preferred_character: &str) -> Self {
        Self {
            email: email.to_string(),
            nickname: nickname.to_string(),
            preferred_character: Character::from_id(preferred_character),
        }
    }

    /// Write one field from a raw input value.
    ///
    /// An unrecognized character id clears the selection.
    pub fn set(&mut self, field: Field, value: &str) {
        match field {
            Field::Email => self.email = value.to_string(),
            Field::Nickname => self.nickname = value.to_string(),
            Field::PreferredCharacter => self.preferred_character = Character::from_id(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.nickname.is_empty() && self.preferred_character.is_none()
    }
}

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidFormat,
    LengthOutOfRange { min: usize, max: usize },
}

impl FieldError {
    /// Translation key for the inline message shown under `field`.
    pub fn message_key(&self, field: Field) -> TranslationKey {
        match (self, field) {
            (FieldError::Required, Field::Email) => TranslationKey::EmailRequired,
            (FieldError::Required, Field::Nickname) => TranslationKey::NicknameRequired,
            (FieldError::Required, Field::PreferredCharacter) => TranslationKey::CharacterRequired,
            (FieldError::InvalidFormat, _) => TranslationKey::InvalidEmail,
            (FieldError::LengthOutOfRange { .. }, _) => TranslationKey::InvalidNickname,
        }
    }
}

/// Optional error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<FieldError>,
    pub nickname: Option<FieldError>,
    pub preferred_character: Option<FieldError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Email => self.email,
            Field::Nickname => self.nickname,
            Field::PreferredCharacter => self.preferred_character,
        }
    }

    pub fn set(&mut self, field: Field, error: FieldError) {
        *self.slot(field) = Some(error);
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot(field) = None;
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|error| (field, error)))
    }

    fn slot(&mut self, field: Field) -> &mut Option<FieldError> {
        match field {
            Field::Email => &mut self.email,
            Field::Nickname => &mut self.nickname,
            Field::PreferredCharacter => &mut self.preferred_character,
        }
    }
}

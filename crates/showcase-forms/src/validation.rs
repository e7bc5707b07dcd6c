//! Form Validation
//!
//! Three independent field rules. Every rule always runs, so a result
//! reports all failing fields at once.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde::ser::SerializeStruct;

use crate::{Field, Submission};

/// Minimum password length, in UTF-16 code units
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Regex class body for browser whitespace: Unicode `Zs`, line
/// terminators, tab, vertical tab, form feed and BOM (U+FEFF). Unlike
/// `char::is_whitespace` it excludes NEL (U+0085).
const WHITESPACE_CLASS: &str =
    r"\t\n\v\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^@{WHITESPACE_CLASS}]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is a valid regex")
});

/// Browser whitespace, as stripped by form value trimming
fn is_form_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c != '\u{0085}' && c.is_whitespace())
}

fn trim_form_value(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// A failed field rule. `Display` yields the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error, Serialize)]
#[serde(into = "String")]
pub enum FieldError {
    #[error("Username is required.")]
    UsernameRequired,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Password must be at least 8 characters long.")]
    PasswordTooShort,
}

impl FieldError {
    /// Field this error belongs to
    pub fn field(&self) -> Field {
        match self {
            FieldError::UsernameRequired => Field::Username,
            FieldError::InvalidEmail => Field::Email,
            FieldError::PasswordTooShort => Field::Password,
        }
    }
}

impl From<FieldError> for String {
    fn from(err: FieldError) -> Self {
        err.to_string()
    }
}

/// Per-field outcome of validating a [`Submission`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub username_error: Option<FieldError>,
    pub email_error: Option<FieldError>,
    pub password_error: Option<FieldError>,
}

impl ValidationResult {
    /// True iff no field rule failed
    pub fn is_valid(&self) -> bool {
        self.username_error.is_none() && self.email_error.is_none() && self.password_error.is_none()
    }

    /// Error for `field`, if its rule failed
    pub fn error(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Username => self.username_error,
            Field::Email => self.email_error,
            Field::Password => self.password_error,
        }
    }

    /// Failed rules in form order
    pub fn errors(&self) -> impl Iterator<Item = FieldError> + '_ {
        Field::ALL.into_iter().filter_map(move |f| self.error(f))
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 4)?;
        state.serialize_field("username_error", &self.username_error)?;
        state.serialize_field("email_error", &self.email_error)?;
        state.serialize_field("password_error", &self.password_error)?;
        state.serialize_field("is_valid", &self.is_valid())?;
        state.end()
    }
}

/// Username must be non-empty once surrounding whitespace is trimmed
pub fn validate_username(username: &str) -> Option<FieldError> {
    trim_form_value(username).is_empty().then_some(FieldError::UsernameRequired)
}

/// Email is trimmed, then matched against `local@domain.tld`
pub fn validate_email(email: &str) -> Option<FieldError> {
    (!is_valid_email(trim_form_value(email))).then_some(FieldError::InvalidEmail)
}

/// Password length counts UTF-16 code units of the raw value; it is not trimmed
pub fn validate_password(password: &str) -> Option<FieldError> {
    (password.encode_utf16().count() < MIN_PASSWORD_LENGTH).then_some(FieldError::PasswordTooShort)
}

/// Check `email` against the email pattern as-is (no trimming)
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate all fields of `submission`
pub fn validate(submission: &Submission) -> ValidationResult {
    ValidationResult {
        username_error: validate_username(&submission.username),
        email_error: validate_email(&submission.email),
        password_error: validate_password(&submission.password),
    }
}

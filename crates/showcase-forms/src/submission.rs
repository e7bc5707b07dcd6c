//! Form submission values

use serde::{Deserialize, Serialize};

/// Contact form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Username,
    Email,
    Password,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 3] = [Field::Username, Field::Email, Field::Password];

    /// Field name as used in markup
    pub fn name(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

/// Raw field values captured when the form is submitted.
///
/// Values are kept exactly as typed; any trimming is a validation rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Submission {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Submission {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Raw value of `field`
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    /// Replace the raw value of `field`
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        };
        *slot = value.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let submission: Submission = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();
        assert_eq!(submission.username, "alice");
        assert_eq!(submission.email, "");
        assert_eq!(submission.password, "");
    }

    #[test]
    fn test_get_set() {
        let mut submission = Submission::default();
        submission.set(Field::Email, " a@b.co ");
        assert_eq!(submission.get(Field::Email), " a@b.co ");
        assert_eq!(Field::Email.name(), "email");
    }
}

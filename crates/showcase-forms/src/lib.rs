//! fOS Showcase Forms
//!
//! Client-side validation of the showcase contact form. Validation is
//! pure: it reads a [`Submission`] and derives a [`ValidationResult`],
//! leaving all rendering to the caller.

mod submission;
mod validation;

pub use submission::{Field, Submission};
pub use validation::{
    FieldError, ValidationResult, is_valid_email, validate, validate_email, validate_password,
    validate_username, MIN_PASSWORD_LENGTH,
};

//! Login and registration form validation.
//!
//! This is the presentation-layer half of credential checking: inline,
//! recoverable errors the user corrects and resubmits. The authentication
//! store itself only enforces the placeholder policy (non-empty email,
//! password of at least six characters).

use thiserror::Error;

use bazarek_core::{Email, EmailError};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validation errors surfaced inline on the auth forms.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// One or more required fields were left empty.
    #[error("wypełnij wszystkie pola")]
    MissingFields,
    /// Password shorter than the minimum.
    #[error("hasło musi mieć minimum {MIN_PASSWORD_LENGTH} znaków")]
    PasswordTooShort,
    /// Password and confirmation differ.
    #[error("hasła nie są identyczne")]
    PasswordMismatch,
    /// Required consent checkbox left unchecked.
    #[error("musisz zaakceptować regulamin")]
    TermsNotAccepted,
    /// Email is structurally invalid.
    #[error("nieprawidłowy adres email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Login form fields.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Validate the form.
    ///
    /// # Errors
    ///
    /// Returns `MissingFields` when either field is empty and
    /// `PasswordTooShort` below the minimum length.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        if self.password.len() < MIN_PASSWORD_LENGTH {
            return Err(FormError::PasswordTooShort);
        }
        Ok(())
    }
}

/// Registration form fields.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub terms_accepted: bool,
}

impl RegisterForm {
    /// Validate the form, returning the parsed email on success.
    ///
    /// Checks run in the order the user sees the fields: required fields,
    /// password length, confirmation match, consent, email shape.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`FormError`].
    pub fn validate(&self) -> Result<Email, FormError> {
        if self.first_name.is_empty()
            || self.last_name.is_empty()
            || self.email.is_empty()
            || self.phone.is_empty()
            || self.password.is_empty()
        {
            return Err(FormError::MissingFields);
        }
        if self.password.len() < MIN_PASSWORD_LENGTH {
            return Err(FormError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        if !self.terms_accepted {
            return Err(FormError::TermsNotAccepted);
        }
        Ok(Email::parse(&self.email)?)
    }
}

use serde::{Deserialize, Serialize};

pub const EMAIL_MAX_LEN: usize = 255;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 128;

/// Values collected by the auth form. Signup and login share the same shape
/// and the body is sent to the backend verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCredentials {
    pub email: String,
    pub password: String,
}

/// Run both field validators, returning the first failure message.
pub fn credentials_error(email: &str, password: &str) -> Option<&'static str> {
    validate_email(email)
        .error_message()
        .or_else(|| validate_password(password).error_message())
}

/// Validation result for email addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailValidation {
    Valid,
    Empty,
    TooLong,
    InvalidFormat,
}

impl EmailValidation {
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Empty => Some("Please enter your email"),
            Self::TooLong => Some("Email must be at most 255 characters"),
            Self::InvalidFormat => Some("Please enter a valid email address"),
        }
    }
}

/// Validate an email address.
///
/// Rules:
/// - not empty, at most 255 characters
/// - exactly one `@` with a non-empty local part
/// - domain contains a dot that is neither first nor last
/// - no whitespace
pub fn validate_email(email: &str) -> EmailValidation {
    let email = email.trim();
    if email.is_empty() {
        return EmailValidation::Empty;
    }
    if email.len() > EMAIL_MAX_LEN {
        return EmailValidation::TooLong;
    }
    if email.chars().any(char::is_whitespace) {
        return EmailValidation::InvalidFormat;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return EmailValidation::InvalidFormat;
    };
    if local.is_empty() || domain.contains('@') {
        return EmailValidation::InvalidFormat;
    }
    match domain.rfind('.') {
        Some(idx) if idx > 0 && idx < domain.len() - 1 => {
            EmailValidation::Valid
        }
        _ => EmailValidation::InvalidFormat,
    }
}

/// Validation result for passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordValidation {
    Valid,
    TooShort,
    TooLong,
}

impl PasswordValidation {
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::TooShort => Some("Password must be at least 8 characters"),
            Self::TooLong => Some("Password must be at most 128 characters"),
        }
    }
}

pub fn validate_password(password: &str) -> PasswordValidation {
    let len = password.chars().count();
    if len < PASSWORD_MIN_LEN {
        return PasswordValidation::TooShort;
    }
    if len > PASSWORD_MAX_LEN {
        return PasswordValidation::TooLong;
    }
    PasswordValidation::Valid
}

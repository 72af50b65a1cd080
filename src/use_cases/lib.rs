use std::fmt::{self, Debug};

pub mod users;

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    PasswordPolicyViolation(String), // 400
    InvalidOrExpiredCode,            // 400
    NotFound(String),                // 404
    DuplicateAccount,                // 409
    InternalServerError(String),     // 500
}

impl fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UseCaseError::PasswordPolicyViolation(reason) => write!(f, "{}", reason),
            UseCaseError::InvalidOrExpiredCode => {
                write!(f, "Activation code is invalid, expired or already used.")
            }
            UseCaseError::NotFound(message) => write!(f, "{}", message),
            UseCaseError::DuplicateAccount => {
                write!(f, "An account with this email address already exists.")
            }
            UseCaseError::InternalServerError(e) => write!(f, "InternalServerError: {}", e),
        }
    }
}

pub(crate) fn error_500(e: impl Debug) -> UseCaseError {
    UseCaseError::InternalServerError(format!("{:?}", e))
}

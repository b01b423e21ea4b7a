//! Domain-specific error types for authentication and related operations
//!
//! This module provides error type definitions for authentication and token
//! management. The actual response messages are configured in the presentation
//! layer for internationalization support.

use thiserror::Error;

/// Authentication-related errors
///
/// These errors represent various authentication failure scenarios.
/// Response messages are configured in the presentation layer for i18n support.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown email, soft-deleted user, or wrong password. A single
    /// variant so the response never reveals which one it was.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Submitted code is absent from the cache or does not match.
    /// A single variant so the response never reveals which one it was.
    #[error("Invalid verification code")]
    InvalidVerificationCode,

    #[error("Phone number not verified")]
    PhoneNotVerified,

    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Nickname already taken")]
    NicknameAlreadyTaken,

    #[error("Phone number already registered")]
    PhoneAlreadyRegistered,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("SMS service failure: {reason}")]
    SmsServiceFailure { reason: String },
}

/// Token-related errors
///
/// These errors represent token validation and issuance failures.
/// They all surface to clients through one uniform unauthorized response.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    /// Token is structurally valid but its `sub` claim does not match
    /// the role required by the operation
    #[error("Invalid token subject")]
    InvalidSubject,

    #[error("Token generation failed: {reason}")]
    GenerationFailed { reason: String },
}

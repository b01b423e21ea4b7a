//! DTOs for the user account routes
//!
//! Phone numbers are validated against the hyphenated Korean mobile format
//! and flow through to the services verbatim; the verification cache is
//! keyed by the exact submitted string.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use smil_shared::utils::phone::is_valid_korean_mobile;

fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    if is_valid_korean_mobile(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_phone_number"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConfirmEmailRequest {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConfirmNicknameRequest {
    #[validate(length(min = 2, max = 20))]
    pub nickname: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConfirmPhoneRequest {
    /// Hyphenated Korean mobile number, e.g. `010-1234-5678`
    #[validate(custom = "validate_phone_number")]
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConfirmCodeRequest {
    /// Verification purpose, stored as the verified marker (`signup`)
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 32))]
    pub kind: String,

    #[validate(custom = "validate_phone_number")]
    pub phone_number: String,

    /// 6-digit verification code
    #[validate(length(equal = 6))]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 2, max = 20))]
    pub nickname: String,

    #[validate(custom = "validate_phone_number")]
    pub phone_number: String,

    // bcrypt truncates beyond 72 bytes
    #[validate(length(min = 8, max = 72))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshRequest {
    #[validate(length(min = 1))]
    pub refresh_token: String,
}

/// Generic acknowledgement for operations with no payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub id: uuid::Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_phone_accepts_hyphenated_korean_mobile() {
        let request = ConfirmPhoneRequest {
            phone_number: "010-1234-5678".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn confirm_phone_rejects_unhyphenated_number() {
        let request = ConfirmPhoneRequest {
            phone_number: "01012345678".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn confirm_code_reads_type_field() {
        let request: ConfirmCodeRequest = serde_json::from_str(
            r#"{"type":"signup","phone_number":"010-1234-5678","code":"123456"}"#,
        )
        .unwrap();
        assert_eq!(request.kind, "signup");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn confirm_code_requires_six_digits() {
        let request = ConfirmCodeRequest {
            kind: "signup".to_string(),
            phone_number: "010-1234-5678".to_string(),
            code: "1234".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn register_rejects_bad_email_and_short_password() {
        let mut request = RegisterRequest {
            email: "not-an-email".to_string(),
            nickname: "jane".to_string(),
            phone_number: "010-1234-5678".to_string(),
            password: "correct horse".to_string(),
        };
        assert!(request.validate().is_err());

        request.email = "jane@example.com".to_string();
        assert!(request.validate().is_ok());

        request.password = "short".to_string();
        assert!(request.validate().is_err());
    }
}

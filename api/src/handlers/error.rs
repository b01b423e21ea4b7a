//! Mapping from domain errors to HTTP responses
//!
//! Every route funnels its errors through [`to_response`], so the
//! status/code mapping and the disclosure policy live in exactly one place.
//! The whole Unauthorized class (bad credentials, bad or expired code,
//! any token failure, missing or deleted user) shares a single 401 body;
//! the caller can never tell the causes apart. Messages are localized from
//! the `Accept-Language` header, Korean by default.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use tracing::{error, warn};

use smil_core::errors::{AuthError, DomainError};
use smil_shared::types::{ErrorResponse, Language};

/// Extract the language preference from the `Accept-Language` header
pub fn extract_language(req: &HttpRequest) -> Language {
    req.headers()
        .get("Accept-Language")
        .and_then(|v| v.to_str().ok())
        .map(Language::from_accept_language)
        .unwrap_or_default()
}

/// The uniform 401 body, also used by the guard extractor
pub fn unauthorized_response(lang: Language) -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::new(
        "UNAUTHORIZED",
        unauthorized_message(lang),
    ))
}

fn unauthorized_message(lang: Language) -> &'static str {
    match lang {
        Language::English => "Authentication failed.",
        Language::Korean => "인증에 실패했습니다.",
    }
}

/// The 400 body for DTO validation failures, with per-field errors
pub fn validation_response(
    errors: &validator::ValidationErrors,
    req: &HttpRequest,
) -> HttpResponse {
    let lang = extract_language(req);

    let mut details = std::collections::HashMap::new();
    for (field, field_errors) in errors.field_errors() {
        let codes: Vec<String> = field_errors.iter().map(|e| e.code.to_string()).collect();
        details.insert(field.to_string(), serde_json::json!(codes));
    }

    warn!(path = req.path(), fields = ?details.keys(), "Request validation failed");

    let message = match lang {
        Language::English => "Invalid request data.",
        Language::Korean => "요청 데이터가 올바르지 않습니다.",
    };

    HttpResponse::BadRequest()
        .json(ErrorResponse::new("VALIDATION_ERROR", message).with_details(details))
}

/// Convert a domain error into its HTTP response
///
/// Internal and gateway failures are logged here with their cause; the
/// response body only carries a generic message.
pub fn to_response(error: &DomainError, req: &HttpRequest) -> HttpResponse {
    let lang = extract_language(req);

    let (status, code, message) = match error {
        DomainError::Auth(auth_error) => map_auth_error(auth_error, lang),
        DomainError::Token(token_error) => {
            warn!(error = %token_error, path = req.path(), "Token rejected");
            (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                unauthorized_message(lang),
            )
        }
        DomainError::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
            unauthorized_message(lang),
        ),
        DomainError::Validation { message } => {
            warn!(message = %message, path = req.path(), "Request validation failed");
            (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                match lang {
                    Language::English => "Invalid request data.",
                    Language::Korean => "요청 데이터가 올바르지 않습니다.",
                },
            )
        }
        DomainError::NotFound { resource } => {
            warn!(resource = %resource, path = req.path(), "Resource not found");
            (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                match lang {
                    Language::English => "The requested resource was not found.",
                    Language::Korean => "요청한 리소스를 찾을 수 없습니다.",
                },
            )
        }
        DomainError::Internal { message } => {
            error!(message = %message, path = req.path(), "Internal error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                match lang {
                    Language::English => "An internal error occurred. Please try again later.",
                    Language::Korean => "서버 오류가 발생했습니다. 잠시 후 다시 시도해 주세요.",
                },
            )
        }
    };

    HttpResponse::build(status).json(ErrorResponse::new(code, message))
}

fn map_auth_error(error: &AuthError, lang: Language) -> (StatusCode, &'static str, &'static str) {
    match error {
        // One body for both: wrong password, deleted user, unknown email,
        // expired code, and wrong code must stay indistinguishable.
        AuthError::InvalidCredentials | AuthError::InvalidVerificationCode => (
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
            unauthorized_message(lang),
        ),
        AuthError::PhoneNotVerified => (
            StatusCode::FORBIDDEN,
            "PHONE_NOT_VERIFIED",
            match lang {
                Language::English => "Phone number has not been verified.",
                Language::Korean => "휴대폰 번호 인증이 완료되지 않았습니다.",
            },
        ),
        AuthError::EmailAlreadyRegistered => (
            StatusCode::CONFLICT,
            "EMAIL_ALREADY_REGISTERED",
            match lang {
                Language::English => "This email address is already registered.",
                Language::Korean => "이미 등록된 이메일 주소입니다.",
            },
        ),
        AuthError::NicknameAlreadyTaken => (
            StatusCode::CONFLICT,
            "NICKNAME_ALREADY_TAKEN",
            match lang {
                Language::English => "This nickname is already taken.",
                Language::Korean => "이미 사용 중인 닉네임입니다.",
            },
        ),
        AuthError::PhoneAlreadyRegistered => (
            StatusCode::CONFLICT,
            "PHONE_ALREADY_REGISTERED",
            match lang {
                Language::English => "This phone number is already registered.",
                Language::Korean => "이미 등록된 휴대폰 번호입니다.",
            },
        ),
        AuthError::UserAlreadyExists => (
            StatusCode::CONFLICT,
            "USER_ALREADY_EXISTS",
            match lang {
                Language::English => "An account with these details already exists.",
                Language::Korean => "이미 존재하는 계정입니다.",
            },
        ),
        AuthError::SmsServiceFailure { reason } => {
            // Reason stays in the logs; the body is generic.
            error!(reason = %reason, "SMS gateway failure");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                match lang {
                    Language::English => "The service is temporarily unavailable. Please try again later.",
                    Language::Korean => "일시적으로 서비스를 이용할 수 없습니다. 잠시 후 다시 시도해 주세요.",
                },
            )
        }
    }
}

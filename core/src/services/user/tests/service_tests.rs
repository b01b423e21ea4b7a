//! Unit tests for user account service

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::{AuthError, DomainError};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::user::{UserService, UserServiceConfig, SIGNUP_KIND};
use crate::services::verification::{VerificationConfig, VerificationService};

use super::mocks::{MockCacheService, MockSmsService};

const PHONE: &str = "010-1234-5678";

struct Harness {
    repo: Arc<MockUserRepository>,
    sms: Arc<MockSmsService>,
    cache: Arc<MockCacheService>,
    verification: Arc<VerificationService<MockSmsService, MockCacheService>>,
    service: UserService<MockUserRepository, MockSmsService, MockCacheService>,
}

fn setup() -> Harness {
    let repo = Arc::new(MockUserRepository::new());
    let sms = Arc::new(MockSmsService::new());
    let cache = Arc::new(MockCacheService::new());
    let verification = Arc::new(VerificationService::new(
        sms.clone(),
        cache.clone(),
        VerificationConfig::default(),
    ));
    let service = UserService::new(
        repo.clone(),
        verification.clone(),
        UserServiceConfig { bcrypt_cost: 4 },
    );

    Harness {
        repo,
        sms,
        cache,
        verification,
        service,
    }
}

fn new_user(phone: &str) -> NewUser {
    NewUser::new(
        "jane@example.com".to_string(),
        "jane".to_string(),
        phone.to_string(),
        "hunter2hunter2".to_string(),
    )
}

async fn seed_existing(repo: &MockUserRepository, email: &str, nickname: &str, phone: &str) {
    repo.create(User::new(
        email.to_string(),
        nickname.to_string(),
        phone.to_string(),
        "$2b$12$hash".to_string(),
    ))
    .await
    .unwrap();
}

#[tokio::test]
async fn test_check_email_available() {
    let h = setup();

    h.service
        .check_email_available("jane@example.com")
        .await
        .unwrap();

    seed_existing(&h.repo, "jane@example.com", "jane", PHONE).await;

    let err = h
        .service
        .check_email_available("jane@example.com")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::EmailAlreadyRegistered)
    ));
}

#[tokio::test]
async fn test_check_nickname_available() {
    let h = setup();

    h.service.check_nickname_available("jane").await.unwrap();

    seed_existing(&h.repo, "jane@example.com", "jane", PHONE).await;

    let err = h.service.check_nickname_available("jane").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::NicknameAlreadyTaken)
    ));
}

#[tokio::test]
async fn test_start_phone_verification_sends_code() {
    let h = setup();

    h.service.start_phone_verification(PHONE).await.unwrap();

    let code = h.sms.get_sent_code(PHONE).unwrap();
    assert_eq!(code.len(), 6);
    assert_eq!(h.cache.stored_value(PHONE), Some(code));
}

#[tokio::test]
async fn test_start_phone_verification_taken_phone() {
    let h = setup();
    seed_existing(&h.repo, "other@example.com", "other", PHONE).await;

    let err = h.service.start_phone_verification(PHONE).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::PhoneAlreadyRegistered)
    ));

    // No SMS goes out for an occupied number
    assert_eq!(h.sms.sent_count(), 0);
}

#[tokio::test]
async fn test_register_requires_verified_phone() {
    let h = setup();

    // Nothing in the cache at all
    let err = h.service.register(new_user(PHONE)).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::PhoneNotVerified)));

    // A pending code is not a verified marker
    h.service.start_phone_verification(PHONE).await.unwrap();
    let err = h.service.register(new_user(PHONE)).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::PhoneNotVerified)));
}

#[tokio::test]
async fn test_confirm_phone_verification() {
    let h = setup();

    h.service.start_phone_verification(PHONE).await.unwrap();
    let code = h.sms.get_sent_code(PHONE).unwrap();

    let wrong = if code == "000000" { "000001" } else { "000000" };
    let err = h
        .service
        .confirm_phone_verification(PHONE, wrong)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidVerificationCode)
    ));

    h.service
        .confirm_phone_verification(PHONE, &code)
        .await
        .unwrap();
    assert_eq!(h.cache.stored_value(PHONE).as_deref(), Some(SIGNUP_KIND));
}

#[tokio::test]
async fn test_register_full_flow() {
    let h = setup();

    h.service.start_phone_verification(PHONE).await.unwrap();
    let code = h.sms.get_sent_code(PHONE).unwrap();
    h.service
        .confirm_phone_verification(PHONE, &code)
        .await
        .unwrap();

    let user = h.service.register(new_user(PHONE)).await.unwrap();

    assert_eq!(user.email, "jane@example.com");
    assert_eq!(user.nickname, "jane");
    assert_eq!(user.phone_number, PHONE);
    assert!(bcrypt::verify("hunter2hunter2", &user.password_hash).unwrap());

    // Persisted and findable
    let found = h.repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(found.email, user.email);

    // The marker was consumed
    assert!(h.cache.stored_value(PHONE).is_none());
    assert!(!h
        .verification
        .is_verified(SIGNUP_KIND, PHONE)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_register_conflicts() {
    let h = setup();
    h.cache.seed(PHONE, SIGNUP_KIND);

    seed_existing(&h.repo, "jane@example.com", "taken", "010-0000-1111").await;
    let err = h.service.register(new_user(PHONE)).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::EmailAlreadyRegistered)
    ));

    let h = setup();
    h.cache.seed(PHONE, SIGNUP_KIND);
    seed_existing(&h.repo, "other@example.com", "jane", "010-0000-1111").await;
    let err = h.service.register(new_user(PHONE)).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::NicknameAlreadyTaken)
    ));

    let h = setup();
    h.cache.seed(PHONE, SIGNUP_KIND);
    seed_existing(&h.repo, "other@example.com", "other", PHONE).await;
    let err = h.service.register(new_user(PHONE)).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::PhoneAlreadyRegistered)
    ));
}

#[tokio::test]
async fn test_register_conflict_keeps_marker() {
    let h = setup();
    h.cache.seed(PHONE, SIGNUP_KIND);
    seed_existing(&h.repo, "other@example.com", "jane", "010-0000-1111").await;

    // Nickname collision
    h.service.register(new_user(PHONE)).await.unwrap_err();
    assert_eq!(h.cache.stored_value(PHONE).as_deref(), Some(SIGNUP_KIND));

    // Retry with a free nickname succeeds without re-verifying
    let mut retry = new_user(PHONE);
    retry.nickname = "jane2".to_string();
    h.service.register(retry).await.unwrap();
}

#[tokio::test]
async fn test_delete_account() {
    let h = setup();
    h.cache.seed(PHONE, SIGNUP_KIND);
    let user = h.service.register(new_user(PHONE)).await.unwrap();

    h.service.delete_account(user.id).await.unwrap();

    let found = h.repo.find_by_id(user.id).await.unwrap().unwrap();
    assert!(found.is_deleted());

    // A second delete finds nothing live
    let err = h.service.delete_account(user.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_delete_unknown_account() {
    let h = setup();
    let err = h.service.delete_account(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

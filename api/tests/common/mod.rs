//! In-memory fakes and app construction shared by the API tests

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use smil_api::middleware::auth::AccessTokenVerifier;
use smil_api::routes::AppState;
use smil_core::domain::entities::user::User;
use smil_core::errors::{AuthError, DomainError};
use smil_core::repositories::UserRepository;
use smil_core::services::token::{TokenConfig, TokenService};
use smil_core::services::verification::{
    CacheServiceTrait, SmsServiceTrait, VerificationConfig, VerificationService,
};
use smil_core::services::{AuthService, UserService, UserServiceConfig};

/// User repository backed by a HashMap
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.users.read().await.values().any(|u| u.email == email))
    }

    async fn exists_by_nickname(&self, nickname: &str) -> Result<bool, DomainError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .any(|u| u.nickname == nickname))
    }

    async fn exists_by_phone(&self, phone_number: &str) -> Result<bool, DomainError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .any(|u| u.phone_number == phone_number))
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| {
            u.email == user.email
                || u.nickname == user.nickname
                || u.phone_number == user.phone_number
        }) {
            return Err(AuthError::UserAlreadyExists.into());
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        match users.get_mut(&id) {
            Some(user) if !user.is_deleted() => {
                user.soft_delete();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

/// SMS fake recording the last code per phone number
#[derive(Default)]
pub struct RecordingSms {
    sent: RwLock<HashMap<String, String>>,
}

impl RecordingSms {
    pub async fn last_code(&self, phone: &str) -> Option<String> {
        self.sent.read().await.get(phone).cloned()
    }
}

#[async_trait]
impl SmsServiceTrait for RecordingSms {
    async fn send_verification_code(&self, phone: &str, code: &str) -> Result<String, String> {
        self.sent
            .write()
            .await
            .insert(phone.to_string(), code.to_string());
        Ok(format!("test-{}", Uuid::new_v4()))
    }
}

/// Cache fake; TTLs are accepted and ignored
#[derive(Default)]
pub struct InMemoryCache {
    entries: RwLock<HashMap<String, String>>,
}

#[async_trait]
impl CacheServiceTrait for InMemoryCache {
    async fn get(&self, phone: &str) -> Result<Option<String>, String> {
        Ok(self.entries.read().await.get(phone).cloned())
    }

    async fn set(&self, phone: &str, value: &str, _ttl_seconds: u64) -> Result<(), String> {
        self.entries
            .write()
            .await
            .insert(phone.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, phone: &str) -> Result<(), String> {
        self.entries.write().await.remove(phone);
        Ok(())
    }
}

pub type TestState = AppState<InMemoryUserRepository, RecordingSms, InMemoryCache>;

pub struct TestHarness {
    pub state: web::Data<TestState>,
    pub verifier: web::Data<Arc<dyn AccessTokenVerifier>>,
    pub repository: Arc<InMemoryUserRepository>,
    pub sms: Arc<RecordingSms>,
    pub token_service: Arc<TokenService>,
}

/// Build the app state over fresh fakes with a deterministic test secret
pub fn harness() -> TestHarness {
    let user_repository = Arc::new(InMemoryUserRepository::default());
    let sms = Arc::new(RecordingSms::default());
    let cache = Arc::new(InMemoryCache::default());

    let verification_service = Arc::new(VerificationService::new(
        sms.clone(),
        cache,
        VerificationConfig::default(),
    ));

    let token_service = Arc::new(TokenService::new(TokenConfig {
        secret: "api-test-secret".to_string(),
        ..TokenConfig::default()
    }));

    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        token_service.clone(),
    ));
    let user_service = Arc::new(UserService::new(
        user_repository.clone(),
        verification_service.clone(),
        UserServiceConfig { bcrypt_cost: 4 },
    ));

    let verifier: Arc<dyn AccessTokenVerifier> = auth_service.clone();

    TestHarness {
        state: web::Data::new(AppState {
            auth_service,
            user_service,
            verification_service,
        }),
        verifier: web::Data::new(verifier),
        repository: user_repository,
        sms,
        token_service,
    }
}

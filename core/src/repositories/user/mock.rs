//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};

use super::r#trait::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    fail_next: Arc<RwLock<bool>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            fail_next: Arc::new(RwLock::new(false)),
        }
    }

    /// Make the next repository call fail with an internal error
    pub async fn fail_next_call(&self) {
        *self.fail_next.write().await = true;
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        let mut fail = self.fail_next.write().await;
        if *fail {
            *fail = false;
            return Err(DomainError::Internal {
                message: "Simulated repository failure".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.check_failure().await?;
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.check_failure().await?;
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        self.check_failure().await?;
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }

    async fn exists_by_nickname(&self, nickname: &str) -> Result<bool, DomainError> {
        self.check_failure().await?;
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.nickname == nickname))
    }

    async fn exists_by_phone(&self, phone_number: &str) -> Result<bool, DomainError> {
        self.check_failure().await?;
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.phone_number == phone_number))
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        self.check_failure().await?;
        let mut users = self.users.write().await;

        // Unique constraints, soft-deleted rows included
        let taken = users.values().any(|u| {
            u.email == user.email
                || u.nickname == user.nickname
                || u.phone_number == user.phone_number
        });
        if taken {
            return Err(AuthError::UserAlreadyExists.into());
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.check_failure().await?;
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

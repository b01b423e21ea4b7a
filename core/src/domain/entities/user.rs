//! User entity representing a registered account in the SMIL system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address used for sign-in (unique)
    pub email: String,

    /// Display name (unique)
    pub nickname: String,

    /// Phone number exactly as submitted at registration (unique)
    pub phone_number: String,

    /// Bcrypt hash of the user's password, opaque to the rest of the system
    pub password_hash: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,

    /// Timestamp of soft deletion; a deleted user is invisible to
    /// every authentication path
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a new User instance
    pub fn new(
        email: String,
        nickname: String,
        phone_number: String,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            nickname,
            phone_number,
            password_hash,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Marks the user as deleted
    pub fn soft_delete(&mut self) {
        let now = Utc::now();
        self.deleted_at = Some(now);
        self.updated_at = now;
    }

    /// Checks if the user has been soft deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Plaintext registration input carried into the registration service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Email address for the new account
    pub email: String,

    /// Display name for the new account
    pub nickname: String,

    /// Phone number that completed SMS verification
    pub phone_number: String,

    /// Plaintext password, hashed before it reaches storage
    pub password: String,
}

impl NewUser {
    /// Creates a new registration input value
    pub fn new(
        email: String,
        nickname: String,
        phone_number: String,
        password: String,
    ) -> Self {
        Self {
            email,
            nickname,
            phone_number,
            password,
        }
    }
}

//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role a token plays, carried in the `sub` claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenSubject {
    /// Short-lived token presented on guarded requests
    Access,
    /// Long-lived token exchanged for fresh access tokens
    Refresh,
}

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject discriminating access from refresh tokens
    pub sub: TokenSubject,

    /// ID of the user the token was issued to
    pub id: Uuid,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp, omitted entirely for tokens that never expire
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `expiry_seconds` - Access token lifetime in seconds
    ///
    /// # Returns
    ///
    /// A new `Claims` instance with subject `access`
    pub fn access(user_id: Uuid, expiry_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expiry_seconds);

        Self {
            sub: TokenSubject::Access,
            id: user_id,
            iat: now.timestamp(),
            exp: Some(expiry.timestamp()),
        }
    }

    /// Creates new claims for a refresh token
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `expiry_seconds` - Refresh token lifetime, `None` for no expiry
    ///
    /// # Returns
    ///
    /// A new `Claims` instance with subject `refresh`
    pub fn refresh(user_id: Uuid, expiry_seconds: Option<i64>) -> Self {
        let now = Utc::now();
        let exp = expiry_seconds.map(|secs| (now + Duration::seconds(secs)).timestamp());

        Self {
            sub: TokenSubject::Refresh,
            id: user_id,
            iat: now.timestamp(),
            exp,
        }
    }

    /// Checks if the claims have expired
    ///
    /// Claims without an `exp` never expire.
    pub fn is_expired(&self) -> bool {
        match self.exp {
            Some(exp) => Utc::now().timestamp() >= exp,
            None => false,
        }
    }
}

/// Access and refresh token pair returned on sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in,
        }
    }
}

/// A freshly issued access token, returned by the refresh flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// JWT access token
    pub token: String,

    /// Lifetime in seconds
    pub expires_in: i64,
}

impl AccessToken {
    /// Creates a new access token value
    pub fn new(token: String, expires_in: i64) -> Self {
        Self { token, expires_in }
    }
}

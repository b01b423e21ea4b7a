//! JWT signing configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "dev-secret-change-in-production";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared secret used to sign both access and refresh tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry_seconds: i64,

    /// Refresh token expiry time in seconds; `None` issues refresh tokens
    /// without an `exp` claim
    #[serde(default)]
    pub refresh_token_expiry_seconds: Option<i64>,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            access_token_expiry_seconds: 300, // 5 minutes
            refresh_token_expiry_seconds: None,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the access token expiry in seconds
    pub fn with_access_expiry_seconds(mut self, seconds: i64) -> Self {
        self.access_token_expiry_seconds = seconds;
        self
    }

    /// Set the refresh token expiry in seconds
    pub fn with_refresh_expiry_seconds(mut self, seconds: i64) -> Self {
        self.refresh_token_expiry_seconds = Some(seconds);
        self
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string());
        let access_token_expiry_seconds = std::env::var("ACCESS_TOKEN_EXPIRY_SECONDS")
            .unwrap_or_else(|_| "300".to_string())
            .parse()
            .unwrap_or(300);
        let refresh_token_expiry_seconds = std::env::var("REFRESH_TOKEN_EXPIRY_SECONDS")
            .ok()
            .and_then(|value| value.parse().ok());

        Self {
            secret,
            access_token_expiry_seconds,
            refresh_token_expiry_seconds,
        }
    }

    /// Check if using the default secret (rejected in production)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

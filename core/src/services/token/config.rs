//! Configuration for the token service

/// Default access token expiry (5 minutes)
pub const DEFAULT_ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 300;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// JWT signing secret shared by access and refresh tokens
    pub secret: String,
    /// Access token expiry in seconds
    pub access_token_expiry_seconds: i64,
    /// Refresh token expiry in seconds, `None` for tokens without expiry
    pub refresh_token_expiry_seconds: Option<i64>,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            access_token_expiry_seconds: DEFAULT_ACCESS_TOKEN_EXPIRY_SECONDS,
            refresh_token_expiry_seconds: None,
        }
    }
}

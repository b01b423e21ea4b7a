//! Configuration module with one sub-module per concern
//!
//! Configuration is loaded from the process environment exactly once, in
//! `main`, and injected into services as plain values. Services never read
//! environment variables themselves.
//!
//! - `auth` - JWT signing configuration
//! - `cache` - Redis connection configuration
//! - `database` - MySQL connection and pool configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server binding
//! - `sms` - SMS gateway credentials and endpoint
//! - `verification` - Cache TTLs for the phone verification flow

pub mod auth;
pub mod cache;
pub mod database;
pub mod environment;
pub mod server;
pub mod sms;
pub mod verification;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::JwtConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;
pub use sms::{SmsConfig, SmsProvider};
pub use verification::VerificationTtlConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment the process runs in
    pub environment: Environment,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Redis cache configuration
    pub cache: CacheConfig,

    /// JWT signing configuration
    pub jwt: JwtConfig,

    /// SMS gateway configuration
    pub sms: SmsConfig,

    /// Verification cache TTLs
    pub verification: VerificationTtlConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            jwt: JwtConfig::default(),
            sms: SmsConfig::default(),
            verification: VerificationTtlConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            jwt: JwtConfig::from_env(),
            sms: SmsConfig::from_env(),
            verification: VerificationTtlConfig::from_env(),
        }
    }

    /// Validate the configuration, rejecting values that cannot serve traffic.
    ///
    /// Production additionally refuses the development JWT secret and the
    /// mock SMS provider.
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt.secret.is_empty() {
            return Err("JWT_SECRET must not be empty".to_string());
        }
        if self.jwt.access_token_expiry_seconds <= 0 {
            return Err("ACCESS_TOKEN_EXPIRY_SECONDS must be positive".to_string());
        }
        if let Some(expiry) = self.jwt.refresh_token_expiry_seconds {
            if expiry <= 0 {
                return Err("REFRESH_TOKEN_EXPIRY_SECONDS must be positive when set".to_string());
            }
        }
        self.verification.validate()?;

        if self.environment.is_production() {
            if self.jwt.is_using_default_secret() {
                return Err(
                    "JWT_SECRET must be set to a non-default value in production".to_string(),
                );
            }
            if self.sms.provider == SmsProvider::Mock {
                return Err("SMS_PROVIDER must not be 'mock' in production".to_string());
            }
            self.sms.validate()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid_for_development() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn production_rejects_default_jwt_secret() {
        let mut config = AppConfig::default();
        config.environment = Environment::Production;
        config.sms.provider = SmsProvider::Sens;
        config.sms.access_key = "key".to_string();
        config.sms.secret_key = "secret".to_string();
        config.sms.service_id = "svc".to_string();
        config.sms.sender_number = "0212345678".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn production_rejects_mock_sms_provider() {
        let mut config = AppConfig::default();
        config.environment = Environment::Production;
        config.jwt.secret = "a-real-secret-value".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_jwt_secret_is_rejected() {
        let mut config = AppConfig::default();
        config.jwt.secret = String::new();
        assert!(config.validate().is_err());
    }
}

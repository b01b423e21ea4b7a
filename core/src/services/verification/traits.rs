//! Traits for SMS and cache service integration

use async_trait::async_trait;

/// Trait for SMS service integration
#[async_trait]
pub trait SmsServiceTrait: Send + Sync {
    /// Send a verification code via SMS
    ///
    /// Returns the gateway request id on success, or a reason string on
    /// failure. The reason is logged server-side and never shown to clients.
    async fn send_verification_code(&self, phone: &str, code: &str) -> Result<String, String>;
}

/// Trait for cache service integration
///
/// Keys are verbatim phone number strings exactly as the client submitted
/// them; implementations may add their own key namespace. Every write
/// carries an explicit TTL.
#[async_trait]
pub trait CacheServiceTrait: Send + Sync {
    /// Read the value stored for a phone number
    async fn get(&self, phone: &str) -> Result<Option<String>, String>;
    /// Store a value for a phone number, expiring after `ttl_seconds`
    async fn set(&self, phone: &str, value: &str, ttl_seconds: u64) -> Result<(), String>;
    /// Remove the value stored for a phone number
    async fn delete(&self, phone: &str) -> Result<(), String>;
}

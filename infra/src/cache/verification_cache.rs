//! Verification cache backed by Redis
//!
//! Stores one value per phone number under the `verification:{phone}` key
//! namespace: first the pending code, then (after confirmation) the kind
//! marker that replaces it. Values are stored verbatim; the service layer
//! owns comparison and decides what a value means.

use async_trait::async_trait;

use smil_core::services::verification::CacheServiceTrait;

use crate::cache::RedisClient;

/// Redis-backed implementation of the verification cache
///
/// Keys are the exact phone number string the client submitted, prefixed
/// with the `verification:` namespace. Every write carries the TTL the
/// caller passes in.
#[derive(Clone)]
pub struct VerificationCache {
    redis_client: RedisClient,
}

impl VerificationCache {
    /// Create a new verification cache on top of a Redis client
    pub fn new(redis_client: RedisClient) -> Self {
        Self { redis_client }
    }

    /// Format the Redis key for a phone number
    pub(crate) fn format_key(phone: &str) -> String {
        format!("verification:{}", phone)
    }
}

#[async_trait]
impl CacheServiceTrait for VerificationCache {
    async fn get(&self, phone: &str) -> Result<Option<String>, String> {
        self.redis_client
            .get(&Self::format_key(phone))
            .await
            .map_err(|e| e.to_string())
    }

    async fn set(&self, phone: &str, value: &str, ttl_seconds: u64) -> Result<(), String> {
        self.redis_client
            .set_with_expiry(&Self::format_key(phone), value, ttl_seconds)
            .await
            .map_err(|e| e.to_string())
    }

    async fn delete(&self, phone: &str) -> Result<(), String> {
        self.redis_client
            .delete(&Self::format_key(phone))
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

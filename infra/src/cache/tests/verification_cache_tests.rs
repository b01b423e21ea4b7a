//! Unit tests for the verification cache

use crate::cache::redis_client::RedisClient;
use crate::cache::verification_cache::VerificationCache;
use smil_core::services::verification::CacheServiceTrait;
use smil_shared::config::cache::CacheConfig;

#[test]
fn test_format_key() {
    assert_eq!(
        VerificationCache::format_key("010-1234-5678"),
        "verification:010-1234-5678"
    );
    // The phone number is used verbatim, no normalization
    assert_eq!(
        VerificationCache::format_key("01012345678"),
        "verification:01012345678"
    );
}

#[tokio::test]
#[ignore] // Requires actual Redis server
async fn test_store_read_delete_cycle() {
    let config = CacheConfig::new(
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
    );

    let redis_client = RedisClient::new(config).await.unwrap();
    let cache = VerificationCache::new(redis_client);

    let phone = "test_010-1234-5678";

    // Clean up from previous runs
    cache.delete(phone).await.unwrap();

    assert_eq!(cache.get(phone).await.unwrap(), None);

    cache.set(phone, "123456", 60).await.unwrap();
    assert_eq!(cache.get(phone).await.unwrap(), Some("123456".to_string()));

    cache.delete(phone).await.unwrap();
    assert_eq!(cache.get(phone).await.unwrap(), None);
}

#[tokio::test]
#[ignore] // Requires actual Redis server
async fn test_set_replaces_previous_value() {
    let config = CacheConfig::new(
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
    );

    let redis_client = RedisClient::new(config).await.unwrap();
    let cache = VerificationCache::new(redis_client);

    let phone = "test_010-9999-0000";

    cache.set(phone, "111111", 60).await.unwrap();
    cache.set(phone, "signup", 60).await.unwrap();

    assert_eq!(cache.get(phone).await.unwrap(), Some("signup".to_string()));

    cache.delete(phone).await.unwrap();
}

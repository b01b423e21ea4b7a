//! Cache module for Redis-based caching
//!
//! This module provides the Redis caching layer for the SMIL backend:
//! a client with connection retry logic and the verification cache the
//! phone confirmation flow stores codes and markers in.

pub mod redis_client;
pub mod verification_cache;

#[cfg(test)]
mod tests;

pub use redis_client::RedisClient;
pub use verification_cache::VerificationCache;

// Re-export commonly used types
pub use smil_shared::config::cache::CacheConfig;

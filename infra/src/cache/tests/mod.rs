//! Unit tests for the cache module

#[cfg(test)]
pub mod redis_client_tests;
#[cfg(test)]
pub mod verification_cache_tests;

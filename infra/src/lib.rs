//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the SMIL backend. It
//! provides concrete implementations for the persistence, cache, and SMS
//! boundaries that `smil_core` defines as traits.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL implementation of the user repository using SQLx
//! - **Cache**: Redis client and the verification cache built on it
//! - **SMS**: SENS gateway client with signed requests, plus a mock for
//!   development and tests
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)
//! - `redis-cache`: Enable Redis caching support (default)
//! - `sens-sms`: Enable the SENS SMS gateway client (default)

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// SMS service module - gateway client and mock
pub mod sms;

/// Cache module - Redis client and operations
#[cfg(feature = "redis-cache")]
pub mod cache;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS gateway error
    #[error("SMS gateway error: {0}")]
    Sms(String),
}

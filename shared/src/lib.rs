//! Shared utilities and common types for the SMIL backend
//!
//! This crate provides functionality used across all server crates:
//! - Configuration types loaded once at startup and injected explicitly
//! - Common type definitions (language negotiation, response envelopes)
//! - Utility functions (phone number validation and masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, DatabaseConfig, Environment, JwtConfig, ServerConfig, SmsConfig,
    SmsProvider, VerificationTtlConfig,
};
pub use types::{ErrorDetail, ErrorResponse, HealthResponse, Language};
pub use utils::phone;

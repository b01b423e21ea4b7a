//! Token service module for JWT management
//!
//! This module handles token issuance and verification:
//! - Access tokens with subject `access` and a short expiry
//! - Refresh tokens with subject `refresh` and an optional expiry
//! - One shared HS256 secret for both

mod config;
mod service;

pub use config::TokenConfig;
pub use service::TokenService;

//! Verification service module for SMS-based phone confirmation
//!
//! This module provides the verification code workflow:
//! - Code generation and SMS dispatch
//! - Single-use confirmation against the cached code
//! - Verified-phone markers consumed by registration

mod config;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::VerificationConfig;
pub use service::VerificationService;
pub use traits::{CacheServiceTrait, SmsServiceTrait};

//! Verification cache TTL configuration
//!
//! Both cache writes of the verification flow carry an explicit TTL: the
//! pending code a few minutes, the post-confirmation marker a short window
//! long enough to finish registration.

use serde::{Deserialize, Serialize};

/// TTLs for the phone verification cache entries
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct VerificationTtlConfig {
    /// Lifetime of a pending code in seconds
    pub code_ttl_seconds: u64,

    /// Lifetime of the verified-for-kind marker in seconds
    pub verified_ttl_seconds: u64,
}

impl Default for VerificationTtlConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: 300,      // 5 minutes
            verified_ttl_seconds: 1800, // 30 minutes
        }
    }
}

impl VerificationTtlConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let code_ttl_seconds = std::env::var("VERIFICATION_CODE_TTL_SECONDS")
            .unwrap_or_else(|_| "300".to_string())
            .parse()
            .unwrap_or(300);
        let verified_ttl_seconds = std::env::var("VERIFICATION_VERIFIED_TTL_SECONDS")
            .unwrap_or_else(|_| "1800".to_string())
            .parse()
            .unwrap_or(1800);

        Self {
            code_ttl_seconds,
            verified_ttl_seconds,
        }
    }

    /// Reject zero TTLs, which would make every write expire immediately
    pub fn validate(&self) -> Result<(), String> {
        if self.code_ttl_seconds == 0 {
            return Err("VERIFICATION_CODE_TTL_SECONDS must be positive".to_string());
        }
        if self.verified_ttl_seconds == 0 {
            return Err("VERIFICATION_VERIFIED_TTL_SECONDS must be positive".to_string());
        }
        Ok(())
    }
}

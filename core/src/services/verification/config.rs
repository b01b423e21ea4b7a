//! Configuration for the verification service

/// Default lifetime of a pending verification code (5 minutes)
pub const DEFAULT_CODE_TTL_SECONDS: u64 = 300;

/// Default lifetime of a verified-phone marker (30 minutes)
pub const DEFAULT_VERIFIED_TTL_SECONDS: u64 = 1800;

/// Configuration for the verification service
///
/// Both TTLs are passed explicitly on every cache write; nothing in the
/// cache layer supplies an implicit expiry.
#[derive(Debug, Clone, Copy)]
pub struct VerificationConfig {
    /// Seconds a pending verification code stays valid
    pub code_ttl_seconds: u64,
    /// Seconds a verified-phone marker stays valid
    pub verified_ttl_seconds: u64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: DEFAULT_CODE_TTL_SECONDS,
            verified_ttl_seconds: DEFAULT_VERIFIED_TTL_SECONDS,
        }
    }
}

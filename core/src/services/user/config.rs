//! Configuration for the user account service

/// Configuration for the user account service
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

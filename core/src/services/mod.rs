//! Business services containing domain logic and use cases.

pub mod auth;
pub mod token;
pub mod user;
pub mod verification;

// Re-export commonly used types
pub use auth::AuthService;
pub use token::{TokenConfig, TokenService};
pub use user::{UserService, UserServiceConfig, SIGNUP_KIND};
pub use verification::{
    CacheServiceTrait, SmsServiceTrait, VerificationConfig, VerificationService,
};

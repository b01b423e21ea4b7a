//! Domain entities representing core business objects.

pub mod token;
pub mod user;
pub mod verification_code;

// Re-export commonly used types
pub use token::{AccessToken, Claims, TokenPair, TokenSubject};
pub use user::{NewUser, User};
pub use verification_code::CODE_LENGTH;

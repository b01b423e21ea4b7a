//! User account routes
//!
//! One module per handler, all registered under `/api/v1/users`:
//!
//! | method & path            | handler           | auth   |
//! |--------------------------|-------------------|--------|
//! | POST `/confirm/email`    | `confirm_email`   | none   |
//! | POST `/confirm/nickname` | `confirm_nickname`| none   |
//! | POST `/confirm/phone`    | `confirm_phone`   | none   |
//! | POST `/confirm/code`     | `confirm_code`    | none   |
//! | POST `/`                 | `register`        | none   |
//! | POST `/sign-in`          | `sign_in`         | none   |
//! | POST `/refresh`          | `refresh`         | none   |
//! | DELETE `/`               | `delete_account`  | bearer |

use std::sync::Arc;

use smil_core::repositories::UserRepository;
use smil_core::services::verification::{CacheServiceTrait, SmsServiceTrait};
use smil_core::services::{AuthService, UserService, VerificationService};

pub mod confirm_code;
pub mod confirm_email;
pub mod confirm_nickname;
pub mod confirm_phone;
pub mod delete_account;
pub mod refresh;
pub mod register;
pub mod sign_in;

pub use confirm_code::confirm_code;
pub use confirm_email::confirm_email;
pub use confirm_nickname::confirm_nickname;
pub use confirm_phone::confirm_phone;
pub use delete_account::delete_account;
pub use refresh::refresh;
pub use register::register;
pub use sign_in::sign_in;

/// Shared services injected into every handler
pub struct AppState<U, S, C>
where
    U: UserRepository,
    S: SmsServiceTrait,
    C: CacheServiceTrait,
{
    pub auth_service: Arc<AuthService<U>>,
    pub user_service: Arc<UserService<U, S, C>>,
    pub verification_service: Arc<VerificationService<S, C>>,
}

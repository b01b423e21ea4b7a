//! # SMIL Core
//!
//! Core business logic and domain layer for the SMIL backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::entities::{AccessToken, Claims, NewUser, TokenPair, TokenSubject, User};
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::UserRepository;
pub use services::{AuthService, TokenService, UserService, VerificationService};

//! User account service module
//!
//! This module covers registration and the account lifecycle:
//! - Availability checks for email, nickname, and phone number
//! - Phone verification hand-off for sign-up
//! - Registration with bcrypt password hashing
//! - Account soft deletion

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::UserServiceConfig;
pub use service::{UserService, SIGNUP_KIND};

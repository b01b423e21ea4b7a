//! Authentication service module
//!
//! This module provides email and password sign-in plus the access token
//! lifecycle:
//! - Sign-in against stored bcrypt hashes
//! - Access token re-issuance and refresh
//! - The bearer guard contract used by protected routes

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;

//! Route handlers

pub mod health;
pub mod users;

pub use users::AppState;

//! Database module - MySQL implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management
//! - The MySQL user repository

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::MySqlUserRepository;

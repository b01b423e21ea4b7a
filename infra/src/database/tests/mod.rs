//! Unit tests for the database module

#[cfg(test)]
pub mod connection_tests;

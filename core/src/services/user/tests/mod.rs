//! Tests for user account service

#[cfg(test)]
mod service_tests;

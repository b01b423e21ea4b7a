//! Request handling support shared across routes

pub mod error;

pub use error::{extract_language, to_response, unauthorized_response, validation_response};

//! Type definitions module
//!
//! - `language` - Internationalization and language types
//! - `response` - API response wrappers and health checks

pub mod language;
pub mod response;

// Re-export commonly used types at module level
pub use language::Language;
pub use response::{ErrorDetail, ErrorResponse, HealthResponse};

//! API response types and wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standardized error response structure for domain errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach structured details (field validation errors and the like)
    pub fn with_details(mut self, details: HashMap<String, serde_json::Value>) -> Self {
        self.details = Some(details);
        self
    }
}

/// Detailed error information for field-level validation failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Field-specific errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<HashMap<String, Vec<String>>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: String,

    /// Server version
    pub version: String,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    /// Create a healthy response with the given version
    pub fn healthy(version: impl Into<String>) -> Self {
        Self {
            status: String::from("healthy"),
            version: version.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_serializes_code_and_message() {
        let response = ErrorResponse::new("UNAUTHORIZED", "Authentication failed");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "UNAUTHORIZED");
        assert_eq!(json["message"], "Authentication failed");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn healthy_response_reports_status() {
        let response = HealthResponse::healthy("0.1.0");
        assert_eq!(response.status, "healthy");
        assert_eq!(response.version, "0.1.0");
    }
}

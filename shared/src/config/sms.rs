//! SMS gateway configuration
//!
//! Credentials for the signed-request SMS gateway. Values are read from the
//! environment once at startup and injected into the gateway client; nothing
//! below the API crate reads them ambiently.

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "https://sens.apigw.ntruss.com";

/// Which SMS backend the process sends through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SmsProvider {
    /// Signed-request gateway (production)
    Sens,
    /// In-memory mock that logs messages (development and tests)
    Mock,
}

/// SMS gateway configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// Provider selection
    pub provider: SmsProvider,

    /// Gateway access key id (goes into the `x-ncp-iam-access-key` header)
    pub access_key: String,

    /// Gateway secret key (HMAC-SHA256 signing key)
    pub secret_key: String,

    /// Service id embedded in the request path
    pub service_id: String,

    /// Registered sender number (`from` field of the message body)
    pub sender_number: String,

    /// Gateway base URL
    pub api_base_url: String,

    /// Outbound request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: SmsProvider::Mock,
            access_key: String::new(),
            secret_key: String::new(),
            service_id: String::new(),
            sender_number: String::new(),
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            request_timeout_secs: 10,
        }
    }
}

impl SmsConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let provider = match std::env::var("SMS_PROVIDER").as_deref() {
            Ok("sens") => SmsProvider::Sens,
            _ => SmsProvider::Mock,
        };

        Self {
            provider,
            access_key: std::env::var("SENS_ACCESS_KEY").unwrap_or_default(),
            secret_key: std::env::var("SENS_SECRET_KEY").unwrap_or_default(),
            service_id: std::env::var("SENS_SERVICE_ID").unwrap_or_default(),
            sender_number: std::env::var("SENS_SENDER_NUMBER").unwrap_or_default(),
            api_base_url: std::env::var("SENS_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            request_timeout_secs: std::env::var("SMS_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
        }
    }

    /// Validate that every credential required by the gateway is present
    pub fn validate(&self) -> Result<(), String> {
        if self.provider == SmsProvider::Mock {
            return Ok(());
        }
        if self.access_key.is_empty() {
            return Err("SENS_ACCESS_KEY must be set".to_string());
        }
        if self.secret_key.is_empty() {
            return Err("SENS_SECRET_KEY must be set".to_string());
        }
        if self.service_id.is_empty() {
            return Err("SENS_SERVICE_ID must be set".to_string());
        }
        if self.sender_number.is_empty() {
            return Err("SENS_SENDER_NUMBER must be set".to_string());
        }
        Ok(())
    }
}

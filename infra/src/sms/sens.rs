//! NCP SENS SMS gateway client
//!
//! Sends verification codes through the SENS `messages` endpoint. Every
//! request carries an HMAC-SHA256 signature over the canonical string
//!
//! ```text
//! POST /sms/v2/services/{serviceId}/messages\n{timestampMillis}\n{accessKeyId}
//! ```
//!
//! base64-encoded into the `x-ncp-apigw-signature-v2` header, alongside the
//! timestamp and access key headers. Dispatch is a single attempt; retrying
//! would risk sending the same code twice.

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use tracing::{error, info};

use smil_core::services::verification::SmsServiceTrait;
use smil_shared::config::sms::SmsConfig;
use smil_shared::utils::phone::mask_phone;

use crate::InfrastructureError;

type HmacSha256 = Hmac<Sha256>;

/// SENS gateway client
pub struct SensSmsService {
    client: Client,
    access_key: String,
    secret_key: String,
    service_id: String,
    sender_number: String,
    api_base_url: String,
}

/// Request body for the SENS `messages` endpoint
#[derive(Debug, Serialize)]
struct SensMessageRequest {
    #[serde(rename = "type")]
    message_type: &'static str,
    from: String,
    content: String,
    messages: Vec<SensRecipient>,
}

#[derive(Debug, Serialize)]
struct SensRecipient {
    to: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SensMessageResponse {
    request_id: String,
    status_code: String,
    status_name: String,
}

impl SensSmsService {
    /// Create a gateway client from the SMS configuration
    ///
    /// Fails if any credential the gateway needs is missing or the HTTP
    /// client cannot be built.
    pub fn new(config: &SmsConfig) -> Result<Self, InfrastructureError> {
        config.validate().map_err(InfrastructureError::Config)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            access_key: config.access_key.clone(),
            secret_key: config.secret_key.clone(),
            service_id: config.service_id.clone(),
            sender_number: config.sender_number.clone(),
            api_base_url: config.api_base_url.clone(),
        })
    }

    fn message_path(&self) -> String {
        format!("/sms/v2/services/{}/messages", self.service_id)
    }

    /// Sign a request for the given timestamp
    ///
    /// The canonical string is `POST {path}\n{timestamp}\n{access_key}`,
    /// HMAC-SHA256 signed with the secret key and base64 encoded.
    fn signature(&self, timestamp_millis: i64) -> Result<String, InfrastructureError> {
        let canonical = format!(
            "POST {}\n{}\n{}",
            self.message_path(),
            timestamp_millis,
            self.access_key
        );

        let mut mac = HmacSha256::new_from_slice(self.secret_key.as_bytes())
            .map_err(|e| InfrastructureError::Sms(format!("Invalid secret key: {}", e)))?;
        mac.update(canonical.as_bytes());

        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }

    fn message_content(code: &str) -> String {
        format!("[SMIL] 인증번호: {}\n인증번호를 입력해 주세요.", code)
    }

    async fn send(&self, phone: &str, code: &str) -> Result<String, InfrastructureError> {
        let timestamp = Utc::now().timestamp_millis();
        let signature = self.signature(timestamp)?;
        let url = format!("{}{}", self.api_base_url, self.message_path());

        let body = SensMessageRequest {
            message_type: "SMS",
            from: self.sender_number.clone(),
            content: Self::message_content(code),
            messages: vec![SensRecipient {
                to: phone.to_string(),
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json; charset=utf-8")
            .header("x-ncp-apigw-timestamp", timestamp.to_string())
            .header("x-ncp-iam-access-key", &self.access_key)
            .header("x-ncp-apigw-signature-v2", signature)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::Sms(format!(
                "Gateway returned {}: {}",
                status, error_body
            )));
        }

        let parsed: SensMessageResponse = response.json().await?;

        info!(
            phone = %mask_phone(phone),
            request_id = %parsed.request_id,
            status_code = %parsed.status_code,
            status_name = %parsed.status_name,
            "SENS gateway accepted message"
        );

        Ok(parsed.request_id)
    }
}

#[async_trait]
impl SmsServiceTrait for SensSmsService {
    async fn send_verification_code(&self, phone: &str, code: &str) -> Result<String, String> {
        self.send(phone, code).await.map_err(|e| {
            error!(phone = %mask_phone(phone), error = %e, "SENS dispatch failed");
            e.to_string()
        })
    }
}

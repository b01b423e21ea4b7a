//! Mock SMS service for development and testing
//!
//! Logs verification codes instead of sending them, so the full
//! registration flow can run without gateway credentials.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use smil_core::services::verification::SmsServiceTrait;
use smil_shared::utils::phone::mask_phone;

/// Mock SMS service
///
/// Counts dispatched messages and can simulate gateway failure for
/// exercising error paths.
pub struct MockSmsService {
    message_count: AtomicU64,
    simulate_failure: bool,
}

impl MockSmsService {
    pub fn new() -> Self {
        Self {
            message_count: AtomicU64::new(0),
            simulate_failure: false,
        }
    }

    /// Mock that fails every send
    pub fn with_failure() -> Self {
        Self {
            message_count: AtomicU64::new(0),
            simulate_failure: true,
        }
    }

    /// Number of messages dispatched so far
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockSmsService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsServiceTrait for MockSmsService {
    async fn send_verification_code(&self, phone: &str, code: &str) -> Result<String, String> {
        if self.simulate_failure {
            return Err("Simulated SMS gateway failure".to_string());
        }

        self.message_count.fetch_add(1, Ordering::SeqCst);
        let message_id = format!("mock-{}", Uuid::new_v4());

        info!(
            phone = %mask_phone(phone),
            code = code,
            message_id = %message_id,
            "Mock SMS dispatched"
        );

        Ok(message_id)
    }
}

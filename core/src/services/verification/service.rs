//! Main verification service implementation

use constant_time_eq::constant_time_eq;
use std::sync::Arc;
use tracing;

use smil_shared::utils::phone::mask_phone;

use crate::domain::entities::verification_code;
use crate::errors::{AuthError, DomainError, DomainResult};

use super::config::VerificationConfig;
use super::traits::{CacheServiceTrait, SmsServiceTrait};

/// Verification service for handling SMS verification codes
///
/// The cache is the only state this service touches. Each phone number
/// holds at most one value at a time: a pending code after `send_code`,
/// or a kind marker after `confirm_code`.
pub struct VerificationService<S: SmsServiceTrait, C: CacheServiceTrait> {
    /// SMS service for sending messages
    sms_service: Arc<S>,
    /// Cache service for storing codes and markers
    cache_service: Arc<C>,
    /// Service configuration
    config: VerificationConfig,
}

impl<S: SmsServiceTrait, C: CacheServiceTrait> VerificationService<S, C> {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `sms_service` - SMS service implementation
    /// * `cache_service` - Cache service implementation
    /// * `config` - Service configuration
    pub fn new(sms_service: Arc<S>, cache_service: Arc<C>, config: VerificationConfig) -> Self {
        Self {
            sms_service,
            cache_service,
            config,
        }
    }

    /// Send a verification code to a phone number
    ///
    /// This method:
    /// 1. Generates a random 6-digit code
    /// 2. Dispatches it via SMS
    /// 3. Caches `phone -> code` with the configured TTL, replacing any
    ///    earlier pending value for that phone number
    ///
    /// The code is cached only after the gateway accepts the message, so a
    /// failed send leaves nothing confirmable behind.
    ///
    /// # Arguments
    ///
    /// * `phone` - The phone number to send the code to
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Code sent and cached
    /// * `Err(DomainError)` - SMS dispatch or cache write failed
    pub async fn send_code(&self, phone: &str) -> DomainResult<()> {
        let code = verification_code::generate();

        let message_id = self
            .sms_service
            .send_verification_code(phone, &code)
            .await
            .map_err(|e| {
                tracing::error!(
                    phone = %mask_phone(phone),
                    error = %e,
                    event = "code_send_failed",
                    "SMS gateway rejected verification code"
                );
                DomainError::Auth(AuthError::SmsServiceFailure { reason: e })
            })?;

        self.cache_service
            .set(phone, &code, self.config.code_ttl_seconds)
            .await
            .map_err(|e| {
                tracing::error!(
                    phone = %mask_phone(phone),
                    error = %e,
                    event = "code_cache_failed",
                    "Failed to store verification code in cache"
                );
                DomainError::Internal {
                    message: format!("Failed to store verification code: {}", e),
                }
            })?;

        tracing::info!(
            phone = %mask_phone(phone),
            message_id = %message_id,
            ttl_seconds = self.config.code_ttl_seconds,
            event = "code_dispatched",
            "Verification code sent and cached"
        );

        Ok(())
    }

    /// Confirm a submitted verification code
    ///
    /// This method:
    /// 1. Reads the cached code for the phone number
    /// 2. Compares it to the submission in constant time
    /// 3. On match, deletes the code and writes `phone -> kind` with the
    ///    verified-marker TTL
    ///
    /// An absent code and a wrong code fail with the same error value, so
    /// the caller cannot tell expiry from a bad guess. A matching code is
    /// consumed and cannot be confirmed twice.
    ///
    /// # Arguments
    ///
    /// * `kind` - Opaque verification purpose written as the marker value
    /// * `phone` - The phone number being confirmed
    /// * `code` - The submitted 6-digit code
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Code matched; the phone is now verified for `kind`
    /// * `Err(DomainError)` - Mismatch, missing code, or cache failure
    pub async fn confirm_code(&self, kind: &str, phone: &str, code: &str) -> DomainResult<()> {
        let stored = self.cache_service.get(phone).await.map_err(|e| {
            tracing::error!(
                phone = %mask_phone(phone),
                error = %e,
                event = "code_lookup_failed",
                "Failed to read verification code from cache"
            );
            DomainError::Internal {
                message: format!("Failed to read verification code: {}", e),
            }
        })?;

        let stored = match stored {
            Some(value) => value,
            None => {
                tracing::info!(
                    phone = %mask_phone(phone),
                    event = "code_rejected",
                    "No pending verification code"
                );
                return Err(AuthError::InvalidVerificationCode.into());
            }
        };

        if !constant_time_eq(stored.as_bytes(), code.as_bytes()) {
            tracing::info!(
                phone = %mask_phone(phone),
                event = "code_rejected",
                "Submitted verification code does not match"
            );
            return Err(AuthError::InvalidVerificationCode.into());
        }

        self.cache_service.delete(phone).await.map_err(|e| {
            DomainError::Internal {
                message: format!("Failed to clear verification code: {}", e),
            }
        })?;

        self.cache_service
            .set(phone, kind, self.config.verified_ttl_seconds)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to store verification marker: {}", e),
            })?;

        tracing::info!(
            phone = %mask_phone(phone),
            kind = kind,
            ttl_seconds = self.config.verified_ttl_seconds,
            event = "code_confirmed",
            "Phone number verified"
        );

        Ok(())
    }

    /// Check whether a phone number currently holds a verified marker
    /// for the given kind
    pub async fn is_verified(&self, kind: &str, phone: &str) -> DomainResult<bool> {
        let stored = self
            .cache_service
            .get(phone)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to read verification marker: {}", e),
            })?;

        Ok(stored.as_deref() == Some(kind))
    }

    /// Drop the verified marker for a phone number
    ///
    /// Called after the marker has served its purpose; deleting an absent
    /// key is a no-op.
    pub async fn consume_verification(&self, phone: &str) -> DomainResult<()> {
        self.cache_service
            .delete(phone)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to clear verification marker: {}", e),
            })
    }
}

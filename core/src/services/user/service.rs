//! Main user account service implementation

use std::sync::Arc;

use uuid::Uuid;

use smil_shared::utils::phone::mask_phone;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::verification::{CacheServiceTrait, SmsServiceTrait, VerificationService};

use super::config::UserServiceConfig;

/// Verification kind written to the cache when a phone is confirmed
/// for registration
pub const SIGNUP_KIND: &str = "signup";

/// User account service for registration and deletion
pub struct UserService<U, S, C>
where
    U: UserRepository,
    S: SmsServiceTrait,
    C: CacheServiceTrait,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Verification service guarding registration behind phone confirmation
    verification_service: Arc<VerificationService<S, C>>,
    /// Service configuration
    config: UserServiceConfig,
}

impl<U, S, C> UserService<U, S, C>
where
    U: UserRepository,
    S: SmsServiceTrait,
    C: CacheServiceTrait,
{
    /// Create a new user account service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `verification_service` - Service for SMS phone confirmation
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        verification_service: Arc<VerificationService<S, C>>,
        config: UserServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            verification_service,
            config,
        }
    }

    /// Check that an email address is not already registered
    ///
    /// Soft-deleted accounts still occupy their email.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Email is available
    /// * `Err(DomainError)` - `AuthError::EmailAlreadyRegistered` if taken
    pub async fn check_email_available(&self, email: &str) -> DomainResult<()> {
        if self.user_repository.exists_by_email(email).await? {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }
        Ok(())
    }

    /// Check that a nickname is not already taken
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Nickname is available
    /// * `Err(DomainError)` - `AuthError::NicknameAlreadyTaken` if taken
    pub async fn check_nickname_available(&self, nickname: &str) -> DomainResult<()> {
        if self.user_repository.exists_by_nickname(nickname).await? {
            return Err(AuthError::NicknameAlreadyTaken.into());
        }
        Ok(())
    }

    /// Begin phone verification for registration
    ///
    /// This method:
    /// 1. Rejects phone numbers already attached to an account
    /// 2. Dispatches a verification code via SMS
    ///
    /// # Arguments
    ///
    /// * `phone_number` - Phone number exactly as the client submitted it
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Code sent
    /// * `Err(DomainError)` - `PhoneAlreadyRegistered`, or the send failed
    pub async fn start_phone_verification(&self, phone_number: &str) -> DomainResult<()> {
        if self.user_repository.exists_by_phone(phone_number).await? {
            return Err(AuthError::PhoneAlreadyRegistered.into());
        }

        self.verification_service.send_code(phone_number).await
    }

    /// Confirm a submitted verification code for registration
    ///
    /// On success the phone number holds a `signup` marker until the marker
    /// TTL runs out or registration consumes it. Mismatch and expiry fail
    /// with the same error value.
    ///
    /// # Arguments
    ///
    /// * `phone_number` - Phone number the code was sent to
    /// * `code` - The submitted 6-digit code
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Phone verified for registration
    /// * `Err(DomainError)` - `InvalidVerificationCode`, or a cache failure
    pub async fn confirm_phone_verification(
        &self,
        phone_number: &str,
        code: &str,
    ) -> DomainResult<()> {
        self.verification_service
            .confirm_code(SIGNUP_KIND, phone_number, code)
            .await
    }

    /// Register a new user
    ///
    /// This method:
    /// 1. Requires a `signup` verification marker for the phone number
    /// 2. Re-checks email, nickname, and phone uniqueness
    /// 3. Hashes the password with bcrypt
    /// 4. Persists the user
    /// 5. Consumes the verification marker, best effort
    ///
    /// The uniqueness pre-checks race with concurrent registrations; a
    /// duplicate that slips through surfaces from the repository as
    /// `AuthError::UserAlreadyExists`.
    ///
    /// # Arguments
    ///
    /// * `new_user` - Plaintext registration input
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError)` - Verification, uniqueness, or persistence failed
    pub async fn register(&self, new_user: NewUser) -> DomainResult<User> {
        let verified = self
            .verification_service
            .is_verified(SIGNUP_KIND, &new_user.phone_number)
            .await?;
        if !verified {
            tracing::info!(
                phone = %mask_phone(&new_user.phone_number),
                event = "registration_rejected",
                "Registration attempted without verified phone"
            );
            return Err(AuthError::PhoneNotVerified.into());
        }

        self.check_email_available(&new_user.email).await?;
        self.check_nickname_available(&new_user.nickname).await?;
        if self
            .user_repository
            .exists_by_phone(&new_user.phone_number)
            .await?
        {
            return Err(AuthError::PhoneAlreadyRegistered.into());
        }

        let password_hash =
            bcrypt::hash(&new_user.password, self.config.bcrypt_cost).map_err(|e| {
                tracing::error!(
                    error = %e,
                    event = "password_hash_failed",
                    "Failed to hash password"
                );
                DomainError::Internal {
                    message: "Password hashing failed".to_string(),
                }
            })?;

        let user = User::new(
            new_user.email,
            new_user.nickname,
            new_user.phone_number,
            password_hash,
        );
        let user = self.user_repository.create(user).await?;

        // The marker has served its purpose; a failure here only means it
        // lingers until its TTL runs out.
        if let Err(e) = self
            .verification_service
            .consume_verification(&user.phone_number)
            .await
        {
            tracing::warn!(
                user_id = %user.id,
                error = %e,
                event = "marker_cleanup_failed",
                "Could not consume verification marker after registration"
            );
        }

        tracing::info!(
            user_id = %user.id,
            event = "user_registered",
            "New user registered"
        );

        Ok(user)
    }

    /// Soft-delete a user account
    ///
    /// # Arguments
    ///
    /// * `user_id` - ID of the account to delete
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Account marked deleted
    /// * `Err(DomainError)` - `NotFound` when no live account has this ID
    pub async fn delete_account(&self, user_id: Uuid) -> DomainResult<()> {
        let deleted = self.user_repository.soft_delete(user_id).await?;
        if !deleted {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }

        tracing::info!(
            user_id = %user_id,
            event = "user_deleted",
            "User account soft-deleted"
        );

        Ok(())
    }
}

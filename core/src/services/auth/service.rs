//! Main authentication service implementation

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::token::{AccessToken, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

/// Authentication service for sign-in and the token lifecycle
///
/// Every failure on the sign-in path collapses into one error value.
/// Unknown email, deleted account, and wrong password are indistinguishable
/// from the outside.
pub struct AuthService<U: UserRepository> {
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
}

impl<U: UserRepository> AuthService<U> {
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for JWT issuance and verification
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Sign a user in with email and password
    ///
    /// This method:
    /// 1. Looks the user up by email
    /// 2. Rejects missing and soft-deleted users
    /// 3. Verifies the password against the stored bcrypt hash
    /// 4. Issues an access and refresh token pair
    ///
    /// # Arguments
    ///
    /// * `email` - Email address as submitted
    /// * `password` - Plaintext password as submitted
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Credentials check out
    /// * `Err(DomainError)` - `AuthError::InvalidCredentials` for every
    ///   credential failure, `Internal` for a corrupt stored hash
    pub async fn sign_in(&self, email: &str, password: &str) -> DomainResult<TokenPair> {
        let user = self.user_repository.find_by_email(email).await?;

        let user = match user {
            Some(user) if !user.is_deleted() => user,
            _ => {
                tracing::info!(event = "sign_in_rejected", "Sign-in failed");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self.verify_password(password, &user)? {
            tracing::info!(event = "sign_in_rejected", "Sign-in failed");
            return Err(AuthError::InvalidCredentials.into());
        }

        let pair = self.token_service.issue_pair(user.id)?;

        tracing::info!(
            user_id = %user.id,
            event = "sign_in_succeeded",
            "User signed in"
        );

        Ok(pair)
    }

    /// Issue a fresh access token for an existing user
    ///
    /// The user must still exist and must not be soft-deleted; the token is
    /// identical in shape and expiry to the one issued at sign-in.
    ///
    /// # Arguments
    ///
    /// * `user_id` - ID of the user the token is for
    ///
    /// # Returns
    ///
    /// * `Ok(AccessToken)` - Fresh access token
    /// * `Err(DomainError)` - `Unauthorized` if the user is gone
    pub async fn create_access_token(&self, user_id: Uuid) -> DomainResult<AccessToken> {
        self.require_live_user(user_id).await?;

        let token = self.token_service.issue_access_token(user_id)?;

        tracing::debug!(
            user_id = %user_id,
            event = "access_token_issued",
            "Issued access token"
        );

        Ok(token)
    }

    /// Exchange a refresh token for a fresh access token
    ///
    /// Verifies the refresh token (signature, expiry when present, subject
    /// must be `refresh`), then re-issues for the embedded user.
    ///
    /// # Arguments
    ///
    /// * `refresh_token` - The JWT refresh token
    ///
    /// # Returns
    ///
    /// * `Ok(AccessToken)` - Fresh access token for the token's user
    /// * `Err(DomainError)` - Bad token, or its user no longer exists
    pub async fn refresh_access_token(&self, refresh_token: &str) -> DomainResult<AccessToken> {
        let claims = self.token_service.verify_refresh_token(refresh_token)?;
        self.create_access_token(claims.id).await
    }

    /// Resolve a bearer access token to its user
    ///
    /// The guard contract for protected routes: the token must verify with
    /// subject `access`, and the embedded user must still exist and not be
    /// soft-deleted.
    ///
    /// # Arguments
    ///
    /// * `token` - The bearer token, without the `Bearer ` prefix
    ///
    /// # Returns
    ///
    /// * `Ok(Uuid)` - ID of the authenticated user
    /// * `Err(DomainError)` - Token or user failed any check
    pub async fn authorize_access_token(&self, token: &str) -> DomainResult<Uuid> {
        let claims = self.token_service.verify_access_token(token)?;
        self.require_live_user(claims.id).await?;
        Ok(claims.id)
    }

    async fn require_live_user(&self, user_id: Uuid) -> DomainResult<User> {
        match self.user_repository.find_by_id(user_id).await? {
            Some(user) if !user.is_deleted() => Ok(user),
            _ => Err(DomainError::Unauthorized),
        }
    }

    fn verify_password(&self, password: &str, user: &User) -> DomainResult<bool> {
        bcrypt::verify(password, &user.password_hash).map_err(|e| {
            tracing::error!(
                user_id = %user.id,
                error = %e,
                event = "password_verify_failed",
                "Stored password hash could not be verified"
            );
            DomainError::Internal {
                message: "Password verification failed".to_string(),
            }
        })
    }
}

//! Main token service implementation

use std::collections::HashSet;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{AccessToken, Claims, TokenPair, TokenSubject};
use crate::errors::{DomainError, TokenError};

use super::config::TokenConfig;

/// Service for issuing and verifying JWT tokens
///
/// Issuance is side-effect-free; nothing is persisted and a token remains
/// valid until its expiry. Verification enforces the subject claim, so an
/// access token can never stand in for a refresh token or the reverse.
pub struct TokenService {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        // Refresh tokens may carry no exp claim at all. Clearing the
        // required set lets them decode; expiry is still enforced whenever
        // the claim is present.
        validation.required_spec_claims = HashSet::new();
        validation.validate_exp = true;
        validation.validate_aud = false;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues an access and refresh token pair for a user
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Fresh pair, `expires_in` set to the access expiry
    /// * `Err(DomainError)` - Token encoding failed
    pub fn issue_pair(&self, user_id: Uuid) -> Result<TokenPair, DomainError> {
        let access = self.encode(&Claims::access(
            user_id,
            self.config.access_token_expiry_seconds,
        ))?;
        let refresh = self.encode(&Claims::refresh(
            user_id,
            self.config.refresh_token_expiry_seconds,
        ))?;

        Ok(TokenPair::new(
            access,
            refresh,
            self.config.access_token_expiry_seconds,
        ))
    }

    /// Issues a fresh access token for a user
    ///
    /// Identical in shape and expiry to the access half of `issue_pair`.
    pub fn issue_access_token(&self, user_id: Uuid) -> Result<AccessToken, DomainError> {
        let token = self.encode(&Claims::access(
            user_id,
            self.config.access_token_expiry_seconds,
        ))?;

        Ok(AccessToken::new(
            token,
            self.config.access_token_expiry_seconds,
        ))
    }

    /// Verifies an access token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature, expiry, and subject all check out
    /// * `Err(DomainError)` - Expired, malformed, or not an access token
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        let claims = self.decode(token)?;
        if claims.sub != TokenSubject::Access {
            return Err(TokenError::InvalidSubject.into());
        }
        Ok(claims)
    }

    /// Verifies a refresh token and returns its claims
    ///
    /// Tokens without an `exp` claim pass expiry validation.
    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims, DomainError> {
        let claims = self.decode(token)?;
        if claims.sub != TokenSubject::Refresh {
            return Err(TokenError::InvalidSubject.into());
        }
        Ok(claims)
    }

    fn encode(&self, claims: &Claims) -> Result<String, DomainError> {
        encode(&Header::default(), claims, &self.encoding_key).map_err(|e| {
            DomainError::Token(TokenError::GenerationFailed {
                reason: e.to_string(),
            })
        })
    }

    fn decode(&self, token: &str) -> Result<Claims, DomainError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                DomainError::Token(TokenError::TokenExpired)
            } else {
                DomainError::Token(TokenError::InvalidToken)
            }
        })?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(TokenConfig {
            secret: "unit-test-secret".to_string(),
            ..TokenConfig::default()
        })
    }

    #[test]
    fn test_issue_pair_subjects_and_ids() {
        let svc = service();
        let user_id = Uuid::new_v4();

        let pair = svc.issue_pair(user_id).unwrap();
        assert_eq!(pair.expires_in, 300);

        let access = svc.verify_access_token(&pair.access_token).unwrap();
        assert_eq!(access.sub, TokenSubject::Access);
        assert_eq!(access.id, user_id);
        assert_eq!(access.exp, Some(access.iat + 300));

        let refresh = svc.verify_refresh_token(&pair.refresh_token).unwrap();
        assert_eq!(refresh.sub, TokenSubject::Refresh);
        assert_eq!(refresh.id, user_id);
    }

    #[test]
    fn test_refresh_token_without_expiry_decodes() {
        let svc = service();
        let pair = svc.issue_pair(Uuid::new_v4()).unwrap();

        let claims = svc.verify_refresh_token(&pair.refresh_token).unwrap();
        assert_eq!(claims.exp, None);
    }

    #[test]
    fn test_refresh_expiry_from_config() {
        let svc = TokenService::new(TokenConfig {
            secret: "unit-test-secret".to_string(),
            refresh_token_expiry_seconds: Some(86_400),
            ..TokenConfig::default()
        });

        let pair = svc.issue_pair(Uuid::new_v4()).unwrap();
        let claims = svc.verify_refresh_token(&pair.refresh_token).unwrap();
        assert_eq!(claims.exp, Some(claims.iat + 86_400));
    }

    #[test]
    fn test_subject_mismatch_rejected() {
        let svc = service();
        let pair = svc.issue_pair(Uuid::new_v4()).unwrap();

        let err = svc.verify_access_token(&pair.refresh_token).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Token(TokenError::InvalidSubject)
        ));

        let err = svc.verify_refresh_token(&pair.access_token).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Token(TokenError::InvalidSubject)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let svc = service();
        // Expired well past the default validation leeway
        let token = svc
            .encode(&Claims::access(Uuid::new_v4(), -3600))
            .unwrap();

        let err = svc.verify_access_token(&token).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let svc = service();
        let pair = svc.issue_pair(Uuid::new_v4()).unwrap();

        let mut tampered = pair.access_token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'x' { 'y' } else { 'x' });

        let err = svc.verify_access_token(&tampered).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let svc = service();
        let other = TokenService::new(TokenConfig {
            secret: "a-different-secret".to_string(),
            ..TokenConfig::default()
        });

        let pair = svc.issue_pair(Uuid::new_v4()).unwrap();
        let err = other.verify_access_token(&pair.access_token).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let svc = service();
        let err = svc.verify_access_token("not-a-jwt").unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
    }
}

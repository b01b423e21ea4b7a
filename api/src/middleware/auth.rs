//! Bearer-token guard for protected routes
//!
//! Protected handlers take an [`AuthContext`] parameter; extracting it runs
//! the full access-token check (signature, expiry, `sub == access`, user
//! still exists and is not soft-deleted) through the verifier registered in
//! app data. Every failure, from a missing header to a deleted user, yields
//! the same 401 body as the rest of the Unauthorized class.

use std::sync::Arc;

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, Error, FromRequest, HttpRequest};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

use smil_core::errors::DomainResult;
use smil_core::repositories::UserRepository;
use smil_core::services::AuthService;

use crate::handlers::error::{extract_language, unauthorized_response};

/// Object-safe slice of the auth service consumed by the guard
///
/// Registered in app data as `Arc<dyn AccessTokenVerifier>` so route
/// registration does not need the service's generic parameters.
#[async_trait]
pub trait AccessTokenVerifier: Send + Sync {
    /// Resolve a bearer access token to the authenticated user's id
    async fn authorize_access_token(&self, token: &str) -> DomainResult<Uuid>;
}

#[async_trait]
impl<U: UserRepository> AccessTokenVerifier for AuthService<U> {
    async fn authorize_access_token(&self, token: &str) -> DomainResult<Uuid> {
        AuthService::authorize_access_token(self, token).await
    }
}

/// Authenticated user context injected into protected handlers
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    /// ID of the authenticated user
    pub user_id: Uuid,
}

fn extract_bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn unauthorized(req: &HttpRequest) -> Error {
    let response = unauthorized_response(extract_language(req));
    InternalError::from_response("unauthorized", response).into()
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let verifier = req
                .app_data::<web::Data<Arc<dyn AccessTokenVerifier>>>()
                .ok_or_else(|| {
                    tracing::error!("No AccessTokenVerifier registered in app data");
                    unauthorized(&req)
                })?;

            let token = extract_bearer_token(&req).ok_or_else(|| unauthorized(&req))?;

            let user_id = verifier
                .authorize_access_token(token)
                .await
                .map_err(|e| {
                    tracing::debug!(error = %e, path = req.path(), "Bearer token rejected");
                    unauthorized(&req)
                })?;

            Ok(AuthContext { user_id })
        })
    }
}

//! Soft account deletion

use actix_web::{web, HttpRequest, HttpResponse};
use tracing::info;

use smil_core::repositories::UserRepository;
use smil_core::services::verification::{CacheServiceTrait, SmsServiceTrait};

use crate::dto::users::MessageResponse;
use crate::handlers::error::to_response;
use crate::middleware::auth::AuthContext;

use super::AppState;

/// Handler for DELETE /api/v1/users
///
/// The guard extractor has already resolved the bearer token to a live
/// user; the account is marked deleted, never removed.
pub async fn delete_account<U, S, C>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, C>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SmsServiceTrait + 'static,
    C: CacheServiceTrait + 'static,
{
    match state.user_service.delete_account(auth.user_id).await {
        Ok(()) => {
            info!(user_id = %auth.user_id, "Account deleted");
            HttpResponse::Ok().json(MessageResponse::new("Account deleted"))
        }
        Err(error) => to_response(&error, &req),
    }
}

//! Access token re-issuance from a refresh token

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use smil_core::repositories::UserRepository;
use smil_core::services::verification::{CacheServiceTrait, SmsServiceTrait};

use crate::dto::users::{RefreshRequest, RefreshResponse};
use crate::handlers::error::{to_response, validation_response};

use super::AppState;

/// Handler for POST /api/v1/users/refresh
///
/// The refresh token travels in the body, not the Authorization header.
/// It must verify with subject `refresh` and its user must still exist;
/// any failure is the uniform 401.
pub async fn refresh<U, S, C>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, C>>,
    request: web::Json<RefreshRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SmsServiceTrait + 'static,
    C: CacheServiceTrait + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_response(&errors, &req);
    }

    match state
        .auth_service
        .refresh_access_token(&request.refresh_token)
        .await
    {
        Ok(token) => HttpResponse::Ok().json(RefreshResponse {
            access_token: token.token,
            expires_in: token.expires_in,
        }),
        Err(error) => to_response(&error, &req),
    }
}

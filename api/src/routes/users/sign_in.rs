//! Email and password sign-in

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use smil_core::repositories::UserRepository;
use smil_core::services::verification::{CacheServiceTrait, SmsServiceTrait};

use crate::dto::users::{SignInRequest, SignInResponse};
use crate::handlers::error::{to_response, validation_response};

use super::AppState;

/// Handler for POST /api/v1/users/sign-in
///
/// Returns the access and refresh token pair. Unknown email, deleted
/// account, and wrong password all produce the identical 401.
pub async fn sign_in<U, S, C>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, C>>,
    request: web::Json<SignInRequest>,
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
        .sign_in(&request.email, &request.password)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(SignInResponse {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            expires_in: pair.expires_in,
        }),
        Err(error) => to_response(&error, &req),
    }
}

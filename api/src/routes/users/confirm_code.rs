//! Verification code confirmation

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use smil_core::repositories::UserRepository;
use smil_core::services::verification::{CacheServiceTrait, SmsServiceTrait};

use crate::dto::users::{ConfirmCodeRequest, MessageResponse};
use crate::handlers::error::{to_response, validation_response};

use super::AppState;

/// Handler for POST /api/v1/users/confirm/code
///
/// Compares the submitted code against the cached one; on match the phone
/// number holds a marker for the requested kind until registration consumes
/// it. Wrong, expired, and never-sent codes all return the uniform 401.
pub async fn confirm_code<U, S, C>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, C>>,
    request: web::Json<ConfirmCodeRequest>,
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
        .verification_service
        .confirm_code(&request.kind, &request.phone_number, &request.code)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Phone number verified")),
        Err(error) => to_response(&error, &req),
    }
}

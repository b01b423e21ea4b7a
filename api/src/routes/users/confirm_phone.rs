//! Phone uniqueness check and verification code dispatch

use actix_web::{web, HttpRequest, HttpResponse};
use tracing::info;
use validator::Validate;

use smil_core::repositories::UserRepository;
use smil_core::services::verification::{CacheServiceTrait, SmsServiceTrait};
use smil_shared::utils::phone::mask_phone;

use crate::dto::users::{ConfirmPhoneRequest, MessageResponse};
use crate::handlers::error::{to_response, validation_response};

use super::AppState;

/// Handler for POST /api/v1/users/confirm/phone
///
/// Rejects phone numbers already attached to an account (409), then
/// dispatches a verification code via SMS. A gateway failure surfaces as
/// 503 with a generic body.
pub async fn confirm_phone<U, S, C>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, C>>,
    request: web::Json<ConfirmPhoneRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SmsServiceTrait + 'static,
    C: CacheServiceTrait + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_response(&errors, &req);
    }

    info!(
        phone = %mask_phone(&request.phone_number),
        "Phone verification requested"
    );

    match state
        .user_service
        .start_phone_verification(&request.phone_number)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Verification code sent")),
        Err(error) => to_response(&error, &req),
    }
}

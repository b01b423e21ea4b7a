//! Email availability check

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use smil_core::repositories::UserRepository;
use smil_core::services::verification::{CacheServiceTrait, SmsServiceTrait};

use crate::dto::users::{ConfirmEmailRequest, MessageResponse};
use crate::handlers::error::{to_response, validation_response};

use super::AppState;

/// Handler for POST /api/v1/users/confirm/email
///
/// Returns 200 when the email is free, 409 `EMAIL_ALREADY_REGISTERED` when
/// taken. Soft-deleted accounts still occupy their email.
pub async fn confirm_email<U, S, C>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, C>>,
    request: web::Json<ConfirmEmailRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SmsServiceTrait + 'static,
    C: CacheServiceTrait + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_response(&errors, &req);
    }

    match state.user_service.check_email_available(&request.email).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Email is available")),
        Err(error) => to_response(&error, &req),
    }
}

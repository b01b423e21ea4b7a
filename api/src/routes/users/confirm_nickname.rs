//! Nickname availability check

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use smil_core::repositories::UserRepository;
use smil_core::services::verification::{CacheServiceTrait, SmsServiceTrait};

use crate::dto::users::{ConfirmNicknameRequest, MessageResponse};
use crate::handlers::error::{to_response, validation_response};

use super::AppState;

/// Handler for POST /api/v1/users/confirm/nickname
///
/// Returns 200 when the nickname is free, 409 `NICKNAME_ALREADY_TAKEN`
/// when taken.
pub async fn confirm_nickname<U, S, C>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, C>>,
    request: web::Json<ConfirmNicknameRequest>,
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
        .user_service
        .check_nickname_available(&request.nickname)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Nickname is available")),
        Err(error) => to_response(&error, &req),
    }
}

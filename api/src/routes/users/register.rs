//! User registration

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use smil_core::domain::entities::user::NewUser;
use smil_core::repositories::UserRepository;
use smil_core::services::verification::{CacheServiceTrait, SmsServiceTrait};

use crate::dto::users::{RegisterRequest, RegisterResponse};
use crate::handlers::error::{to_response, validation_response};

use super::AppState;

/// Handler for POST /api/v1/users
///
/// Requires a prior phone confirmation (403 `PHONE_NOT_VERIFIED` without
/// one); duplicate email, nickname, or phone yield specific 409 conflicts.
/// Returns 201 with the new user's id.
pub async fn register<U, S, C>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, C>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SmsServiceTrait + 'static,
    C: CacheServiceTrait + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_response(&errors, &req);
    }

    let request = request.into_inner();
    let new_user = NewUser {
        email: request.email,
        nickname: request.nickname,
        phone_number: request.phone_number,
        password: request.password,
    };

    match state.user_service.register(new_user).await {
        Ok(user) => HttpResponse::Created().json(RegisterResponse { id: user.id }),
        Err(error) => to_response(&error, &req),
    }
}

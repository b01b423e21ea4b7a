//! Application factory
//!
//! Builds the actix-web `App` from the shared service state. The guard's
//! verifier is registered separately as a trait object so the protected
//! routes stay independent of the state's generic parameters.

use std::sync::Arc;

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use smil_core::repositories::UserRepository;
use smil_core::services::verification::{CacheServiceTrait, SmsServiceTrait};
use smil_shared::config::Environment;
use smil_shared::types::ErrorResponse;

use crate::middleware::auth::AccessTokenVerifier;
use crate::middleware::cors::create_cors;
use crate::routes::health::health_check;
use crate::routes::users::{
    confirm_code, confirm_email, confirm_nickname, confirm_phone, delete_account, refresh,
    register, sign_in, AppState,
};

/// Create and configure the application with all dependencies
pub fn create_app<U, S, C>(
    app_state: web::Data<AppState<U, S, C>>,
    verifier: web::Data<Arc<dyn AccessTokenVerifier>>,
    environment: &Environment,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    S: SmsServiceTrait + 'static,
    C: CacheServiceTrait + 'static,
{
    let cors = create_cors(environment);

    App::new()
        .app_data(app_state)
        .app_data(verifier)
        .wrap(TracingLogger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1").service(
                web::scope("/users")
                    .route("/confirm/email", web::post().to(confirm_email::<U, S, C>))
                    .route(
                        "/confirm/nickname",
                        web::post().to(confirm_nickname::<U, S, C>),
                    )
                    .route("/confirm/phone", web::post().to(confirm_phone::<U, S, C>))
                    .route("/confirm/code", web::post().to(confirm_code::<U, S, C>))
                    .route("/sign-in", web::post().to(sign_in::<U, S, C>))
                    .route("/refresh", web::post().to(refresh::<U, S, C>))
                    .service(
                        web::resource("")
                            .route(web::post().to(register::<U, S, C>))
                            .route(web::delete().to(delete_account::<U, S, C>)),
                    ),
            ),
        )
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "NOT_FOUND",
        "The requested resource was not found.",
    ))
}

//! SMIL API server entry point
//!
//! Loads configuration from the environment once, wires the concrete
//! infrastructure into the core services, and serves the HTTP API. Services
//! receive configuration as plain values; nothing below this file reads
//! environment variables.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use smil_core::services::token::{TokenConfig, TokenService};
use smil_core::services::verification::{SmsServiceTrait, VerificationConfig, VerificationService};
use smil_core::services::{AuthService, UserService, UserServiceConfig};
use smil_infra::cache::{RedisClient, VerificationCache};
use smil_infra::database::{DatabasePool, MySqlUserRepository};
use smil_infra::sms::{MockSmsService, SensSmsService};
use smil_shared::config::{AppConfig, SmsProvider};

use smil_api::app::create_app;
use smil_api::middleware::auth::AccessTokenVerifier;
use smil_api::routes::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    config
        .validate()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Invalid configuration")?;

    info!(
        environment = %config.environment,
        bind = %config.server.bind_address(),
        "Starting SMIL API server"
    );

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("Failed to connect to the database")?;

    let redis_client = RedisClient::new(config.cache.clone())
        .await
        .context("Failed to connect to Redis")?;

    match config.sms.provider {
        SmsProvider::Sens => {
            let sms_service = SensSmsService::new(&config.sms)
                .context("Failed to construct the SMS gateway client")?;
            run_server(config, pool, redis_client, Arc::new(sms_service)).await
        }
        SmsProvider::Mock => {
            info!("SMS_PROVIDER is 'mock'; verification codes will only be logged");
            run_server(config, pool, redis_client, Arc::new(MockSmsService::new())).await
        }
    }
}

/// Wire the services for the chosen SMS backend and serve until shutdown
async fn run_server<S>(
    config: AppConfig,
    pool: DatabasePool,
    redis_client: RedisClient,
    sms_service: Arc<S>,
) -> anyhow::Result<()>
where
    S: SmsServiceTrait + 'static,
{
    let user_repository = Arc::new(MySqlUserRepository::new(pool.pool().clone()));
    let cache_service = Arc::new(VerificationCache::new(redis_client));

    let verification_service = Arc::new(VerificationService::new(
        sms_service,
        cache_service,
        VerificationConfig {
            code_ttl_seconds: config.verification.code_ttl_seconds,
            verified_ttl_seconds: config.verification.verified_ttl_seconds,
        },
    ));

    let token_service = Arc::new(TokenService::new(TokenConfig {
        secret: config.jwt.secret.clone(),
        access_token_expiry_seconds: config.jwt.access_token_expiry_seconds,
        refresh_token_expiry_seconds: config.jwt.refresh_token_expiry_seconds,
    }));

    let auth_service = Arc::new(AuthService::new(user_repository.clone(), token_service));
    let user_service = Arc::new(UserService::new(
        user_repository,
        verification_service.clone(),
        UserServiceConfig::default(),
    ));

    let verifier: Arc<dyn AccessTokenVerifier> = auth_service.clone();
    let verifier = web::Data::new(verifier);

    let app_state = web::Data::new(AppState {
        auth_service,
        user_service,
        verification_service,
    });

    let bind_address = config.server.bind_address();
    let environment = config.environment;

    info!(bind = %bind_address, "SMIL API server listening");

    HttpServer::new(move || create_app(app_state.clone(), verifier.clone(), &environment))
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("Server terminated with an error")
}

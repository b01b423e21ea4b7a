//! Redis client with connection management and retry logic
//!
//! Wraps a multiplexed Redis connection and retries transient failures with
//! exponential backoff. Non-retriable errors (wrong types, script errors)
//! surface immediately.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client, RedisError, RedisResult};
use tokio::time::sleep;
use tracing::{error, info, warn};

use smil_shared::config::cache::CacheConfig;

use crate::InfrastructureError;

/// Default number of retries for transient failures
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Initial delay between retries in milliseconds
const DEFAULT_RETRY_DELAY_MS: u64 = 100;

/// Upper bound for the backoff delay in milliseconds
const MAX_RETRY_DELAY_MS: u64 = 5000;

/// Redis client for cache operations
///
/// The underlying multiplexed connection is cheap to clone and shared across
/// all operations.
#[derive(Clone)]
pub struct RedisClient {
    connection: MultiplexedConnection,
    max_retries: u32,
    retry_delay_ms: u64,
}

impl RedisClient {
    /// Connect to Redis using the default retry settings
    pub async fn new(config: CacheConfig) -> Result<Self, InfrastructureError> {
        Self::with_retry_config(config, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_MS).await
    }

    /// Connect to Redis with explicit retry settings
    pub async fn with_retry_config(
        config: CacheConfig,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<Self, InfrastructureError> {
        let client = Client::open(config.url.as_str())?;
        let connection =
            Self::connect_with_retry(&client, &config.url, max_retries, retry_delay_ms).await?;

        info!(url = %mask_url(&config.url), "Connected to Redis");

        Ok(Self {
            connection,
            max_retries,
            retry_delay_ms,
        })
    }

    async fn connect_with_retry(
        client: &Client,
        url: &str,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<MultiplexedConnection, InfrastructureError> {
        let mut delay_ms = retry_delay_ms;
        let mut attempt = 0;

        loop {
            match client.get_multiplexed_tokio_connection().await {
                Ok(connection) => return Ok(connection),
                Err(e) if attempt < max_retries => {
                    attempt += 1;
                    warn!(
                        url = %mask_url(url),
                        attempt = attempt,
                        max_retries = max_retries,
                        delay_ms = delay_ms,
                        error = %e,
                        "Redis connection failed, retrying"
                    );
                    sleep(Duration::from_millis(delay_ms)).await;
                    delay_ms = (delay_ms * 2).min(MAX_RETRY_DELAY_MS);
                }
                Err(e) => {
                    error!(url = %mask_url(url), error = %e, "Could not connect to Redis");
                    return Err(InfrastructureError::Cache(e));
                }
            }
        }
    }

    /// Store a value under a key with an expiration time in seconds
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        let key = key.to_string();
        let value = value.to_string();

        self.execute_with_retry("SETEX", move |mut conn| {
            let key = key.clone();
            let value = value.clone();
            Box::pin(async move { conn.set_ex::<_, _, ()>(key, value, expiry_seconds).await })
        })
        .await
    }

    /// Read the value stored under a key
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        let key = key.to_string();

        self.execute_with_retry("GET", move |mut conn| {
            let key = key.clone();
            Box::pin(async move { conn.get::<_, Option<String>>(key).await })
        })
        .await
    }

    /// Delete a key, returning whether it existed
    pub async fn delete(&self, key: &str) -> Result<bool, InfrastructureError> {
        let key = key.to_string();

        let removed: u32 = self
            .execute_with_retry("DEL", move |mut conn| {
                let key = key.clone();
                Box::pin(async move { conn.del::<_, u32>(key).await })
            })
            .await?;

        Ok(removed > 0)
    }

    /// Ping the server to verify the connection is alive
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        self.execute_with_retry("PING", |mut conn| {
            Box::pin(async move {
                redis::cmd("PING")
                    .query_async::<_, String>(&mut conn)
                    .await
            })
        })
        .await?;

        Ok(true)
    }

    /// Run an operation against the shared connection, retrying transient
    /// failures with exponential backoff.
    async fn execute_with_retry<T, F>(
        &self,
        operation_name: &str,
        operation: F,
    ) -> Result<T, InfrastructureError>
    where
        F: Fn(MultiplexedConnection) -> Pin<Box<dyn Future<Output = RedisResult<T>> + Send>>,
    {
        let mut delay_ms = self.retry_delay_ms;
        let mut attempt = 0;

        loop {
            match operation(self.connection.clone()).await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.max_retries && is_retriable_error(&e) => {
                    attempt += 1;
                    warn!(
                        operation = operation_name,
                        attempt = attempt,
                        max_retries = self.max_retries,
                        delay_ms = delay_ms,
                        error = %e,
                        "Retrying Redis operation after transient error"
                    );
                    sleep(Duration::from_millis(delay_ms)).await;
                    delay_ms = (delay_ms * 2).min(MAX_RETRY_DELAY_MS);
                }
                Err(e) => {
                    error!(
                        operation = operation_name,
                        attempts = attempt + 1,
                        error = %e,
                        "Redis operation failed"
                    );
                    return Err(InfrastructureError::Cache(e));
                }
            }
        }
    }
}

/// Whether an error is worth retrying
pub(crate) fn is_retriable_error(error: &RedisError) -> bool {
    error.is_connection_dropped()
        || error.is_connection_refusal()
        || error.is_timeout()
        || error.is_io_error()
}

/// Mask credentials in a Redis URL for log output
pub(crate) fn mask_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}****{}", &url[..scheme_end + 3], &url[at..])
        }
        _ => url.to_string(),
    }
}

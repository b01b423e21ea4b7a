//! MySQL implementation of the user repository
//!
//! Users live in a single `users` table with UUIDs stored as `CHAR(36)`
//! text. Soft-deleted rows stay in place: lookups return them and the
//! uniqueness checks count them, so an email, nickname, or phone number
//! remains occupied after account deletion.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use smil_core::domain::entities::User;
use smil_core::errors::{AuthError, DomainError};
use smil_core::repositories::UserRepository;

const USER_COLUMNS: &str =
    "id, email, nickname, phone_number, password_hash, created_at, updated_at, deleted_at";

/// MySQL-backed user repository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a repository over an existing connection pool
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &MySqlRow) -> Result<User, sqlx::Error> {
        let id_text: String = row.try_get("id")?;
        let id = Uuid::parse_str(&id_text).map_err(|e| sqlx::Error::ColumnDecode {
            index: "id".to_string(),
            source: Box::new(e),
        })?;

        Ok(User {
            id,
            email: row.try_get("email")?,
            nickname: row.try_get("nickname")?,
            phone_number: row.try_get("phone_number")?,
            password_hash: row.try_get("password_hash")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            deleted_at: row.try_get("deleted_at")?,
        })
    }
}

fn db_error(e: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("Database error: {}", e),
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE email = ? LIMIT 1", USER_COLUMNS);
        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        match row {
            Some(row) => Ok(Some(Self::row_to_user(&row).map_err(db_error)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", USER_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        match row {
            Some(row) => Ok(Some(Self::row_to_user(&row).map_err(db_error)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?) AS user_exists")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        let exists: i8 = row.try_get("user_exists").map_err(db_error)?;
        Ok(exists == 1)
    }

    async fn exists_by_nickname(&self, nickname: &str) -> Result<bool, DomainError> {
        let row =
            sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE nickname = ?) AS user_exists")
                .bind(nickname)
                .fetch_one(&self.pool)
                .await
                .map_err(db_error)?;

        let exists: i8 = row.try_get("user_exists").map_err(db_error)?;
        Ok(exists == 1)
    }

    async fn exists_by_phone(&self, phone_number: &str) -> Result<bool, DomainError> {
        let row =
            sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE phone_number = ?) AS user_exists")
                .bind(phone_number)
                .fetch_one(&self.pool)
                .await
                .map_err(db_error)?;

        let exists: i8 = row.try_get("user_exists").map_err(db_error)?;
        Ok(exists == 1)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        sqlx::query(
            "INSERT INTO users \
             (id, email, nickname, phone_number, password_hash, created_at, updated_at, deleted_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.nickname)
        .bind(&user.phone_number)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .bind(user.updated_at)
        .bind(user.deleted_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.kind() == sqlx::error::ErrorKind::UniqueViolation {
                    return DomainError::Auth(AuthError::UserAlreadyExists);
                }
            }
            db_error(e)
        })?;

        Ok(user)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let now = Utc::now();
        let result = sqlx::query(
            "UPDATE users SET deleted_at = ?, updated_at = ? \
             WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(now)
        .bind(now)
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

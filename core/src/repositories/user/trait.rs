//! User repository trait defining the interface for user data persistence.
//!
//! This module defines the repository pattern interface for User entities.
//! The trait is async-first and uses Result types for proper error handling.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// This trait defines the contract for data access operations related to
/// users. Implementations handle the actual database operations while
/// maintaining the abstraction boundary between domain and infrastructure.
///
/// Lookups return soft-deleted users as well; visibility policy belongs to
/// the calling service. Uniqueness checks span soft-deleted rows, so an
/// email, nickname, or phone number stays occupied after account deletion.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their email address
    ///
    /// # Arguments
    /// * `email` - Email address exactly as submitted at registration
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found (possibly soft-deleted)
    /// * `Ok(None)` - No user with the given email
    /// * `Err(DomainError)` - Database or other error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use smil_core::repositories::UserRepository;
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// match repo.find_by_email("jane@example.com").await? {
    ///     Some(user) => println!("User found: {}", user.id),
    ///     None => println!("User not found"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    ///
    /// # Arguments
    /// * `id` - The UUID of the user
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found (possibly soft-deleted)
    /// * `Ok(None)` - No user with the given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Check whether a user exists with the given email address
    ///
    /// # Returns
    /// * `Ok(true)` - A row (live or soft-deleted) occupies the email
    /// * `Ok(false)` - Email is available
    /// * `Err(DomainError)` - Database error occurred
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Check whether a user exists with the given nickname
    ///
    /// # Returns
    /// * `Ok(true)` - A row (live or soft-deleted) occupies the nickname
    /// * `Ok(false)` - Nickname is available
    /// * `Err(DomainError)` - Database error occurred
    async fn exists_by_nickname(&self, nickname: &str) -> Result<bool, DomainError>;

    /// Check whether a user exists with the given phone number
    ///
    /// # Arguments
    /// * `phone_number` - Phone number string exactly as the client submitted it
    ///
    /// # Returns
    /// * `Ok(true)` - A row (live or soft-deleted) occupies the phone number
    /// * `Ok(false)` - Phone number is available
    /// * `Err(DomainError)` - Database error occurred
    async fn exists_by_phone(&self, phone_number: &str) -> Result<bool, DomainError>;

    /// Create a new user in the repository
    ///
    /// # Arguments
    /// * `user` - The User entity to persist
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError)` - Creation failed; a unique-constraint violation
    ///   maps to `AuthError::UserAlreadyExists`
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Soft-delete a user by setting their deletion timestamp
    ///
    /// Already-deleted users are not touched again.
    ///
    /// # Arguments
    /// * `id` - The UUID of the user to delete
    ///
    /// # Returns
    /// * `Ok(true)` - A live user was marked deleted
    /// * `Ok(false)` - No live user with the given ID
    /// * `Err(DomainError)` - Deletion failed
    ///
    /// # Example
    /// ```no_run
    /// # use uuid::Uuid;
    /// # use smil_core::repositories::UserRepository;
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let user_id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000")?;
    ///
    /// if repo.soft_delete(user_id).await? {
    ///     println!("User deleted");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn soft_delete(&self, id: Uuid) -> Result<bool, DomainError>;
}

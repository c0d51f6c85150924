//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and keeps storage details behind the
//! infrastructure boundary; implementations convert their own failures into
//! `DomainError::Internal`.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use reel_core::repositories::UserRepository;
/// use reel_core::domain::entities::user::{NewUser, User};
/// use reel_core::errors::DomainError;
///
/// struct MySqlUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for MySqlUserRepository {
///     async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
///         Ok(None)
///     }
///
///     async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
///         Ok(None)
///     }
///
///     async fn create(&self, user: NewUser) -> Result<User, DomainError> {
///         unimplemented!()
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with this email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Persist a new user and return it with its assigned id and timestamps
    ///
    /// # Errors
    /// * `AuthError::UserAlreadyExists` - Email is already taken
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;
}

use async_trait::async_trait;

use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::PublicUser;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserChanges;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for account/authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// The plaintext password is hashed before anything is persisted.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn register(&self, command: RegisterCommand) -> Result<PublicUser, UserError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No user with this email, or the password
    ///   does not match. The two cases are indistinguishable to the caller.
    /// * `DatabaseError` - Store operation failed
    async fn authenticate(&self, email: &str, password: &str)
        -> Result<LoginOutcome, UserError>;

    /// Retrieve all users, password digests stripped.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_users(&self) -> Result<Vec<PublicUser>, UserError>;

    /// Retrieve a user by identifier.
    ///
    /// `None` is a valid non-error result; the HTTP mapping of an absent
    /// record is the caller's decision.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn get_user(&self, id: &UserId) -> Result<Option<PublicUser>, UserError>;

    /// Apply a partial update; a new password is hashed before forwarding.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist (raised by the store)
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<PublicUser, UserError>;

    /// Delete an existing user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Store operation failed
    async fn delete_user(&self, id: &UserId) -> Result<(), UserError>;
}

/// Persistence operations for user records.
///
/// The store is the final arbiter of email uniqueness; service-level
/// pre-checks are an optimization, not the guard.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve a user by email address.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve a user by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve all users.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_all(&self) -> Result<Vec<User>, UserError>;

    /// Apply a partial update and return the stored record.
    ///
    /// Refreshes `updated_at`.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn update(&self, id: &UserId, changes: UserChanges) -> Result<User, UserError>;

    /// Remove a user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Store operation failed
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;
}

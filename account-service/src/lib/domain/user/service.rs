use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Claims;
use auth::JwtError;
use chrono::Utc;

use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::PublicUser;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserChanges;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for account and authentication operations.
///
/// Constructed once at startup with injected dependencies and passed into
/// the router; holds no mutable state and no cached user records.
pub struct AuthService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    authenticator: Authenticator,
    token_ttl_hours: i64,
}

impl<R> AuthService<R>
where
    R: UserRepository,
{
    /// Create a new service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `jwt_secret` - Shared signing secret, read-only after startup
    /// * `token_ttl_hours` - Bearer token lifetime
    pub fn new(repository: Arc<R>, jwt_secret: &[u8], token_ttl_hours: i64) -> Self {
        Self {
            repository,
            authenticator: Authenticator::new(jwt_secret),
            token_ttl_hours,
        }
    }

    /// Validate a bearer token and return its claims.
    ///
    /// Pure check of signature and expiry; trusts nothing beyond that.
    pub fn verify_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.authenticator.validate_token(token)
    }
}

#[async_trait]
impl<R> AuthServicePort for AuthService<R>
where
    R: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<PublicUser, UserError> {
        // The store's UNIQUE constraint is the real guard against the
        // check-then-act race; this lookup only gives a friendlier error.
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }

        let password_hash = self
            .authenticator
            .hash_password(command.password.as_str())
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            profile_picture: command.profile_picture,
            is_admin: command.is_admin,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(user).await?;
        tracing::info!(user_id = %created.id, "User registered");

        Ok(created.to_public())
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<LoginOutcome, UserError> {
        // Unknown email and wrong password collapse into the same error so
        // responses cannot be used to enumerate accounts.
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let claims = Claims::for_user(user.id, user.is_admin, self.token_ttl_hours);

        let result = self
            .authenticator
            .authenticate(password, &user.password_hash, &claims)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
                AuthenticationError::PasswordError(err) => {
                    UserError::PasswordHash(err.to_string())
                }
                AuthenticationError::JwtError(err) => UserError::Token(err.to_string()),
            })?;

        Ok(LoginOutcome {
            token: result.access_token,
            user: user.to_public(),
        })
    }

    async fn list_users(&self) -> Result<Vec<PublicUser>, UserError> {
        Ok(self
            .repository
            .find_all()
            .await?
            .iter()
            .map(User::to_public)
            .collect())
    }

    async fn get_user(&self, id: &UserId) -> Result<Option<PublicUser>, UserError> {
        Ok(self
            .repository
            .find_by_id(id)
            .await?
            .map(|user| user.to_public()))
    }

    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<PublicUser, UserError> {
        let password_hash = match command.password {
            Some(password) => Some(
                self.authenticator
                    .hash_password(password.as_str())
                    .map_err(|e| UserError::PasswordHash(e.to_string()))?,
            ),
            None => None,
        };

        let changes = UserChanges {
            name: command.name,
            email: command.email,
            password_hash,
            profile_picture: command.profile_picture,
            is_admin: command.is_admin,
        };

        let updated = self.repository.update(id, changes).await?;
        Ok(updated.to_public())
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        self.repository.delete(id).await?;
        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }
}

use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::EmailError;
use crate::user::errors::NameError;
use crate::user::errors::PasswordPolicyError;
use crate::user::errors::ProfilePictureError;
use crate::user::errors::UserIdError;

/// User aggregate entity.
///
/// Represents a registered account, including the stored password digest.
/// Never leaves the service layer as-is; external representations go
/// through [`User::to_public`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: DisplayName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub profile_picture: Option<ProfilePicture>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Project to the externally-visible representation.
    ///
    /// Whitelists every field except `password_hash`; the exclusion of the
    /// digest is this one named operation rather than a convention spread
    /// across handlers.
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            profile_picture: self.profile_picture.clone(),
            is_admin: self.is_admin,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// User representation safe to expose: everything but the password digest.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicUser {
    pub id: UserId,
    pub name: DisplayName,
    pub email: EmailAddress,
    pub profile_picture: Option<ProfilePicture>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name value type
///
/// Ensures the name is 6-100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    const MIN_LENGTH: usize = 6;
    const MAX_LENGTH: usize = 100;

    /// Create a new valid display name.
    ///
    /// # Errors
    /// * `TooShort` - Name shorter than 6 characters
    /// * `TooLong` - Name longer than 100 characters
    pub fn new(name: String) -> Result<Self, NameError> {
        let length = name.len();
        if length < Self::MIN_LENGTH {
            Err(NameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(NameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password accepted at the boundary.
///
/// Minimum 6 characters. The `Debug` impl is redacted; the plaintext must
/// never reach a log line.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 6;

    /// Validate a raw password against the policy.
    ///
    /// # Errors
    /// * `TooShort` - Password shorter than 6 characters
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        if password.len() < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: password.len(),
            });
        }
        Ok(Self(password))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Profile picture URL value type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePicture(String);

impl ProfilePicture {
    /// Create a new validated profile picture URL.
    ///
    /// # Errors
    /// * `InvalidUrl` - String is not an absolute URL
    pub fn new(url: String) -> Result<Self, ProfilePictureError> {
        url::Url::parse(&url).map_err(|e| ProfilePictureError::InvalidUrl(e.to_string()))?;
        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfilePicture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new account with validated fields.
#[derive(Debug, Clone)]
pub struct RegisterCommand {
    pub name: DisplayName,
    pub email: EmailAddress,
    pub password: Password,
    pub profile_picture: Option<ProfilePicture>,
    pub is_admin: bool,
}

/// Command to update an existing user with optional validated fields.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserCommand {
    pub name: Option<DisplayName>,
    pub email: Option<EmailAddress>,
    pub password: Option<Password>,
    pub profile_picture: Option<ProfilePicture>,
    pub is_admin: Option<bool>,
}

/// Store-level partial update: the plaintext password has already been
/// replaced by its digest.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<DisplayName>,
    pub email: Option<EmailAddress>,
    pub password_hash: Option<String>,
    pub profile_picture: Option<ProfilePicture>,
    pub is_admin: Option<bool>,
}

/// Result of a successful login: a bearer token plus the public user.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub user: PublicUser,
}

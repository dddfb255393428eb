use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::user::models::PublicUser;
use crate::user::errors::UserError;

pub mod admin;
pub mod auth;

/// Error surface of every handler; maps the domain taxonomy onto HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// One message per failing field, all collected.
    Validation(Vec<String>),
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorBody { errors }),
            )
                .into_response(),
            ApiError::BadRequest(message) => error_response(StatusCode::BAD_REQUEST, message),
            ApiError::Unauthorized(message) => error_response(StatusCode::UNAUTHORIZED, message),
            ApiError::Forbidden(message) => error_response(StatusCode::FORBIDDEN, message),
            ApiError::NotFound(message) => error_response(StatusCode::NOT_FOUND, message),
            ApiError::Conflict(message) => error_response(StatusCode::CONFLICT, message),
            ApiError::InternalServerError(message) => {
                // The wire never carries store or hashing internals
                tracing::error!(error = %message, "Internal server error");
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound("Not found".to_string()),
            UserError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            UserError::InvalidUserId(_) => ApiError::BadRequest(err.to_string()),
            UserError::InvalidName(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidPassword(_)
            | UserError::InvalidProfilePicture(_) => ApiError::Validation(vec![err.to_string()]),
            UserError::PasswordHash(_)
            | UserError::Token(_)
            | UserError::DatabaseError(_)
            | UserError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrorBody {
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Wire representation of a user; built from [`PublicUser`] only, so the
/// password digest cannot appear here by construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBody {
    pub id: String,
    pub name: String,
    pub email: String,
    pub profile_picture: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&PublicUser> for UserBody {
    fn from(user: &PublicUser) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            profile_picture: user.profile_picture.as_ref().map(|p| p.as_str().to_string()),
            is_admin: user.is_admin,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Push a failed validation onto `errors`, passing a success through.
///
/// Lets request DTOs report every failing field at once instead of
/// stopping at the first.
pub(crate) fn collect<T, E: std::fmt::Display>(
    result: Result<T, E>,
    errors: &mut Vec<String>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e.to_string());
            None
        }
    }
}

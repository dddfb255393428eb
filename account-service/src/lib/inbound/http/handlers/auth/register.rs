use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::ProfilePicture;
use crate::domain::user::models::RegisterCommand;
use crate::inbound::http::handlers::collect;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::UserBody;
use crate::inbound::http::router::AppState;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

pub async fn register<R: UserRepository>(
    State(state): State<AppState<R>>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponseBody>), ApiError> {
    let command = body.try_into_command()?;

    let user = state
        .auth_service
        .register(command)
        .await
        .map_err(ApiError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponseBody {
            message: "User registered".to_string(),
            user: UserBody::from(&user),
        }),
    ))
}

/// HTTP request body for registering a user (raw JSON).
///
/// Shared with the admin create-user endpoint, which accepts the same
/// payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    name: String,
    email: String,
    password: String,
    #[serde(default)]
    profile_picture: Option<String>,
    #[serde(default)]
    is_admin: Option<bool>,
}

impl RegisterRequest {
    /// Validate every field, collecting all failures into one response.
    pub(crate) fn try_into_command(self) -> Result<RegisterCommand, ApiError> {
        let mut errors = Vec::new();

        let name = collect(DisplayName::new(self.name), &mut errors);
        let email = collect(EmailAddress::new(self.email), &mut errors);
        let password = collect(Password::new(self.password), &mut errors);
        let profile_picture = match self.profile_picture {
            Some(raw) => collect(ProfilePicture::new(raw), &mut errors),
            None => None,
        };

        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        let (Some(name), Some(email), Some(password)) = (name, email, password) else {
            return Err(ApiError::Validation(errors));
        };

        Ok(RegisterCommand {
            name,
            email,
            password,
            profile_picture,
            is_admin: self.is_admin.unwrap_or(false),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterResponseBody {
    pub message: String,
    pub user: UserBody,
}

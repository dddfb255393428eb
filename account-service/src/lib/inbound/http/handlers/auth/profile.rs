use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::ProfilePicture;
use crate::domain::user::models::UpdateUserCommand;
use crate::inbound::http::handlers::collect;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::UserBody;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

pub async fn get_profile<R: UserRepository>(
    State(state): State<AppState<R>>,
    Extension(current): Extension<AuthenticatedUser>,
) -> Result<Json<ProfileResponseBody>, ApiError> {
    let user = state
        .auth_service
        .get_user(&current.user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Not found".to_string()))?;

    Ok(Json(ProfileResponseBody {
        user: UserBody::from(&user),
    }))
}

pub async fn update_profile<R: UserRepository>(
    State(state): State<AppState<R>>,
    Extension(current): Extension<AuthenticatedUser>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<UpdateProfileResponseBody>, ApiError> {
    let command = body.try_into_command()?;

    let user = state
        .auth_service
        .update_user(&current.user_id, command)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(UpdateProfileResponseBody {
        message: "Profile updated".to_string(),
        user: UserBody::from(&user),
    }))
}

/// HTTP request body for partial user updates (raw JSON).
///
/// Same field set as registration with every field optional; shared with
/// the admin update endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    profile_picture: Option<String>,
    #[serde(default)]
    is_admin: Option<bool>,
}

impl UpdateUserRequest {
    /// Validate the fields that are present, collecting all failures.
    pub(crate) fn try_into_command(self) -> Result<UpdateUserCommand, ApiError> {
        let mut errors = Vec::new();

        let name = match self.name {
            Some(raw) => collect(DisplayName::new(raw), &mut errors),
            None => None,
        };
        let email = match self.email {
            Some(raw) => collect(EmailAddress::new(raw), &mut errors),
            None => None,
        };
        let password = match self.password {
            Some(raw) => collect(Password::new(raw), &mut errors),
            None => None,
        };
        let profile_picture = match self.profile_picture {
            Some(raw) => collect(ProfilePicture::new(raw), &mut errors),
            None => None,
        };

        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        Ok(UpdateUserCommand {
            name,
            email,
            password,
            profile_picture,
            is_admin: self.is_admin,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileResponseBody {
    pub user: UserBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateProfileResponseBody {
    pub message: String,
    pub user: UserBody,
}

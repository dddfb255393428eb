use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::inbound::http::handlers::collect;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::UserBody;
use crate::inbound::http::router::AppState;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

pub async fn login<R: UserRepository>(
    State(state): State<AppState<R>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponseBody>, ApiError> {
    let (email, password) = body.validate()?;

    let outcome = state
        .auth_service
        .authenticate(email.as_str(), password.as_str())
        .await
        .map_err(ApiError::from)?;

    Ok(Json(LoginResponseBody {
        message: "Logged in".to_string(),
        token: outcome.token,
        user: UserBody::from(&outcome.user),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    fn validate(self) -> Result<(EmailAddress, Password), ApiError> {
        let mut errors = Vec::new();

        let email = collect(EmailAddress::new(self.email), &mut errors);
        let password = collect(Password::new(self.password), &mut errors);

        let (Some(email), Some(password)) = (email, password) else {
            return Err(ApiError::Validation(errors));
        };

        Ok((email, password))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginResponseBody {
    pub message: String,
    pub token: String,
    pub user: UserBody,
}

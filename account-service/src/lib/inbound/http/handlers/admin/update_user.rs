use axum::extract::Path;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::auth::profile::UpdateUserRequest;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::UserBody;
use crate::inbound::http::router::AppState;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

pub async fn update_user<R: UserRepository>(
    State(state): State<AppState<R>>,
    Path(user_id): Path<String>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<UpdateUserResponseBody>, ApiError> {
    let user_id =
        UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let command = body.try_into_command()?;

    let user = state
        .auth_service
        .update_user(&user_id, command)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(UpdateUserResponseBody {
        user: UserBody::from(&user),
    }))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateUserResponseBody {
    pub user: UserBody,
}

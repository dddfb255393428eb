use axum::extract::Path;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::UserBody;
use crate::inbound::http::router::AppState;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

pub async fn get_user<R: UserRepository>(
    State(state): State<AppState<R>>,
    Path(user_id): Path<String>,
) -> Result<Json<GetUserResponseBody>, ApiError> {
    let user_id =
        UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let user = state
        .auth_service
        .get_user(&user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Not found".to_string()))?;

    Ok(Json(GetUserResponseBody {
        user: UserBody::from(&user),
    }))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetUserResponseBody {
    pub user: UserBody,
}

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::UserBody;
use crate::inbound::http::router::AppState;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

pub async fn list_users<R: UserRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<ListUsersResponseBody>, ApiError> {
    let users = state
        .auth_service
        .list_users()
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ListUsersResponseBody {
        users: users.iter().map(UserBody::from).collect(),
    }))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListUsersResponseBody {
    pub users: Vec<UserBody>,
}

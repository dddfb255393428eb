use axum::extract::Path;
use axum::extract::State;
use axum::Json;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::MessageBody;
use crate::inbound::http::router::AppState;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

pub async fn delete_user<R: UserRepository>(
    State(state): State<AppState<R>>,
    Path(user_id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    let user_id =
        UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .auth_service
        .delete_user(&user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(MessageBody {
        message: "Deleted".to_string(),
    }))
}

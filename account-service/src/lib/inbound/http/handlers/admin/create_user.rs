use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::inbound::http::handlers::auth::register::RegisterRequest;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::UserBody;
use crate::inbound::http::router::AppState;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Admin-scoped creation; same payload and semantics as registration,
/// different response shape.
pub async fn create_user<R: UserRepository>(
    State(state): State<AppState<R>>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<CreateUserResponseBody>), ApiError> {
    let command = body.try_into_command()?;

    let user = state
        .auth_service
        .register(command)
        .await
        .map_err(ApiError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponseBody {
            user: UserBody::from(&user),
        }),
    ))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateUserResponseBody {
    pub user: UserBody,
}

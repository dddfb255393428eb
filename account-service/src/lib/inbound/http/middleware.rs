use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Extension type carrying the authenticated identity through the request.
///
/// Built from verified token claims; the role flag here is a hint, the
/// admin gate re-reads the live record before trusting it.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub is_admin: bool,
}

/// Authentication gate: validates the bearer token and attaches the
/// decoded identity to the request extensions.
///
/// Distinct failures, all 401: missing header, header not shaped
/// `Bearer <token>`, and a token that fails verification.
pub async fn authenticate<R: UserRepository>(
    State(state): State<AppState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims: auth::Claims = state.auth_service.verify_token(token).map_err(|e| {
        tracing::warn!("Token verification failed: {}", e);
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid token"
            })),
        )
            .into_response()
    })?;

    let user_id_str = claims.sub.as_ref().ok_or_else(|| {
        tracing::warn!("Missing 'sub' claim in token");
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid token"
            })),
        )
            .into_response()
    })?;

    let user_id = UserId::from_string(user_id_str).map_err(|e| {
        tracing::warn!("Failed to parse user ID from token: {}", e);
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid token"
            })),
        )
            .into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        is_admin: claims.is_admin(),
    });

    Ok(next.run(req).await)
}

/// Role gate for admin-scoped routes.
///
/// Re-reads the authoritative record: a token's `is_admin` claim may be
/// stale, so a demoted admin is rejected even on an unexpired token. A
/// store failure during the check is a 500, not a 403.
pub async fn require_admin<R: UserRepository>(
    State(state): State<AppState<R>>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    let Some(current) = req.extensions().get::<AuthenticatedUser>().cloned() else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Token missing"
            })),
        )
            .into_response());
    };

    match state.auth_service.get_user(&current.user_id).await {
        Ok(Some(record)) if record.is_admin => Ok(next.run(req).await),
        Ok(_) => Err((
            StatusCode::FORBIDDEN,
            Json(json!({
                "error": "Admin required"
            })),
        )
            .into_response()),
        Err(e) => {
            tracing::error!("Admin check failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error"
                })),
            )
                .into_response())
        }
    }
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "Token missing"
                })),
            )
                .into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Malformed token"
            })),
        )
            .into_response()
    })?;

    match auth_str.split_once(' ') {
        Some(("Bearer", token)) if !token.is_empty() => Ok(token),
        _ => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Malformed token"
            })),
        )
            .into_response()),
    }
}

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::admin::create_user::create_user;
use super::handlers::admin::delete_user::delete_user;
use super::handlers::admin::get_user::get_user;
use super::handlers::admin::list_users::list_users;
use super::handlers::admin::update_user::update_user;
use super::handlers::auth::login::login;
use super::handlers::auth::profile::get_profile;
use super::handlers::auth::profile::update_profile;
use super::handlers::auth::register::register;
use super::middleware::authenticate;
use super::middleware::require_admin;
use crate::domain::user::service::AuthService;
use crate::user::ports::UserRepository;

/// Shared request state: the one service instance built at startup.
///
/// Generic over the repository so tests can run the full router against a
/// fake store.
pub struct AppState<R: UserRepository> {
    pub auth_service: Arc<AuthService<R>>,
}

impl<R: UserRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
        }
    }
}

pub fn create_router<R: UserRepository>(auth_service: Arc<AuthService<R>>) -> Router {
    let state = AppState { auth_service };

    let public_routes = Router::new()
        .route("/auth/register", post(register::<R>))
        .route("/auth/login", post(login::<R>));

    let profile_routes = Router::new()
        .route(
            "/auth/profile",
            get(get_profile::<R>).put(update_profile::<R>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            authenticate::<R>,
        ));

    // Layers run outermost-last: authenticate first, then the role gate.
    let admin_routes = Router::new()
        .route("/admin/users", get(list_users::<R>).post(create_user::<R>))
        .route(
            "/admin/users/:user_id",
            get(get_user::<R>)
                .put(update_user::<R>)
                .delete(delete_user::<R>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin::<R>,
        ))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            authenticate::<R>,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(profile_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

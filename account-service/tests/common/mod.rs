use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use account_service::domain::user::models::User;
use account_service::domain::user::models::UserChanges;
use account_service::domain::user::models::UserId;
use account_service::domain::user::ports::UserRepository;
use account_service::domain::user::service::AuthService;
use account_service::inbound::http::router::create_router;
use account_service::user::errors::UserError;
use async_trait::async_trait;
use auth::JwtHandler;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server on a random port.
pub struct TestApp {
    pub address: String,
    pub repository: Arc<InMemoryUserRepository>,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryUserRepository::new());
        let auth_service = Arc::new(AuthService::new(Arc::clone(&repository), TEST_SECRET, 24));
        let router = create_router(auth_service);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            repository,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_SECRET),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user through the API and return the created id.
    pub async fn register_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
        is_admin: bool,
    ) -> String {
        let response = self
            .post("/auth/register")
            .json(&json!({
                "name": name,
                "email": email,
                "password": password,
                "isAdmin": is_admin,
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["user"]["id"].as_str().expect("Missing user id").to_string()
    }

    /// Log in through the API and return the bearer token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"].as_str().expect("Missing token").to_string()
    }
}

/// In-memory store standing in for Postgres; enforces the same unique
/// email invariant so conflict paths behave like the real adapter.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the admin flag directly in the store, bypassing the API.
    /// Used to simulate a demotion racing an unexpired token.
    pub fn set_admin(&self, id: &UserId, is_admin: bool) {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.get_mut(&id.0) {
            user.is_admin = is_admin;
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }
        users.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|u| u.email.as_str() == email).cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.get(&id.0).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, UserError> {
        let users = self.users.lock().unwrap();
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn update(&self, id: &UserId, changes: UserChanges) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();

        if let Some(email) = &changes.email {
            if users.values().any(|u| u.id != *id && u.email == *email) {
                return Err(UserError::EmailAlreadyExists(email.as_str().to_string()));
            }
        }

        let user = users
            .get_mut(&id.0)
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;

        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(password_hash) = changes.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(profile_picture) = changes.profile_picture {
            user.profile_picture = Some(profile_picture);
        }
        if let Some(is_admin) = changes.is_admin {
            user.is_admin = is_admin;
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let mut users = self.users.lock().unwrap();
        users
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }
}

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::ProfilePicture;
use crate::domain::user::models::User;
use crate::domain::user::models::UserChanges;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

const USER_COLUMNS: &str =
    "id, name, email, password_hash, profile_picture, is_admin, created_at, updated_at";

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_err(e: sqlx::Error) -> UserError {
    UserError::DatabaseError(e.to_string())
}

/// Map a write failure, surfacing the UNIQUE email constraint as a
/// domain conflict.
fn write_err(e: sqlx::Error, email: &str) -> UserError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some("users_email_key") {
            return UserError::EmailAlreadyExists(email.to_string());
        }
    }
    UserError::DatabaseError(e.to_string())
}

fn user_from_row(row: &PgRow) -> Result<User, UserError> {
    Ok(User {
        id: UserId(row.try_get::<Uuid, _>("id").map_err(db_err)?),
        name: DisplayName::new(row.try_get::<String, _>("name").map_err(db_err)?)?,
        email: EmailAddress::new(row.try_get::<String, _>("email").map_err(db_err)?)?,
        password_hash: row.try_get("password_hash").map_err(db_err)?,
        profile_picture: row
            .try_get::<Option<String>, _>("profile_picture")
            .map_err(db_err)?
            .map(ProfilePicture::new)
            .transpose()?,
        is_admin: row.try_get("is_admin").map_err(db_err)?,
        created_at: row.try_get("created_at").map_err(db_err)?,
        updated_at: row.try_get("updated_at").map_err(db_err)?,
    })
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash, profile_picture, is_admin, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.id.0)
        .bind(user.name.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.profile_picture.as_ref().map(|p| p.as_str()))
        .bind(user.is_admin)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| write_err(e, user.email.as_str()))?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let row = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn find_all(&self) -> Result<Vec<User>, UserError> {
        let rows = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter().map(user_from_row).collect()
    }

    async fn update(&self, id: &UserId, changes: UserChanges) -> Result<User, UserError> {
        let attempted_email = changes
            .email
            .as_ref()
            .map(|e| e.as_str().to_string())
            .unwrap_or_default();

        let row = sqlx::query(&format!(
            r#"
            UPDATE users SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                password_hash = COALESCE($4, password_hash),
                profile_picture = COALESCE($5, profile_picture),
                is_admin = COALESCE($6, is_admin),
                updated_at = $7
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id.0)
        .bind(changes.name.as_ref().map(|n| n.as_str()))
        .bind(changes.email.as_ref().map(|e| e.as_str()))
        .bind(changes.password_hash.as_deref())
        .bind(changes.profile_picture.as_ref().map(|p| p.as_str()))
        .bind(changes.is_admin)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_err(e, &attempted_email))?;

        row.as_ref()
            .map(user_from_row)
            .transpose()?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

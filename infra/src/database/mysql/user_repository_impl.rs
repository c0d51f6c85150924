//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use reel_core::domain::entities::user::{NewUser, Role, User};
use reel_core::errors::{AuthError, DomainError};
use reel_core::repositories::UserRepository;

const USER_COLUMNS: &str = "id, email, password, role, created_at, updated_at";

/// MySQL implementation of UserRepository over the `user` table
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let role: String = row.try_get("role").map_err(column_error("role"))?;

        Ok(User {
            id: row.try_get("id").map_err(column_error("id"))?,
            email: row.try_get("email").map_err(column_error("email"))?,
            password_hash: row.try_get("password").map_err(column_error("password"))?,
            role: Role::from_db(&role).ok_or_else(|| DomainError::Internal {
                message: format!("Unknown role in database: {}", role),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(column_error("created_at"))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(column_error("updated_at"))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM user WHERE email = ? LIMIT 1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_error)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM user WHERE id = ? LIMIT 1",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_error)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let result = sqlx::query(
            "INSERT INTO user (email, password, role, created_at, updated_at) \
             VALUES (?, ?, ?, UTC_TIMESTAMP(6), UTC_TIMESTAMP(6))",
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let duplicate = e
                .as_database_error()
                .map(|db| db.is_unique_violation())
                .unwrap_or(false);
            if duplicate {
                DomainError::from(AuthError::UserAlreadyExists)
            } else {
                query_error(e)
            }
        })?;

        let id = result.last_insert_id() as i64;
        tracing::debug!(user_id = id, "Inserted user");

        self.find_by_id(id).await?.ok_or_else(|| DomainError::Internal {
            message: format!("User {} missing after insert", id),
        })
    }
}

fn column_error(column: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::Internal {
        message: format!("Failed to get {}: {}", column, e),
    }
}

fn query_error(e: sqlx::Error) -> DomainError {
    tracing::error!("User query failed: {}", e);
    DomainError::Internal {
        message: format!("Database query failed: {}", e),
    }
}

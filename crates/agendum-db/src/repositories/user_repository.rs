//! User repository. Accounts are insert-only: there is no update or delete
//! path, and the UNIQUE constraint on email backs the duplicate check.

use crate::{DbError, Result as DbErrorResult};

use agendum_core::User;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (id, email, password_hash, name, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.name)
        .bind(user.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Exact-match lookup; email comparison is case-sensitive (BINARY
    /// collation on the column).
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, password_hash, name, created_at
                FROM users
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| Self::map_row(&r)).transpose()
    }

    fn map_row(row: &SqliteRow) -> DbErrorResult<User> {
        let id: String = row.try_get("id")?;
        let created_at: i64 = row.try_get("created_at")?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in user.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            name: row.try_get("name")?,
            created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in user.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }
}

//! Task repository for CRUD operations on tasks.
//!
//! `tags` is persisted as a JSON-encoded array in a TEXT column (NULL when
//! the task has no tags). `update` and `delete` report `rows_affected` so
//! handlers can distinguish a hit from a vanished row.

use crate::{DbError, Result as DbErrorResult};

use agendum_core::Task;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct TaskRepository {
    pool: SqlitePool,
}

impl TaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, task: &Task) -> DbErrorResult<()> {
        let tags = Self::encode_tags(&task.tags)?;

        sqlx::query(
            r#"
                INSERT INTO tasks (id, title, description, tags, date, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(task.id.to_string())
        .bind(&task.title)
        .bind(&task.description)
        .bind(tags)
        .bind(&task.date)
        .bind(task.created_at.timestamp())
        .bind(task.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Task>> {
        let row = sqlx::query(
            r#"
                SELECT id, title, description, tags, date, created_at, updated_at
                FROM tasks
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| Self::map_row(&r)).transpose()
    }

    /// Unfiltered scan; row order is whatever the store returns.
    pub async fn find_all(&self) -> DbErrorResult<Vec<Task>> {
        let rows = sqlx::query(
            r#"
                SELECT id, title, description, tags, date, created_at, updated_at
                FROM tasks
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    /// Full-row write of the merged task. Returns rows affected (0 when the
    /// row disappeared between load and write).
    pub async fn update(&self, task: &Task) -> DbErrorResult<u64> {
        let tags = Self::encode_tags(&task.tags)?;

        let result = sqlx::query(
            r#"
                UPDATE tasks
                SET title = ?, description = ?, tags = ?, date = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(tags)
        .bind(&task.date)
        .bind(task.updated_at.timestamp())
        .bind(task.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Returns rows affected (0 when no such task exists).
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    fn encode_tags(tags: &Option<Vec<String>>) -> DbErrorResult<Option<String>> {
        tags.as_ref()
            .map(|t| {
                serde_json::to_string(t).map_err(|e| DbError::Initialization {
                    message: format!("Failed to encode task.tags: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })
            })
            .transpose()
    }

    fn map_row(row: &SqliteRow) -> DbErrorResult<Task> {
        let id: String = row.try_get("id")?;
        let tags_json: Option<String> = row.try_get("tags")?;
        let created_at: i64 = row.try_get("created_at")?;
        let updated_at: i64 = row.try_get("updated_at")?;

        let tags = tags_json
            .map(|json| {
                serde_json::from_str::<Vec<String>>(&json).map_err(|e| DbError::Initialization {
                    message: format!("Invalid JSON in task.tags: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })
            })
            .transpose()?;

        Ok(Task {
            id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in task.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            tags,
            date: row.try_get("date")?,
            created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in task.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in task.updated_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }
}

//! Workspace repository. Same contract as tasks: unfiltered reads,
//! full-row updates, rows_affected reported back to the handler.

use crate::{DbError, Result as DbErrorResult};

use agendum_core::Workspace;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct WorkspaceRepository {
    pool: SqlitePool,
}

impl WorkspaceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, workspace: &Workspace) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO workspaces (id, name, created_at, updated_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(workspace.id.to_string())
        .bind(&workspace.name)
        .bind(workspace.created_at.timestamp())
        .bind(workspace.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Workspace>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, created_at, updated_at
                FROM workspaces
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| Self::map_row(&r)).transpose()
    }

    /// Unfiltered scan; row order is whatever the store returns.
    pub async fn find_all(&self) -> DbErrorResult<Vec<Workspace>> {
        let rows = sqlx::query(
            r#"
                SELECT id, name, created_at, updated_at
                FROM workspaces
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    /// Full-row write of the merged workspace. Returns rows affected.
    pub async fn update(&self, workspace: &Workspace) -> DbErrorResult<u64> {
        let result = sqlx::query(
            r#"
                UPDATE workspaces
                SET name = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&workspace.name)
        .bind(workspace.updated_at.timestamp())
        .bind(workspace.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Returns rows affected (0 when no such workspace exists).
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM workspaces WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    fn map_row(row: &SqliteRow) -> DbErrorResult<Workspace> {
        let id: String = row.try_get("id")?;
        let created_at: i64 = row.try_get("created_at")?;
        let updated_at: i64 = row.try_get("updated_at")?;

        Ok(Workspace {
            id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in workspace.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            name: row.try_get("name")?,
            created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in workspace.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in workspace.updated_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }
}

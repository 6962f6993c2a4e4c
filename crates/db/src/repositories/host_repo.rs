//! Repository for the `hosts` table.

use sqlx::PgPool;
use seasons_core::types::DbId;

use crate::models::host::{CreateHost, Host, UpdateHost};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, picture, happy_picture, season_id, created_at, updated_at";

/// Provides CRUD operations for hosts.
pub struct HostRepo;

impl HostRepo {
    /// Insert a new host, returning the created row.
    ///
    /// Fails the foreign-key constraint if `season_id` is set but unknown.
    pub async fn create(pool: &PgPool, input: &CreateHost) -> Result<Host, sqlx::Error> {
        let query = format!(
            "INSERT INTO hosts (name, picture, happy_picture, season_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Host>(&query)
            .bind(&input.name)
            .bind(&input.picture)
            .bind(&input.happy_picture)
            .bind(input.season_id)
            .fetch_one(pool)
            .await
    }

    /// Find a host by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Host>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hosts WHERE id = $1");
        sqlx::query_as::<_, Host>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all hosts ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Host>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hosts ORDER BY name");
        sqlx::query_as::<_, Host>(&query).fetch_all(pool).await
    }

    /// Update a host. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHost,
    ) -> Result<Option<Host>, sqlx::Error> {
        let query = format!(
            "UPDATE hosts SET
                name = COALESCE($2, name),
                picture = COALESCE($3, picture),
                happy_picture = COALESCE($4, happy_picture),
                season_id = COALESCE($5, season_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Host>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.picture)
            .bind(&input.happy_picture)
            .bind(input.season_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a host by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hosts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `hex_colors` table.

use sqlx::PgPool;
use seasons_core::types::DbId;

use crate::models::hex_color::{CreateHexColor, HexColor, UpdateHexColor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, hex_code, name, category_id, created_at, updated_at";

/// Provides CRUD operations for hex colors.
pub struct HexColorRepo;

impl HexColorRepo {
    /// Insert a new hex color, returning the created row.
    ///
    /// Fails the foreign-key constraint if `category_id` does not exist.
    pub async fn create(pool: &PgPool, input: &CreateHexColor) -> Result<HexColor, sqlx::Error> {
        let query = format!(
            "INSERT INTO hex_colors (hex_code, name, category_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HexColor>(&query)
            .bind(&input.hex_code)
            .bind(&input.name)
            .bind(input.category_id)
            .fetch_one(pool)
            .await
    }

    /// Find a hex color by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HexColor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hex_colors WHERE id = $1");
        sqlx::query_as::<_, HexColor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all hex colors ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<HexColor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hex_colors ORDER BY name");
        sqlx::query_as::<_, HexColor>(&query).fetch_all(pool).await
    }

    /// List the hex colors belonging to one category, ordered by name.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<HexColor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hex_colors WHERE category_id = $1 ORDER BY name");
        sqlx::query_as::<_, HexColor>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Update a hex color. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHexColor,
    ) -> Result<Option<HexColor>, sqlx::Error> {
        let query = format!(
            "UPDATE hex_colors SET
                hex_code = COALESCE($2, hex_code),
                name = COALESCE($3, name),
                category_id = COALESCE($4, category_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HexColor>(&query)
            .bind(id)
            .bind(&input.hex_code)
            .bind(&input.name)
            .bind(input.category_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a hex color by ID. Cascade deletes its season memberships.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hex_colors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

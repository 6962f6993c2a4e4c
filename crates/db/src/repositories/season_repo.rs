//! Repository for the `seasons` and `season_colors` tables.
//!
//! Season reads embed the member hex color ids, so every read path
//! joins in the junction rows. Writes that touch the membership set run
//! inside a transaction: the set is replaced wholesale, never patched.

use std::collections::HashMap;

use sqlx::{FromRow, PgPool};
use seasons_core::types::DbId;

use crate::models::season::{CreateSeason, Season, SeasonWithColors, UpdateSeason};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// A junction row, used when batch-loading memberships for a listing.
#[derive(Debug, FromRow)]
struct Membership {
    season_id: DbId,
    hex_color_id: DbId,
}

/// Provides CRUD operations for seasons and their color memberships.
pub struct SeasonRepo;

impl SeasonRepo {
    /// Insert a new season and attach the given hex colors, returning the
    /// created row with its membership.
    ///
    /// Runs in a transaction so a dangling color id rolls the season back.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSeason,
    ) -> Result<SeasonWithColors, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO seasons (name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        let season = sqlx::query_as::<_, Season>(&query)
            .bind(&input.name)
            .fetch_one(&mut *tx)
            .await?;

        insert_memberships(&mut tx, season.id, &input.colors).await?;

        tx.commit().await?;

        let colors = Self::color_ids(pool, season.id).await?;
        Ok(SeasonWithColors::new(season, colors))
    }

    /// Find a season by its internal ID, including its member color ids.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SeasonWithColors>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM seasons WHERE id = $1");
        let season = sqlx::query_as::<_, Season>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        match season {
            Some(season) => {
                let colors = Self::color_ids(pool, season.id).await?;
                Ok(Some(SeasonWithColors::new(season, colors)))
            }
            None => Ok(None),
        }
    }

    /// List all seasons ordered by name, with memberships batch-loaded in
    /// a single junction query.
    pub async fn list(pool: &PgPool) -> Result<Vec<SeasonWithColors>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM seasons ORDER BY name");
        let seasons = sqlx::query_as::<_, Season>(&query).fetch_all(pool).await?;

        let ids: Vec<DbId> = seasons.iter().map(|s| s.id).collect();
        let memberships = sqlx::query_as::<_, Membership>(
            "SELECT season_id, hex_color_id FROM season_colors
             WHERE season_id = ANY($1)
             ORDER BY hex_color_id",
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let mut by_season: HashMap<DbId, Vec<DbId>> = HashMap::new();
        for m in memberships {
            by_season.entry(m.season_id).or_default().push(m.hex_color_id);
        }

        Ok(seasons
            .into_iter()
            .map(|season| {
                let colors = by_season.remove(&season.id).unwrap_or_default();
                SeasonWithColors::new(season, colors)
            })
            .collect())
    }

    /// Update a season. A non-`None` `colors` replaces the whole
    /// membership set inside the same transaction.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSeason,
    ) -> Result<Option<SeasonWithColors>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE seasons SET
                name = COALESCE($2, name),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let season = sqlx::query_as::<_, Season>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(season) = season else {
            tx.rollback().await?;
            return Ok(None);
        };

        if let Some(colors) = &input.colors {
            sqlx::query("DELETE FROM season_colors WHERE season_id = $1")
                .bind(season.id)
                .execute(&mut *tx)
                .await?;
            insert_memberships(&mut tx, season.id, colors).await?;
        }

        tx.commit().await?;

        let colors = Self::color_ids(pool, season.id).await?;
        Ok(Some(SeasonWithColors::new(season, colors)))
    }

    /// Delete a season by ID. Cascade deletes its memberships; dependent
    /// hosts and users have their `season_id` nulled by the schema.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM seasons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Member hex color ids for one season, sorted ascending.
    pub async fn color_ids(pool: &PgPool, season_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        let rows = sqlx::query_scalar::<_, DbId>(
            "SELECT hex_color_id FROM season_colors
             WHERE season_id = $1
             ORDER BY hex_color_id",
        )
        .bind(season_id)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }
}

/// Attach `colors` to `season_id` within the given transaction.
async fn insert_memberships(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    season_id: DbId,
    colors: &[DbId],
) -> Result<(), sqlx::Error> {
    if colors.is_empty() {
        return Ok(());
    }
    sqlx::query(
        "INSERT INTO season_colors (season_id, hex_color_id)
         SELECT $1, UNNEST($2::BIGINT[])",
    )
    .bind(season_id)
    .bind(colors)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

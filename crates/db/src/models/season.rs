//! Season model and DTOs.
//!
//! Seasons relate to hex colors many-to-many through the `season_colors`
//! junction table. The API shape embeds the member color ids, so reads go
//! through [`SeasonWithColors`] rather than the bare row.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use seasons_core::types::{DbId, Timestamp};

/// A row from the `seasons` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Season {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Season read shape: the row plus its member hex color ids, sorted
/// ascending for stable output.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonWithColors {
    pub id: DbId,
    pub name: String,
    pub colors: Vec<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SeasonWithColors {
    pub fn new(season: Season, colors: Vec<DbId>) -> Self {
        Self {
            id: season.id,
            name: season.name,
            colors,
            created_at: season.created_at,
            updated_at: season.updated_at,
        }
    }
}

/// DTO for creating a season. `colors` lists hex color ids to attach;
/// unknown ids fail the foreign-key constraint.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSeason {
    pub name: String,
    #[serde(default)]
    pub colors: Vec<DbId>,
}

/// DTO for updating a season. When `colors` is present the membership
/// set is replaced wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSeason {
    pub name: Option<String>,
    pub colors: Option<Vec<DbId>>,
}

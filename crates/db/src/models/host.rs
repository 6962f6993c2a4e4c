//! Host model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use seasons_core::types::{DbId, Timestamp};

/// A row from the `hosts` table. A host optionally belongs to a season;
/// deleting that season nulls the reference.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Host {
    pub id: DbId,
    pub name: String,
    pub picture: String,
    pub happy_picture: Option<String>,
    pub season_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a host.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHost {
    pub name: String,
    pub picture: String,
    pub happy_picture: Option<String>,
    pub season_id: Option<DbId>,
}

/// DTO for updating a host. Absent fields keep their current value;
/// `season_id` cannot be cleared through this DTO (only a season
/// delete nulls it).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateHost {
    pub name: Option<String>,
    pub picture: Option<String>,
    pub happy_picture: Option<String>,
    pub season_id: Option<DbId>,
}

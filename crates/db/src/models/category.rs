//! Category model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use seasons_core::types::{DbId, Timestamp};

/// A row from the `categories` table. Groups hex colors by family
/// (e.g. "Warm Neutrals").
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
}

/// DTO for updating a category.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
}

//! Hex color model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use seasons_core::types::{DbId, Timestamp};

/// A row from the `hex_colors` table. Both `hex_code` and `name` are
/// unique; every color belongs to exactly one category.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HexColor {
    pub id: DbId,
    pub hex_code: String,
    pub name: String,
    pub category_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a hex color.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHexColor {
    pub hex_code: String,
    pub name: String,
    pub category_id: DbId,
}

/// DTO for updating a hex color. Reassigning `category_id` moves the
/// color to another category.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateHexColor {
    pub hex_code: Option<String>,
    pub name: Option<String>,
    pub category_id: Option<DbId>,
}

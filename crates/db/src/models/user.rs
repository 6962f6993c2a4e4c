//! User model and DTOs.
//!
//! The users resource is read-only over HTTP; [`CreateUser`] exists for
//! out-of-band provisioning (seed scripts, tests).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use seasons_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub season_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for provisioning a user account.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub season_id: Option<DbId>,
}

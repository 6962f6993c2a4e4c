//! Handlers for the `/users` resource (read-only).

use axum::extract::{Path, State};
use axum::Json;
use seasons_core::error::CoreError;
use seasons_core::types::DbId;
use seasons_db::models::user::User;
use seasons_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user))
}

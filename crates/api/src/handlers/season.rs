//! Handlers for the `/seasons` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use seasons_core::error::CoreError;
use seasons_core::types::DbId;
use seasons_core::validate::validate_name;
use seasons_db::models::season::{CreateSeason, SeasonWithColors, UpdateSeason};
use seasons_db::repositories::SeasonRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/seasons
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSeason>,
) -> AppResult<(StatusCode, Json<SeasonWithColors>)> {
    validate_name("name", &input.name)?;

    let season = SeasonRepo::create(&state.pool, &input).await?;

    tracing::info!(season_id = season.id, "Season created");
    Ok((StatusCode::CREATED, Json(season)))
}

/// GET /api/v1/seasons
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<SeasonWithColors>>> {
    let seasons = SeasonRepo::list(&state.pool).await?;
    Ok(Json(seasons))
}

/// GET /api/v1/seasons/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SeasonWithColors>> {
    let season = SeasonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Season",
            id,
        }))?;
    Ok(Json(season))
}

/// PUT|PATCH /api/v1/seasons/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSeason>,
) -> AppResult<Json<SeasonWithColors>> {
    if let Some(name) = &input.name {
        validate_name("name", name)?;
    }

    let season = SeasonRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Season",
            id,
        }))?;

    tracing::info!(season_id = id, "Season updated");
    Ok(Json(season))
}

/// DELETE /api/v1/seasons/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = SeasonRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(season_id = id, "Season deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Season",
            id,
        }))
    }
}

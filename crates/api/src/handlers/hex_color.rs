//! Handlers for the `/hex-colors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use seasons_core::error::CoreError;
use seasons_core::types::DbId;
use seasons_core::validate::validate_name;
use seasons_db::models::hex_color::{CreateHexColor, HexColor, UpdateHexColor};
use seasons_db::repositories::HexColorRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/hex-colors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateHexColor>,
) -> AppResult<(StatusCode, Json<HexColor>)> {
    validate_name("hex_code", &input.hex_code)?;
    validate_name("name", &input.name)?;

    let color = HexColorRepo::create(&state.pool, &input).await?;

    tracing::info!(hex_color_id = color.id, "Hex color created");
    Ok((StatusCode::CREATED, Json(color)))
}

/// GET /api/v1/hex-colors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<HexColor>>> {
    let colors = HexColorRepo::list(&state.pool).await?;
    Ok(Json(colors))
}

/// GET /api/v1/hex-colors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<HexColor>> {
    let color = HexColorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HexColor",
            id,
        }))?;
    Ok(Json(color))
}

/// PUT|PATCH /api/v1/hex-colors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHexColor>,
) -> AppResult<Json<HexColor>> {
    if let Some(hex_code) = &input.hex_code {
        validate_name("hex_code", hex_code)?;
    }
    if let Some(name) = &input.name {
        validate_name("name", name)?;
    }

    let color = HexColorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HexColor",
            id,
        }))?;

    tracing::info!(hex_color_id = id, "Hex color updated");
    Ok(Json(color))
}

/// DELETE /api/v1/hex-colors/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = HexColorRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(hex_color_id = id, "Hex color deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "HexColor",
            id,
        }))
    }
}

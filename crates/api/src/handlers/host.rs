//! Handlers for the `/hosts` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use seasons_core::error::CoreError;
use seasons_core::types::DbId;
use seasons_core::validate::{validate_name, validate_url};
use seasons_db::models::host::{CreateHost, Host, UpdateHost};
use seasons_db::repositories::HostRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/hosts
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateHost>,
) -> AppResult<(StatusCode, Json<Host>)> {
    validate_name("name", &input.name)?;
    validate_url("picture", &input.picture)?;
    if let Some(happy) = &input.happy_picture {
        validate_url("happy_picture", happy)?;
    }

    let host = HostRepo::create(&state.pool, &input).await?;

    tracing::info!(host_id = host.id, "Host created");
    Ok((StatusCode::CREATED, Json(host)))
}

/// GET /api/v1/hosts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Host>>> {
    let hosts = HostRepo::list(&state.pool).await?;
    Ok(Json(hosts))
}

/// GET /api/v1/hosts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Host>> {
    let host = HostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Host", id }))?;
    Ok(Json(host))
}

/// PUT|PATCH /api/v1/hosts/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHost>,
) -> AppResult<Json<Host>> {
    if let Some(name) = &input.name {
        validate_name("name", name)?;
    }
    if let Some(picture) = &input.picture {
        validate_url("picture", picture)?;
    }
    if let Some(happy) = &input.happy_picture {
        validate_url("happy_picture", happy)?;
    }

    let host = HostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Host", id }))?;

    tracing::info!(host_id = id, "Host updated");
    Ok(Json(host))
}

/// DELETE /api/v1/hosts/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = HostRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(host_id = id, "Host deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Host", id }))
    }
}

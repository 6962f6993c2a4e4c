//! Route definitions for the `/seasons` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::season;
use crate::state::AppState;

/// Routes mounted at `/seasons`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(season::list).post(season::create))
        .route(
            "/{id}",
            get(season::get_by_id)
                .put(season::update)
                .patch(season::update)
                .delete(season::delete),
        )
}

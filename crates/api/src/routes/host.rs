//! Route definitions for the `/hosts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::host;
use crate::state::AppState;

/// Routes mounted at `/hosts`.
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
        .route("/", get(host::list).post(host::create))
        .route(
            "/{id}",
            get(host::get_by_id)
                .put(host::update)
                .patch(host::update)
                .delete(host::delete),
        )
}

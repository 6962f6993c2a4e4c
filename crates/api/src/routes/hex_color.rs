//! Route definitions for the `/hex-colors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::hex_color;
use crate::state::AppState;

/// Routes mounted at `/hex-colors`.
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
        .route("/", get(hex_color::list).post(hex_color::create))
        .route(
            "/{id}",
            get(hex_color::get_by_id)
                .put(hex_color::update)
                .patch(hex_color::update)
                .delete(hex_color::delete),
        )
}

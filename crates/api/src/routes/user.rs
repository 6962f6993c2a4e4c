//! Route definitions for the `/users` resource.
//!
//! Users are read-only over HTTP: only GET routes are registered, so
//! axum answers mutating methods with 405 Method Not Allowed.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /        -> list
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list))
        .route("/{id}", get(user::get_by_id))
}

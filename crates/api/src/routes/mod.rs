pub mod category;
pub mod health;
pub mod hex_color;
pub mod host;
pub mod season;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                 list, create
/// /categories/{id}            get, update (PUT/PATCH), delete
/// /categories/{id}/colors     list colors in category
///
/// /hex-colors                 list, create
/// /hex-colors/{id}            get, update (PUT/PATCH), delete
///
/// /seasons                    list, create
/// /seasons/{id}               get, update (PUT/PATCH), delete
///
/// /hosts                      list, create
/// /hosts/{id}                 get, update (PUT/PATCH), delete
///
/// /users                      list (read-only)
/// /users/{id}                 get (read-only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .nest("/hex-colors", hex_color::router())
        .nest("/seasons", season::router())
        .nest("/hosts", host::router())
        .nest("/users", user::router())
}

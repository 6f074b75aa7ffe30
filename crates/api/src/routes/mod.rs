pub mod entries;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// GET / -- plain-text greeting. The only non-JSON route.
async fn welcome() -> &'static str {
    "Welcome to our humble entry catalog!\n"
}

/// Build the full route tree.
///
/// ```text
/// /                 welcome (plain text)
/// /health           service + store health
/// /entries          list, create
/// /entries/{id}     get, update, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .merge(health::router())
        .nest("/entries", entries::router())
}
